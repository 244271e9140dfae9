use crate::browser;
use crate::components::PageHero;
use crate::services::{use_navigator, use_site_config};
use gloo::timers::callback::Timeout;
use inflow_core::{Navigator, PageId};
use std::rc::Rc;
use yew::prelude::*;

const FAQS: [(&str, &str); 10] = [
    (
        "Can I cancel anytime?",
        "Yes, you can cancel your subscription at any time. Your access will continue until the end of your current billing period, and you won't be charged again. There are no cancellation fees or penalties.",
    ),
    (
        "Is my data secure?",
        "Absolutely. We use enterprise-grade security measures including SSL encryption, regular backups, and strict access controls to protect your business data. All data is encrypted both in transit and at rest, and we maintain compliance with industry security standards.",
    ),
    (
        "How easy is it to get started?",
        "Very easy! Our onboarding process takes just minutes, and our intuitive interface means you can start managing clients right away. We provide setup guides, video tutorials, and our support team is here to help you get the most out of Inflow.",
    ),
    (
        "What payment methods do you accept?",
        "We accept all major credit cards including Visa, MasterCard, American Express, and Discover. Payments are processed securely through Stripe, and you can update your payment method at any time through your account settings.",
    ),
    (
        "Do you offer a free trial?",
        "Yes! We offer a 7-day free trial for both our Standard and Premium plans. No credit card is required to start your trial, and you can upgrade or downgrade at any time during or after the trial period.",
    ),
    (
        "Can I import my existing data?",
        "Absolutely. We provide easy import tools that work with CSV files and can connect to popular CRM and business management platforms. Our support team can also assist with data migration to ensure a smooth transition.",
    ),
    (
        "What kind of support do you provide?",
        "We offer comprehensive support including email support for all users, priority support for Premium customers, detailed documentation, video tutorials, and a knowledge base. Most support requests are answered within 24 hours.",
    ),
    (
        "Can I upgrade or downgrade my plan?",
        "Yes, you can change your plan at any time. Upgrades take effect immediately, while downgrades will take effect at the end of your current billing period. We'll prorate any charges appropriately.",
    ),
    (
        "Is there a limit to the number of clients I can manage?",
        "No, both our Standard and Premium plans include unlimited client records. You can manage as many clients as your business needs without any additional per-client charges.",
    ),
    (
        "Do you offer integrations with other tools?",
        "Yes! We integrate with popular tools including Google Calendar, Outlook, Zapier, and many others. Our Premium plan also includes API access for custom integrations with your existing business tools.",
    ),
];

/// Clicking the open item closes it; any other item replaces it
fn toggled(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) { None } else { Some(index) }
}

/// Jump to the contact page from anywhere, then rebroadcast once the shell is at `/`
fn go_to_contact(navigator: Rc<dyn Navigator>, delay_ms: u32) {
    navigator.assign(&format!("/#{}", PageId::Contact.to_hash()));
    Timeout::new(delay_ms, move || {
        if navigator.pathname() == "/" {
            browser::dispatch_navigate_event(PageId::Contact);
        }
    })
    .forget();
}

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    let config = use_site_config();
    let navigator = use_navigator();
    let open = use_state(|| None::<usize>);

    let contact_support = {
        let delay = config.cross_page_delay_ms;
        Callback::from(move |_: MouseEvent| go_to_contact(navigator.clone(), delay))
    };

    html! {
        <>
            <PageHero
                title="Frequently Asked Questions"
                subtitle="Find answers to common questions about Inflow."
            />
            <section class="py-20 px-6">
                <div class="max-w-3xl mx-auto space-y-4">
                    {for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                        let is_open = *open == Some(index);
                        let onclick = {
                            let open = open.clone();
                            Callback::from(move |_: MouseEvent| open.set(toggled(*open, index)))
                        };
                        html! {
                            <div class="bg-white rounded-xl border border-gray-100 shadow-sm">
                                <button
                                    class="w-full flex justify-between items-center p-6 text-left"
                                    aria-expanded={is_open.to_string()}
                                    {onclick}
                                >
                                    <span class="text-lg font-semibold text-gray-900">{*question}</span>
                                    <span class="text-2xl text-blue-600">{if is_open { "−" } else { "+" }}</span>
                                </button>
                                if is_open {
                                    <p class="px-6 pb-6 text-gray-600">{*answer}</p>
                                }
                            </div>
                        }
                    })}
                </div>
            </section>
            <section class="pb-20 px-6 text-center">
                <h2 class="text-3xl font-bold text-gray-900 mb-4">{"Still have questions?"}</h2>
                <p class="text-gray-600 mb-8">{"Our support team is happy to help."}</p>
                <button
                    class="px-8 py-4 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-700"
                    onclick={contact_support}
                >
                    {"Contact Support"}
                </button>
            </section>
        </>
    }
}
