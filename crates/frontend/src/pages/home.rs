use super::{Card, card_grid};
use crate::browser;
use crate::config::AppConfig;
use crate::router::use_navigate;
use crate::services::use_navigator;
use inflow_core::{PageId, StandalonePage};
use yew::prelude::*;

const STATS: [(&str, &str); 3] = [
    ("100%", "Customer Satisfaction"),
    ("99.9%", "Uptime"),
    ("24/7", "Support"),
];

pub(crate) const CORE_FEATURES: [Card; 4] = [
    Card {
        icon: "👥",
        title: "Client Management",
        text: "Keep every contact, conversation, and document in one organized profile.",
    },
    Card {
        icon: "🚀",
        title: "Automated Onboarding",
        text: "Welcome new clients with forms, contracts, and tasks that run themselves.",
    },
    Card {
        icon: "💳",
        title: "Invoicing & Billing",
        text: "Send invoices, collect payments, and track revenue without leaving Inflow.",
    },
    Card {
        icon: "📅",
        title: "Scheduling",
        text: "Let clients book time with you and sync every appointment to your calendar.",
    },
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Nora Ali",
        "Digital Marketing Expert",
        "Inflow replaced four different tools for me. My onboarding now runs on autopilot.",
    ),
    (
        "Simone Brooks",
        "Real Estate Agent",
        "I finally know where every client stands. Follow-ups happen without me chasing them.",
    ),
    (
        "Lillian Clarke",
        "Nail Stylist",
        "Booking and payments in one place saved me hours every week.",
    ),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigate = use_navigate();
    let navigator = use_navigator();

    let get_started =
        Callback::from(move |_: MouseEvent| navigator.assign(StandalonePage::Signup.path()));
    let see_demo =
        Callback::from(|_: MouseEvent| browser::scroll_to_element(AppConfig::DEMO_SECTION_ID));
    let explore_features = Callback::from(move |_: MouseEvent| navigate.emit(PageId::Features));

    html! {
        <>
            <section class="bg-gradient-to-br from-blue-50 to-indigo-100 py-24 px-6">
                <div class="max-w-5xl mx-auto text-center">
                    <h1 class="text-5xl md:text-6xl font-bold text-gray-900 mb-6">
                        {"Elevate Your Sales With The All-in-One CRM Platform"}
                    </h1>
                    <p class="text-xl text-gray-600 mb-10 max-w-3xl mx-auto">
                        {"Automate client management and keep everything organized all in one place, from onboarding to billing."}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button class="px-8 py-4 rounded-lg bg-blue-600 text-white text-lg font-semibold hover:bg-blue-700" onclick={get_started.clone()}>
                            {"Get Started"}
                        </button>
                        <button class="px-8 py-4 rounded-lg border border-blue-600 text-blue-600 text-lg font-semibold hover:bg-blue-50" onclick={see_demo}>
                            {"See Demo"}
                        </button>
                    </div>
                    <div class="grid grid-cols-3 gap-6 mt-16 max-w-2xl mx-auto">
                        {for STATS.iter().map(|(value, label)| html! {
                            <div>
                                <div class="text-3xl font-bold text-blue-600">{*value}</div>
                                <div class="text-sm text-gray-600">{*label}</div>
                            </div>
                        })}
                    </div>
                </div>
            </section>

            <section class="py-20 px-6">
                <div class="max-w-7xl mx-auto">
                    <h2 class="text-4xl font-bold text-center text-gray-900 mb-4">{"All You Need to Scale"}</h2>
                    <p class="text-center text-gray-600 mb-12">{"Everything your business runs on, connected."}</p>
                    {card_grid(&CORE_FEATURES)}
                </div>
            </section>

            <section id={AppConfig::DEMO_SECTION_ID} class="py-20 px-6 bg-gray-50">
                <div class="max-w-5xl mx-auto text-center">
                    <h2 class="text-4xl font-bold text-gray-900 mb-8">{"See Inflow in Action"}</h2>
                    <div class="aspect-video rounded-2xl bg-gray-900 flex items-center justify-center text-white text-6xl shadow-xl">
                        {"▶"}
                    </div>
                </div>
            </section>

            <section class="py-20 px-6">
                <div class="max-w-7xl mx-auto">
                    <h2 class="text-4xl font-bold text-center text-gray-900 mb-12">{"Trusted With Thousands"}</h2>
                    <div class="grid gap-8 md:grid-cols-3">
                        {for TESTIMONIALS.iter().map(|(name, role, quote)| html! {
                            <figure class="bg-white rounded-xl border border-gray-100 shadow-sm p-8">
                                <blockquote class="text-gray-700 mb-6">{format!("\u{201c}{quote}\u{201d}")}</blockquote>
                                <figcaption>
                                    <div class="font-semibold text-gray-900">{*name}</div>
                                    <div class="text-sm text-gray-500">{*role}</div>
                                </figcaption>
                            </figure>
                        })}
                    </div>
                </div>
            </section>

            <section class="py-20 px-6 bg-blue-600 text-white text-center">
                <h2 class="text-4xl font-bold mb-4">{"Ready to Transform Your Business?"}</h2>
                <p class="text-lg text-blue-100 mb-8">{"Join the businesses that run on Inflow."}</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button class="px-8 py-4 rounded-lg bg-white text-blue-600 font-semibold hover:bg-blue-50" onclick={get_started}>
                        {"Start Free Trial"}
                    </button>
                    <button class="px-8 py-4 rounded-lg border border-white font-semibold hover:bg-blue-700" onclick={explore_features}>
                        {"Explore Features"}
                    </button>
                </div>
            </section>
        </>
    }
}
