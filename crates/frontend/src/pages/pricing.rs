use crate::browser;
use crate::components::PageHero;
use yew::prelude::*;

struct Plan {
    name: &'static str,
    monthly: &'static str,
    yearly: &'static str,
    highlight: Option<&'static str>,
    features: &'static [&'static str],
}

const PLANS: [Plan; 2] = [
    Plan {
        name: "Standard",
        monthly: "$59.99",
        yearly: "$47.99",
        highlight: None,
        features: &[
            "All the Tools to Capture More Leads",
            "Nurture & Close Leads into Customers",
            "Full Online Booking, Pipelines, Social Cal, Website Builder, and More!",
            "Unlimited Contacts & Users, Add as Many Contacts & Users as You Need!",
            "Setup Up To Three Sub-Accounts",
        ],
    },
    Plan {
        name: "Premium",
        monthly: "$74.99",
        yearly: "$59.99",
        highlight: Some("Most Popular"),
        features: &[
            "Everything In Starter Plan",
            "Api Access - Integrate with Anything",
            "Unlimited Sub-Accounts - As Many Client Accounts as You Need for One Price!",
            "A Complete Control Over the Looks and Feel of the Platform!",
        ],
    },
];

const PRICING_FAQ: [(&str, &str); 3] = [
    (
        "Can I cancel anytime?",
        "Yes, you can cancel your subscription at any time. Your access will continue until the end of your current billing period, and you won't be charged again.",
    ),
    (
        "Is my data secure?",
        "Absolutely. We use enterprise-grade security measures including SSL encryption, regular backups, and strict access controls to protect your business data.",
    ),
    (
        "How easy is it to get started?",
        "Very easy! Our onboarding process takes just minutes, and our intuitive interface means you can start managing clients right away. Plus, our support team is here to help.",
    ),
];

fn checkout_notice(plan: &str) -> String {
    format!(
        "Redirecting to Stripe checkout for {plan} plan - this would integrate with your Stripe account"
    )
}

fn plan_card(plan: &Plan) -> Html {
    let name = plan.name;
    let onclick = Callback::from(move |_: MouseEvent| browser::alert(&checkout_notice(name)));
    let border = if plan.highlight.is_some() {
        "border-2 border-blue-600"
    } else {
        "border border-gray-100"
    };

    html! {
        <div class={classes!("relative", "bg-white", "rounded-3xl", "p-8", "shadow-lg", border)}>
            if let Some(badge) = plan.highlight {
                <span class="absolute -top-3 left-1/2 -translate-x-1/2 px-4 py-1 rounded-full bg-blue-600 text-white text-sm font-semibold">
                    {badge}
                </span>
            }
            <h2 class="text-3xl font-bold text-gray-900 mb-6">{format!("{name} Plan")}</h2>
            <div class="mb-8">
                <div class="flex items-baseline mb-2">
                    <span class="text-5xl font-black text-gray-900">{plan.monthly}</span>
                    <span class="text-gray-600 ml-2">{"/month"}</span>
                </div>
                <div class="flex items-baseline">
                    <span class="text-3xl font-bold text-blue-600">{plan.yearly}</span>
                    <span class="text-gray-600 ml-2">{"/month billed yearly"}</span>
                </div>
                if plan.highlight.is_some() {
                    <p class="text-sm text-blue-600 mt-2 font-semibold">{"Save 20% with yearly billing"}</p>
                }
            </div>
            <ul class="space-y-4 mb-8">
                {for plan.features.iter().map(|feature| html! {
                    <li class="flex items-center">
                        <span class="text-green-500 mr-3">{"✓"}</span>
                        <span class="text-gray-700">{*feature}</span>
                    </li>
                })}
            </ul>
            <button class="w-full py-4 rounded-xl bg-blue-600 text-white font-semibold hover:bg-blue-700" {onclick}>
                {"Start Free Trial"}
            </button>
        </div>
    }
}

#[function_component(PricingPage)]
pub fn pricing_page() -> Html {
    html! {
        <>
            <PageHero
                title="Choose Your Plan"
                subtitle="Scale your business with the right plan for your needs. All plans include a 7-day free trial."
            />
            <section class="py-20 px-6">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 max-w-5xl mx-auto">
                    {for PLANS.iter().map(plan_card)}
                </div>
            </section>
            <section class="pb-20 px-6">
                <div class="max-w-3xl mx-auto">
                    <h2 class="text-3xl font-bold text-gray-900 text-center mb-10">{"Frequently Asked Questions"}</h2>
                    <div class="space-y-6">
                        {for PRICING_FAQ.iter().map(|(question, answer)| html! {
                            <div class="bg-white rounded-2xl p-6 border border-gray-100 shadow-sm">
                                <h3 class="text-xl font-bold text-gray-900 mb-3">{*question}</h3>
                                <p class="text-gray-600">{*answer}</p>
                            </div>
                        })}
                    </div>
                </div>
            </section>
        </>
    }
}
