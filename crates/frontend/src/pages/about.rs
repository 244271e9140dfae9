use super::{Card, card_grid};
use crate::components::PageHero;
use yew::prelude::*;

const VALUES: [Card; 4] = [
    Card {
        icon: "🎯",
        title: "Mission-Driven",
        text: "We help businesses grow smarter with modern, powerful, and easy-to-use tools.",
    },
    Card {
        icon: "🤝",
        title: "Customer-Focused",
        text: "Your success is our success. We build features that solve real business problems.",
    },
    Card {
        icon: "🔒",
        title: "Secure & Reliable",
        text: "Enterprise-grade security and 99.9% uptime you can count on.",
    },
    Card {
        icon: "💡",
        title: "Innovation-First",
        text: "We constantly evolve our platform with the latest technology and best practices.",
    },
];

const PROVIDES: [&str; 5] = [
    "Customer relationship management (CRM)",
    "Marketing automation",
    "Sales pipelines",
    "Client communication tools",
    "Reporting and analytics",
];

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <>
            <PageHero
                title="About Inflow"
                subtitle="At Inflow, our mission is to help businesses grow smarter with modern, powerful, and easy-to-use tools. We provide an all-in-one platform designed to simplify marketing, sales, and client management, so you can focus on results, not complexity."
            />
            <section class="py-20 px-6">
                <div class="max-w-3xl mx-auto">
                    <h2 class="text-3xl font-bold text-gray-900 mb-4">{"What We Provide"}</h2>
                    <p class="text-gray-600 mb-6">{"With Inflow, businesses get access to features like:"}</p>
                    <ul class="space-y-3">
                        {for PROVIDES.iter().map(|item| html! {
                            <li class="flex items-center text-gray-700">
                                <span class="text-green-500 mr-3">{"✓"}</span>{*item}
                            </li>
                        })}
                    </ul>
                </div>
            </section>
            <section class="py-20 px-6 bg-gray-50">
                <div class="max-w-7xl mx-auto">
                    <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">{"Our Values"}</h2>
                    {card_grid(&VALUES)}
                </div>
            </section>
            <section class="py-20 px-6">
                <div class="max-w-3xl mx-auto text-center">
                    <h2 class="text-3xl font-bold text-gray-900 mb-6">{"Our Philosophy"}</h2>
                    <p class="text-lg text-gray-600 mb-4">
                        {"We believe software should work for you, not against you. That's why Inflow combines enterprise-grade functionality with simplicity and reliability, all under one secure platform."}
                    </p>
                    <p class="text-lg text-gray-600">
                        {"Every feature we build is designed with your success in mind, helping you streamline operations, improve client relationships, and grow your business more efficiently."}
                    </p>
                </div>
            </section>
        </>
    }
}
