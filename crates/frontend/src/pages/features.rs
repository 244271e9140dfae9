use super::home::CORE_FEATURES;
use super::{Card, card_grid};
use crate::components::PageHero;
use yew::prelude::*;

const ADVANCED_FEATURES: [Card; 2] = [
    Card {
        icon: "📊",
        title: "Advanced Reporting & Analytics",
        text: "Track revenue, pipeline, and client activity with dashboards built for decisions.",
    },
    Card {
        icon: "🤖",
        title: "AI-Powered Automation",
        text: "Let Inflow draft follow-ups, sort leads, and handle the busywork for you.",
    },
];

#[function_component(FeaturesPage)]
pub fn features_page() -> Html {
    html! {
        <>
            <PageHero
                title="Powerful Features"
                subtitle="Everything you need to manage clients and grow your business, in one platform."
            />
            <section class="py-20 px-6">
                <div class="max-w-7xl mx-auto space-y-16">
                    {card_grid(&CORE_FEATURES)}
                    <div>
                        <h2 class="text-3xl font-bold text-gray-900 text-center mb-10">{"And More"}</h2>
                        {card_grid(&ADVANCED_FEATURES)}
                    </div>
                </div>
            </section>
        </>
    }
}
