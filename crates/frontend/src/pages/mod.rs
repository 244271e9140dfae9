//! Page views
//!
//! Shell pages render between the header and footer; login and sign-up are
//! standalone.

mod about;
mod contact;
mod faq;
mod features;
mod home;
mod legal;
mod login;
mod pricing;
mod signup;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use faq::FaqPage;
pub use features::FeaturesPage;
pub use home::HomePage;
pub use legal::{PrivacyPage, SecurityPage, TermsPage};
pub use login::LoginPage;
pub use pricing::PricingPage;
pub use signup::SignupPage;

use yew::prelude::*;

/// Title and description pair used by the card grids
pub(crate) struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub(crate) fn card_grid(cards: &[Card]) -> Html {
    html! {
        <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
            {for cards.iter().map(|card| html! {
                <div class="bg-white rounded-xl shadow-sm border border-gray-100 p-8 hover:shadow-lg transition-shadow">
                    <div class="text-3xl mb-4">{card.icon}</div>
                    <h3 class="text-xl font-semibold text-gray-900 mb-3">{card.title}</h3>
                    <p class="text-gray-600">{card.text}</p>
                </div>
            })}
        </div>
    }
}
