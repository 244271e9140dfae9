use crate::auth::{AuthProvider, SessionHandle};
use crate::browser;
use crate::components::{Footer, Header};
use crate::pages::{
    AboutPage, ContactPage, FaqPage, FeaturesPage, HomePage, LoginPage, PricingPage,
    PrivacyPage, SecurityPage, SignupPage, TermsPage,
};
use crate::router::{RouterContext, use_page_router};
use crate::services::{AppServices, NavigatorHandle};
use inflow_core::{PageId, Route, SiteConfig, StandalonePage};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub services: AppServices,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let route = Route::resolve(&browser::current_pathname(), &browser::current_hash());

    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.services.config.clone()}>
            <ContextProvider<NavigatorHandle> context={NavigatorHandle(props.services.navigator.clone())}>
                <AuthProvider session={SessionHandle(props.services.manager.clone())}>
                    {match route {
                        Route::Standalone(StandalonePage::Login) => html! { <LoginPage /> },
                        Route::Standalone(StandalonePage::Signup) => html! { <SignupPage /> },
                        Route::Page(_) => html! { <Site /> },
                    }}
                </AuthProvider>
            </ContextProvider<NavigatorHandle>>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

/// Header, the selected page, and footer
#[function_component(Site)]
fn site() -> Html {
    let router = use_page_router();
    let page = router.current();

    html! {
        <ContextProvider<RouterContext> context={router}>
            <div class="min-h-screen flex flex-col bg-white text-gray-900">
                <Header current={page} />
                <main class="flex-1" key={page.as_str()}>
                    {render_page(page)}
                </main>
                <Footer />
            </div>
        </ContextProvider<RouterContext>>
    }
}

fn render_page(page: PageId) -> Html {
    match page {
        PageId::Home => html! { <HomePage /> },
        PageId::Features => html! { <FeaturesPage /> },
        PageId::Pricing => html! { <PricingPage /> },
        PageId::Faqs => html! { <FaqPage /> },
        PageId::Contact => html! { <ContactPage /> },
        PageId::About => html! { <AboutPage /> },
        PageId::Privacy => html! { <PrivacyPage /> },
        PageId::Terms => html! { <TermsPage /> },
        PageId::Security => html! { <SecurityPage /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct UnavailableProps {
    pub reason: AttrValue,
}

/// Shown when the site cannot start
#[function_component(Unavailable)]
pub fn unavailable(props: &UnavailableProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 p-6">
            <div class="max-w-md text-center">
                <h1 class="text-2xl font-bold text-gray-900 mb-3">{"Inflow is unavailable"}</h1>
                <p class="text-gray-600">{"The site could not start. Please try again later."}</p>
                <p class="text-xs text-gray-400 mt-4">{props.reason.clone()}</p>
            </div>
        </div>
    }
}
