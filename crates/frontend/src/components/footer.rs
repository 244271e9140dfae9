use crate::router::use_navigate;
use crate::services::use_site_config;
use chrono::{Datelike, Utc};
use inflow_core::PageId;
use yew::prelude::*;

const QUICK_LINKS: [PageId; 4] = [
    PageId::Home,
    PageId::Features,
    PageId::Pricing,
    PageId::Contact,
];

const COMPANY_LINKS: [PageId; 4] = [
    PageId::About,
    PageId::Privacy,
    PageId::Terms,
    PageId::Security,
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigate = use_navigate();
    let config = use_site_config();
    let contact_email = config.contact_email.clone();
    let year = Utc::now().year();

    let link = |page: &PageId| {
        let page = *page;
        let navigate = navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(page);
        });
        html! {
            <li>
                <a href={format!("#{}", page.to_hash())} class="text-gray-400 hover:text-white" {onclick}>
                    {page.label()}
                </a>
            </li>
        }
    };

    html! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="max-w-7xl mx-auto px-6 py-12 grid gap-10 md:grid-cols-4">
                <div class="md:col-span-1">
                    <div class="text-2xl font-bold text-white mb-3">{"Inflow"}</div>
                    <p class="text-gray-400 text-sm">
                        {"The all-in-one CRM platform that keeps your clients, projects, and billing organized."}
                    </p>
                </div>
                <div>
                    <h3 class="text-white font-semibold mb-4">{"Quick Links"}</h3>
                    <ul class="space-y-2 text-sm">{for QUICK_LINKS.iter().map(&link)}</ul>
                </div>
                <div>
                    <h3 class="text-white font-semibold mb-4">{"Company"}</h3>
                    <ul class="space-y-2 text-sm">{for COMPANY_LINKS.iter().map(&link)}</ul>
                </div>
                <div>
                    <h3 class="text-white font-semibold mb-4">{"Get in Touch"}</h3>
                    <ul class="space-y-2 text-sm">
                        <li>
                            <a href={format!("mailto:{contact_email}")} class="text-gray-400 hover:text-white">
                                {contact_email.clone()}
                            </a>
                        </li>
                        <li>
                            <a href="#contact" class="text-gray-400 hover:text-white"
                                onclick={{
                                    let navigate = navigate.clone();
                                    Callback::from(move |e: MouseEvent| {
                                        e.prevent_default();
                                        navigate.emit(PageId::Contact);
                                    })
                                }}
                            >
                                {"Contact Support"}
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="border-t border-gray-800 py-6 text-center text-sm text-gray-500">
                {format!("© {year} Inflow. All rights reserved.")}
            </div>
        </footer>
    }
}
