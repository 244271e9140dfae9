//! Privacy policy, terms of service, and security overview

use super::{Card, card_grid};
use crate::components::PageHero;
use crate::services::use_site_config;
use yew::prelude::*;

struct Section {
    title: &'static str,
    content: Option<&'static str>,
    items: &'static [&'static str],
}

fn render_sections(sections: &[Section]) -> Html {
    html! {
        <div class="space-y-10">
            {for sections.iter().enumerate().map(|(index, section)| html! {
                <div>
                    <h2 class="text-2xl font-bold text-gray-900 mb-4">
                        {format!("{}. {}", index + 1, section.title)}
                    </h2>
                    if let Some(content) = section.content {
                        <p class="text-gray-600 mb-3">{content}</p>
                    }
                    if !section.items.is_empty() {
                        <ul class="list-disc pl-6 space-y-2 text-gray-600">
                            {for section.items.iter().map(|item| html! { <li>{*item}</li> })}
                        </ul>
                    }
                </div>
            })}
        </div>
    }
}

const PRIVACY_SECTIONS: [Section; 2] = [
    Section {
        title: "Information We Collect",
        content: None,
        items: &[
            "Account Information: Name, email, company details.",
            "Platform Usage Data: Interactions with Inflow's features (CRM, marketing, automation).",
            "Billing Information: Payment details processed by secure third-party providers.",
        ],
    },
    Section {
        title: "How We Use Your Information",
        content: None,
        items: &[
            "To provide access to the Inflow platform.",
            "To improve our services and develop new features.",
            "To prevent fraud and maintain security.",
        ],
    },
];

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    let config = use_site_config();
    let email = config.contact_email.clone();

    html! {
        <>
            <PageHero
                title="Privacy Policy"
                subtitle="At Inflow, your privacy matters. We are committed to protecting the information you share with us and being transparent about how we use it."
            />
            <section class="py-20 px-6">
                <div class="max-w-3xl mx-auto space-y-10">
                    {render_sections(&PRIVACY_SECTIONS)}
                    <div>
                        <h2 class="text-2xl font-bold text-gray-900 mb-4">{"Data Sharing"}</h2>
                        <p class="text-gray-600">
                            {"We do not sell your personal data. We may share information only with trusted third-party providers that enable Inflow to function (e.g., payment processors, hosting providers)."}
                        </p>
                    </div>
                    <div>
                        <h2 class="text-2xl font-bold text-gray-900 mb-4">{"Data Retention"}</h2>
                        <p class="text-gray-600">
                            {"We retain your data while your account is active or as required by law. You can request deletion of your account data at any time."}
                        </p>
                    </div>
                    <div>
                        <h2 class="text-2xl font-bold text-gray-900 mb-4">{"Your Rights"}</h2>
                        <p class="text-gray-600">
                            {"You may request access, correction, or deletion of your personal data by contacting us at "}
                            <a href={format!("mailto:{email}")} class="text-blue-600 hover:underline">{email.clone()}</a>
                            {"."}
                        </p>
                    </div>
                </div>
            </section>
        </>
    }
}

const TERMS_SECTIONS: [Section; 7] = [
    Section {
        title: "Eligibility",
        content: Some("You must be at least 18 years old to create an account."),
        items: &[],
    },
    Section {
        title: "Accounts & Responsibilities",
        content: None,
        items: &[
            "You are responsible for maintaining the confidentiality of your account credentials.",
            "You agree not to share your login or misuse the platform.",
        ],
    },
    Section {
        title: "Acceptable Use",
        content: Some("You may not use Inflow to:"),
        items: &[
            "Send spam or abusive content.",
            "Violate any applicable laws.",
            "Interfere with or attempt to disrupt platform operations.",
        ],
    },
    Section {
        title: "Subscriptions & Payments",
        content: None,
        items: &[
            "Inflow is a subscription-based service billed on a recurring basis.",
            "Payments are non-refundable, unless required by law.",
            "You may cancel at any time, and your subscription will remain active until the end of the billing period.",
        ],
    },
    Section {
        title: "Service Availability",
        content: Some(
            "We strive to keep Inflow available at all times. However, occasional downtime may occur for updates, maintenance, or unexpected issues.",
        ),
        items: &[],
    },
    Section {
        title: "Limitation of Liability",
        content: Some(
            "Inflow is provided \"as is.\" We are not responsible for indirect damages such as lost profits, lost data, or business interruptions.",
        ),
        items: &[],
    },
    Section {
        title: "Updates to Terms",
        content: Some(
            "We may update these Terms from time to time. Continued use of Inflow means you accept the changes.",
        ),
        items: &[],
    },
];

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    html! {
        <>
            <PageHero
                title="Terms of Service"
                subtitle="Welcome to Inflow! By signing up or using our platform, you agree to these terms:"
            />
            <section class="py-20 px-6">
                <div class="max-w-3xl mx-auto">{render_sections(&TERMS_SECTIONS)}</div>
            </section>
        </>
    }
}

const SECURITY_FEATURES: [Card; 6] = [
    Card {
        icon: "🔐",
        title: "Encryption",
        text: "All data is encrypted in transit (SSL/TLS) and at rest using industry-standard protocols.",
    },
    Card {
        icon: "🛡️",
        title: "Access Controls",
        text: "Strict role-based permissions ensure only authorized team members can access sensitive systems.",
    },
    Card {
        icon: "💾",
        title: "Backups",
        text: "Your data is backed up regularly to ensure reliability and protection against data loss.",
    },
    Card {
        icon: "👁️",
        title: "Monitoring",
        text: "Continuous monitoring helps detect and respond to potential threats in real-time.",
    },
    Card {
        icon: "✅",
        title: "Best Practices",
        text: "Our infrastructure is powered by trusted providers and adheres to industry compliance standards.",
    },
    Card {
        icon: "⚠️",
        title: "Threat Detection",
        text: "Proactively detects and mitigates potential security threats in real time.",
    },
];

#[function_component(SecurityPage)]
pub fn security_page() -> Html {
    html! {
        <>
            <PageHero
                title="Security"
                subtitle="We take security seriously and follow industry best practices to keep your data safe."
            />
            <section class="py-20 px-6">
                <div class="max-w-7xl mx-auto">{card_grid(&SECURITY_FEATURES)}</div>
            </section>
            <section class="py-20 px-6 bg-gray-50">
                <div class="max-w-3xl mx-auto text-center">
                    <h2 class="text-3xl font-bold text-gray-900 mb-6">{"Your Business is Protected"}</h2>
                    <p class="text-lg text-gray-600">
                        {"Your business information and customer data are always protected within Inflow. We maintain the highest standards of security and compliance to ensure your peace of mind while you focus on growing your business."}
                    </p>
                </div>
            </section>
            <section class="py-20 px-6">
                <div class="max-w-5xl mx-auto grid gap-8 md:grid-cols-2">
                    <div>
                        <h3 class="text-2xl font-bold text-gray-900 mb-3">{"Data Protection"}</h3>
                        <p class="text-gray-600">
                            {"All customer data is encrypted using AES-256 encryption and stored in secure, geographically distributed data centers with 24/7 monitoring and support."}
                        </p>
                    </div>
                    <div>
                        <h3 class="text-2xl font-bold text-gray-900 mb-3">{"Compliance"}</h3>
                        <p class="text-gray-600">
                            {"We adhere to industry-standard compliance frameworks and regularly undergo security audits to ensure we meet the highest standards of data protection."}
                        </p>
                    </div>
                </div>
            </section>
        </>
    }
}
