use crate::components::PageHero;
use crate::services::{use_navigator, use_site_config};
use gloo::timers::callback::Timeout;
use inflow_core::{ContactDraft, ContactForm};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Subject,
    Message,
}

fn update(draft: &ContactDraft, field: Field, value: String) -> ContactDraft {
    let mut next = draft.clone();
    match field {
        Field::Name => next.name = value,
        Field::Email => next.email = value,
        Field::Subject => next.subject = value,
        Field::Message => next.message = value,
    }
    next
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let config = use_site_config();
    let navigator = use_navigator();
    let form = use_state(ContactForm::default);
    let pending_reset: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    // Dropping the timeout cancels it
    {
        let pending_reset = pending_reset.clone();
        use_effect_with((), move |_| move || drop(pending_reset.borrow_mut().take()));
    }

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| {
                    e.target_dyn_into::<HtmlTextAreaElement>()
                        .map(|area| area.value())
                })
                .unwrap_or_default();
            form.set(ContactForm {
                draft: update(&form.draft, field, value),
                submitted: form.submitted,
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let recipient = config.contact_email.clone();
        let reset_ms = config.contact_reset_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let mailto = next.submit(&recipient);
            debug!(subject = %next.draft.subject, "Opening mail client");
            navigator.assign(&mailto);
            form.set(next);

            let form = form.clone();
            *pending_reset.borrow_mut() = Some(Timeout::new(reset_ms, move || {
                form.set(ContactForm::default());
            }));
        })
    };

    let input_class = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent";

    html! {
        <>
            <PageHero
                title="Contact Us"
                subtitle="Have a question or need help? Send us a message and we'll get back to you as soon as possible."
            />
            <section class="py-20 px-6">
                <div class="max-w-2xl mx-auto bg-white rounded-2xl shadow-lg border border-gray-100 p-8">
                    if form.submitted {
                        <div class="text-center py-12">
                            <div class="text-5xl mb-4">{"✉️"}</div>
                            <h2 class="text-2xl font-bold text-gray-900 mb-2">{"Message Sent!"}</h2>
                            <p class="text-gray-600">
                                {"Your email client should open shortly. Thank you for reaching out to us!"}
                            </p>
                        </div>
                    } else {
                        <form class="space-y-6" {onsubmit}>
                            <div class="grid gap-6 md:grid-cols-2">
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-2" for="contact-name">{"Name"}</label>
                                    <input id="contact-name" type="text" required=true class={input_class}
                                        placeholder="Your name"
                                        value={form.draft.name.clone()}
                                        oninput={on_input(Field::Name)} />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-2" for="contact-email">{"Email"}</label>
                                    <input id="contact-email" type="email" required=true class={input_class}
                                        placeholder="your@email.com"
                                        value={form.draft.email.clone()}
                                        oninput={on_input(Field::Email)} />
                                </div>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-2" for="contact-subject">{"Subject"}</label>
                                <input id="contact-subject" type="text" required=true class={input_class}
                                    placeholder="How can we help?"
                                    value={form.draft.subject.clone()}
                                    oninput={on_input(Field::Subject)} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-2" for="contact-message">{"Message"}</label>
                                <textarea id="contact-message" rows="6" required=true class={input_class}
                                    placeholder="Tell us more..."
                                    value={form.draft.message.clone()}
                                    oninput={on_input(Field::Message)} />
                            </div>
                            <button type="submit" class="w-full py-4 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-700">
                                {"Send Message"}
                            </button>
                        </form>
                    }
                </div>
            </section>
        </>
    }
}
