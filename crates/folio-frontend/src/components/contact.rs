use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use folio::async_callback;
use folio::data::{NewContactMessage, PersonalInfo};
use folio::log::info;

use crate::components::{ErrorMessage, Loading};
use crate::hooks::use_personal_info;
use crate::providers::api;

/// How long the "message sent" banner stays up.
const SENT_BANNER_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let personal = use_personal_info();

    let details = if let Some(info) = personal.state.data() {
        contact_details(info)
    } else if let Some(error) = personal.state.error() {
        html! { <ErrorMessage error={AttrValue::from(error.to_string())} on_retry={personal.refetch.clone()} /> }
    } else {
        html! { <Loading /> }
    };

    html! {
        <section id="contact" class="py-20 px-6">
            <div class="container mx-auto max-w-4xl">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">{ "Get In Touch" }</h2>
                    <p class="text-xl text-gray-600 dark:text-gray-400">
                        { "I'm always open to new opportunities, collaborations, or just tech talk!" }
                    </p>
                </div>
                <div class="grid md:grid-cols-2 gap-8">
                    <div class="p-6 rounded-lg shadow-md bg-white dark:bg-gray-800">{ details }</div>
                    <div class="p-6 rounded-lg shadow-md bg-white dark:bg-gray-800"><ContactForm /></div>
                </div>
            </div>
        </section>
    }
}

fn contact_details(info: &PersonalInfo) -> Html {
    html! {
        <div class="space-y-4">
            <h3 class="text-xl font-semibold">{ "Contact Information" }</h3>
            <div>
                <p class="text-sm font-medium">{ "Email" }</p>
                <a class="text-sm text-gray-600 hover:text-blue-600" href={format!("mailto:{}", info.email)}>{ &info.email }</a>
            </div>
            <div>
                <p class="text-sm font-medium">{ "Phone" }</p>
                <a class="text-sm text-gray-600 hover:text-blue-600" href={format!("tel:{}", info.phone)}>{ &info.phone }</a>
            </div>
            <div>
                <p class="text-sm font-medium">{ "Location" }</p>
                <p class="text-sm text-gray-600">{ &info.location }</p>
            </div>
            <div class="flex gap-3 pt-4 border-t">
                <a class="flex-1 text-center px-3 py-2 border rounded-md" href={info.linkedin.clone()} target="_blank" rel="noopener noreferrer">{ "LinkedIn" }</a>
                <a class="flex-1 text-center px-3 py-2 border rounded-md" href={info.github.clone()} target="_blank" rel="noopener noreferrer">{ "GitHub" }</a>
            </div>
        </div>
    }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let api = use_memo((), |_| api::create());
    let draft = use_state(NewContactMessage::default);
    let status = use_state(|| SubmitStatus::Idle);

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(NewContactMessage {
                    name: input.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(NewContactMessage {
                    email: input.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                draft.set(NewContactMessage {
                    message: input.value(),
                    ..(*draft).clone()
                });
            }
        })
    };

    let submit = async_callback!([api, draft, status] {
        if *status == SubmitStatus::Sending {
            return;
        }
        if !draft.is_complete() {
            status.set(SubmitStatus::Failed("Please fill in your name, email and message.".to_string()));
            return;
        }

        status.set(SubmitStatus::Sending);
        match api.submit_contact_message(&draft).await {
            Ok(stored) => {
                info!("Contact message {} stored", stored.id);
                draft.set(NewContactMessage::default());
                status.set(SubmitStatus::Sent);

                let status = status.clone();
                Timeout::new(SENT_BANNER_MS, move || status.set(SubmitStatus::Idle)).forget();
            }
            Err(err) => status.set(SubmitStatus::Failed(err.to_string())),
        }
    });

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        submit.emit(());
    });

    let sending = *status == SubmitStatus::Sending;

    html! {
        <form class="space-y-4" {onsubmit}>
            <h3 class="text-xl font-semibold">{ "Send a Message" }</h3>
            <input
                type="text"
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Your name"
                value={draft.name.clone()}
                oninput={on_name}
            />
            <input
                type="email"
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="you@example.com"
                value={draft.email.clone()}
                oninput={on_email}
            />
            <textarea
                class="w-full px-3 py-2 border border-gray-300 rounded-md h-32 focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Your message"
                value={draft.message.clone()}
                oninput={on_message}
            />
            <button
                type="submit"
                class="w-full px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50"
                disabled={sending}
            >
                { if sending { "Sending..." } else { "Send Message" } }
            </button>
            {
                match &*status {
                    SubmitStatus::Sent => html! {
                        <div class="p-3 bg-green-100 text-green-800 rounded-md">{ "Thanks! Your message has been sent." }</div>
                    },
                    SubmitStatus::Failed(error) => html! { <ErrorMessage error={AttrValue::from(error.clone())} /> },
                    SubmitStatus::Idle | SubmitStatus::Sending => html! {},
                }
            }
        </form>
    }
}
