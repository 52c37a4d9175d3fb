use dioxus::prelude::*;
use crate::features::{ ContactForm, FormStatus };

#[component]
pub fn ContactSection() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut status = use_signal(|| None::<FormStatus>);

    let values = form.read().clone();

    rsx! {
        section { id: "contact", class: "container contact",
            h2 { "Talk to us" }
            form {
                id: "contact-form",
                novalidate: true,
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let result = form.write().submit();
                    status.set(Some(result));
                },

                label { r#for: "contact-name", "Name" }
                input {
                    id: "contact-name",
                    name: "name",
                    r#type: "text",
                    value: "{values.name}",
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }

                label { r#for: "contact-email", "Email" }
                input {
                    id: "contact-email",
                    name: "email",
                    r#type: "email",
                    value: "{values.email}",
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }

                label { r#for: "contact-message", "Message" }
                textarea {
                    id: "contact-message",
                    name: "message",
                    rows: "5",
                    value: "{values.message}",
                    oninput: move |evt: FormEvent| form.write().message = evt.value(),
                }

                button { class: "cta", r#type: "submit", "Send message" }

                if let Some(current) = status.read().as_ref() {
                    p {
                        id: "form-status",
                        class: current.class(),
                        role: "status",
                        "{current.message}"
                    }
                }
            }
        }
    }
}
