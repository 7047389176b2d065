use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::{Toast, ToastMessage};
use crate::contact::{ContactDraft, ContactField};

fn field_error(draft: &ContactDraft, field: ContactField) -> Html {
    match draft.error_for(field) {
        Some(err) => html! { <p class="form-error">{ err.to_string() }</p> },
        None => html! {},
    }
}

/// Client-side only: a valid submission shows a confirmation and resets.
/// Nothing leaves the browser.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    // Bumped on every accepted submit so an identical toast restarts its timer.
    let toast = use_state(|| None::<(u64, ToastMessage)>);

    let edit = |field: ContactField| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            next.edit(field, value);
            draft.set(next);
        }
    };

    let on_name = {
        let edit = edit(ContactField::Name);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_email = {
        let edit = edit(ContactField::Email);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_message = {
        let edit = edit(ContactField::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            edit(input.value());
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*draft).clone();
            if next.submit().is_some() {
                info!("contact form valid, message kept local");
                let seq = (*toast).as_ref().map_or(0, |(seq, _)| seq + 1);
                toast.set(Some((
                    seq,
                    ToastMessage {
                        title: "TRANSMISSION RÉUSSIE".to_string(),
                        description: "Communication établie avec succès.".to_string(),
                    },
                )));
            }
            draft.set(next);
        })
    };

    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    html! {
        <>
            <form class="contact-form" onsubmit={on_submit}>
                <div class="form-row">
                    <label class="form-field">
                        <span class="form-label">{"Identité"}</span>
                        <input type="text" placeholder="VOTRE NOM" value={draft.message.name.clone()} oninput={on_name} />
                        { field_error(&draft, ContactField::Name) }
                    </label>
                    <label class="form-field">
                        <span class="form-label">{"Fréquence (email)"}</span>
                        <input type="text" inputmode="email" placeholder="EMAIL@DOMAINE.COM" value={draft.message.email.clone()} oninput={on_email} />
                        { field_error(&draft, ContactField::Email) }
                    </label>
                </div>
                <label class="form-field">
                    <span class="form-label">{"Message"}</span>
                    <textarea rows="5" placeholder="VOTRE MESSAGE..." value={draft.message.message.clone()} oninput={on_message} />
                    { field_error(&draft, ContactField::Message) }
                </label>
                <button type="submit" class="btn btn-primary btn-block">{"TRANSMETTRE"}</button>
            </form>
            {
                if let Some((seq, message)) = (*toast).clone() {
                    html! { <Toast {seq} {message} {on_dismiss} /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
