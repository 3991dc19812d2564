//! Contact Form
//!
//! Required-field form whose submission is intercepted and replaced by a
//! static acknowledgement. Nothing is sent anywhere.

use leptos::*;

use super::layout::DISPLAY;
use crate::content::copy::{CONTACT_ACK, CONTACT_CONSENT};
use crate::state::{ContactDraft, ContactField, ContactStatus};

const INPUT_CLASS: &str = "w-full rounded-xl border border-[#D8B27E]/50 bg-white/80 px-4 py-2 \
outline-none placeholder:opacity-60 focus:ring-2 focus:ring-[#D8B27E]/50";

#[component]
pub fn ContactForm() -> impl IntoView {
    let draft = create_rw_signal(ContactDraft::default());
    let status = create_rw_signal(ContactStatus::Editing);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let next = draft.with(|d| status.get_untracked().submit(d));
        status.set(next);
    };

    view! {
        {move || match status.get() {
            ContactStatus::Acknowledged => view! {
                <div
                    role="status"
                    class="rounded-xl border border-[#D8B27E]/50 bg-white/80 px-6 py-8 text-center text-[#7C3E2E]"
                    style=DISPLAY
                >
                    <p class="text-lg font-semibold">{CONTACT_ACK}</p>
                </div>
            }.into_view(),
            ContactStatus::Editing => view! {
                <form class="grid gap-4 md:grid-cols-2" method="post" action="#" on:submit=on_submit>
                    <div class="md:col-span-1">
                        <FieldLabel field=ContactField::Name />
                        <input
                            required=true
                            type="text"
                            id=ContactField::Name.name()
                            name=ContactField::Name.name()
                            placeholder=ContactField::Name.placeholder()
                            class=INPUT_CLASS
                            prop:value=move || draft.with(|d| d.get(ContactField::Name).to_string())
                            on:input=move |ev| draft.update(|d| d.set(ContactField::Name, event_target_value(&ev)))
                        />
                    </div>
                    <div class="md:col-span-1">
                        <FieldLabel field=ContactField::Email />
                        <input
                            required=true
                            type="email"
                            id=ContactField::Email.name()
                            name=ContactField::Email.name()
                            placeholder=ContactField::Email.placeholder()
                            class=INPUT_CLASS
                            prop:value=move || draft.with(|d| d.get(ContactField::Email).to_string())
                            on:input=move |ev| draft.update(|d| d.set(ContactField::Email, event_target_value(&ev)))
                        />
                    </div>
                    <div class="md:col-span-2">
                        <FieldLabel field=ContactField::Message />
                        <textarea
                            required=true
                            id=ContactField::Message.name()
                            name=ContactField::Message.name()
                            rows="5"
                            placeholder=ContactField::Message.placeholder()
                            class=INPUT_CLASS
                            prop:value=move || draft.with(|d| d.get(ContactField::Message).to_string())
                            on:input=move |ev| draft.update(|d| d.set(ContactField::Message, event_target_value(&ev)))
                        />
                    </div>
                    <div class="md:col-span-2 flex items-center justify-between">
                        <div class="text-xs opacity-70">{CONTACT_CONSENT}</div>
                        <button
                            type="submit"
                            class="rounded-full bg-[#D8B27E] px-6 py-2 text-sm font-semibold text-[#FAF8F5] shadow hover:shadow-md transition-all active:scale-[0.98]"
                        >
                            "Отправить"
                        </button>
                    </div>
                </form>
            }.into_view(),
        }}
    }
}

#[component]
fn FieldLabel(field: ContactField) -> impl IntoView {
    view! {
        <label for=field.name() class="mb-1 block text-sm font-semibold" style=DISPLAY>
            {field.label()}
        </label>
    }
}
