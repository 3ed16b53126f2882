use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::ToastQueue;
use crate::core::locale::Locale;
use crate::core::notice::{Notice, Notifier, Severity};
use crate::core::waitlist::WaitlistEmail;
use crate::t;
use crate::views::{LandingText, Palette};

const PIN_ICON: Asset = asset!("/assets/icons/pin.svg");
const PHONE_ART: Asset = asset!("/assets/icons/phone.svg");

#[component]
pub fn Hero(text: LandingText, palette: Palette, locale: Locale, toasts: ToastQueue) -> Element {
    rsx! {
        section { class: palette.hero,
            div { class: "hero__copy",
                p { class: "hero__eyebrow", "{text.security_solution}" }
                h3 { class: "hero__headline", "{text.keep_track}" }
                div { class: "hero__notice",
                    img { class: "hero__pin", src: PIN_ICON, alt: "{text.pin_alt}" }
                    p { "{text.noticed}" }
                }
                h3 { class: "hero__waitlist-title", "{text.join_waitlist}" }
                p { class: "hero__waitlist-note", "{text.notify}" }
                WaitlistForm {
                    placeholder: text.email_placeholder.clone(),
                    button_label: text.join_list.clone(),
                    locale,
                    toasts,
                }
            }
            div { class: "hero__art",
                img { class: "hero__phone", src: PHONE_ART, alt: "{text.phone_alt}" }
            }
        }
    }
}

/// Email input + join button. Valid addresses clear the field and confirm with a toast.
#[component]
fn WaitlistForm(
    placeholder: String,
    button_label: String,
    locale: Locale,
    toasts: ToastQueue,
) -> Element {
    let mut email = use_signal(String::new);

    let mut submit = move || {
        let mut notifier = toasts;
        let raw = email.peek().clone();
        match WaitlistEmail::parse(&raw) {
            Ok(address) => {
                info!("[waitlist] accepted {}", address.as_str());
                email.set(String::new());
                notifier.notify(Notice::new(t!(locale, "waitlist-joined"), Severity::Success));
            }
            Err(err) => {
                info!("[waitlist] rejected: {err}");
                notifier.notify(Notice::new(t!(locale, "waitlist-invalid"), Severity::Warning));
            }
        }
    };

    rsx! {
        div { class: "waitlist",
            input {
                class: "waitlist__input",
                r#type: "email",
                placeholder: "{placeholder}",
                aria_label: "{placeholder}",
                value: "{email}",
                oninput: move |evt: FormEvent| email.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key().to_string().to_lowercase() == "enter" {
                        evt.prevent_default();
                        submit();
                    }
                },
            }
            button {
                r#type: "button",
                class: "button button--primary waitlist__submit",
                onclick: move |_| submit(),
                "{button_label}"
            }
        }
    }
}
