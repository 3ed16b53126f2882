//! Toast notifications: a signal-backed queue plus the container that renders it.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::locale::Locale;
use crate::core::notice::{Notice, Notifier, ToastStack, AUTO_CLOSE_MS};
use crate::core::timing;
use crate::t;

/// Copyable handle to the live toasts. Implements [`Notifier`], so it can be
/// handed to anything that raises notices.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastQueue {
    stack: Signal<ToastStack>,
}

impl ToastQueue {
    pub fn dismiss(&mut self, id: u64) {
        if self.stack.write().dismiss(id) {
            debug!("[toast] dismissed #{id}");
        }
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notice: Notice) {
        debug!("[toast] {:?}: {}", notice.severity, notice.message);
        let id = self.stack.write().push(notice);

        let mut queue = *self;
        spawn(async move {
            timing::sleep_ms(AUTO_CLOSE_MS).await;
            queue.dismiss(id);
        });
    }
}

pub fn use_toast_queue() -> ToastQueue {
    let stack = use_signal(ToastStack::default);
    ToastQueue { stack }
}

#[component]
pub fn ToastContainer(queue: ToastQueue, locale: Locale) -> Element {
    let stack = queue.stack.read().clone();
    let dismiss_label = t!(locale, "toast-dismiss");
    let progress_style = format!("animation-duration: {AUTO_CLOSE_MS}ms;");

    rsx! {
        div { class: "toast-container", aria_live: "polite",
            for toast in stack.iter() {
                div {
                    key: "{toast.id}",
                    class: "toast {toast.notice.severity.css_class()}",
                    role: toast.notice.severity.aria_role(),
                    span { class: "toast__message", "{toast.notice.message}" }
                    button {
                        r#type: "button",
                        class: "toast__close",
                        aria_label: "{dismiss_label}",
                        onclick: {
                            let id = toast.id;
                            let mut queue = queue;
                            move |_| queue.dismiss(id)
                        },
                        "×"
                    }
                    div { class: "toast__progress", style: "{progress_style}" }
                }
            }
        }
    }
}
