use crate::state::{use_app_actions, use_app_state};
use dioxus::prelude::*;

#[derive(Props, Clone)]
#[props(no_eq)]
pub struct ToastProps {
    pub title: String,
    pub message: String,
    #[props(optional)]
    pub on_close: Option<EventHandler<MouseEvent>>,
}

impl PartialEq for ToastProps {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl Eq for ToastProps {}

#[component]
pub fn Toast(props: ToastProps) -> Element {
    rsx! {
        div { class: "pointer-events-auto rounded-lg border-l-4 border-red-500 bg-red-50 p-4 shadow-lg",
            div { class: "flex items-start justify-between gap-4",
                div { class: "space-y-1",
                    h3 { class: "text-sm font-semibold text-red-700", "{props.title}" }
                    p { class: "text-xs text-slate-700", "{props.message}" }
                }
                if let Some(handler) = props.on_close {
                    button {
                        class: "rounded bg-slate-200 px-2 py-1 text-[11px] text-slate-600 transition hover:bg-slate-300",
                        onclick: move |evt| handler.call(evt),
                        "Dismiss"
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotificationCenter() -> Element {
    let actions = use_app_actions();
    let error = use_app_state().read().incidents.error.clone();

    let Some(error) = error else {
        return rsx! { Fragment {} };
    };

    rsx! {
        div { class: "pointer-events-none fixed right-4 top-4 z-50 flex w-80 flex-col gap-3",
            Toast {
                key: "incident-error",
                title: "Incident data unavailable".to_string(),
                message: error,
                on_close: move |_| actions.dismiss_incident_error(),
            }
        }
    }
}
