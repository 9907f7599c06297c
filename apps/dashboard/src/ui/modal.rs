use dioxus::prelude::*;

use crate::state::{use_app_actions, use_app_state};

const MODAL_HEADING: &str = "Modal Heading";
const MODAL_BODY: &str = "Woohoo, you are reading this text in a modal!";

/// Static analytics dialog. Every trigger opens the same content.
#[component]
pub fn AnalyticsModal() -> Element {
    let actions = use_app_actions();
    let is_open = use_app_state().read().modal.is_open;

    if !is_open {
        return rsx! { Fragment {} };
    }

    let on_backdrop = actions.clone();
    let on_dismiss = actions.clone();
    let on_close = actions.clone();
    let on_save = actions;

    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-slate-900/50 px-4",
            onclick: move |_| on_backdrop.close_analytics(),
            div {
                class: "w-full max-w-md rounded-lg bg-white shadow-xl",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                header { class: "flex items-center border-b border-slate-200 px-4 py-3",
                    h3 { class: "w-full text-center text-base font-semibold text-slate-900", "{MODAL_HEADING}" }
                    button {
                        r#type: "button",
                        class: "text-xl leading-none text-slate-400 hover:text-slate-700",
                        aria_label: "Close",
                        onclick: move |_| on_dismiss.close_analytics(),
                        "×"
                    }
                }
                div { class: "px-4 py-6 text-center text-sm text-slate-700", "{MODAL_BODY}" }
                footer { class: "flex justify-center gap-2 border-t border-slate-200 px-4 py-3",
                    button {
                        r#type: "button",
                        class: "rounded bg-slate-500 px-4 py-1.5 text-sm text-white hover:bg-slate-600",
                        onclick: move |_| on_close.close_analytics(),
                        "Close"
                    }
                    button {
                        r#type: "button",
                        class: "rounded bg-sky-600 px-4 py-1.5 text-sm text-white hover:bg-sky-700",
                        onclick: move |_| on_save.close_analytics(),
                        "Save Changes"
                    }
                }
            }
        }
    }
}
