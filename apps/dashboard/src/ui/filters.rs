use dioxus::prelude::*;

use crate::state::{use_app_actions, use_app_state, FilterAxis};

#[component]
pub fn FilterBar() -> Element {
    let filters = use_app_state().read().filters;
    let dropdowns = FilterAxis::ALL.map(|axis| (axis, axis.dom_id(), filters.label(axis)));

    rsx! {
        div { class: "mx-auto grid max-w-4xl gap-3 px-4 py-6 md:grid-cols-3",
            for (axis, dom_id, current) in dropdowns {
                FilterDropdown { key: "{dom_id}", axis, current }
            }
        }
    }
}

#[component]
fn FilterDropdown(axis: FilterAxis, current: &'static str) -> Element {
    let actions = use_app_actions();
    let mut is_open = use_signal(|| false);

    let button_label = format!("Filter by {}: {}", axis.title(), current);
    let options = axis.options();

    rsx! {
        div { class: "relative text-center",
            button {
                id: axis.dom_id(),
                r#type: "button",
                class: "rounded bg-slate-900 px-4 py-2 text-sm font-medium text-white hover:bg-slate-800",
                onclick: move |_| {
                    let next = !is_open();
                    is_open.set(next);
                },
                "{button_label} ▾"
            }
            if is_open() {
                ul {
                    class: "absolute left-1/2 z-20 mt-1 w-48 -translate-x-1/2 rounded border border-slate-200 bg-white py-1 text-left shadow-lg",
                    role: "menu",
                    for option in options {
                        li { key: "{option}",
                            button {
                                r#type: "button",
                                class: if option == current {
                                    "block w-full bg-slate-100 px-4 py-1.5 text-left text-sm font-semibold text-slate-900"
                                } else {
                                    "block w-full px-4 py-1.5 text-left text-sm text-slate-700 hover:bg-slate-100"
                                },
                                onclick: {
                                    let actions = actions.clone();
                                    move |_| {
                                        actions.select_filter(axis, option);
                                        is_open.set(false);
                                    }
                                },
                                "{option}"
                            }
                        }
                    }
                }
            }
        }
    }
}
