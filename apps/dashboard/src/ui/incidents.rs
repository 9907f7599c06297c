use dioxus::prelude::*;

use crate::models::Incident;
use crate::state::use_app_actions;

const ANALYTICS_CELL: &str =
    "cursor-pointer border border-slate-200 px-3 py-2 text-sky-700 hover:underline";

/// Results table. An empty subset still renders the header row.
#[component]
pub fn IncidentTable(incidents: Vec<Incident>) -> Element {
    let actions = use_app_actions();
    let header_actions = actions.clone();

    rsx! {
        div { class: "overflow-x-auto rounded-lg border border-slate-200 bg-white shadow-sm",
            table { class: "min-w-full border-collapse text-center text-sm text-slate-700",
                thead { class: "bg-slate-50 text-slate-900",
                    tr {
                        th { class: "border border-slate-200 px-3 py-2", "#" }
                        th { class: "border border-slate-200 px-3 py-2", "Product" }
                        th { class: "border border-slate-200 px-3 py-2", "Status" }
                        th { class: "border border-slate-200 px-3 py-2", "Action" }
                        th {
                            class: ANALYTICS_CELL,
                            onclick: move |_| header_actions.open_analytics(),
                            "Analytics"
                        }
                    }
                }
                tbody {
                    for incident in incidents.iter() {
                        tr { key: "{incident.id}", class: "odd:bg-white even:bg-slate-50 hover:bg-slate-100",
                            td { class: "border border-slate-200 px-3 py-2", "{incident.id}" }
                            td { class: "border border-slate-200 px-3 py-2", "{incident.product}" }
                            td { class: "border border-slate-200 px-3 py-2", "{incident.status}" }
                            td { class: "border border-slate-200 px-3 py-2", "{incident.action}" }
                            td {
                                class: ANALYTICS_CELL,
                                onclick: {
                                    let actions = actions.clone();
                                    move |_| actions.open_analytics()
                                },
                                "Analytics"
                            }
                        }
                    }
                }
            }
        }
    }
}
