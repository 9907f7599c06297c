use dioxus::prelude::*;

use crate::chart::{ChartSeries, DonutGeometry};

pub const CHART_TITLE: &str = "Product Distribution";

#[component]
pub fn DistributionChart(series: ChartSeries) -> Element {
    let geometry = DonutGeometry::default();
    let slices = series.slices(geometry);
    let legend: Vec<(String, &'static str, String)> = slices
        .iter()
        .map(|slice| {
            (
                slice.label.clone(),
                slice.color,
                format!("{} ({})", slice.percent_label(), slice.count),
            )
        })
        .collect();
    let mut table = series.data_table().into_iter();
    let header = table.next();
    let body: Vec<[String; 2]> = table.collect();

    rsx! {
        section { class: "my-8 text-center",
            h4 { class: "mb-3 text-lg font-semibold text-slate-900", "{CHART_TITLE}" }
            if series.is_empty() {
                p { class: "py-12 text-sm text-slate-500 italic", "No data" }
            } else {
                svg {
                    class: "mx-auto h-72 w-72",
                    view_box: geometry.view_box(),
                    role: "img",
                    for slice in slices.iter() {
                        path {
                            key: "{slice.label}",
                            d: slice.path.clone(),
                            fill: slice.color,
                            fill_rule: "evenodd",
                            stroke: "#ffffff",
                            stroke_width: "1",
                        }
                    }
                }
                table { class: "sr-only",
                    if let Some([label_heading, count_heading]) = header {
                        thead {
                            tr {
                                th { "{label_heading}" }
                                th { "{count_heading}" }
                            }
                        }
                    }
                    tbody {
                        for [label, count] in body {
                            tr { key: "{label}",
                                td { "{label}" }
                                td { "{count}" }
                            }
                        }
                    }
                }
                ul { class: "mt-4 flex flex-wrap justify-center gap-4 text-xs text-slate-600",
                    for (label, color, share) in legend {
                        li { key: "{label}", class: "flex items-center gap-1.5",
                            span {
                                class: "inline-block h-3 w-3 rounded-sm",
                                style: "background-color: {color}",
                            }
                            span { "{label}" }
                            span { class: "text-slate-400", "{share}" }
                        }
                    }
                }
            }
        }
    }
}
