use dioxus::prelude::*;

#[component]
pub fn HeaderBar(title: String) -> Element {
    rsx! {
        header { class: "sticky top-0 z-30 bg-slate-900 py-3 text-center shadow",
            a { href: "#home", class: "text-lg font-semibold tracking-wide text-white", "{title}" }
        }
    }
}

#[component]
pub fn FooterBar(text: String) -> Element {
    rsx! {
        footer { class: "fixed inset-x-0 bottom-0 z-30 bg-slate-900 py-3 text-center text-sm text-white",
            "{text}"
        }
    }
}

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "flex justify-center py-10",
            div {
                class: "h-10 w-10 animate-spin rounded-full border-4 border-slate-300 border-t-slate-900",
                role: "status",
                span { class: "sr-only", "Loading..." }
            }
        }
    }
}
