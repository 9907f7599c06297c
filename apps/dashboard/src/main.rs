#![allow(non_snake_case)]

mod api;
mod chart;
mod config;
mod fixtures;
mod hooks;
mod models;
mod state;
mod ui;

use api::IncidentClient;
use chart::product_distribution;
use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use hooks::incidents::use_incident_loader;
use once_cell::sync::OnceCell;
use state::{use_app_state, AppState};
use tracing::info;
use ui::chart::DistributionChart;
use ui::filters::FilterBar;
use ui::incidents::IncidentTable;
use ui::layout::{FooterBar, HeaderBar, LoadingSpinner};
use ui::modal::AnalyticsModal;
use ui::notifications::NotificationCenter;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();
pub(crate) static API_CLIENT: OnceCell<IncidentClient> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    init_logging(&config);
    bootstrap_infrastructure(config);
    launch(App);
}

fn init_logging(config: &AppConfig) {
    static INIT: std::sync::Once = std::sync::Once::new();
    let level = config.profile.log_level();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(level);
    });
}

fn bootstrap_infrastructure(config: AppConfig) {
    info!(
        profile = ?config.profile,
        load_delay_ms = config.load_delay_ms(),
        "bootstrapping dashboard"
    );
    let _ = API_CLIENT.set(IncidentClient::new(config.clone()));
    let _ = APP_CONFIG.set(config);
}

#[component]
fn App() -> Element {
    let app_state = use_signal(AppState::default);

    use_context_provider(|| app_state);

    rsx! {
        div { class: "relative",
            Router::<Route> {}
            NotificationCenter {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Dashboard {},
}

#[component]
fn Dashboard() -> Element {
    use_incident_loader();

    let state = use_app_state();
    let visible = use_memo(move || state.read().visible_incidents());
    let series = use_memo(move || product_distribution(&visible.read()));
    let is_loading = state.read().incidents.is_loading;

    let config = APP_CONFIG.get().cloned().unwrap_or_default();

    rsx! {
        div { class: "app-background min-h-screen bg-slate-100 pb-24",
            HeaderBar { title: config.title.clone() }
            FilterBar {}
            main { class: "mx-auto max-w-4xl px-4",
                if is_loading {
                    LoadingSpinner {}
                } else {
                    IncidentTable { incidents: visible.cloned() }
                    DistributionChart { series: series.cloned() }
                }
            }
            AnalyticsModal {}
            FooterBar { text: config.footer.clone() }
        }
    }
}
