use dioxus::prelude::*;

use crate::state::use_app_actions;
use crate::API_CLIENT;

/// Fetches the incident list once per mount. The future belongs to the calling
/// scope, so an unmount drops it before it can write into stale state.
pub fn use_incident_loader() {
    let actions = use_app_actions();

    use_future(move || {
        let actions = actions.clone();
        async move {
            let Some(client) = API_CLIENT.get().cloned() else {
                tracing::error!("incident client missing at mount");
                actions.set_incident_error("Incident client is not initialized".into());
                return;
            };

            actions.begin_incident_load();
            tracing::info!("loading incidents");

            match client.list_incidents().await {
                Ok(records) => {
                    tracing::info!(count = records.len(), "incidents loaded");
                    actions.set_incidents(records);
                }
                Err(err) => {
                    tracing::error!("incident load failed: {err}");
                    actions.set_incident_error(format!("Unable to load incidents: {err}"));
                }
            }
        }
    });
}
