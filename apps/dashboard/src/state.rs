use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Action, Category, Incident, ParseCategoryError, Product, Status};

pub type AppSignal = Signal<AppState>;

pub const ALL_LABEL: &str = "All";

/// One axis of the filter bar: either everything, or exactly one category.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: Category> Choice<T> {
    pub fn admits(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == value,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(value) => value.label(),
        }
    }

    /// Menu entries in display order, `All` first.
    pub fn options() -> Vec<&'static str> {
        std::iter::once(ALL_LABEL)
            .chain(T::VARIANTS.iter().map(|variant| variant.label()))
            .collect()
    }
}

impl<T: Category> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<T: Category> FromStr for Choice<T> {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim() == ALL_LABEL {
            Ok(Self::All)
        } else {
            value.parse::<T>().map(Self::Only)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterAxis {
    Product,
    Status,
    Action,
}

impl FilterAxis {
    pub const ALL: [FilterAxis; 3] = [Self::Product, Self::Status, Self::Action];

    pub fn title(self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::Status => "Status",
            Self::Action => "Action",
        }
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Product => "dropdown-product-filter",
            Self::Status => "dropdown-status-filter",
            Self::Action => "dropdown-action-filter",
        }
    }

    pub fn options(self) -> Vec<&'static str> {
        match self {
            Self::Product => Choice::<Product>::options(),
            Self::Status => Choice::<Status>::options(),
            Self::Action => Choice::<Action>::options(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub product: Choice<Product>,
    #[serde(default)]
    pub status: Choice<Status>,
    #[serde(default)]
    pub action: Choice<Action>,
}

impl FilterSelection {
    pub fn matches(&self, incident: &Incident) -> bool {
        self.product.admits(incident.product)
            && self.status.admits(incident.status)
            && self.action.admits(incident.action)
    }

    /// Filters the full record set, keeping load order.
    pub fn apply(&self, incidents: &[Incident]) -> Vec<Incident> {
        incidents
            .iter()
            .filter(|incident| self.matches(incident))
            .cloned()
            .collect()
    }

    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    pub fn label(&self, axis: FilterAxis) -> &'static str {
        match axis {
            FilterAxis::Product => self.product.label(),
            FilterAxis::Status => self.status.label(),
            FilterAxis::Action => self.action.label(),
        }
    }

    /// Applies a menu key to one axis. An unknown key leaves the selection untouched.
    pub fn select(&mut self, axis: FilterAxis, key: &str) -> Result<(), ParseCategoryError> {
        match axis {
            FilterAxis::Product => self.product = key.parse()?,
            FilterAxis::Status => self.status = key.parse()?,
            FilterAxis::Action => self.action = key.parse()?,
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IncidentState {
    pub records: Vec<Incident>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for IncidentState {
    // The first paint happens before the loader runs and must already show the spinner.
    fn default() -> Self {
        Self {
            records: Vec::new(),
            is_loading: true,
            error: None,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ModalState {
    pub is_open: bool,
}

impl ModalState {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    pub incidents: IncidentState,
    pub filters: FilterSelection,
    pub modal: ModalState,
}

impl AppState {
    pub fn visible_incidents(&self) -> Vec<Incident> {
        self.filters.apply(&self.incidents.records)
    }

    fn begin_load(&mut self) {
        self.incidents.is_loading = true;
        self.incidents.error = None;
    }

    fn finish_load(&mut self, records: Vec<Incident>) {
        self.incidents.records = records;
        self.incidents.error = None;
        self.incidents.is_loading = false;
    }

    fn fail_load(&mut self, message: String) {
        self.incidents.error = Some(message);
        self.incidents.is_loading = false;
    }
}

#[derive(Clone)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    pub fn begin_incident_load(&self) {
        let mut state = self.state;
        state.write().begin_load();
    }

    pub fn set_incidents(&self, records: Vec<Incident>) {
        let mut state = self.state;
        state.write().finish_load(records);
    }

    pub fn set_incident_error(&self, message: String) {
        let mut state = self.state;
        state.write().fail_load(message);
    }

    pub fn dismiss_incident_error(&self) {
        let mut state = self.state;
        state.write().incidents.error = None;
    }

    pub fn select_filter(&self, axis: FilterAxis, key: &str) {
        let mut signal = self.state;
        let mut state = signal.write();
        match state.filters.select(axis, key) {
            Ok(()) => tracing::debug!(
                axis = axis.title(),
                key,
                unfiltered = state.filters.is_unfiltered(),
                "filter changed"
            ),
            Err(err) => tracing::warn!("ignored filter selection: {err}"),
        }
    }

    pub fn open_analytics(&self) {
        let mut state = self.state;
        state.write().modal.open();
    }

    pub fn close_analytics(&self) {
        let mut state = self.state;
        state.write().modal.close();
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    let state = use_app_state();
    AppActions { state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::product_distribution;
    use crate::fixtures::incidents::sample_incident_payload;

    fn sample() -> Vec<Incident> {
        serde_json::from_value(sample_incident_payload()["data"].clone()).unwrap()
    }

    fn ids(incidents: &[Incident]) -> Vec<u32> {
        incidents.iter().map(|incident| incident.id).collect()
    }

    #[test]
    fn unfiltered_selection_keeps_everything() {
        let incidents = sample();
        let filters = FilterSelection::default();

        assert!(filters.is_unfiltered());
        assert_eq!(filters.apply(&incidents), incidents);
    }

    #[test]
    fn single_axis_keeps_only_matching_records() {
        let incidents = sample();

        for axis in FilterAxis::ALL {
            for key in axis.options().into_iter().skip(1) {
                let mut filters = FilterSelection::default();
                filters.select(axis, key).unwrap();

                let visible = filters.apply(&incidents);
                let expected = incidents.iter().filter(|incident| filters.matches(incident)).count();
                assert_eq!(visible.len(), expected);
                assert!(visible.iter().all(|incident| {
                    let field = match axis {
                        FilterAxis::Product => incident.product.label(),
                        FilterAxis::Status => incident.status.label(),
                        FilterAxis::Action => incident.action.label(),
                    };
                    field == key
                }));
            }
        }
    }

    #[test]
    fn combined_axes_intersect() {
        let incidents = sample();

        let mut by_product = FilterSelection::default();
        by_product.select(FilterAxis::Product, "Product B").unwrap();
        let mut by_status = FilterSelection::default();
        by_status.select(FilterAxis::Status, "Closed").unwrap();

        let mut both = by_product;
        both.select(FilterAxis::Status, "Closed").unwrap();

        let product_ids = ids(&by_product.apply(&incidents));
        let intersection: Vec<u32> = ids(&by_status.apply(&incidents))
            .into_iter()
            .filter(|id| product_ids.contains(id))
            .collect();
        assert_eq!(ids(&both.apply(&incidents)), intersection);
        assert_eq!(intersection, vec![2]);
    }

    #[test]
    fn open_status_shows_first_record() {
        let incidents = sample();
        let mut filters = FilterSelection::default();
        filters.select(FilterAxis::Status, "Open").unwrap();

        assert_eq!(ids(&filters.apply(&incidents)), vec![1]);
    }

    #[test]
    fn filters_accumulate_across_changes() {
        let incidents = sample();
        let mut filters = FilterSelection::default();

        filters.select(FilterAxis::Product, "Product B").unwrap();
        filters.select(FilterAxis::Status, "Closed").unwrap();
        assert_eq!(ids(&filters.apply(&incidents)), vec![2]);

        filters.select(FilterAxis::Status, "Pending").unwrap();
        assert!(filters.apply(&incidents).is_empty());

        filters.select(FilterAxis::Product, ALL_LABEL).unwrap();
        assert_eq!(ids(&filters.apply(&incidents)), vec![3]);
    }

    #[test]
    fn chart_follows_the_visible_subset() {
        let incidents = sample();

        let mut open_only = FilterSelection::default();
        open_only.select(FilterAxis::Status, "Open").unwrap();
        assert_eq!(
            product_distribution(&open_only.apply(&incidents)).data_table(),
            vec![["Product", "Count"], ["Product A", "1"]]
        );

        let everything = product_distribution(&FilterSelection::default().apply(&incidents));
        assert_eq!(
            everything.data_table(),
            vec![
                ["Product", "Count"],
                ["Product A", "1"],
                ["Product B", "1"],
                ["Product C", "1"],
            ]
        );
    }

    #[test]
    fn chart_rows_match_distinct_products_for_every_single_axis() {
        let incidents = sample();

        for axis in FilterAxis::ALL {
            for key in axis.options() {
                let mut filters = FilterSelection::default();
                filters.select(axis, key).unwrap();
                let visible = filters.apply(&incidents);
                let series = product_distribution(&visible);

                let mut distinct: Vec<Product> = Vec::new();
                for incident in &visible {
                    if !distinct.contains(&incident.product) {
                        distinct.push(incident.product);
                    }
                }
                assert_eq!(series.data_table().len() - 1, distinct.len());
                assert_eq!(series.total(), visible.len());
            }
        }
    }

    #[test]
    fn unknown_key_leaves_selection_unchanged() {
        let mut filters = FilterSelection::default();
        filters.select(FilterAxis::Action, "Action 2").unwrap();

        let err = filters.select(FilterAxis::Action, "Action 9").unwrap_err();
        assert_eq!(err.axis, "action");
        assert_eq!(filters.action, Choice::Only(Action::Action2));
        assert_eq!(filters.label(FilterAxis::Action), "Action 2");
    }

    #[test]
    fn dropdown_options_start_with_all() {
        assert_eq!(
            FilterAxis::Status.options(),
            vec!["All", "Open", "Closed", "Pending"]
        );
        assert_eq!(FilterAxis::Product.dom_id(), "dropdown-product-filter");
    }

    #[test]
    fn load_lifecycle_updates_flags() {
        let mut state = AppState::default();
        assert!(state.incidents.is_loading);
        assert!(state.visible_incidents().is_empty());

        state.begin_load();
        state.finish_load(sample());
        assert!(!state.incidents.is_loading);
        assert_eq!(state.visible_incidents().len(), 3);

        state.begin_load();
        state.fail_load("decode error".into());
        assert!(!state.incidents.is_loading);
        assert_eq!(state.incidents.error.as_deref(), Some("decode error"));
    }

    #[test]
    fn modal_toggle_leaves_records_and_filters_alone() {
        let mut state = AppState::default();
        state.finish_load(sample());
        state.filters.select(FilterAxis::Product, "Product A").unwrap();
        let filters_before = state.filters;

        state.modal.open();
        assert!(state.modal.is_open);
        state.modal.close();
        state.modal.close();

        assert!(!state.modal.is_open);
        assert_eq!(state.filters, filters_before);
        assert_eq!(ids(&state.incidents.records), vec![1, 2, 3]);
    }
}
