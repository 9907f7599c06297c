pub mod chart;
pub mod filters;
pub mod incidents;
pub mod layout;
pub mod modal;
pub mod notifications;
