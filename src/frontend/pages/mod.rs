//! Page views.

pub mod alerts;
pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod events;
pub mod feedback;
pub mod integrations;
pub mod not_found;
pub mod settings;

pub use alerts::AlertsPage;
pub use analytics::AnalyticsPage;
pub use auth::{Login, Register};
pub use dashboard::DashboardPage;
pub use events::EventsPage;
pub use feedback::FeedbackPage;
pub use integrations::IntegrationsPage;
pub use not_found::NotFound;
pub use settings::SettingsPage;
