//! Application routing system.
//!
//! Every page sits inside the [`Frame`] layout. Pages that need a signed-in
//! user go through [`guard`] before anything of theirs is built.

use crate::frontend::components::Protected;
use crate::frontend::components::layout::Frame;
use crate::frontend::pages::{
    AlertsPage, AnalyticsPage, DashboardPage, EventsPage, FeedbackPage, IntegrationsPage, Login,
    NotFound, Register, SettingsPage,
};
use crate::frontend::services::context::{SessionOracle, SessionState};

use dioxus::prelude::*;
use dioxus_router::{Routable, navigator};

/// Upper bound on redirects followed by [`settle`].
const MAX_REDIRECTS: usize = 4;

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Frame)]
        /// Sign-in page.
        #[route("/login")]
        Login {},
        /// Account creation page.
        #[route("/register")]
        Register {},
        /// Entry point, forwards to the landing page.
        #[route("/")]
        Root {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/events")]
        Events {},
        #[route("/feedback")]
        Feedback {},
        #[route("/alerts")]
        Alerts {},
        #[route("/analytics")]
        Analytics {},
        #[route("/integrations")]
        Integrations {},
        #[route("/settings")]
        Settings {},
        /// Anything else.
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Page shown after signing in or opening `/`.
    pub const fn landing() -> Self {
        Self::Dashboard {}
    }

    /// Whether rendering this route needs a signed-in user.
    pub fn requires_session(&self) -> bool {
        !matches!(
            self,
            Self::Login {} | Self::Register {} | Self::NotFound { .. }
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login {} => "Sign in",
            Self::Register {} => "Create account",
            Self::Root {} | Self::Dashboard {} => "Dashboard",
            Self::Events {} => "Events",
            Self::Feedback {} => "Feedback",
            Self::Alerts {} => "Alerts",
            Self::Analytics {} => "Analytics",
            Self::Integrations {} => "Integrations",
            Self::Settings {} => "Settings",
            Self::NotFound { .. } => "Not found",
        }
    }

    /// Guarded pages in sidebar order.
    pub fn guarded() -> [Self; 7] {
        [
            Self::Dashboard {},
            Self::Events {},
            Self::Feedback {},
            Self::Alerts {},
            Self::Analytics {},
            Self::Integrations {},
            Self::Settings {},
        ]
    }
}

/// What to show for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDecision<V> {
    Render(V),
    Redirect(Route),
}

/// Builds `view` only for a signed-in user; everyone else goes to login.
///
/// The requested location is not remembered, so signing in afterwards lands
/// on [`Route::landing`].
pub fn guard<V>(is_authenticated: bool, view: impl FnOnce() -> V) -> RenderDecision<V> {
    if is_authenticated {
        RenderDecision::Render(view())
    } else {
        RenderDecision::Redirect(Route::Login {})
    }
}

/// One step of route resolution for the current session.
pub fn decide(route: Route, is_authenticated: bool) -> RenderDecision<Route> {
    if !route.requires_session() {
        return RenderDecision::Render(route);
    }

    match guard(is_authenticated, || route) {
        RenderDecision::Render(Route::Root {}) => RenderDecision::Redirect(Route::landing()),
        decision => decision,
    }
}

/// Follows redirects from `route` until something renders.
pub fn settle(route: Route, is_authenticated: bool) -> Route {
    let mut current = route;
    for _ in 0..MAX_REDIRECTS {
        match decide(current, is_authenticated) {
            RenderDecision::Render(route) => return route,
            RenderDecision::Redirect(next) => current = next,
        }
    }
    log::warn!("Redirect limit reached, falling back to login");
    Route::Login {}
}

#[component]
pub fn Root() -> Element {
    let nav = navigator();
    let session = use_context::<SessionState>();

    let target = settle(Route::Root {}, session.is_authenticated());
    log::debug!("Forwarding / to {target}");
    nav.replace(target);

    rsx! { div {} }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Protected { DashboardPage {} } }
}

#[component]
pub fn Events() -> Element {
    rsx! { Protected { EventsPage {} } }
}

#[component]
pub fn Feedback() -> Element {
    rsx! { Protected { FeedbackPage {} } }
}

#[component]
pub fn Alerts() -> Element {
    rsx! { Protected { AlertsPage {} } }
}

#[component]
pub fn Analytics() -> Element {
    rsx! { Protected { AnalyticsPage {} } }
}

#[component]
pub fn Integrations() -> Element {
    rsx! { Protected { IntegrationsPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Protected { SettingsPage {} } }
}
