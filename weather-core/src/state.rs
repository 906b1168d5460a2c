//! Widget state and its transitions.
//!
//! The display is a single [`View`], so weather data and an error message can
//! never be shown together. Every user action begins a new request; only the
//! most recently begun request may settle the view, so a slow response to an
//! older action cannot overwrite a newer result.
//!
//! [`WeatherWidget`](crate::WeatherWidget) runs each lookup through `&mut self`,
//! so it never has two requests in flight and its settlements are never stale.
//! The guard matters to front ends that drive `WidgetState` directly and run
//! lookups concurrently: call [`WidgetState::begin_request`] when the action
//! starts and apply [`Action::Settled`] with that id when it finishes.

use serde::Serialize;

use crate::WeatherSnapshot;

/// Identifies one user action's lookup. Strictly increasing per widget.
pub type RequestId = u64;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum View {
    /// No lookup has completed yet.
    #[default]
    Empty,
    Weather(WeatherSnapshot),
    Error(String),
}

impl View {
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            View::Weather(s) => Some(s),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            View::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The query text field changed, by typing or by geolocation filling it in.
    QueryEdited(String),
    /// A lookup finished.
    Settled { request: RequestId, view: View },
}

#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    query_text: String,
    view: View,
    latest_request: RequestId,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn latest_request(&self) -> RequestId {
        self.latest_request
    }

    /// Start a new lookup, superseding any still in flight.
    pub fn begin_request(&mut self) -> RequestId {
        self.latest_request += 1;
        self.latest_request
    }

    /// Apply a transition. Returns `false` if it was discarded as stale.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::QueryEdited(text) => {
                self.query_text = text;
                true
            }
            Action::Settled { request, view } if request == self.latest_request => {
                self.view = view;
                true
            }
            Action::Settled { request, .. } => {
                tracing::debug!(
                    request,
                    latest = self.latest_request,
                    "discarding stale lookup result"
                );
                false
            }
        }
    }
}
