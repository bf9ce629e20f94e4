//! Client-side logic of the course catalog page: retrieval, search filtering, card
//! rendering, plus the auth forms and the quiz countdown that share the page shell.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod loader;
pub mod page;
pub mod quiz;
pub mod render;

pub use auth::{submit_login, submit_registration, AuthClient, Redirect};
pub use catalog::{Catalog, SearchQuery};
pub use error::{AuthAction, AuthError, FetchError};
pub use loader::{CourseSource, HttpCatalogLoader};
pub use page::{CatalogPage, PageState, SearchField, TextInput};
pub use quiz::{run_quiz_timer, QuizTimer, TickOutcome, TimerDisplay};
pub use render::{render_courses, CardContainer, MarkupContainer};

/// Receives blocking, user-visible alerts.
pub trait AlertSink {
    fn alert(&mut self, message: &str);
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
