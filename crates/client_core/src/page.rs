//! Page-level controller wiring the loader, the search field and the renderer.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::{
    catalog::Catalog,
    error::FetchError,
    loader::CourseSource,
    render::{render_courses, CardContainer, LOAD_FAILURE_MESSAGE},
};

/// Source of the live search text.
pub trait SearchField {
    fn current_value(&self) -> String;
}

/// Shared text cell standing in for a text input control. Clones observe the same value.
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    value: Arc<Mutex<String>>,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(value.into())),
        }
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value.into();
    }
}

impl SearchField for TextInput {
    fn current_value(&self) -> String {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Pending,
    Ready,
    Failed,
}

/// Owns the card container, the optional search field and the write-once catalog.
pub struct CatalogPage<C, S> {
    container: C,
    search: Option<S>,
    catalog: Option<Catalog>,
    state: PageState,
}

impl<C, S> CatalogPage<C, S>
where
    C: CardContainer,
    S: SearchField,
{
    pub fn new(container: C, search: Option<S>) -> Self {
        Self {
            container,
            search,
            catalog: None,
            state: PageState::Pending,
        }
    }

    /// Fetches the catalog once and performs the initial unfiltered render.
    ///
    /// On failure the container shows a single error message and filtering stays
    /// unavailable. Calls after the first do not refetch: they succeed if the catalog
    /// is present and return `FetchError::AlreadyFailed` otherwise.
    pub async fn load<L>(&mut self, source: &L) -> Result<(), FetchError>
    where
        L: CourseSource + ?Sized,
    {
        match self.state {
            PageState::Pending => {}
            PageState::Ready => {
                warn!("catalog page already initialized; skipping load");
                return Ok(());
            }
            PageState::Failed => {
                warn!("catalog load already failed; skipping load");
                return Err(FetchError::AlreadyFailed);
            }
        }

        match source.load().await {
            Ok(catalog) => {
                render_courses(&mut self.container, catalog.iter());
                self.state = PageState::Ready;
                info!(
                    courses = catalog.len(),
                    search_wired = self.search.is_some(),
                    "catalog page ready"
                );
                self.catalog = Some(catalog);
                Ok(())
            }
            Err(err) => {
                self.container.show_error(LOAD_FAILURE_MESSAGE);
                self.state = PageState::Failed;
                Err(err)
            }
        }
    }

    /// Input-change handler: filters the original catalog with the field's current
    /// value and renders the result. Returns whether a render pass ran.
    pub fn handle_input(&mut self) -> bool {
        let (Some(catalog), Some(search)) = (self.catalog.as_ref(), self.search.as_ref()) else {
            return false;
        };
        let query = search.current_value();
        let filtered = catalog.filter(&query);
        debug!(query = %query, matches = filtered.len(), "filtering catalog");
        render_courses(&mut self.container, filtered);
        true
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn into_container(self) -> C {
        self.container
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
