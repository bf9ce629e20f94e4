//! The authoritative course collection and the search predicate over it.

use std::{ops::Deref, sync::Arc};

use shared::protocol::Course;

/// Order-preserving, immutable course collection as returned by the backend.
///
/// Clones share the same backing slice; nothing can mutate it after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    courses: Arc<[Course]>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses: courses.into(),
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Courses whose title or description contains `query`, ignoring case, in catalog order.
    /// An empty query keeps every course.
    pub fn filter(&self, query: &str) -> Vec<&Course> {
        let query = SearchQuery::new(query);
        self.courses
            .iter()
            .filter(|course| query.matches(course))
            .collect()
    }
}

impl Deref for Catalog {
    type Target = [Course];

    fn deref(&self) -> &Self::Target {
        &self.courses
    }
}

impl From<Vec<Course>> for Catalog {
    fn from(courses: Vec<Course>) -> Self {
        Self::new(courses)
    }
}

/// A case-folded search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    folded: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            folded: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    pub fn matches(&self, course: &Course) -> bool {
        self.is_empty()
            || course.title.to_lowercase().contains(&self.folded)
            || course.description.to_lowercase().contains(&self.folded)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
