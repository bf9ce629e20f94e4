//! Card markup and the container it is written into.
//!
//! Every render pass clears the container before appending, so rendering the same
//! sequence twice leaves exactly one copy of each card.

use askama::Template;
use shared::{domain::course_detail_path, protocol::Course};
use tracing::debug;

pub const MISSING_TEACHER_MARKER: &str = "N/A";
pub const LOAD_FAILURE_MESSAGE: &str = "Impossible de charger les cours.";
const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// The element that receives generated card markup.
pub trait CardContainer {
    fn clear(&mut self);
    fn append(&mut self, markup: String);

    /// Replaces the whole content with a single error element.
    fn show_error(&mut self, message: &str) {
        self.clear();
        self.append(error_markup(message));
    }
}

/// In-memory container holding one markup string per child element.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MarkupContainer {
    children: Vec<String>,
}

impl MarkupContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn to_html(&self) -> String {
        self.children.concat()
    }
}

impl CardContainer for MarkupContainer {
    fn clear(&mut self) {
        self.children.clear();
    }

    fn append(&mut self, markup: String) {
        self.children.push(markup);
    }
}

/// One render pass: discards prior content, then appends one card per course in order.
pub fn render_courses<'a, C, I>(container: &mut C, courses: I)
where
    C: CardContainer + ?Sized,
    I: IntoIterator<Item = &'a Course>,
{
    container.clear();
    let mut rendered = 0usize;
    for course in courses {
        container.append(card_markup(course));
        rendered += 1;
    }
    debug!(cards = rendered, "render pass complete");
}

#[derive(Template)]
#[template(path = "course_card.html")]
struct CourseCard<'a> {
    image: &'a str,
    category: &'a str,
    title: &'a str,
    description: &'a str,
    teacher: &'a str,
    href: String,
}

#[derive(Template)]
#[template(path = "load_failure.html")]
struct LoadFailure<'a> {
    message: &'a str,
}

pub fn card_markup(course: &Course) -> String {
    let teacher = course
        .teacher
        .as_ref()
        .map(|teacher| teacher.email.as_str())
        .unwrap_or(MISSING_TEACHER_MARKER);

    CourseCard {
        image: PLACEHOLDER_IMAGE_URL,
        category: &course.category,
        title: &course.title,
        description: &course.description,
        teacher,
        href: course_detail_path(course.id),
    }
    .to_string()
}

pub fn error_markup(message: &str) -> String {
    LoadFailure { message }.to_string()
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
