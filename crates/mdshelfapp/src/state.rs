//! UI view state, passed explicitly between handlers.
//!
//! A client keeps one [`ViewState`] for its session: which document is open, which
//! filter narrows the list and the active theme. Choosing a filter criterion replaces
//! the previous one, so search, category and tag selection never combine.

use crate::filter::{self, ViewFilter, ALL_CATEGORIES};
use crate::model::Document;
use crate::theme::Theme;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub active_doc: Option<String>,
    pub filter: ViewFilter,
    pub theme: Theme,
}

impl ViewState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    /// Filters by free text. A blank query clears the filter.
    pub fn search(&mut self, query: &str) {
        self.filter = if query.trim().is_empty() {
            ViewFilter::None
        } else {
            ViewFilter::Text(query.to_string())
        };
    }

    /// Filters by category. `"all"` clears the filter.
    pub fn select_category(&mut self, category: &str) {
        self.filter = if category == ALL_CATEGORIES {
            ViewFilter::None
        } else {
            ViewFilter::Category(category.to_string())
        };
    }

    /// Filters by tag, or clears the filter when `tag` is already selected.
    pub fn select_tag(&mut self, tag: &str) {
        self.filter = match &self.filter {
            ViewFilter::Tag(active) if active == tag => ViewFilter::None,
            _ => ViewFilter::Tag(tag.to_string()),
        };
    }

    pub fn clear_filter(&mut self) {
        self.filter = ViewFilter::None;
    }

    pub fn active_tag(&self) -> Option<&str> {
        match &self.filter {
            ViewFilter::Tag(tag) => Some(tag.as_str()),
            _ => None,
        }
    }

    pub fn open(&mut self, id: &str) {
        self.active_doc = Some(id.to_string());
    }

    pub fn close(&mut self) {
        self.active_doc = None;
    }

    /// The documents the list should show right now.
    pub fn visible<'a>(&self, docs: &'a [Document]) -> Vec<&'a Document> {
        filter::apply(docs, &self.filter)
    }
}
