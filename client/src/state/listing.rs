//! Per-page list state for admin and dashboard tables.
//!
//! A failed fetch clears the rows so a table never shows data left over from
//! an earlier successful load next to an error.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::error::ApiError;

/// What a list view should render right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Failed(String),
    Empty,
    Ready,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl<T> ListState<T> {
    /// Mark a fetch in flight.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Commit a fetch outcome.
    pub fn finish(&mut self, result: Result<Vec<T>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.error = Some(err.user_message());
            }
        }
    }

    pub fn status(&self) -> ListStatus {
        if self.loading {
            ListStatus::Loading
        } else if let Some(message) = &self.error {
            ListStatus::Failed(message.clone())
        } else if self.items.is_empty() {
            ListStatus::Empty
        } else {
            ListStatus::Ready
        }
    }
}
