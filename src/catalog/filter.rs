//! Filter criteria and the record predicate.

use super::record::Record;
use super::sort::SortKey;

/// User-selected filter and sort parameters for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Exact category match (case-insensitive). `None` or empty matches all.
    pub category: Option<String>,
    /// Exact genre match (case-insensitive). `None` or empty matches all.
    pub genre: Option<String>,
    /// Free-text substring query. Trimmed before use.
    pub query: String,
    /// Sort order of the view.
    pub sort: SortKey,
}

impl Criteria {
    /// Create criteria with no filters and the default sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the genre filter.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Set the free-text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Check whether a record passes every filter.
    pub fn matches(&self, record: &Record) -> bool {
        matches(record, self)
    }

    /// Active category filter, ignoring empty values.
    pub fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Active genre filter, ignoring empty values.
    pub fn active_genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }

    /// Trimmed query, or `None` when blank.
    pub fn active_query(&self) -> Option<&str> {
        Some(self.query.trim()).filter(|q| !q.is_empty())
    }

    /// Whether any filter is set. The sort key does not count.
    pub fn has_filters(&self) -> bool {
        self.active_category().is_some()
            || self.active_genre().is_some()
            || self.active_query().is_some()
    }

    /// Human-readable summary of the active filters.
    pub fn describe(&self) -> String {
        let mut active = Vec::new();
        if let Some(query) = self.active_query() {
            active.push(format!("Search: \"{}\"", query));
        }
        if let Some(category) = self.active_category() {
            active.push(format!("Type: {}", category));
        }
        if let Some(genre) = self.active_genre() {
            active.push(format!("Genre: {}", genre));
        }

        if active.is_empty() {
            "No filters".to_string()
        } else {
            active.join(" • ")
        }
    }
}

/// Check whether `record` satisfies the category, genre and query filters.
///
/// The query is matched against title, author, genre and category. The
/// description is never searched.
pub fn matches(record: &Record, criteria: &Criteria) -> bool {
    let category_ok = criteria
        .active_category()
        .map_or(true, |c| eq_ignore_case(record.category(), c));
    let genre_ok = criteria
        .active_genre()
        .map_or(true, |g| eq_ignore_case(record.genre(), g));

    let query_ok = match criteria.active_query() {
        None => true,
        Some(query) => {
            let query = query.to_lowercase();
            [
                record.title(),
                record.author(),
                record.genre(),
                record.category(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
        },
    };

    category_ok && genre_ok && query_ok
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
