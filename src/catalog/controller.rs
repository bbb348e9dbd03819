//! Catalog controller: owns the corpus, the current criteria and the view.

use std::path::Path;

use super::demo::DEMO_CSV;
use super::filter::Criteria;
use super::parser::parse;
use super::query::{apply_query, distinct_categories, distinct_genres};
use super::reader::CatalogReader;
use super::record::Record;
use super::sort::SortKey;
use crate::error::Result;

/// Result of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The corpus now holds this many records.
    Loaded(usize),
    /// The input parsed but contained no records.
    Empty,
}

/// Explicit catalog state.
///
/// A failed load leaves every field untouched. A successful load replaces the
/// corpus wholesale, recomputes facets and resets criteria.
#[derive(Debug, Default)]
pub struct CatalogController {
    corpus: Vec<Record>,
    criteria: Criteria,
    view: Vec<Record>,
    categories: Vec<String>,
    genres: Vec<String>,
}

impl CatalogController {
    /// Create a controller with an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and, on success, replace the corpus.
    pub fn load_text(&mut self, text: &str) -> Result<LoadOutcome> {
        let records = match parse(text) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Rejected catalog: {}", e);
                return Err(e);
            },
        };
        Ok(self.replace_corpus(records))
    }

    /// Read and load a catalog file.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadOutcome> {
        let text = CatalogReader::read_file(path)?;
        let outcome = self.load_text(&text)?;
        tracing::info!("Loaded {} ({:?})", path.display(), outcome);
        Ok(outcome)
    }

    /// Load the built-in demo catalog.
    pub fn load_demo(&mut self) -> Result<LoadOutcome> {
        self.load_text(DEMO_CSV)
    }

    fn replace_corpus(&mut self, records: Vec<Record>) -> LoadOutcome {
        self.corpus = records;
        self.categories = distinct_categories(&self.corpus);
        self.genres = distinct_genres(&self.corpus);
        self.criteria = Criteria::default();
        self.refresh();

        if self.corpus.is_empty() {
            LoadOutcome::Empty
        } else {
            LoadOutcome::Loaded(self.corpus.len())
        }
    }

    fn refresh(&mut self) {
        self.view = apply_query(&self.corpus, &self.criteria);
    }

    /// Full corpus in file order.
    pub fn corpus(&self) -> &[Record] {
        &self.corpus
    }

    /// Current filtered and sorted view.
    pub fn view(&self) -> &[Record] {
        &self.view
    }

    /// Current criteria.
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Distinct categories of the corpus.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Distinct genres of the corpus.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Whether no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Replace all criteria at once.
    pub fn set_criteria(&mut self, criteria: Criteria) {
        self.criteria = criteria;
        self.refresh();
    }

    /// Set the free-text query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.refresh();
    }

    /// Set or clear the category filter.
    pub fn set_category(&mut self, category: Option<String>) {
        self.criteria.category = category;
        self.refresh();
    }

    /// Set or clear the genre filter.
    pub fn set_genre(&mut self, genre: Option<String>) {
        self.criteria.genre = genre;
        self.refresh();
    }

    /// Set the sort key.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.criteria.sort = sort;
        self.refresh();
    }

    /// Step the category filter through All and each facet value.
    pub fn cycle_category(&mut self) {
        let next = cycle_facet(&self.categories, self.criteria.active_category());
        self.set_category(next);
    }

    /// Step the genre filter through All and each facet value.
    pub fn cycle_genre(&mut self) {
        let next = cycle_facet(&self.genres, self.criteria.active_genre());
        self.set_genre(next);
    }

    /// Step to the next sort key.
    pub fn cycle_sort(&mut self) {
        self.set_sort(self.criteria.sort.next());
    }

    /// Step to the previous sort key.
    pub fn cycle_sort_back(&mut self) {
        self.set_sort(self.criteria.sort.prev());
    }

    /// Restore default criteria. Does nothing while the corpus is empty.
    ///
    /// Returns whether anything was reset.
    pub fn reset(&mut self) -> bool {
        if self.corpus.is_empty() {
            return false;
        }
        self.set_criteria(Criteria::default());
        true
    }
}

/// Next facet value after `current`; `None` (All) follows the last value.
fn cycle_facet(values: &[String], current: Option<&str>) -> Option<String> {
    match current {
        None => values.first().cloned(),
        Some(current) => {
            let index = values.iter().position(|v| v == current)?;
            values.get(index + 1).cloned()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    const SAMPLE: &str = "title,type,author,year,genre,rating,description\n\
                          A,game,X,2020,RPG,4.5,d1\n\
                          B,game,Y,2019,RPG,4.8,d2\n\
                          C,book,Z,1990,Fantasy,3.9,d3";

    fn titles(records: &[Record]) -> Vec<&str> {
        records.iter().map(Record::title).collect()
    }

    #[test]
    fn load_populates_corpus_view_and_facets() {
        let mut controller = CatalogController::new();
        assert_eq!(controller.load_text(SAMPLE).unwrap(), LoadOutcome::Loaded(3));
        assert_eq!(titles(controller.view()), ["A", "B", "C"]);
        assert_eq!(controller.categories(), ["book", "game"]);
        assert_eq!(controller.genres(), ["Fantasy", "RPG"]);
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let mut controller = CatalogController::new();
        controller.load_text(SAMPLE).unwrap();
        controller.set_query("x");

        let err = controller
            .load_text("Title,type,author,year,genre,rating,description")
            .unwrap_err();
        assert!(matches!(err, CatalogError::HeaderMismatch { .. }));
        assert_eq!(controller.corpus().len(), 3);
        assert_eq!(controller.criteria().query, "x");
        assert_eq!(titles(controller.view()), ["A"]);
    }

    #[test]
    fn successful_load_resets_criteria() {
        let mut controller = CatalogController::new();
        controller.load_text(SAMPLE).unwrap();
        controller.set_sort(SortKey::YearDesc);
        controller.set_query("zzz");
        assert!(controller.view().is_empty());

        controller.load_demo().unwrap();
        assert_eq!(controller.criteria(), &Criteria::default());
        assert_eq!(controller.view().len(), 10);
    }

    #[test]
    fn empty_input_is_reported() {
        let mut controller = CatalogController::new();
        assert_eq!(controller.load_text("\n\n").unwrap(), LoadOutcome::Empty);
        assert!(controller.is_empty());
    }

    #[test]
    fn category_cycle_wraps_through_all() {
        let mut controller = CatalogController::new();
        controller.load_text(SAMPLE).unwrap();

        controller.cycle_category();
        assert_eq!(controller.criteria().active_category(), Some("book"));
        assert_eq!(titles(controller.view()), ["C"]);

        controller.cycle_category();
        assert_eq!(controller.criteria().active_category(), Some("game"));

        controller.cycle_category();
        assert_eq!(controller.criteria().active_category(), None);
        assert_eq!(controller.view().len(), 3);
    }

    #[test]
    fn reset_requires_corpus() {
        let mut controller = CatalogController::new();
        assert!(!controller.reset());

        controller.load_text(SAMPLE).unwrap();
        controller.cycle_genre();
        controller.cycle_sort();
        assert!(controller.reset());
        assert_eq!(controller.criteria(), &Criteria::default());
    }

    #[test]
    fn load_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let mut controller = CatalogController::new();
        assert_eq!(controller.load_file(&path).unwrap(), LoadOutcome::Loaded(3));
        assert!(controller.load_file(&dir.path().join("missing.csv")).is_err());
        assert_eq!(controller.corpus().len(), 3);
    }
}
