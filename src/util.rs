//! Utility functions for Catview.

use crate::catalog::{to_csv, Criteria, Record};
use crate::clipboard;
use crate::error::Result;

/// Copy a single record to the clipboard as readable text.
pub fn copy_record_info(record: &Record) -> Result<()> {
    clipboard::copy_to_clipboard(&format_record_info(record))
}

/// Copy the current view to the clipboard in catalog format.
pub fn copy_view(records: &[Record]) -> Result<()> {
    clipboard::copy_to_clipboard(&to_csv(records))
}

/// Format a record as labelled lines.
pub fn format_record_info(record: &Record) -> String {
    let mut text = format!("Title: {}\n", record.title());
    text.push_str(&format!("Type: {}\n", record.category()));
    text.push_str(&format!("Author: {}\n", record.author()));
    text.push_str(&format!("Year: {}\n", record.year_label()));
    text.push_str(&format!("Genre: {}\n", record.genre()));
    text.push_str(&format!("Rating: {}\n", record.rating_label()));

    if !record.description().is_empty() {
        text.push_str(&format!("\n{}\n", record.description()));
    }

    text
}

/// One-line summary of a view for the status bar.
pub fn view_summary(shown: usize, total: usize, criteria: &Criteria) -> String {
    format!(
        "{} of {} items | {} | Sort: {}",
        shown,
        total,
        criteria.describe(),
        criteria.sort.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{parse, SortKey};

    #[test]
    fn record_info_lists_every_field() {
        let records =
            parse("title,type,author,year,genre,rating,description\nA,game,X,2020,RPG,4.5,d1")
                .unwrap();
        let info = format_record_info(&records[0]);
        assert_eq!(
            info,
            "Title: A\nType: game\nAuthor: X\nYear: 2020\nGenre: RPG\nRating: 4.5\n\nd1\n"
        );
    }

    #[test]
    fn summary_mentions_filters_and_sort() {
        let criteria = Criteria::new()
            .with_genre("RPG")
            .with_sort(SortKey::RatingDesc);
        assert_eq!(
            view_summary(2, 10, &criteria),
            "2 of 10 items | Genre: RPG | Sort: Rating (highest)"
        );
    }
}
