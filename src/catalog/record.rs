//! Catalog record type and field coercions.

use std::fmt;

/// The seven raw text fields of one catalog row, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    /// Display title.
    pub title: String,
    /// Classification (the `type` column).
    pub category: String,
    /// Author or studio.
    pub author: String,
    /// Release year as text.
    pub year: String,
    /// Genre.
    pub genre: String,
    /// Rating as text.
    pub rating: String,
    /// Free-text description.
    pub description: String,
}

impl RawFields {
    /// Build raw fields from exactly seven pieces in file order.
    ///
    /// Returns `None` when the piece count is not seven.
    pub fn from_pieces<S: AsRef<str>>(pieces: &[S]) -> Option<Self> {
        let [title, category, author, year, genre, rating, description] = pieces else {
            return None;
        };
        Some(Self {
            title: title.as_ref().to_string(),
            category: category.as_ref().to_string(),
            author: author.as_ref().to_string(),
            year: year.as_ref().to_string(),
            genre: genre.as_ref().to_string(),
            rating: rating.as_ref().to_string(),
            description: description.as_ref().to_string(),
        })
    }
}

/// A single catalog entry.
///
/// Records are immutable once built. `year` and `rating` hold `None` when the
/// source text was not numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    title: String,
    category: String,
    author: String,
    year: Option<i64>,
    genre: String,
    rating: Option<f64>,
    description: String,
}

impl Record {
    /// Build a record from its raw fields. Never fails.
    pub fn from_fields(fields: RawFields) -> Self {
        Self {
            year: coerce_year(&fields.year),
            rating: coerce_rating(&fields.rating),
            title: fields.title,
            category: fields.category,
            author: fields.author,
            genre: fields.genre,
            description: fields.description,
        }
    }

    /// Title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Category (the `type` column).
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Year, or `None` for non-numeric source text.
    pub fn year(&self) -> Option<i64> {
        self.year
    }

    /// Genre.
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Rating, or `None` for non-numeric source text.
    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    /// Description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Year as display text.
    pub fn year_label(&self) -> String {
        match self.year {
            Some(year) => year.to_string(),
            None => "NaN".to_string(),
        }
    }

    /// Rating as display text.
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) => format_number(rating),
            None => "NaN".to_string(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {})",
            self.title,
            self.category,
            self.author,
            self.year_label()
        )
    }
}

/// Coerce year text. Empty text is zero; integral floats are accepted.
fn coerce_year(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0);
    }
    if let Ok(year) = text.parse::<i64>() {
        return Some(year);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => {
            if value >= i64::MIN as f64 && value <= i64::MAX as f64 {
                Some(value as i64)
            } else {
                None
            }
        },
        _ => None,
    }
}

/// Coerce rating text. Empty text is zero; NaN is the sentinel; `-0` is zero.
fn coerce_rating(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    text.parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .map(|value| if value == 0.0 { 0.0 } else { value })
}

/// Shortest display form for a number: `4.5`, `5`, `Infinity`.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    format!("{}", value)
}
