//! Sort keys and the deterministic record comparator.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use feruca::{Collator, Tailoring};

use super::record::Record;

/// Selectable view order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Title, A to Z.
    #[default]
    TitleAsc,
    /// Title, Z to A.
    TitleDesc,
    /// Oldest first.
    YearAsc,
    /// Newest first.
    YearDesc,
    /// Lowest rated first.
    RatingAsc,
    /// Highest rated first.
    RatingDesc,
}

impl SortKey {
    /// Every sort key in menu order.
    pub const ALL: [SortKey; 6] = [
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::YearAsc,
        SortKey::YearDesc,
        SortKey::RatingAsc,
        SortKey::RatingDesc,
    ];

    /// Wire name, e.g. `year-desc`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::YearAsc => "year-asc",
            SortKey::YearDesc => "year-desc",
            SortKey::RatingAsc => "rating-asc",
            SortKey::RatingDesc => "rating-desc",
        }
    }

    /// Label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::TitleAsc => "Title (A-Z)",
            SortKey::TitleDesc => "Title (Z-A)",
            SortKey::YearAsc => "Year (oldest)",
            SortKey::YearDesc => "Year (newest)",
            SortKey::RatingAsc => "Rating (lowest)",
            SortKey::RatingDesc => "Rating (highest)",
        }
    }

    /// Parse a wire name, falling back to [`SortKey::TitleAsc`].
    pub fn parse_lenient(name: Option<&str>) -> Self {
        name.and_then(|n| n.parse().ok()).unwrap_or_default()
    }

    /// Get the next key in the cycle.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Get the previous key in the cycle.
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort key name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = SortKey::ALL.iter().map(|k| k.as_str()).collect();
        write!(
            f,
            "unknown sort key '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Compare two records under `key`.
///
/// Numeric keys break ties by ascending title. Non-numeric years and ratings
/// sort after every number in both directions. Remaining ties fall through to
/// the other fields so the order never depends on input arrangement.
pub fn compare(a: &Record, b: &Record, key: SortKey) -> Ordering {
    let primary = match key {
        SortKey::TitleAsc => locale_cmp(a.title(), b.title()),
        SortKey::TitleDesc => locale_cmp(b.title(), a.title()),
        SortKey::YearAsc => cmp_numeric(a.year(), b.year(), false, |x, y| x.cmp(y))
            .then_with(|| locale_cmp(a.title(), b.title())),
        SortKey::YearDesc => cmp_numeric(a.year(), b.year(), true, |x, y| x.cmp(y))
            .then_with(|| locale_cmp(a.title(), b.title())),
        SortKey::RatingAsc => cmp_numeric(a.rating(), b.rating(), false, f64::total_cmp)
            .then_with(|| locale_cmp(a.title(), b.title())),
        SortKey::RatingDesc => cmp_numeric(a.rating(), b.rating(), true, f64::total_cmp)
            .then_with(|| locale_cmp(a.title(), b.title())),
    };

    primary.then_with(|| tie_break(a, b))
}

/// Return a new sequence ordered by `key`. The input is left untouched.
pub fn sorted(records: &[Record], key: SortKey) -> Vec<Record> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| compare(a, b, key));
    out
}

/// Compare optional numbers; `None` always lands last.
fn cmp_numeric<T: Copy>(
    a: Option<T>,
    b: Option<T>,
    descending: bool,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            if descending {
                cmp(&y, &x)
            } else {
                cmp(&x, &y)
            }
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn tie_break(a: &Record, b: &Record) -> Ordering {
    locale_cmp(a.title(), b.title())
        .then_with(|| locale_cmp(a.category(), b.category()))
        .then_with(|| locale_cmp(a.author(), b.author()))
        .then_with(|| locale_cmp(a.genre(), b.genre()))
        .then_with(|| locale_cmp(a.description(), b.description()))
        .then_with(|| cmp_numeric(a.year(), b.year(), false, |x, y| x.cmp(y)))
        .then_with(|| cmp_numeric(a.rating(), b.rating(), false, f64::total_cmp))
}

thread_local! {
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::default(), false, false));
}

/// Locale-aware string ordering.
///
/// Unicode collation with the CLDR root tailoring: accents and case are
/// secondary and tertiary differences, lowercase sorts before uppercase and
/// punctuation is not ignored. Collation ties fall back to code points, so the
/// result is equal only for identical strings.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| collator.borrow_mut().collate(a, b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawFields;

    fn record(title: &str, year: &str, rating: &str) -> Record {
        Record::from_fields(RawFields {
            title: title.to_string(),
            category: "game".to_string(),
            author: "X".to_string(),
            year: year.to_string(),
            genre: "RPG".to_string(),
            rating: rating.to_string(),
            description: String::new(),
        })
    }

    fn titles(records: &[Record]) -> Vec<&str> {
        records.iter().map(Record::title).collect()
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!("year-desc".parse::<SortKey>(), Ok(SortKey::YearDesc));
        assert!("year".parse::<SortKey>().is_err());
        assert_eq!(SortKey::parse_lenient(Some("bogus")), SortKey::TitleAsc);
        assert_eq!(SortKey::parse_lenient(None), SortKey::TitleAsc);
        assert_eq!(SortKey::parse_lenient(Some("rating-asc")), SortKey::RatingAsc);
    }

    #[test]
    fn cycles_through_all_keys() {
        let mut key = SortKey::TitleAsc;
        for _ in 0..SortKey::ALL.len() {
            key = key.next();
        }
        assert_eq!(key, SortKey::TitleAsc);
        assert_eq!(SortKey::TitleAsc.prev(), SortKey::RatingDesc);
    }

    #[test]
    fn title_order_is_case_insensitive() {
        let records = vec![record("banana", "1", "1"), record("Apple", "1", "1"), record("cherry", "1", "1")];
        assert_eq!(titles(&sorted(&records, SortKey::TitleAsc)), ["Apple", "banana", "cherry"]);
        assert_eq!(titles(&sorted(&records, SortKey::TitleDesc)), ["cherry", "banana", "Apple"]);
    }

    #[test]
    fn locale_cmp_puts_lowercase_first_on_ties() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("A", "b"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn accented_titles_sort_with_their_base_letter() {
        let records = vec![
            record("Zelda", "1", "1"),
            record("Éclair", "1", "1"),
            record("apple", "1", "1"),
            record("_Tool", "1", "1"),
        ];
        assert_eq!(
            titles(&sorted(&records, SortKey::TitleAsc)),
            ["_Tool", "apple", "Éclair", "Zelda"]
        );
        assert_eq!(
            titles(&sorted(&records, SortKey::TitleDesc)),
            ["Zelda", "Éclair", "apple", "_Tool"]
        );
        assert_eq!(locale_cmp("eclair", "éclair"), Ordering::Less);
        assert_eq!(locale_cmp("éclair", "Eclairs"), Ordering::Less);
    }

    #[test]
    fn accented_titles_break_numeric_ties() {
        let records = vec![record("Zoo", "2020", "4"), record("Île", "2020", "4")];
        assert_eq!(titles(&sorted(&records, SortKey::YearDesc)), ["Île", "Zoo"]);
        assert_eq!(titles(&sorted(&records, SortKey::RatingAsc)), ["Île", "Zoo"]);
    }

    #[test]
    fn negative_zero_rating_ties_with_zero() {
        let records = vec![record("B", "1", "-0"), record("A", "1", "0")];
        assert_eq!(titles(&sorted(&records, SortKey::RatingAsc)), ["A", "B"]);
        assert_eq!(titles(&sorted(&records, SortKey::RatingDesc)), ["A", "B"]);
    }

    #[test]
    fn numeric_ties_break_by_title() {
        let records = vec![
            record("C", "2020", "4.5"),
            record("A", "2020", "4.5"),
            record("B", "2019", "4.9"),
        ];
        assert_eq!(titles(&sorted(&records, SortKey::YearAsc)), ["B", "A", "C"]);
        assert_eq!(titles(&sorted(&records, SortKey::YearDesc)), ["A", "C", "B"]);
        assert_eq!(titles(&sorted(&records, SortKey::RatingAsc)), ["A", "C", "B"]);
        assert_eq!(titles(&sorted(&records, SortKey::RatingDesc)), ["B", "A", "C"]);
    }

    #[test]
    fn non_numeric_values_sort_last_both_ways() {
        let records = vec![record("N", "x", "x"), record("A", "2000", "1"), record("B", "2010", "2")];
        assert_eq!(titles(&sorted(&records, SortKey::YearAsc)), ["A", "B", "N"]);
        assert_eq!(titles(&sorted(&records, SortKey::YearDesc)), ["B", "A", "N"]);
        assert_eq!(titles(&sorted(&records, SortKey::RatingAsc)), ["A", "B", "N"]);
        assert_eq!(titles(&sorted(&records, SortKey::RatingDesc)), ["B", "A", "N"]);
    }

    #[test]
    fn order_is_independent_of_input_arrangement() {
        let base = vec![
            record("Delta", "2020", "4"),
            record("alpha", "2020", "4"),
            record("Alpha", "2020", "4"),
            record("Bravo", "2018", "5"),
            record("Charlie", "bad", "bad"),
        ];
        let mut reversed = base.clone();
        reversed.reverse();
        let mut rotated = base.clone();
        rotated.rotate_left(2);

        for key in SortKey::ALL {
            let expected = sorted(&base, key);
            assert_eq!(sorted(&reversed, key), expected, "{}", key);
            assert_eq!(sorted(&rotated, key), expected, "{}", key);
        }
    }

    #[test]
    fn sorted_does_not_touch_input() {
        let records = vec![record("B", "1", "1"), record("A", "1", "1")];
        let _ = sorted(&records, SortKey::TitleAsc);
        assert_eq!(titles(&records), ["B", "A"]);
    }
}
