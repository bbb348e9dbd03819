//! Query pipeline: filter then sort, plus facet extraction.

use std::collections::BTreeSet;

use super::filter::Criteria;
use super::record::Record;
use super::sort::{compare, locale_cmp};

/// Produce the view for `criteria` as a new sequence.
///
/// The corpus is only read; its order is never altered.
pub fn apply_query(corpus: &[Record], criteria: &Criteria) -> Vec<Record> {
    let mut view: Vec<Record> = corpus
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();
    view.sort_by(|a, b| compare(a, b, criteria.sort));

    tracing::debug!(
        "Query matched {}/{} records ({}, sort {})",
        view.len(),
        corpus.len(),
        criteria.describe(),
        criteria.sort
    );
    view
}

/// Distinct non-empty categories in locale order.
pub fn distinct_categories(corpus: &[Record]) -> Vec<String> {
    distinct(corpus.iter().map(Record::category))
}

/// Distinct non-empty genres in locale order.
pub fn distinct_genres(corpus: &[Record]) -> Vec<String> {
    distinct(corpus.iter().map(Record::genre))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let unique: BTreeSet<&str> = values.filter(|v| !v.is_empty()).collect();
    let mut out: Vec<String> = unique.into_iter().map(str::to_string).collect();
    out.sort_by(|a, b| locale_cmp(a, b));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{parse, SortKey};

    const SAMPLE: &str = "title,type,author,year,genre,rating,description\n\
                          A,game,X,2020,RPG,4.5,d1\n\
                          B,game,Y,2019,RPG,4.8,d2";

    fn titles(records: &[Record]) -> Vec<&str> {
        records.iter().map(Record::title).collect()
    }

    #[test]
    fn year_ascending_scenario() {
        let corpus = parse(SAMPLE).unwrap();
        let view = apply_query(&corpus, &Criteria::new().with_sort(SortKey::YearAsc));
        assert_eq!(titles(&view), ["B", "A"]);
    }

    #[test]
    fn author_query_scenario() {
        let corpus = parse(SAMPLE).unwrap();
        let view = apply_query(&corpus, &Criteria::new().with_query("y"));
        assert_eq!(titles(&view), ["B"]);
    }

    #[test]
    fn corpus_order_is_preserved() {
        let corpus = parse(SAMPLE).unwrap();
        let _ = apply_query(&corpus, &Criteria::new().with_sort(SortKey::TitleDesc));
        assert_eq!(titles(&corpus), ["A", "B"]);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let corpus = parse(SAMPLE).unwrap();
        let mut reversed = corpus.clone();
        reversed.reverse();
        for key in SortKey::ALL {
            let criteria = Criteria::new().with_sort(key).with_genre("rpg");
            let first = apply_query(&corpus, &criteria);
            assert_eq!(apply_query(&corpus, &criteria), first);
            assert_eq!(apply_query(&reversed, &criteria), first);
        }
    }

    #[test]
    fn facets_are_sorted_and_deduplicated() {
        let text = "title,type,author,year,genre,rating,description\n\
                    A,movie,X,2020,drama,4,d\n\
                    B,game,X,2020,RPG,4,d\n\
                    C,game,X,2020,,4,d\n\
                    D,Game,X,2020,action,4,d";
        let corpus = parse(text).unwrap();
        assert_eq!(distinct_categories(&corpus), ["game", "Game", "movie"]);
        assert_eq!(distinct_genres(&corpus), ["action", "drama", "RPG"]);
    }

    #[test]
    fn empty_corpus_has_no_facets() {
        assert!(distinct_categories(&[]).is_empty());
        assert!(apply_query(&[], &Criteria::new()).is_empty());
    }
}
