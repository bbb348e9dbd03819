//! Render records back into the catalog text format.

use super::parser::HEADER;
use super::record::Record;

/// Render one record as a catalog row.
pub fn to_csv_row(record: &Record) -> String {
    [
        record.title(),
        record.category(),
        record.author(),
        &record.year_label(),
        record.genre(),
        &record.rating_label(),
        record.description(),
    ]
    .join(",")
}

/// Render records as a complete catalog, header included.
pub fn to_csv(records: &[Record]) -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    for record in records {
        text.push_str(&to_csv_row(record));
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{parse, DEMO_CSV};

    #[test]
    fn rendered_catalog_parses_back() {
        let records = parse(DEMO_CSV).unwrap();
        assert_eq!(parse(&to_csv(&records)).unwrap(), records);
    }

    #[test]
    fn row_uses_file_column_order() {
        let records = parse("title,type,author,year,genre,rating,description\nA,game,X,2020,RPG,4.5,d1").unwrap();
        assert_eq!(to_csv_row(&records[0]), "A,game,X,2020,RPG,4.5,d1");
    }

    #[test]
    fn empty_list_is_header_only() {
        assert_eq!(to_csv(&[]), format!("{}\n", HEADER));
    }
}
