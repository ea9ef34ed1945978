//! Query engine tests against a record type declared outside the crate
//!
//! Exercises `impl_record!` from a downstream crate and checks the
//! filter → sort → page pipeline end to end.

use rollcall::prelude::*;
use rollcall::query;

#[derive(Debug, Clone, PartialEq)]
struct Book {
    id: Option<i64>,
    title: String,
    pages: i64,
}

impl_record!(Book, "book", "books", {
    id: optional_integer,
    title: text,
    pages: integer,
});

fn book(id: i64, title: &str, pages: i64) -> Book {
    Book {
        id: Some(id),
        title: title.to_string(),
        pages,
    }
}

fn shelf() -> Vec<Book> {
    vec![
        book(1, "Dune", 412),
        book(2, "Emma", 474),
        book(3, "Dracula", 418),
        book(4, "Ulysses", 730),
        book(5, "Beloved", 324),
        book(6, "Dubliners", 152),
    ]
}

fn page(page: usize, limit: usize) -> PageSpec {
    PageSpec::from_numbers(page, limit).expect("valid page")
}

fn ids(books: &[Book]) -> Vec<i64> {
    books.iter().filter_map(|b| b.id).collect()
}

#[test]
fn test_field_table_from_macro() {
    let table = Book::field_table();

    assert_eq!(table.names().collect::<Vec<_>>(), vec!["id", "title", "pages"]);
    assert_eq!(table.get("PAGES").map(|a| a.kind()), Some(FieldKind::Integer));
    assert_eq!(Book::resource_name(), "books");
    assert_eq!(
        shelf()[0].field_value("title"),
        Some(FieldValue::String("Dune".to_string()))
    );
}

#[test]
fn test_filter_sort_page_pipeline() {
    let query = RecordQuery::new(page(1, 2))
        .with_filter("title::d.*")
        .with_sort("-pages");

    let result = query::execute(shelf(), &query).unwrap();

    // D-titles by pages desc: Emma excluded; Dracula 418, Dune 412, Dubliners 152
    assert_eq!(ids(&result), vec![3, 1]);

    let second = query::execute(shelf(), &RecordQuery { page: page(2, 2), ..query }).unwrap();
    assert_eq!(ids(&second), vec![6]);
}

#[test]
fn test_filter_matches_numbers_as_text() {
    let query = RecordQuery::new(page(1, 10)).with_filter("pages::4.*");
    let result = query::execute(shelf(), &query).unwrap();

    assert_eq!(ids(&result), vec![1, 2, 3]);
}

#[test]
fn test_filter_requires_every_predicate() {
    let query = RecordQuery::new(page(1, 10)).with_filter("title::d.*|pages::41.");
    let result = query::execute(shelf(), &query).unwrap();

    assert_eq!(ids(&result), vec![1, 3]);
}

#[test]
fn test_numeric_sort_is_not_lexicographic() {
    let query = RecordQuery::new(page(1, 10)).with_sort("pages");
    let result = query::execute(shelf(), &query).unwrap();

    assert_eq!(ids(&result), vec![6, 5, 1, 3, 2, 4]);
}

#[test]
fn test_unknown_sort_key_keeps_order() {
    let query = RecordQuery::new(page(1, 10)).with_sort("author|-nothing");
    let result = query::execute(shelf(), &query).unwrap();

    assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_pages_partition_the_result() {
    let query = RecordQuery::new(page(1, 4)).with_sort("title");
    let all = query::execute(shelf(), &RecordQuery::new(page(1, 100)).with_sort("title")).unwrap();

    let mut joined = Vec::new();
    for n in 1..=3 {
        let slice = query::execute(shelf(), &RecordQuery { page: page(n, 4), ..query.clone() }).unwrap();
        assert!(slice.len() <= 4);
        joined.extend(slice);
    }

    assert_eq!(joined, all);
}

#[test]
fn test_invalid_filter_returns_no_slice() {
    let query = RecordQuery::new(page(1, 10)).with_filter("title::d.*|pages::(");

    assert!(query::execute(shelf(), &query).is_err());
}
