use libawesome_client::presentation::{Book, BookId, BookList, Series};

fn dresden() -> (Series, BookList) {
    let books = BookList::new(vec![
        Book::new(1, "Storm Front", vec!["James Butcher".to_string()]).with_position(3),
        Book::new(2, "Fool Moon", vec!["James Butcher".to_string()]).with_position(2),
        Book::new(3, "Grave Peril", vec!["Jim Butcher".to_string()]).with_position(1),
        Book::new(4, "Good Omens", vec!["Neil Gaiman".to_string()]),
    ]);
    let series = Series {
        id: 3,
        name: "The Dresden Files".to_string(),
        planned_count: 23,
        books: vec![1, 2, 3],
    };
    (series, books)
}

#[test]
fn test_books_in_sorted_by_position() {
    let (series, books) = dresden();
    let ids: Vec<BookId> = series.books_in(&books).iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn test_contributors_unique_and_alphabetical() {
    let (series, books) = dresden();
    assert_eq!(series.contributors(&books), "James Butcher, Jim Butcher");
}

#[test]
fn test_contributors_dedup_with_interleaved_case_variants() {
    let books = BookList::new(vec![
        Book::new(1, "Storm Front", vec!["Jim Butcher".to_string()]).with_position(1),
        Book::new(2, "Fool Moon", vec!["jim butcher".to_string()]).with_position(2),
        Book::new(3, "Grave Peril", vec!["Jim Butcher".to_string()]).with_position(3),
    ]);
    let series = Series {
        id: 3,
        name: "The Dresden Files".to_string(),
        planned_count: 0,
        books: vec![1, 2, 3],
    };
    let contributors = series.contributors(&books);
    assert_eq!(contributors, "Jim Butcher, jim butcher");
    assert_eq!(contributors.matches("Jim Butcher").count(), 1);
}

#[test]
fn test_planned_caption() {
    let (mut series, _) = dresden();
    assert_eq!(series.planned_caption().as_deref(), Some("23 books in series"));
    series.planned_count = 0;
    assert!(series.planned_caption().is_none());
}

#[test]
fn test_series_accepts_camel_case_planned_count() {
    let series: Series =
        serde_json::from_str(r#"{"id":1,"name":"Discworld","plannedCount":41,"books":[4]}"#)
            .unwrap();
    assert_eq!(series.planned_count, 41);
    assert_eq!(series.books, vec![4]);
}
