use super::*;

#[test]
fn columns_are_fixed_in_display_order() {
    let headers: Vec<&str> = COLUMNS.iter().map(|c| c.header).collect();
    assert_eq!(headers, vec!["ID", "Poster", "Title", "Release date", "Rating"]);
    let widths: Vec<u16> = COLUMNS.iter().map(|c| c.width_px).collect();
    assert_eq!(widths, vec![70, 150, 200, 150, 130]);
}

#[test]
fn only_rating_is_numeric() {
    let numeric: Vec<&str> = COLUMNS.iter().filter(|c| c.numeric).map(|c| c.header).collect();
    assert_eq!(numeric, vec!["Rating"]);
    assert_eq!(column_class(&COLUMNS[4]), "movie-table__cell movie-table__cell--numeric");
    assert_eq!(column_class(&COLUMNS[2]), "movie-table__cell");
}

#[test]
fn enter_and_space_activate_a_row() {
    assert!(activates_row("Enter"));
    assert!(activates_row(" "));
    assert!(!activates_row("Tab"));
    assert!(!activates_row("Escape"));
    assert!(!activates_row("a"));
}
