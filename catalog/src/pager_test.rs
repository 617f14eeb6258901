use super::*;

#[test]
fn default_pager_starts_on_first_page_of_five() {
    let pager = Pager::default();
    assert_eq!(pager.page_size(), 5);
    assert_eq!(pager.current_page(20), 0);
    assert_eq!(pager.visible_range(20), 0..5);
}

#[test]
fn page_count_rounds_up_and_is_never_zero() {
    let pager = Pager::default();
    assert_eq!(pager.page_count(0), 1);
    assert_eq!(pager.page_count(5), 1);
    assert_eq!(pager.page_count(6), 2);
    assert_eq!(pager.page_count(20), 4);
}

#[test]
fn next_and_previous_stay_in_bounds() {
    let mut pager = Pager::default();
    pager.previous(12);
    assert_eq!(pager.current_page(12), 0);

    pager.next(12);
    pager.next(12);
    assert_eq!(pager.current_page(12), 2);
    assert_eq!(pager.visible_range(12), 10..12);
    assert!(!pager.has_next(12));

    pager.next(12);
    assert_eq!(pager.current_page(12), 2);

    pager.previous(12);
    assert_eq!(pager.current_page(12), 1);
    assert!(pager.has_previous(12));
}

#[test]
fn shrinking_list_clamps_to_last_page() {
    let mut pager = Pager::default();
    pager.next(20);
    pager.next(20);
    pager.next(20);
    assert_eq!(pager.current_page(20), 3);

    assert_eq!(pager.current_page(7), 1);
    assert_eq!(pager.visible_range(7), 5..7);
    assert_eq!(pager.visible_range(0), 0..0);
}

#[test]
fn set_page_size_accepts_only_known_options() {
    let mut pager = Pager::default();
    pager.next(20);
    assert!(pager.set_page_size(10));
    assert_eq!(pager.page_size(), 10);
    assert_eq!(pager.current_page(20), 0);

    assert!(!pager.set_page_size(7));
    assert_eq!(pager.page_size(), 10);
    assert!(!pager.set_page_size(0));
}

#[test]
fn slice_returns_current_window() {
    let rows: Vec<u32> = (1..=12).collect();
    let mut pager = Pager::default();
    assert_eq!(pager.slice(&rows), &[1, 2, 3, 4, 5]);
    pager.next(rows.len());
    pager.next(rows.len());
    assert_eq!(pager.slice(&rows), &[11, 12]);
    assert!(pager.slice::<u32>(&[]).is_empty());
}

#[test]
fn reset_returns_to_first_page() {
    let mut pager = Pager::default();
    pager.next(20);
    pager.reset();
    assert_eq!(pager.current_page(20), 0);
}

#[test]
fn range_label_formats_window() {
    let mut pager = Pager::default();
    assert_eq!(pager.range_label(0), "0–0 of 0");
    assert_eq!(pager.range_label(3), "1–3 of 3");
    pager.next(20);
    assert_eq!(pager.range_label(20), "6–10 of 20");
}
