use super::*;

#[test]
fn thumbnail_and_large_differ_only_by_size_code() {
    let thumb = poster_url(Some("/x.jpg"), PosterSize::Thumbnail);
    let large = poster_url(Some("/x.jpg"), PosterSize::Large);
    assert_eq!(thumb.as_deref(), Some("https://image.tmdb.org/t/p/w200/x.jpg"));
    assert_eq!(large.as_deref(), Some("https://image.tmdb.org/t/p/w400/x.jpg"));
}

#[test]
fn absent_or_blank_path_has_no_url() {
    assert_eq!(poster_url(None, PosterSize::Thumbnail), None);
    assert_eq!(poster_url(Some(""), PosterSize::Large), None);
    assert_eq!(poster_url(Some("   "), PosterSize::Large), None);
}

#[test]
fn path_without_leading_slash_is_joined() {
    assert_eq!(
        poster_url(Some("abc.jpg"), PosterSize::Thumbnail).as_deref(),
        Some("https://image.tmdb.org/t/p/w200/abc.jpg")
    );
}
