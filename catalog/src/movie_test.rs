use super::*;

#[test]
fn parse_popular_body_keeps_response_order() {
    let body = r#"{
        "page": 1,
        "results": [
            {"id": 1, "title": "Dune", "release_date": "2021-10-22", "vote_average": 8.0, "overview": "Spice.", "poster_path": "/x.jpg"},
            {"id": 2, "title": "Drive", "release_date": "2011-09-16", "vote_average": 7.8, "overview": "Driver.", "poster_path": null}
        ],
        "total_pages": 500,
        "total_results": 10000
    }"#;

    let movies = parse_popular_body(body).expect("body should decode");
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, 1);
    assert_eq!(movies[0].title, "Dune");
    assert_eq!(movies[0].poster_path.as_deref(), Some("/x.jpg"));
    assert_eq!(movies[1].id, 2);
    assert_eq!(movies[1].title, "Drive");
    assert_eq!(movies[1].poster_path, None);
    assert!((movies[1].vote_average - 7.8).abs() < f64::EPSILON);
}

#[test]
fn parse_popular_body_ignores_unknown_fields() {
    let body = r#"{"results": [{"id": 7, "title": "Heat", "adult": false, "genre_ids": [80, 18], "popularity": 41.2}]}"#;
    let movies = parse_popular_body(body).expect("body should decode");
    assert_eq!(movies[0].title, "Heat");
}

#[test]
fn parse_popular_body_accepts_empty_results() {
    let movies = parse_popular_body(r#"{"page": 1, "results": []}"#).expect("body should decode");
    assert!(movies.is_empty());
}

#[test]
fn missing_display_fields_fall_back_to_blank_values() {
    let body = r#"{"results": [{"id": 3, "title": null, "release_date": null, "vote_average": null, "overview": null}]}"#;
    let movies = parse_popular_body(body).expect("body should decode");
    let movie = &movies[0];
    assert_eq!(movie.title, "");
    assert_eq!(movie.release_date, "");
    assert_eq!(movie.overview, "");
    assert!(movie.vote_average.abs() < f64::EPSILON);
    assert_eq!(movie.poster_path, None);
}

#[test]
fn blank_poster_path_is_treated_as_absent() {
    let body = r#"{"results": [{"id": 4, "title": "Blank", "poster_path": "  "}]}"#;
    let movies = parse_popular_body(body).expect("body should decode");
    assert_eq!(movies[0].poster_path, None);
}

#[test]
fn parse_popular_body_rejects_missing_results() {
    let err = parse_popular_body(r#"{"status_code": 7, "status_message": "Invalid API key"}"#)
        .expect_err("body without results should fail");
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn parse_popular_body_rejects_non_json() {
    let err = parse_popular_body("<html>bad gateway</html>").expect_err("html should fail");
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn parse_popular_body_rejects_result_without_id() {
    let err = parse_popular_body(r#"{"results": [{"title": "No id"}]}"#).expect_err("id is required");
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn rating_label_uses_plain_number_formatting() {
    let mut movie = Movie {
        id: 1,
        poster_path: None,
        title: "Dune".to_owned(),
        release_date: String::new(),
        vote_average: 7.8,
        overview: String::new(),
    };
    assert_eq!(movie.rating_label(), "7.8");
    movie.vote_average = 8.0;
    assert_eq!(movie.rating_label(), "8");
}
