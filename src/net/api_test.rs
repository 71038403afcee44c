use super::*;

#[test]
fn collection_url_joins_base_and_segment() {
    assert_eq!(
        collection_url("http://localhost:8000", "modules"),
        "http://localhost:8000/modules/"
    );
}

#[test]
fn collection_url_uses_the_base_verbatim() {
    // No normalization: a trailing slash in the configured base survives.
    assert_eq!(
        collection_url("http://localhost:8000/", "trains"),
        "http://localhost:8000//trains/"
    );
}

#[test]
fn status_failures_render_the_code() {
    assert_eq!(ApiError::Status(500).to_string(), "server returned status 500");
}
