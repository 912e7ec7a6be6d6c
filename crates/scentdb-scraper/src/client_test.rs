use super::*;

#[test]
fn client_builds_with_custom_user_agent() {
    assert!(StorefrontClient::new(5, "scentdb-test/0.1").is_ok());
}

#[tokio::test]
async fn fetch_html_rejects_unparseable_url() {
    let client = StorefrontClient::new(5, "scentdb-test/0.1").unwrap();
    let err = client.fetch_html("not-a-url").await.unwrap_err();
    assert!(
        matches!(err, ScraperError::InvalidUrl { ref url, .. } if url == "not-a-url"),
        "expected InvalidUrl, got: {err:?}"
    );
}
