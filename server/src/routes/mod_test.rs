use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn app_builds_with_default_options() {
    let _router = app(LeptosOptions::builder().output_name("folio").build());
}
