use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn pkg_dir_is_under_site_root() {
    assert_eq!(pkg_dir("target/site"), PathBuf::from("target/site/pkg"));
}
