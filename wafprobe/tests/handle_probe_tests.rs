// handle_probe writes into the working directory, so this binary owns
// set_current_dir and runs a single test.

use tempfile::TempDir;
use wafprobe::handlers::handle_probe;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_handle_probe_writes_report_to_working_directory() -> Result<(), Box<dyn std::error::Error>> {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.html"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/etc/passwd"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new()?;
    std::env::set_current_dir(temp_dir.path())?;

    let report_path = handle_probe(&mock_server.uri()).await?;

    // Every built-in target was requested
    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 9);

    assert!(report_path.exists());
    assert_eq!(report_path.parent(), Some(std::env::current_dir()?.as_path()));

    let entries: Vec<String> = std::fs::read_dir(temp_dir.path())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("awswaf_webtest_"));
    assert!(entries[0].ends_with(".xlsx"));

    Ok(())
}
