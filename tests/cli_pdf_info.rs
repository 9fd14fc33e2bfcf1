use std::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn pdf_info_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pdf/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": false,
            "info": {"PageCount": 2, "Title": "Invoice"}
        })))
        .mount(&server)
        .await;

    let output = Command::new(env!("CARGO_BIN_EXE_mcp-pdfco"))
        .args([
            "pdf-info",
            "--url",
            "https://files.example/invoice.pdf",
            "--base-url",
            &server.uri(),
            "--json",
        ])
        .env("PDFCO_API_KEY", "test-key")
        .output()?;

    assert!(output.status.success());

    let structured: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        structured
            .pointer("/info/PageCount")
            .and_then(|v| v.as_i64()),
        Some(2)
    );
    assert_eq!(
        structured.pointer("/info/Title").and_then(|v| v.as_str()),
        Some("Invoice")
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn pdf_info_error_exits_nonzero() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pdf/info"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "message": "Invalid URL"
        })))
        .mount(&server)
        .await;

    let output = Command::new(env!("CARGO_BIN_EXE_mcp-pdfco"))
        .args([
            "pdf-info",
            "--url",
            "not-a-url",
            "--base-url",
            &server.uri(),
        ])
        .env("PDFCO_API_KEY", "test-key")
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid URL"), "stderr: {stderr}");

    Ok(())
}
