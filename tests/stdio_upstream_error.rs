use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn upstream_failure_surfaces_status_and_message() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pdf/convert/to/text"))
        .respond_with(ResponseTemplate::new(402).set_body_json(serde_json::json!({
            "error": {"message": "Not enough credits"}
        })))
        .mount(&server)
        .await;

    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-pdfco"))
        .args(["serve", "--stdio", "--base-url", &server.uri()])
        .env("PDFCO_API_KEY", "test-key")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 4,
        "method": "tools/call",
        "params": {
            "name": "pdf_to_text",
            "arguments": {
                "url": "https://files.example/report.pdf"
            }
        }
    });
    let serialized = serde_json::to_string(&request)?;
    writeln!(stdin, "{serialized}")?;
    stdin.flush()?;

    let mut line = String::new();
    stdout.read_line(&mut line)?;

    let response: serde_json::Value = serde_json::from_str(line.trim())?;
    let result = response.get("result").expect("result present");
    assert_eq!(result.get("isError").and_then(|v| v.as_bool()), Some(true));

    let error = result
        .get("structuredContent")
        .and_then(|value| value.get("error"))
        .expect("error present");
    assert_eq!(
        error.get("kind").and_then(|v| v.as_str()),
        Some("upstream_error")
    );
    assert_eq!(error.get("status").and_then(|v| v.as_u64()), Some(402));
    assert_eq!(
        error.get("message").and_then(|v| v.as_str()),
        Some("Not enough credits")
    );

    let _ = child.kill();
    Ok(())
}
