use std::collections::HashSet;
use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

#[test]
fn tools_list_includes_expected_tools() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-pdfco"))
        .args(["serve", "--stdio"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/list",
        "params": {}
    });
    let serialized = serde_json::to_string(&request)?;
    writeln!(stdin, "{serialized}")?;
    stdin.flush()?;

    let mut line = String::new();
    stdout.read_line(&mut line)?;

    let response: serde_json::Value = serde_json::from_str(line.trim())?;
    let tools = response
        .get("result")
        .and_then(|value| value.get("tools"))
        .and_then(|value| value.as_array())
        .expect("tools array present");

    let names: HashSet<&str> = tools
        .iter()
        .filter_map(|tool| tool.get("name").and_then(|value| value.as_str()))
        .collect();

    let expected: HashSet<&str> = [
        "pdf_to_text",
        "pdf_to_json",
        "pdf_to_html",
        "pdf_to_csv",
        "pdf_merge",
        "pdf_split",
        "pdf_info",
        "html_to_pdf",
        "url_to_pdf",
        "image_to_pdf",
        "pdf_add_watermark",
        "pdf_rotate",
        "pdf_compress",
        "pdf_protect",
        "pdf_unlock",
        "barcode_generate",
        "barcode_read",
        "ocr_pdf",
        "file_upload",
    ]
    .into_iter()
    .collect();

    assert_eq!(names, expected);

    let _ = child.kill();
    Ok(())
}
