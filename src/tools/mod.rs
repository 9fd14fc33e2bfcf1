use serde::Serialize;
use serde_json::{Value, json};

use crate::client::PdfcoError;
use crate::mcp::errors;

pub mod barcode_generate;
pub mod barcode_read;
pub mod file_upload;
pub mod html_to_pdf;
pub mod image_to_pdf;
pub mod ocr_pdf;
pub mod pdf_add_watermark;
pub mod pdf_compress;
pub mod pdf_info;
pub mod pdf_merge;
pub mod pdf_protect;
pub mod pdf_rotate;
pub mod pdf_split;
pub mod pdf_to_csv;
pub mod pdf_to_html;
pub mod pdf_to_json;
pub mod pdf_to_text;
pub mod pdf_unlock;
pub mod url_to_pdf;

pub fn error_result(kind: &'static str, message: impl Into<String>, status: Option<u16>) -> Value {
    let message = message.into();
    let mut error = json!({
        "kind": kind,
        "message": message,
    });

    if let Some(status) = status
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("status".to_string(), json!(status));
    }

    json!({
        "content": [{"type": "text", "text": format!("Error: {message}")}],
        "structuredContent": {"error": error},
        "isError": true
    })
}

/// Surface a typed client failure, keeping the upstream status and raw detail
/// visible in the structured error.
pub fn upstream_error(err: &PdfcoError) -> Value {
    let mut error = json!({
        "kind": errors::UPSTREAM_ERROR,
        "status": err.status,
        "message": err.message,
    });

    if let Some(details) = &err.details
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("details".to_string(), details.clone());
    }

    json!({
        "content": [{"type": "text", "text": format!("Error: {}", err.message)}],
        "structuredContent": {"error": error},
        "isError": true
    })
}

pub fn success_result<T: Serialize>(response: &T, summary: impl Into<String>) -> Value {
    let structured = match serde_json::to_value(response) {
        Ok(value) => value,
        Err(err) => {
            return error_result(
                errors::INTERNAL_ERROR,
                format!("failed to serialize result: {err}"),
                None,
            );
        }
    };

    json!({
        "content": [{"type": "text", "text": summary.into()}],
        "structuredContent": structured,
        "isError": false
    })
}
