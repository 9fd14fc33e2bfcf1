use crate::client::PdfcoClient;
use crate::input::load_upload;
use crate::mcp::errors;
use crate::params::optional_str;
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;
use tracing::debug;

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let payload = match load_upload(args) {
        Ok(payload) => payload,
        Err(err) => return error_result(err.kind, err.message, None),
    };

    let name = match optional_str(args, "name") {
        Ok(name) => name.unwrap_or_else(|| "upload.bin".to_string()),
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    debug!(source = %payload.source, bytes = payload.bytes.len(), "uploading file content");

    match client.file_upload(&name, payload.bytes).await {
        Ok(response) => {
            let summary = response.url.clone().unwrap_or_default();
            success_result(&response, summary)
        }
        Err(err) => upstream_error(&err),
    }
}
