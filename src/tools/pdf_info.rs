use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::params::require_str;
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let url = match require_str(args, "url") {
        Ok(url) => url,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client.pdf_info(&url).await {
        Ok(response) => {
            let summary = match response.page_count() {
                Some(page_count) => format!("{page_count} pages"),
                None => "no page count reported".to_string(),
            };
            success_result(&response, summary)
        }
        Err(err) => upstream_error(&err),
    }
}
