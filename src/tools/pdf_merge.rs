use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::params::{ParamError, optional_bool, optional_str, require_str_array};
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

struct Params {
    urls: Vec<String>,
    name: String,
    async_mode: bool,
}

fn parse(args: &Value) -> Result<Params, ParamError> {
    Ok(Params {
        urls: require_str_array(args, "urls")?,
        name: optional_str(args, "name")?.unwrap_or_else(|| "merged.pdf".to_string()),
        async_mode: optional_bool(args, "async_mode")?.unwrap_or(false),
    })
}

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let params = match parse(args) {
        Ok(params) => params,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client
        .pdf_merge(&params.urls, &params.name, params.async_mode)
        .await
    {
        Ok(response) => {
            let summary = match &response.url {
                Some(url) => format!("Merged {} documents: {url}", params.urls.len()),
                None => format!("Merged {} documents", params.urls.len()),
            };
            success_result(&response, summary)
        }
        Err(err) => upstream_error(&err),
    }
}
