use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::models::CompressionLevel;
use crate::params::{ParamError, optional_str, require_str};
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

struct Params {
    url: String,
    compression_level: CompressionLevel,
}

fn parse(args: &Value) -> Result<Params, ParamError> {
    let compression_level = match optional_str(args, "compression_level")? {
        Some(value) => CompressionLevel::parse(&value).ok_or_else(|| ParamError {
            message: "compression_level must be low, balanced, high, or extreme".to_string(),
        })?,
        None => CompressionLevel::Balanced,
    };
    Ok(Params {
        url: require_str(args, "url")?,
        compression_level,
    })
}

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let params = match parse(args) {
        Ok(params) => params,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client
        .pdf_compress(&params.url, params.compression_level)
        .await
    {
        Ok(response) => {
            let summary = match (&response.url, response.compression_ratio) {
                (Some(url), Some(ratio)) => format!("{url} ({ratio:.1}% of original)"),
                (Some(url), None) => url.clone(),
                _ => String::new(),
            };
            success_result(&response, summary)
        }
        Err(err) => upstream_error(&err),
    }
}
