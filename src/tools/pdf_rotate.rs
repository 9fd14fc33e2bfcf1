use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::params::{ParamError, optional_str, require_i64, require_str};
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

struct Params {
    url: String,
    angle: i64,
    pages: Option<String>,
}

fn parse(args: &Value) -> Result<Params, ParamError> {
    Ok(Params {
        url: require_str(args, "url")?,
        angle: require_i64(args, "angle")?,
        pages: optional_str(args, "pages")?,
    })
}

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let params = match parse(args) {
        Ok(params) => params,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client
        .pdf_rotate(&params.url, params.angle, params.pages.as_deref())
        .await
    {
        Ok(response) => {
            let summary = response.url.clone().unwrap_or_default();
            success_result(&response, summary)
        }
        Err(err) => upstream_error(&err),
    }
}
