use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::params::{ParamError, optional_str, require_str};
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

struct Params {
    url: String,
    pages: Option<String>,
    lang: String,
}

fn parse(args: &Value) -> Result<Params, ParamError> {
    Ok(Params {
        url: require_str(args, "url")?,
        pages: optional_str(args, "pages")?,
        lang: optional_str(args, "lang")?.unwrap_or_else(|| "eng".to_string()),
    })
}

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let params = match parse(args) {
        Ok(params) => params,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client
        .ocr_pdf(&params.url, params.pages.as_deref(), &params.lang)
        .await
    {
        Ok(response) => {
            let summary = response
                .text
                .clone()
                .or_else(|| response.url.clone())
                .unwrap_or_default();
            success_result(&response, summary)
        }
        Err(err) => upstream_error(&err),
    }
}
