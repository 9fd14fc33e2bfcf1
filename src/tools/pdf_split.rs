use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::params::{ParamError, optional_bool, optional_str, require_str};
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

struct Params {
    url: String,
    pages: Option<String>,
    split_by_pages: bool,
}

fn parse(args: &Value) -> Result<Params, ParamError> {
    Ok(Params {
        url: require_str(args, "url")?,
        pages: optional_str(args, "pages")?,
        split_by_pages: optional_bool(args, "split_by_pages")?.unwrap_or(false),
    })
}

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let params = match parse(args) {
        Ok(params) => params,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client
        .pdf_split(&params.url, params.pages.as_deref(), params.split_by_pages)
        .await
    {
        Ok(response) => {
            let summary = match &response.urls {
                Some(urls) => urls.join("\n"),
                None => String::new(),
            };
            success_result(&response, summary)
        }
        Err(err) => upstream_error(&err),
    }
}
