use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::models::{Orientation, PageSize};
use crate::params::{ParamError, optional_str, require_str};
use crate::tools::html_to_pdf::{parse_orientation, parse_page_size};
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

struct Params {
    url: String,
    name: String,
    orientation: Orientation,
    page_size: PageSize,
}

fn parse(args: &Value) -> Result<Params, ParamError> {
    Ok(Params {
        url: require_str(args, "url")?,
        name: optional_str(args, "name")?.unwrap_or_else(|| "webpage.pdf".to_string()),
        orientation: parse_orientation(args)?,
        page_size: parse_page_size(args)?,
    })
}

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let params = match parse(args) {
        Ok(params) => params,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client
        .url_to_pdf(
            &params.url,
            &params.name,
            params.orientation,
            params.page_size,
        )
        .await
    {
        Ok(response) => {
            let summary = response.url.clone().unwrap_or_default();
            success_result(&response, summary)
        }
        Err(err) => upstream_error(&err),
    }
}
