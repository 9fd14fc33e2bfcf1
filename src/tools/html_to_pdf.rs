use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::models::{Orientation, PageSize};
use crate::params::{ParamError, optional_str, require_str};
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

struct Params {
    html: String,
    name: String,
    margins: Option<String>,
    orientation: Orientation,
    page_size: PageSize,
}

fn parse(args: &Value) -> Result<Params, ParamError> {
    Ok(Params {
        html: require_str(args, "html")?,
        name: optional_str(args, "name")?.unwrap_or_else(|| "document.pdf".to_string()),
        margins: optional_str(args, "margins")?,
        orientation: parse_orientation(args)?,
        page_size: parse_page_size(args)?,
    })
}

pub(super) fn parse_orientation(args: &Value) -> Result<Orientation, ParamError> {
    match crate::params::optional_str(args, "orientation")? {
        Some(value) => Orientation::parse(&value).ok_or_else(|| ParamError {
            message: "orientation must be Portrait or Landscape".to_string(),
        }),
        None => Ok(Orientation::Portrait),
    }
}

pub(super) fn parse_page_size(args: &Value) -> Result<PageSize, ParamError> {
    match crate::params::optional_str(args, "page_size")? {
        Some(value) => PageSize::parse(&value).ok_or_else(|| ParamError {
            message: "page_size must be Letter, A4, or Legal".to_string(),
        }),
        None => Ok(PageSize::Letter),
    }
}

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let params = match parse(args) {
        Ok(params) => params,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client
        .html_to_pdf(
            &params.html,
            &params.name,
            params.margins.as_deref(),
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
