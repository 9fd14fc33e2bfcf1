use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::params::{ParamError, optional_bool, optional_str, require_str};
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

struct Params {
    url: String,
    owner_password: String,
    user_password: Option<String>,
    allow_print: bool,
    allow_copy: bool,
}

fn parse(args: &Value) -> Result<Params, ParamError> {
    Ok(Params {
        url: require_str(args, "url")?,
        owner_password: require_str(args, "owner_password")?,
        user_password: optional_str(args, "user_password")?,
        allow_print: optional_bool(args, "allow_print")?.unwrap_or(true),
        allow_copy: optional_bool(args, "allow_copy")?.unwrap_or(false),
    })
}

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let params = match parse(args) {
        Ok(params) => params,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client
        .pdf_protect(
            &params.url,
            &params.owner_password,
            params.user_password.as_deref(),
            params.allow_print,
            params.allow_copy,
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
