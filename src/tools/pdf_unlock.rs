use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::params::{ParamError, require_str};
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

struct Params {
    url: String,
    password: String,
}

fn parse(args: &Value) -> Result<Params, ParamError> {
    Ok(Params {
        url: require_str(args, "url")?,
        password: require_str(args, "password")?,
    })
}

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let params = match parse(args) {
        Ok(params) => params,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client.pdf_unlock(&params.url, &params.password).await {
        Ok(response) => {
            let summary = response.url.clone().unwrap_or_default();
            success_result(&response, summary)
        }
        Err(err) => upstream_error(&err),
    }
}
