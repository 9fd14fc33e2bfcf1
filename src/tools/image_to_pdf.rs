use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::params::{ParamError, optional_str, require_str_array};
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

struct Params {
    images: Vec<String>,
    name: String,
}

fn parse(args: &Value) -> Result<Params, ParamError> {
    Ok(Params {
        images: require_str_array(args, "images")?,
        name: optional_str(args, "name")?.unwrap_or_else(|| "images.pdf".to_string()),
    })
}

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let params = match parse(args) {
        Ok(params) => params,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client.image_to_pdf(&params.images, &params.name).await {
        Ok(response) => {
            let summary = response.url.clone().unwrap_or_default();
            success_result(&response, summary)
        }
        Err(err) => upstream_error(&err),
    }
}
