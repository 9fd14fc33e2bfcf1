use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::models::BarcodeType;
use crate::params::{ParamError, optional_str_array, require_str};
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

struct Params {
    url: String,
    types: Vec<BarcodeType>,
}

fn parse(args: &Value) -> Result<Params, ParamError> {
    let types = match optional_str_array(args, "barcode_types")? {
        Some(values) => {
            let mut types = Vec::with_capacity(values.len());
            for value in &values {
                let barcode_type = BarcodeType::parse(value).ok_or_else(|| ParamError {
                    message: format!("unknown barcode type: {value}"),
                })?;
                types.push(barcode_type);
            }
            types
        }
        // Detect every common type when none are named.
        None => BarcodeType::all_common().to_vec(),
    };
    Ok(Params {
        url: require_str(args, "url")?,
        types,
    })
}

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let params = match parse(args) {
        Ok(params) => params,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client.barcode_read(&params.url, &params.types).await {
        Ok(response) => {
            let summary = match &response.barcodes {
                Some(barcodes) if !barcodes.is_empty() => barcodes
                    .iter()
                    .map(|barcode| format!("{}: {}", barcode.barcode_type, barcode.value))
                    .collect::<Vec<_>>()
                    .join("\n"),
                _ => "no barcodes detected".to_string(),
            };
            success_result(&response, summary)
        }
        Err(err) => upstream_error(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_to_all_common_types() {
        let params = parse(&json!({"url": "https://files.example/code.png"})).expect("params");
        assert_eq!(params.types, BarcodeType::all_common());
    }

    #[test]
    fn rejects_unknown_type() {
        let args = json!({"url": "https://files.example/code.png", "barcode_types": ["Aztec"]});
        assert!(parse(&args).is_err());
    }
}
