use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::models::{BarcodeFormat, BarcodeType};
use crate::params::{ParamError, optional_str, require_str};
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

struct Params {
    value: String,
    barcode_type: BarcodeType,
    format: BarcodeFormat,
}

fn parse(args: &Value) -> Result<Params, ParamError> {
    let barcode_type = match optional_str(args, "barcode_type")? {
        Some(value) => BarcodeType::parse(&value).ok_or_else(|| ParamError {
            message: "barcode_type must be one of QRCode, Code128, Code39, EAN13, EAN8, UPCA, UPCE"
                .to_string(),
        })?,
        None => BarcodeType::QrCode,
    };
    let format = match optional_str(args, "format")? {
        Some(value) => BarcodeFormat::parse(&value).ok_or_else(|| ParamError {
            message: "format must be png, jpg, or svg".to_string(),
        })?,
        None => BarcodeFormat::Png,
    };
    Ok(Params {
        value: require_str(args, "value")?,
        barcode_type,
        format,
    })
}

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let params = match parse(args) {
        Ok(params) => params,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client
        .barcode_generate(&params.value, params.barcode_type, params.format)
        .await
    {
        Ok(response) => {
            let summary = response.url.clone().unwrap_or_default();
            success_result(&response, summary)
        }
        Err(err) => upstream_error(&err),
    }
}
