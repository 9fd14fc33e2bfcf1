use crate::client::PdfcoClient;
use crate::mcp::errors;
use crate::params::{ParamError, optional_f64, optional_i64, optional_str, require_str};
use crate::tools::{error_result, success_result, upstream_error};
use serde_json::Value;

struct Params {
    url: String,
    text: String,
    x: i64,
    y: i64,
    font_size: i64,
    color: String,
    opacity: f64,
    pages: String,
    name: String,
}

fn parse(args: &Value) -> Result<Params, ParamError> {
    Ok(Params {
        url: require_str(args, "url")?,
        text: require_str(args, "text")?,
        x: optional_i64(args, "x")?.unwrap_or(100),
        y: optional_i64(args, "y")?.unwrap_or(100),
        font_size: optional_i64(args, "font_size")?.unwrap_or(24),
        color: optional_str(args, "color")?.unwrap_or_else(|| "FF0000".to_string()),
        opacity: optional_f64(args, "opacity")?.unwrap_or(0.5),
        // "0-" addresses every page.
        pages: optional_str(args, "pages")?.unwrap_or_else(|| "0-".to_string()),
        name: optional_str(args, "name")?.unwrap_or_else(|| "watermarked.pdf".to_string()),
    })
}

pub async fn call(client: &PdfcoClient, args: &Value) -> Value {
    let params = match parse(args) {
        Ok(params) => params,
        Err(err) => return error_result(errors::INVALID_INPUT, err.message, None),
    };

    match client
        .pdf_add_watermark(
            &params.url,
            &params.text,
            params.x,
            params.y,
            params.font_size,
            &params.color,
            params.opacity,
            &params.pages,
            &params.name,
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_upstream_conventions() {
        let params = parse(&json!({"url": "https://files.example/a.pdf", "text": "DRAFT"}))
            .expect("params");
        assert_eq!(params.x, 100);
        assert_eq!(params.y, 100);
        assert_eq!(params.font_size, 24);
        assert_eq!(params.color, "FF0000");
        assert_eq!(params.opacity, 0.5);
        assert_eq!(params.pages, "0-");
        assert_eq!(params.name, "watermarked.pdf");
    }

    #[test]
    fn text_is_required() {
        assert!(parse(&json!({"url": "https://files.example/a.pdf"})).is_err());
    }
}
