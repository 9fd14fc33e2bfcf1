//! Async API client for the PDF.co API.
//!
//! One lazily-created HTTP session serves every call. Each operation method
//! maps to exactly one upstream endpoint; all validation beyond argument
//! shape is delegated to the upstream service.

use std::env;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::models::{
    BarcodeFormat, BarcodeGenerateResponse, BarcodeReadResponse, BarcodeType, CompressionLevel,
    FileUploadResponse, HtmlToPdfResponse, ImageToPdfResponse, OcrPdfResponse, Orientation,
    PageSize, PdfCompressResponse, PdfInfoResponse, PdfMergeResponse, PdfProtectResponse,
    PdfRotateResponse, PdfSplitResponse, PdfToCsvResponse, PdfToHtmlResponse, PdfToJsonResponse,
    PdfToTextResponse, PdfUnlockResponse, PdfWatermarkResponse, UrlToPdfResponse,
};

pub const API_KEY_ENV: &str = "PDFCO_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.pdf.co/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Synthetic status reported for transport-level failures (DNS, reset,
/// timeout) so callers handle them through the same error shape.
pub const NETWORK_ERROR_STATUS: u16 = 500;

const USER_AGENT: &str = concat!("mcp-pdfco/", env!("CARGO_PKG_VERSION"));

/// Typed failure from the upstream API or the transport underneath it.
#[derive(Debug, Error)]
#[error("PDF.co API error {status}: {message}")]
pub struct PdfcoError {
    pub status: u16,
    pub message: String,
    pub details: Option<Value>,
}

impl PdfcoError {
    fn network(message: String) -> Self {
        Self {
            status: NETWORK_ERROR_STATUS,
            message,
            details: None,
        }
    }
}

enum RequestBody {
    Json(Value),
    Raw {
        content_type: &'static str,
        payload: Vec<u8>,
    },
}

/// Client for the PDF.co API.
///
/// The underlying session is created at most once, on first use, and shared
/// by concurrent calls. After [`PdfcoClient::close`] the next call
/// transparently recreates it. Dropping the client releases the session.
pub struct PdfcoClient {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    session: OnceCell<reqwest::Client>,
}

impl PdfcoClient {
    /// Create a client, falling back to `PDFCO_API_KEY` when no key is given.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.or_else(|| env::var(API_KEY_ENV).ok()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            session: OnceCell::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Eagerly create the session so later calls cannot fail on construction.
    pub async fn open(&self) -> Result<(), PdfcoError> {
        self.session().await.map(|_| ())
    }

    /// Release the session. The next call recreates it.
    pub fn close(&mut self) {
        self.session.take();
    }

    async fn session(&self) -> Result<&reqwest::Client, PdfcoError> {
        self.session
            .get_or_try_init(|| async { self.build_session() })
            .await
    }

    fn build_session(&self) -> Result<reqwest::Client, PdfcoError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        if let Some(api_key) = &self.api_key {
            let value = HeaderValue::from_str(api_key).map_err(|_| PdfcoError {
                status: NETWORK_ERROR_STATUS,
                message: "API key contains characters not allowed in a header".to_string(),
                details: None,
            })?;
            headers.insert("x-api-key", value);
        }

        reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|err| PdfcoError {
                status: NETWORK_ERROR_STATUS,
                message: format!("failed to build HTTP session: {err}"),
                details: None,
            })
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: RequestBody,
    ) -> Result<Value, PdfcoError> {
        let session = self.session().await?;
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "issuing PDF.co request");

        let mut request = session.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        request = match body {
            RequestBody::Json(payload) => request.json(&payload),
            RequestBody::Raw {
                content_type,
                payload,
            } => request
                .header(header::CONTENT_TYPE, content_type)
                .body(payload),
        };

        let response = request
            .send()
            .await
            .map_err(|err| PdfcoError::network(format!("Network error: {err}")))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let text = response
            .text()
            .await
            .map_err(|err| PdfcoError::network(format!("Network error: {err}")))?;

        let parsed = parse_body(&content_type, &text);

        if status >= 400 {
            return Err(PdfcoError {
                status,
                message: extract_error_message(&parsed),
                details: Some(parsed),
            });
        }

        // Upstream reports some failures with a 2xx status and an error flag.
        if parsed.get("error").and_then(Value::as_bool) == Some(true) {
            let message = parsed
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("API returned error flag")
                .to_string();
            return Err(PdfcoError {
                status,
                message,
                details: Some(parsed),
            });
        }

        Ok(parsed)
    }

    pub async fn pdf_to_text(
        &self,
        url: &str,
        pages: Option<&str>,
        async_mode: bool,
    ) -> Result<PdfToTextResponse, PdfcoError> {
        let mut payload = json!({"url": url, "async": async_mode});
        if let Some(pages) = pages {
            payload["pages"] = json!(pages);
        }
        let data = self
            .request(
                Method::POST,
                "/pdf/convert/to/text",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    pub async fn pdf_to_json(
        &self,
        url: &str,
        pages: Option<&str>,
    ) -> Result<PdfToJsonResponse, PdfcoError> {
        let mut payload = json!({"url": url});
        if let Some(pages) = pages {
            payload["pages"] = json!(pages);
        }
        let data = self
            .request(
                Method::POST,
                "/pdf/convert/to/json",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    pub async fn pdf_to_html(
        &self,
        url: &str,
        pages: Option<&str>,
        simple: bool,
    ) -> Result<PdfToHtmlResponse, PdfcoError> {
        let mut payload = json!({"url": url, "simple": simple});
        if let Some(pages) = pages {
            payload["pages"] = json!(pages);
        }
        let data = self
            .request(
                Method::POST,
                "/pdf/convert/to/html",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    pub async fn pdf_to_csv(
        &self,
        url: &str,
        pages: Option<&str>,
    ) -> Result<PdfToCsvResponse, PdfcoError> {
        let mut payload = json!({"url": url});
        if let Some(pages) = pages {
            payload["pages"] = json!(pages);
        }
        let data = self
            .request(
                Method::POST,
                "/pdf/convert/to/csv",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    /// Merge documents in order; upstream takes the sources as one
    /// comma-joined `url` value.
    pub async fn pdf_merge(
        &self,
        urls: &[String],
        name: &str,
        async_mode: bool,
    ) -> Result<PdfMergeResponse, PdfcoError> {
        let payload = json!({"url": urls.join(","), "name": name, "async": async_mode});
        let data = self
            .request(Method::POST, "/pdf/merge", &[], RequestBody::Json(payload))
            .await?;
        decode(data)
    }

    pub async fn pdf_split(
        &self,
        url: &str,
        pages: Option<&str>,
        split_by_pages: bool,
    ) -> Result<PdfSplitResponse, PdfcoError> {
        let mut payload = json!({"url": url});
        if let Some(pages) = pages {
            payload["pages"] = json!(pages);
        }
        if split_by_pages {
            payload["splitByPages"] = json!(true);
        }
        let data = self
            .request(Method::POST, "/pdf/split", &[], RequestBody::Json(payload))
            .await?;
        decode(data)
    }

    pub async fn pdf_info(&self, url: &str) -> Result<PdfInfoResponse, PdfcoError> {
        let payload = json!({"url": url});
        let data = self
            .request(Method::POST, "/pdf/info", &[], RequestBody::Json(payload))
            .await?;
        decode(data)
    }

    pub async fn html_to_pdf(
        &self,
        html: &str,
        name: &str,
        margins: Option<&str>,
        orientation: Orientation,
        page_size: PageSize,
    ) -> Result<HtmlToPdfResponse, PdfcoError> {
        let mut payload = json!({
            "html": html,
            "name": name,
            "orientation": orientation.as_str(),
            "pageSize": page_size.as_str(),
        });
        if let Some(margins) = margins {
            payload["margins"] = json!(margins);
        }
        let data = self
            .request(
                Method::POST,
                "/pdf/convert/from/html",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    pub async fn url_to_pdf(
        &self,
        url: &str,
        name: &str,
        orientation: Orientation,
        page_size: PageSize,
    ) -> Result<UrlToPdfResponse, PdfcoError> {
        let payload = json!({
            "url": url,
            "name": name,
            "orientation": orientation.as_str(),
            "pageSize": page_size.as_str(),
        });
        let data = self
            .request(
                Method::POST,
                "/pdf/convert/from/url",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    pub async fn image_to_pdf(
        &self,
        images: &[String],
        name: &str,
    ) -> Result<ImageToPdfResponse, PdfcoError> {
        let payload = json!({"url": images.join(","), "name": name});
        let data = self
            .request(
                Method::POST,
                "/pdf/convert/from/image",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    /// Add a text annotation through the edit endpoint.
    ///
    /// Upstream colors are AARRGGBB, so the 0.0-1.0 opacity becomes a
    /// two-digit hex alpha prefix on the RRGGBB color.
    #[allow(clippy::too_many_arguments)]
    pub async fn pdf_add_watermark(
        &self,
        url: &str,
        text: &str,
        x: i64,
        y: i64,
        font_size: i64,
        color: &str,
        opacity: f64,
        pages: &str,
        name: &str,
    ) -> Result<PdfWatermarkResponse, PdfcoError> {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
        let color_with_alpha = format!("{alpha:02X}{color}");

        let payload = json!({
            "url": url,
            "name": name,
            "annotations": [{
                "text": text,
                "x": x,
                "y": y,
                "size": font_size,
                "color": color_with_alpha,
                "pages": pages,
            }],
        });
        let data = self
            .request(
                Method::POST,
                "/pdf/edit/add",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    pub async fn pdf_rotate(
        &self,
        url: &str,
        angle: i64,
        pages: Option<&str>,
    ) -> Result<PdfRotateResponse, PdfcoError> {
        let mut payload = json!({"url": url, "angle": angle});
        if let Some(pages) = pages {
            payload["pages"] = json!(pages);
        }
        let data = self
            .request(
                Method::POST,
                "/pdf/edit/rotate",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    pub async fn pdf_compress(
        &self,
        url: &str,
        compression_level: CompressionLevel,
    ) -> Result<PdfCompressResponse, PdfcoError> {
        let payload = json!({"url": url, "compressionLevel": compression_level.as_str()});
        let data = self
            .request(
                Method::POST,
                "/pdf/optimize",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    pub async fn pdf_protect(
        &self,
        url: &str,
        owner_password: &str,
        user_password: Option<&str>,
        allow_print: bool,
        allow_copy: bool,
    ) -> Result<PdfProtectResponse, PdfcoError> {
        let mut payload = json!({
            "url": url,
            "ownerPassword": owner_password,
            "allowPrint": allow_print,
            "allowCopy": allow_copy,
        });
        if let Some(user_password) = user_password {
            payload["userPassword"] = json!(user_password);
        }
        let data = self
            .request(
                Method::POST,
                "/pdf/security/add",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    pub async fn pdf_unlock(
        &self,
        url: &str,
        password: &str,
    ) -> Result<PdfUnlockResponse, PdfcoError> {
        let payload = json!({"url": url, "password": password});
        let data = self
            .request(
                Method::POST,
                "/pdf/security/remove",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    pub async fn barcode_generate(
        &self,
        value: &str,
        barcode_type: BarcodeType,
        format: BarcodeFormat,
    ) -> Result<BarcodeGenerateResponse, PdfcoError> {
        let payload = json!({
            "value": value,
            "type": barcode_type.as_str(),
            "format": format.as_str(),
        });
        let data = self
            .request(
                Method::POST,
                "/barcode/generate",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    pub async fn barcode_read(
        &self,
        url: &str,
        types: &[BarcodeType],
    ) -> Result<BarcodeReadResponse, PdfcoError> {
        let mut payload = json!({"url": url});
        if !types.is_empty() {
            let joined = types
                .iter()
                .map(|barcode_type| barcode_type.as_str())
                .collect::<Vec<_>>()
                .join(",");
            payload["types"] = json!(joined);
        }
        let data = self
            .request(
                Method::POST,
                "/barcode/read/from/url",
                &[],
                RequestBody::Json(payload),
            )
            .await?;
        decode(data)
    }

    pub async fn ocr_pdf(
        &self,
        url: &str,
        pages: Option<&str>,
        lang: &str,
    ) -> Result<OcrPdfResponse, PdfcoError> {
        let mut payload = json!({"url": url, "lang": lang});
        if let Some(pages) = pages {
            payload["pages"] = json!(pages);
        }
        let data = self
            .request(Method::POST, "/pdf/ocr", &[], RequestBody::Json(payload))
            .await?;
        decode(data)
    }

    /// Upload inline file content; the bytes travel as the raw request body
    /// and the target filename as a query parameter.
    pub async fn file_upload(
        &self,
        name: &str,
        payload: Vec<u8>,
    ) -> Result<FileUploadResponse, PdfcoError> {
        let data = self
            .request(
                Method::POST,
                "/file/upload",
                &[("name", name)],
                RequestBody::Raw {
                    content_type: "application/octet-stream",
                    payload,
                },
            )
            .await?;
        decode(data)
    }
}

/// Parse a response body by declared content type.
///
/// JSON content types that fail to parse and unrecognized content types
/// degrade to `{"result": <text>}` instead of failing.
fn parse_body(content_type: &str, text: &str) -> Value {
    if content_type.contains("application/json")
        || text.starts_with('{')
        || text.starts_with('[')
    {
        serde_json::from_str(text).unwrap_or_else(|_| json!({"result": text}))
    } else {
        json!({"result": text})
    }
}

/// Pick the error message out of whichever conventional field is present:
/// `error.message`, then `message`, then `title`, then the stringified
/// `error` value, then a fixed default.
fn extract_error_message(body: &Value) -> String {
    if let Some(message) = body.pointer("/error/message").and_then(Value::as_str) {
        return message.to_string();
    }
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return message.to_string();
    }
    if let Some(title) = body.get("title").and_then(Value::as_str) {
        return title.to_string();
    }
    match body.get("error") {
        Some(Value::String(error)) => error.clone(),
        Some(error) => error.to_string(),
        None => "Unknown error".to_string(),
    }
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, PdfcoError> {
    serde_json::from_value(body).map_err(|err| PdfcoError {
        status: NETWORK_ERROR_STATUS,
        message: format!("Malformed response: {err}"),
        details: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> PdfcoClient {
        PdfcoClient::new(Some("test-key".to_string())).with_base_url(server.uri())
    }

    #[test]
    fn parse_body_json_content_type() {
        let parsed = parse_body("application/json", r#"{"error": false, "url": "x"}"#);
        assert_eq!(parsed, json!({"error": false, "url": "x"}));
    }

    #[test]
    fn parse_body_plain_text() {
        let parsed = parse_body("text/plain", "hello");
        assert_eq!(parsed, json!({"result": "hello"}));
    }

    #[test]
    fn parse_body_unknown_content_type_with_json_text() {
        let parsed = parse_body("application/octet-stream", r#"{"a":1}"#);
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn parse_body_unknown_content_type_with_plain_text() {
        let parsed = parse_body("application/octet-stream", "not json");
        assert_eq!(parsed, json!({"result": "not json"}));
    }

    #[test]
    fn parse_body_json_content_type_with_broken_body() {
        let parsed = parse_body("application/json", "{broken");
        assert_eq!(parsed, json!({"result": "{broken"}));
    }

    #[test]
    fn error_message_prefers_nested_error_message() {
        let body = json!({
            "error": {"message": "nested"},
            "message": "flat",
            "title": "titled",
        });
        assert_eq!(extract_error_message(&body), "nested");
    }

    #[test]
    fn error_message_falls_back_to_message_then_title() {
        assert_eq!(
            extract_error_message(&json!({"message": "flat", "title": "titled"})),
            "flat"
        );
        assert_eq!(extract_error_message(&json!({"title": "titled"})), "titled");
    }

    #[test]
    fn error_message_stringifies_error_value() {
        assert_eq!(extract_error_message(&json!({"error": "boom"})), "boom");
        assert_eq!(extract_error_message(&json!({"error": true})), "true");
        assert_eq!(
            extract_error_message(&json!({"error": {"code": 7}})),
            r#"{"code":7}"#
        );
    }

    #[test]
    fn error_message_default() {
        assert_eq!(extract_error_message(&json!({"status": 400})), "Unknown error");
    }

    #[tokio::test]
    async fn pdf_info_decodes_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pdf/info"))
            .and(header("x-api-key", "test-key"))
            .and(body_partial_json(json!({"url": "https://files.example/a.pdf"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": false,
                "info": {"PageCount": 4, "Encrypted": false, "FileSize": 2048}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .pdf_info("https://files.example/a.pdf")
            .await
            .expect("success");
        assert!(!response.error);
        assert_eq!(response.page_count(), Some(4));
        assert_eq!(response.info.and_then(|info| info.file_size), Some(2048));
    }

    #[tokio::test]
    async fn upstream_error_carries_status_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pdf/info"))
            .respond_with(ResponseTemplate::new(402).set_body_json(json!({
                "error": {"message": "Not enough credits"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .pdf_info("https://files.example/a.pdf")
            .await
            .expect_err("error");
        assert_eq!(err.status, 402);
        assert_eq!(err.message, "Not enough credits");
        assert!(err.details.is_some());
    }

    #[tokio::test]
    async fn upstream_error_title_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pdf/info"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"title": "Bad Request"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .pdf_info("https://files.example/a.pdf")
            .await
            .expect_err("error");
        assert_eq!(err.status, 400);
        assert_eq!(err.message, "Bad Request");
    }

    #[tokio::test]
    async fn error_flag_on_success_status_raises() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pdf/optimize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": true,
                "message": "quota exceeded"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .pdf_compress("https://files.example/a.pdf", CompressionLevel::Balanced)
            .await
            .expect_err("error");
        assert_eq!(err.status, 200);
        assert_eq!(err.message, "quota exceeded");
    }

    #[tokio::test]
    async fn plain_text_body_wraps_as_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pdf/info"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/plain")
                    .set_body_string("hello"),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let parsed = client
            .request(
                Method::POST,
                "/pdf/info",
                &[],
                RequestBody::Json(json!({"url": "x"})),
            )
            .await
            .expect("parsed");
        assert_eq!(parsed, json!({"result": "hello"}));
    }

    #[tokio::test]
    async fn connection_failure_maps_to_network_error() {
        // Nothing listens on this port.
        let client =
            PdfcoClient::new(Some("test-key".to_string())).with_base_url("http://127.0.0.1:9");
        let err = client
            .pdf_info("https://files.example/a.pdf")
            .await
            .expect_err("error");
        assert_eq!(err.status, NETWORK_ERROR_STATUS);
        assert!(err.message.starts_with("Network error:"), "{}", err.message);
    }

    #[tokio::test]
    async fn timeout_maps_to_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pdf/info"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"error": false}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = test_client(&server).with_timeout(Duration::from_millis(50));
        let err = client
            .pdf_info("https://files.example/a.pdf")
            .await
            .expect_err("error");
        assert_eq!(err.status, NETWORK_ERROR_STATUS);
        assert!(err.message.starts_with("Network error:"), "{}", err.message);
    }

    #[tokio::test]
    async fn concurrent_first_calls_share_one_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pdf/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": false})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert!(!client.session.initialized());

        let (first, second) = tokio::join!(
            client.pdf_info("https://files.example/a.pdf"),
            client.pdf_info("https://files.example/b.pdf"),
        );
        first.expect("first call");
        second.expect("second call");
        assert!(client.session.initialized());
    }

    #[tokio::test]
    async fn close_then_call_recreates_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pdf/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": false})))
            .mount(&server)
            .await;

        let mut client = test_client(&server);
        client.open().await.expect("open");
        assert!(client.session.initialized());

        client.close();
        assert!(!client.session.initialized());

        client
            .pdf_info("https://files.example/a.pdf")
            .await
            .expect("recreated session");
        assert!(client.session.initialized());
    }

    #[tokio::test]
    async fn watermark_opacity_becomes_alpha_prefix() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pdf/edit/add"))
            .and(body_partial_json(json!({
                "name": "watermarked.pdf",
                "annotations": [{"text": "DRAFT", "color": "7FFF0000", "pages": "0-"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": false,
                "url": "https://files.example/out.pdf"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .pdf_add_watermark(
                "https://files.example/a.pdf",
                "DRAFT",
                100,
                100,
                24,
                "FF0000",
                0.5,
                "0-",
                "watermarked.pdf",
            )
            .await
            .expect("success");
        assert_eq!(response.url.as_deref(), Some("https://files.example/out.pdf"));
    }

    #[tokio::test]
    async fn merge_joins_source_urls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pdf/merge"))
            .and(body_partial_json(json!({
                "url": "https://files.example/a.pdf,https://files.example/b.pdf",
                "name": "merged.pdf",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": false,
                "url": "https://files.example/merged.pdf",
                "pageCount": 9
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .pdf_merge(
                &[
                    "https://files.example/a.pdf".to_string(),
                    "https://files.example/b.pdf".to_string(),
                ],
                "merged.pdf",
                false,
            )
            .await
            .expect("success");
        assert_eq!(response.page_count, Some(9));
    }

    #[tokio::test]
    async fn file_upload_sends_raw_body_and_name_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/file/upload"))
            .and(query_param("name", "sample.pdf"))
            .and(header("content-type", "application/octet-stream"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": false,
                "url": "https://files.example/sample.pdf",
                "name": "sample.pdf"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .file_upload("sample.pdf", b"%PDF-1.4".to_vec())
            .await
            .expect("success");
        assert_eq!(response.name.as_deref(), Some("sample.pdf"));
    }
}
