//! Typed PDF.co response records and closed parameter sets.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    Low,
    Balanced,
    High,
    Extreme,
}

impl CompressionLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(CompressionLevel::Low),
            "balanced" => Some(CompressionLevel::Balanced),
            "high" => Some(CompressionLevel::High),
            "extreme" => Some(CompressionLevel::Extreme),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompressionLevel::Low => "low",
            CompressionLevel::Balanced => "balanced",
            CompressionLevel::High => "high",
            CompressionLevel::Extreme => "extreme",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Portrait" => Some(Orientation::Portrait),
            "Landscape" => Some(Orientation::Landscape),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Letter,
    A4,
    Legal,
}

impl PageSize {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Letter" => Some(PageSize::Letter),
            "A4" => Some(PageSize::A4),
            "Legal" => Some(PageSize::Legal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PageSize::Letter => "Letter",
            PageSize::A4 => "A4",
            PageSize::Legal => "Legal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeType {
    QrCode,
    Code128,
    Code39,
    Ean13,
    Ean8,
    Upca,
    Upce,
}

impl BarcodeType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "QRCode" => Some(BarcodeType::QrCode),
            "Code128" => Some(BarcodeType::Code128),
            "Code39" => Some(BarcodeType::Code39),
            "EAN13" => Some(BarcodeType::Ean13),
            "EAN8" => Some(BarcodeType::Ean8),
            "UPCA" => Some(BarcodeType::Upca),
            "UPCE" => Some(BarcodeType::Upce),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BarcodeType::QrCode => "QRCode",
            BarcodeType::Code128 => "Code128",
            BarcodeType::Code39 => "Code39",
            BarcodeType::Ean13 => "EAN13",
            BarcodeType::Ean8 => "EAN8",
            BarcodeType::Upca => "UPCA",
            BarcodeType::Upce => "UPCE",
        }
    }

    /// Detection set used when a barcode read does not name any types.
    pub fn all_common() -> &'static [BarcodeType] {
        &[
            BarcodeType::QrCode,
            BarcodeType::Code128,
            BarcodeType::Code39,
            BarcodeType::Ean13,
            BarcodeType::Ean8,
            BarcodeType::Upca,
            BarcodeType::Upce,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeFormat {
    Png,
    Jpg,
    Svg,
}

impl BarcodeFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "png" => Some(BarcodeFormat::Png),
            "jpg" => Some(BarcodeFormat::Jpg),
            "svg" => Some(BarcodeFormat::Svg),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BarcodeFormat::Png => "png",
            BarcodeFormat::Jpg => "jpg",
            BarcodeFormat::Svg => "svg",
        }
    }
}

/// Result of a PDF to text conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfToTextResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of a PDF to JSON extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfToJsonResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfToHtmlResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfToCsvResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfMergeResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of a split; `urls` lists one output file per page or range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfSplitResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Page dimensions in points, as reported by the info endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageRectangle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PdfInfoDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_rectangle: Option<PageRectangle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfInfoResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<PdfInfoDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PdfInfoResponse {
    pub fn page_count(&self) -> Option<i64> {
        self.info.as_ref().and_then(|info| info.page_count)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlToPdfResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlToPdfResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageToPdfResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfWatermarkResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfRotateResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of a compression run, with before/after size statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfCompressResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressed_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfProtectResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfUnlockResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodeGenerateResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One decoded barcode detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodeInfo {
    #[serde(rename = "type")]
    pub barcode_type: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodeReadResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<Vec<BarcodeInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrPdfResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of an inline file upload; `url` addresses the stored file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUploadResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
