use serde_json::json;

pub const TOOL_PDF_TO_TEXT: &str = "pdf_to_text";
pub const TOOL_PDF_TO_JSON: &str = "pdf_to_json";
pub const TOOL_PDF_TO_HTML: &str = "pdf_to_html";
pub const TOOL_PDF_TO_CSV: &str = "pdf_to_csv";
pub const TOOL_PDF_MERGE: &str = "pdf_merge";
pub const TOOL_PDF_SPLIT: &str = "pdf_split";
pub const TOOL_PDF_INFO: &str = "pdf_info";
pub const TOOL_HTML_TO_PDF: &str = "html_to_pdf";
pub const TOOL_URL_TO_PDF: &str = "url_to_pdf";
pub const TOOL_IMAGE_TO_PDF: &str = "image_to_pdf";
pub const TOOL_PDF_ADD_WATERMARK: &str = "pdf_add_watermark";
pub const TOOL_PDF_ROTATE: &str = "pdf_rotate";
pub const TOOL_PDF_COMPRESS: &str = "pdf_compress";
pub const TOOL_PDF_PROTECT: &str = "pdf_protect";
pub const TOOL_PDF_UNLOCK: &str = "pdf_unlock";
pub const TOOL_BARCODE_GENERATE: &str = "barcode_generate";
pub const TOOL_BARCODE_READ: &str = "barcode_read";
pub const TOOL_OCR_PDF: &str = "ocr_pdf";
pub const TOOL_FILE_UPLOAD: &str = "file_upload";

pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

pub fn pdf_to_text_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string", "description": "URL or base64 encoded PDF" },
            "pages": { "type": "string", "description": "Page range, e.g. \"1-3\" or \"1,3,5\"" },
            "async_mode": { "type": "boolean" }
        },
        "required": ["url"],
        "additionalProperties": false
    })
}

pub fn pdf_to_json_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "pages": { "type": "string" }
        },
        "required": ["url"],
        "additionalProperties": false
    })
}

pub fn pdf_to_html_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "pages": { "type": "string" },
            "simple": { "type": "boolean" }
        },
        "required": ["url"],
        "additionalProperties": false
    })
}

pub fn pdf_to_csv_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "pages": { "type": "string" }
        },
        "required": ["url"],
        "additionalProperties": false
    })
}

pub fn pdf_merge_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "urls": {
                "type": "array",
                "items": { "type": "string" },
                "minItems": 1
            },
            "name": { "type": "string" },
            "async_mode": { "type": "boolean" }
        },
        "required": ["urls"],
        "additionalProperties": false
    })
}

pub fn pdf_split_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "pages": { "type": "string", "description": "Ranges to extract, e.g. \"1-3,5-7\"" },
            "split_by_pages": { "type": "boolean" }
        },
        "required": ["url"],
        "additionalProperties": false
    })
}

pub fn pdf_info_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" }
        },
        "required": ["url"],
        "additionalProperties": false
    })
}

pub fn html_to_pdf_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "html": { "type": "string", "description": "HTML content or URL" },
            "name": { "type": "string" },
            "margins": { "type": "string", "description": "top,right,bottom,left, e.g. \"10mm,10mm,10mm,10mm\"" },
            "orientation": { "type": "string", "enum": ["Portrait", "Landscape"] },
            "page_size": { "type": "string", "enum": ["Letter", "A4", "Legal"] }
        },
        "required": ["html"],
        "additionalProperties": false
    })
}

pub fn url_to_pdf_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "name": { "type": "string" },
            "orientation": { "type": "string", "enum": ["Portrait", "Landscape"] },
            "page_size": { "type": "string", "enum": ["Letter", "A4", "Legal"] }
        },
        "required": ["url"],
        "additionalProperties": false
    })
}

pub fn image_to_pdf_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "images": {
                "type": "array",
                "items": { "type": "string" },
                "minItems": 1
            },
            "name": { "type": "string" }
        },
        "required": ["images"],
        "additionalProperties": false
    })
}

pub fn pdf_add_watermark_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "text": { "type": "string" },
            "x": { "type": "integer" },
            "y": { "type": "integer" },
            "font_size": { "type": "integer", "minimum": 1 },
            "color": { "type": "string", "description": "Hex color without #, e.g. FF0000" },
            "opacity": { "type": "number", "minimum": 0.0, "maximum": 1.0 },
            "pages": { "type": "string" },
            "name": { "type": "string" }
        },
        "required": ["url", "text"],
        "additionalProperties": false
    })
}

pub fn pdf_rotate_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "angle": { "type": "integer", "enum": [90, 180, 270, -90] },
            "pages": { "type": "string" }
        },
        "required": ["url", "angle"],
        "additionalProperties": false
    })
}

pub fn pdf_compress_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "compression_level": {
                "type": "string",
                "enum": ["low", "balanced", "high", "extreme"]
            }
        },
        "required": ["url"],
        "additionalProperties": false
    })
}

pub fn pdf_protect_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "owner_password": { "type": "string" },
            "user_password": { "type": "string" },
            "allow_print": { "type": "boolean" },
            "allow_copy": { "type": "boolean" }
        },
        "required": ["url", "owner_password"],
        "additionalProperties": false
    })
}

pub fn pdf_unlock_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "password": { "type": "string" }
        },
        "required": ["url", "password"],
        "additionalProperties": false
    })
}

pub fn barcode_generate_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "value": { "type": "string" },
            "barcode_type": {
                "type": "string",
                "enum": ["QRCode", "Code128", "Code39", "EAN13", "EAN8", "UPCA", "UPCE"]
            },
            "format": { "type": "string", "enum": ["png", "jpg", "svg"] }
        },
        "required": ["value"],
        "additionalProperties": false
    })
}

pub fn barcode_read_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string", "description": "Image URL or base64 encoded image" },
            "barcode_types": {
                "type": "array",
                "items": {
                    "type": "string",
                    "enum": ["QRCode", "Code128", "Code39", "EAN13", "EAN8", "UPCA", "UPCE"]
                }
            }
        },
        "required": ["url"],
        "additionalProperties": false
    })
}

pub fn ocr_pdf_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": { "type": "string" },
            "pages": { "type": "string" },
            "lang": { "type": "string", "description": "Language code: eng, spa, fra, deu, ..." }
        },
        "required": ["url"],
        "additionalProperties": false
    })
}

pub fn file_upload_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "path": { "type": "string" },
            "base64": { "type": "string" },
            "name": { "type": "string" }
        },
        "oneOf": [
            { "required": ["path"] },
            { "required": ["base64"] }
        ],
        "additionalProperties": false
    })
}
