use serde_json::json;

pub mod contracts;
pub mod errors;

pub fn tool_definitions() -> Vec<serde_json::Value> {
    vec![
        json!({
            "name": contracts::TOOL_PDF_TO_TEXT,
            "description": "Extract text from PDF.",
            "inputSchema": contracts::pdf_to_text_schema()
        }),
        json!({
            "name": contracts::TOOL_PDF_TO_JSON,
            "description": "Extract structured data from PDF.",
            "inputSchema": contracts::pdf_to_json_schema()
        }),
        json!({
            "name": contracts::TOOL_PDF_TO_HTML,
            "description": "Convert PDF to HTML.",
            "inputSchema": contracts::pdf_to_html_schema()
        }),
        json!({
            "name": contracts::TOOL_PDF_TO_CSV,
            "description": "Extract tables from PDF to CSV.",
            "inputSchema": contracts::pdf_to_csv_schema()
        }),
        json!({
            "name": contracts::TOOL_PDF_MERGE,
            "description": "Merge multiple PDFs into one.",
            "inputSchema": contracts::pdf_merge_schema()
        }),
        json!({
            "name": contracts::TOOL_PDF_SPLIT,
            "description": "Split PDF into separate pages or ranges.",
            "inputSchema": contracts::pdf_split_schema()
        }),
        json!({
            "name": contracts::TOOL_PDF_INFO,
            "description": "Get PDF metadata (pages, size, etc.).",
            "inputSchema": contracts::pdf_info_schema()
        }),
        json!({
            "name": contracts::TOOL_HTML_TO_PDF,
            "description": "Convert HTML to PDF.",
            "inputSchema": contracts::html_to_pdf_schema()
        }),
        json!({
            "name": contracts::TOOL_URL_TO_PDF,
            "description": "Convert web page URL to PDF.",
            "inputSchema": contracts::url_to_pdf_schema()
        }),
        json!({
            "name": contracts::TOOL_IMAGE_TO_PDF,
            "description": "Convert images to PDF.",
            "inputSchema": contracts::image_to_pdf_schema()
        }),
        json!({
            "name": contracts::TOOL_PDF_ADD_WATERMARK,
            "description": "Add text watermark/annotation to PDF.",
            "inputSchema": contracts::pdf_add_watermark_schema()
        }),
        json!({
            "name": contracts::TOOL_PDF_ROTATE,
            "description": "Rotate PDF pages.",
            "inputSchema": contracts::pdf_rotate_schema()
        }),
        json!({
            "name": contracts::TOOL_PDF_COMPRESS,
            "description": "Compress PDF file size.",
            "inputSchema": contracts::pdf_compress_schema()
        }),
        json!({
            "name": contracts::TOOL_PDF_PROTECT,
            "description": "Add password protection to PDF.",
            "inputSchema": contracts::pdf_protect_schema()
        }),
        json!({
            "name": contracts::TOOL_PDF_UNLOCK,
            "description": "Remove password from PDF.",
            "inputSchema": contracts::pdf_unlock_schema()
        }),
        json!({
            "name": contracts::TOOL_BARCODE_GENERATE,
            "description": "Generate barcode images.",
            "inputSchema": contracts::barcode_generate_schema()
        }),
        json!({
            "name": contracts::TOOL_BARCODE_READ,
            "description": "Read barcodes from images.",
            "inputSchema": contracts::barcode_read_schema()
        }),
        json!({
            "name": contracts::TOOL_OCR_PDF,
            "description": "OCR scanned PDFs to searchable text.",
            "inputSchema": contracts::ocr_pdf_schema()
        }),
        json!({
            "name": contracts::TOOL_FILE_UPLOAD,
            "description": "Upload local or inline file content for processing.",
            "inputSchema": contracts::file_upload_schema()
        }),
    ]
}
