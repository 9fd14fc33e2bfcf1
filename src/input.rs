use crate::mcp::contracts::MAX_UPLOAD_BYTES;
use crate::mcp::errors;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

/// Inline file content destined for the upstream upload endpoint.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub bytes: Vec<u8>,
    pub source: String,
}

#[derive(Debug, Clone)]
pub struct InputError {
    pub kind: &'static str,
    pub message: String,
}

impl InputError {
    fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(errors::INVALID_INPUT, message)
    }

    fn too_large(message: impl Into<String>) -> Self {
        Self::new(errors::TOO_LARGE, message)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for InputError {}

/// Load upload content from either a local `path` or inline `base64`
/// arguments. Exactly one of the two must be present.
pub fn load_upload(args: &Value) -> Result<UploadPayload, InputError> {
    let obj = args
        .as_object()
        .ok_or_else(|| InputError::invalid_input("arguments must be an object"))?;

    let path_value = obj.get("path");
    let base64_value = obj.get("base64");

    match (path_value, base64_value) {
        (None, None) => {
            return Err(InputError::invalid_input(
                "either path or base64 is required",
            ));
        }
        (Some(_), Some(_)) => {
            return Err(InputError::invalid_input(
                "path and base64 cannot both be set",
            ));
        }
        _ => {}
    }

    if let Some(value) = path_value {
        let path = value
            .as_str()
            .ok_or_else(|| InputError::invalid_input("path must be a string"))?;
        let path_ref = Path::new(path);
        let metadata = fs::metadata(path_ref)
            .map_err(|_| InputError::invalid_input("path must exist and be a file"))?;
        if !metadata.is_file() {
            return Err(InputError::invalid_input("path must be a file"));
        }
        let len = metadata.len();
        if len > MAX_UPLOAD_BYTES {
            return Err(InputError::too_large(format!(
                "upload exceeds limit: {len} bytes (max {MAX_UPLOAD_BYTES})"
            )));
        }
        let bytes = fs::read(path_ref)
            .map_err(|_| InputError::invalid_input("failed to read path contents"))?;
        return Ok(UploadPayload {
            bytes,
            source: format!("path:{path}"),
        });
    }

    let value = base64_value.expect("base64 must be present here");
    let base64_str = value
        .as_str()
        .ok_or_else(|| InputError::invalid_input("base64 must be a string"))?;
    let bytes = STANDARD
        .decode(base64_str.as_bytes())
        .map_err(|_| InputError::invalid_input("base64 must be valid"))?;
    if bytes.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(InputError::too_large(format!(
            "upload exceeds limit: {} bytes (max {MAX_UPLOAD_BYTES})",
            bytes.len()
        )));
    }
    Ok(UploadPayload {
        bytes,
        source: "base64".to_string(),
    })
}
