//! Image intake: validation and reading files into data URLs.

use base64::{engine::general_purpose::STANDARD, Engine};
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::config::{ACCEPTED_MIME_PREFIX, MAX_IMAGE_SIZE, MSG_INVALID_TYPE, MSG_READ_FAILED, MSG_TOO_LARGE};
use crate::types::{AppError, AppResult, SelectedImage};

/// Anything that exposes a MIME type and a byte size, like a browser `File`.
pub trait ImageSource {
    fn mime_type(&self) -> String;
    fn size_bytes(&self) -> u64;
}

impl ImageSource for File {
    fn mime_type(&self) -> String {
        self.type_()
    }

    fn size_bytes(&self) -> u64 {
        self.size() as u64
    }
}

/// Check a candidate upload. Type is checked before size.
pub fn validate_image<F: ImageSource>(file: F) -> AppResult<SelectedImage<F>> {
    let mime_type = file.mime_type();
    if !mime_type.starts_with(ACCEPTED_MIME_PREFIX) {
        return Err(AppError::Validation(MSG_INVALID_TYPE.to_string()));
    }

    let size_bytes = file.size_bytes();
    if size_bytes > MAX_IMAGE_SIZE {
        return Err(AppError::Validation(MSG_TOO_LARGE.to_string()));
    }

    Ok(SelectedImage {
        file,
        mime_type,
        size_bytes,
    })
}

/// Build a `data:<mime>;base64,<payload>` URL.
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Read the whole file into memory.
pub async fn read_file_bytes(file: &File) -> AppResult<Vec<u8>> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| {
            log::error!("Failed to read {}: {:?}", file.name(), e);
            AppError::FileRead(MSG_READ_FAILED.to_string())
        })?;

    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Read a file as a base64 data URL, used both for preview and upload.
pub async fn read_as_data_url(file: &File) -> AppResult<String> {
    let bytes = read_file_bytes(file).await?;
    Ok(encode_data_url(&file.type_(), &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FakeFile {
        mime: &'static str,
        size: u64,
    }

    impl ImageSource for FakeFile {
        fn mime_type(&self) -> String {
            self.mime.to_string()
        }

        fn size_bytes(&self) -> u64 {
            self.size
        }
    }

    #[test]
    fn accepts_images_up_to_the_limit() {
        let selected = validate_image(FakeFile { mime: "image/png", size: MAX_IMAGE_SIZE }).unwrap();
        assert_eq!(selected.mime_type, "image/png");
        assert_eq!(selected.size_bytes, 10_485_760);
    }

    #[test]
    fn rejects_non_images() {
        for mime in ["text/plain", "application/pdf", "", "video/mp4", "Image/png"] {
            let err = validate_image(FakeFile { mime, size: 10 }).unwrap_err();
            assert_eq!(err, AppError::Validation(MSG_INVALID_TYPE.to_string()));
        }
    }

    #[test]
    fn rejects_oversized_images() {
        let err = validate_image(FakeFile { mime: "image/jpeg", size: MAX_IMAGE_SIZE + 1 }).unwrap_err();
        assert_eq!(err.message(), MSG_TOO_LARGE);
    }

    #[test]
    fn type_is_checked_before_size() {
        let err = validate_image(FakeFile { mime: "text/csv", size: MAX_IMAGE_SIZE * 2 }).unwrap_err();
        assert_eq!(err.message(), MSG_INVALID_TYPE);
    }

    #[test]
    fn data_url_format() {
        assert_eq!(encode_data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
        assert_eq!(encode_data_url("", b""), "data:application/octet-stream;base64,");
    }
}
