//! Photos picked in the visual diagnostic panel.

use anyhow::{bail, Context};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bsn_intel::Query;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub mime_type: String,
    pub bytes: Vec<u8>,
    /// The original `data:` URL, reused as the preview `src`.
    pub preview: String,
}

impl ImageUpload {
    /// Decode a `data:<mime>;base64,<payload>` URL as produced by `FileReader`.
    pub fn from_data_url(url: &str) -> anyhow::Result<Self> {
        let rest = url.strip_prefix("data:").context("not a data: URL")?;
        let (meta, payload) = rest.split_once(',').context("data: URL has no payload")?;
        let Some(mime_type) = meta.strip_suffix(";base64") else {
            bail!("data: URL is not base64-encoded");
        };
        if !mime_type.starts_with("image/") {
            bail!("unsupported upload type {mime_type:?}");
        }
        let bytes = STANDARD.decode(payload).context("invalid base64 payload")?;
        Ok(Self {
            mime_type: mime_type.to_string(),
            bytes,
            preview: url.to_string(),
        })
    }

    pub fn query(&self) -> Query {
        Query::Image {
            bytes: self.bytes.clone(),
            mime_type: self.mime_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_image_data_url() {
        let upload = ImageUpload::from_data_url("data:image/png;base64,iVBORw==").unwrap();
        assert_eq!(upload.mime_type, "image/png");
        assert_eq!(upload.bytes, vec![0x89, 0x50, 0x4e, 0x47]);
        assert!(matches!(upload.query(), Query::Image { ref mime_type, .. } if mime_type == "image/png"));
    }

    #[test]
    fn rejects_non_images_and_plain_text_urls() {
        assert!(ImageUpload::from_data_url("data:text/plain;base64,aGk=").is_err());
        assert!(ImageUpload::from_data_url("data:image/png,raw").is_err());
        assert!(ImageUpload::from_data_url("https://example.com/a.png").is_err());
        assert!(ImageUpload::from_data_url("data:image/jpeg;base64,***").is_err());
    }
}
