use image::DynamicImage;
use log::trace;

/// Embedded cover image, decoded once at construction.
#[derive(Debug, Clone)]
pub struct CoverArt {
    image: DynamicImage,
    mime_type: Option<String>,
    data: Vec<u8>,
}

impl CoverArt {
    /// Returns `None` when the payload is not a decodable image.
    pub fn decode(data: Vec<u8>, mime_type: Option<String>) -> Option<Self> {
        match image::load_from_memory(&data) {
            Ok(image) => Some(Self {
                image,
                mime_type,
                data,
            }),
            Err(e) => {
                trace!("[art] undecodable artwork ({} bytes): {e}", data.len());
                None
            }
        }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// MIME type as stored in the tag (e.g. `image/jpeg`), if any.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Raw payload the image was decoded from.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}
