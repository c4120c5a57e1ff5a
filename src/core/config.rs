/// Leading bytes of an ID3v2-tagged MP3 ("ID").
pub const MP3_SIGNATURE: [u8; 2] = [0x49, 0x44];

/// Key of the binary payload inside an artwork container.
pub const ARTWORK_DATA_KEY: &str = "data";
/// Key of the MIME type inside an artwork container.
pub const ARTWORK_MIME_KEY: &str = "mime";

pub const PROGRAM_LOG_LEVEL: &str = "MTINFO_LOG";
pub const PROGRAM_STRICT_MODE: &str = "MTINFO_STRICT";

/// Metadata group names reported by the default media provider.
pub const ID3V1_FORMAT: &str = "org.id3v1";
pub const ID3V2_FORMAT: &str = "org.id3v2";
