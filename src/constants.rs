pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Suffix inserted before the extension of every derived output path.
pub const COMPRESSED_SUFFIX: &str = "_compressed";

/// Extensions the shell-side file selection accepts when expanding
/// directories and glob patterns. The compressor itself takes any format
/// the image crate can decode.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;
