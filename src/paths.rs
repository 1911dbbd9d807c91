use crate::constants::COMPRESSED_SUFFIX;
use std::path::{Path, PathBuf};

/// Derives the output path for a compressed copy: same directory, same
/// extension, `_compressed` inserted before the extension. Pure path
/// arithmetic, never touches the filesystem, and always distinct from the
/// input so the original is never overwritten.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();

    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, COMPRESSED_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, COMPRESSED_SUFFIX),
    };

    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
