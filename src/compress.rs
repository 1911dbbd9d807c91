use crate::constants::{LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL, ZOPFLI_ITERATIONS};
use crate::error::{CompressionError, Result};
use crate::paths::derive_output_path;
use crate::request::{bytes_to_kb, compression_ratio, CompressionResult};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use oxipng::{Deflaters, InFile, Options, OutFile};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::num::NonZeroU8;
use std::path::{Path, PathBuf};

/// Compresses one image file: decode, normalize, re-encode at the given
/// quality next to the original, and measure before/after sizes.
///
/// PNG sources are flattened to 3-channel RGB before re-encoding, which
/// drops any alpha channel. That matches the tool's fixed normalization
/// rule and is intentional.
pub fn compress_single(input: &Path, quality: u8) -> Result<CompressionResult> {
    let original_bytes = fs::metadata(input)
        .map_err(|e| CompressionError::Decode(input.to_path_buf(), e.to_string()))?
        .len();
    if original_bytes == 0 {
        return Err(CompressionError::InvalidInput(input.to_path_buf()));
    }

    let (img, source_format) = decode_image(input)?;

    let img = match source_format {
        Some(ImageFormat::Png) => DynamicImage::ImageRgb8(img.to_rgb8()),
        _ => img,
    };

    let output_path = derive_output_path(input);
    encode_image(&img, &output_path, quality)?;

    let compressed_bytes = fs::metadata(&output_path)
        .map_err(|e| CompressionError::Encode(output_path.clone(), e.to_string()))?
        .len();

    let original_kb = bytes_to_kb(original_bytes);
    let compressed_kb = bytes_to_kb(compressed_bytes);

    Ok(CompressionResult {
        file_name: input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.to_string_lossy().into_owned()),
        original_kb,
        compressed_kb,
        ratio: compression_ratio(original_kb, compressed_kb),
        output_path,
    })
}

/// Opens and decodes an image, detecting the source format from file
/// content rather than the extension.
fn decode_image(input: &Path) -> Result<(DynamicImage, Option<ImageFormat>)> {
    let decode_err = |e: String| CompressionError::Decode(input.to_path_buf(), e);

    let reader = ImageReader::open(input)
        .map_err(|e| decode_err(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_err(e.to_string()))?;
    let format = reader.format();
    let img = reader.decode().map_err(|e| decode_err(e.to_string()))?;

    Ok((img, format))
}

fn encode_image(img: &DynamicImage, output: &Path, quality: u8) -> Result<()> {
    let encode_err = |e: String| CompressionError::Encode(output.to_path_buf(), e);

    let format = ImageFormat::from_path(output).map_err(|e| encode_err(e.to_string()))?;

    match format {
        ImageFormat::Jpeg => {
            let file = File::create(output).map_err(|e| encode_err(e.to_string()))?;
            let mut writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
            img.write_with_encoder(encoder)
                .map_err(|e| encode_err(e.to_string()))?;
            writer.flush().map_err(|e| encode_err(e.to_string()))?;
        }
        ImageFormat::Png => {
            save_optimized_png(img, output, quality)?;
        }
        _ => {
            img.save_with_format(output, format)
                .map_err(|e| encode_err(e.to_string()))?;
        }
    }

    Ok(())
}

/// PNG has no quality knob in the encoder itself, so the quality setting
/// selects the oxipng deflate effort tier instead.
fn save_optimized_png(img: &DynamicImage, output: &Path, quality: u8) -> Result<()> {
    let encode_err = |e: String| CompressionError::Encode(output.to_path_buf(), e);

    let temp_path = output.with_extension("tmp.png");
    img.save_with_format(&temp_path, ImageFormat::Png)
        .map_err(|e| encode_err(e.to_string()))?;

    struct TempFileGuard(PathBuf);
    impl Drop for TempFileGuard {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }
    let _guard = TempFileGuard(temp_path.clone());

    let mut options = Options::from_preset(4);
    options.force = true;
    options.deflate = if quality >= 90 {
        Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).unwrap(),
        }
    } else if quality >= 70 {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        }
    };

    let input = InFile::Path(temp_path.clone());
    let out = OutFile::Path {
        path: Some(output.to_path_buf()),
        preserve_attrs: false,
    };
    oxipng::optimize(&input, &out, &options).map_err(|e| encode_err(e.to_string()))?;

    Ok(())
}
