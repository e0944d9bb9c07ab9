use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, RgbaImage};
use tracing::{info, warn};

use crate::error::Result;
use crate::types::OutputFormat;

const JPEG_QUALITY: u8 = 100;

/// Encode the composite into an in-memory buffer.
pub fn encode_image(img: &RgbaImage, format: OutputFormat) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match format {
        OutputFormat::Png => {
            img.write_with_encoder(PngEncoder::new(&mut buf))?;
        }
        OutputFormat::Jpeg => {
            if img.pixels().any(|p| p[3] != 255) {
                warn!("JPEG has no alpha channel; transparency will be discarded");
            }
            let rgb = DynamicImage::ImageRgba8(img.clone()).to_rgb8();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY))?;
        }
    }
    Ok(buf)
}

/// Encode fully before touching the filesystem so a failed encode leaves no file.
pub fn write_image(output: &Path, img: &RgbaImage, format: OutputFormat) -> Result<()> {
    let bytes = encode_image(img, format)?;
    std::fs::write(output, &bytes)?;
    info!(
        "Wrote {} {}x{} to {:?} ({} bytes)",
        format,
        img.width(),
        img.height(),
        output,
        bytes.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn png_roundtrip_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = RgbaImage::from_pixel(5, 4, Rgba([1, 2, 3, 40]));
        write_image(&path, &img, OutputFormat::Png).unwrap();

        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back, img);
    }

    #[test]
    fn jpeg_output_decodes_as_rgb() {
        let img = RgbaImage::from_pixel(16, 8, Rgba([200, 100, 50, 255]));
        let bytes = encode_image(&img, OutputFormat::Jpeg).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn png_encoding_is_deterministic() {
        let img = RgbaImage::from_fn(32, 9, |x, y| Rgba([x as u8 * 7, y as u8 * 20, 3, 255]));
        assert_eq!(
            encode_image(&img, OutputFormat::Png).unwrap(),
            encode_image(&img, OutputFormat::Png).unwrap()
        );
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let img = RgbaImage::new(1, 1);
        let err = write_image(Path::new("/no/such/dir/out.png"), &img, OutputFormat::Png);
        assert!(matches!(err, Err(crate::error::Error::Io(_))));
    }
}
