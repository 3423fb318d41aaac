//! PNG normalization and output naming.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use regex::Regex;

use crate::error::ScoutResult;

/// Decode arbitrary image bytes and re-encode as RGBA PNG.
///
/// Providers hand back whatever they have: JPEG, WebP, ICO, paletted PNG.
/// Forcing RGBA gives every saved logo an alpha channel so it can sit on
/// any slide background. Already-RGBA input comes out RGBA again.
pub fn normalize_png(bytes: &[u8]) -> ScoutResult<Vec<u8>> {
    let img = image::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();

    let mut out = Cursor::new(Vec::new());
    rgba.write_with_encoder(PngEncoder::new(&mut out))?;
    Ok(out.into_inner())
}

/// File name for a company's logo: punctuation stripped, whitespace and
/// hyphens collapsed to `_`, lowercased, with a `_logo.png` suffix.
/// `"S&P"` becomes `sp_logo.png`. Companies differing only in punctuation
/// can collide; accepted limitation.
pub fn logo_file_name(company: &str) -> String {
    format!("{}_logo.png", clean_stem(company))
}

fn clean_stem(name: &str) -> String {
    let strip = Regex::new(r"[^\w\s-]").expect("cleaner pattern is valid");
    let collapse = Regex::new(r"[-\s]+").expect("cleaner pattern is valid");

    let stripped = strip.replace_all(name, "");
    collapse.replace_all(&stripped, "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat};

    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_rgb_gains_alpha_channel() {
        let input = png_bytes(DynamicImage::new_rgb8(4, 4));
        let normalized = normalize_png(&input).unwrap();
        let reloaded = image::load_from_memory(&normalized).unwrap();
        assert_eq!(reloaded.color(), image::ColorType::Rgba8);
    }

    #[test]
    fn test_already_rgba_stays_rgba() {
        let input = png_bytes(DynamicImage::new_rgba8(4, 4));
        let normalized = normalize_png(&input).unwrap();
        let reloaded = image::load_from_memory(&normalized).unwrap();
        assert_eq!(reloaded.color(), image::ColorType::Rgba8);
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        assert!(normalize_png(b"not an image at all").is_err());
    }

    #[test]
    fn test_file_name_strips_punctuation() {
        assert_eq!(logo_file_name("S&P"), "sp_logo.png");
        assert_eq!(logo_file_name("Digital Realty"), "digital_realty_logo.png");
        assert_eq!(logo_file_name("Keppel DC REIT"), "keppel_dc_reit_logo.png");
    }

    #[test]
    fn test_file_name_collapses_hyphens_and_spaces() {
        assert_eq!(logo_file_name("ST - Telemedia"), "st_telemedia_logo.png");
        assert_eq!(logo_file_name("AirTrunk"), "airtrunk_logo.png");
    }

    #[test]
    fn test_punctuation_only_difference_collides() {
        assert_eq!(logo_file_name("QTS, Inc."), logo_file_name("QTS Inc"));
    }
}
