use anyhow::Context;
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

/// Pixels per QR module, matching the scale the frontend expects.
const MODULE_PX: u32 = 10;

/// Rasterizes a URL into a PNG-encoded QR code.
pub fn encode_png(url: &str) -> anyhow::Result<Vec<u8>> {
    let code = QrCode::new(url.as_bytes()).context("encode qr code")?;
    let img = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PX, MODULE_PX)
        .build();
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).context("encode png")?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_decodable_png() {
        let png = encode_png("https://example.com").unwrap();
        assert!(png.starts_with(b"\x89PNG"));
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), img.height());
        // Smallest QR symbol is 21 modules plus quiet zone.
        assert!(img.width() >= 21 * MODULE_PX);
    }

    #[test]
    fn long_urls_still_encode() {
        let url = format!("https://example.com/{}", "a".repeat(500));
        assert!(encode_png(&url).is_ok());
    }
}
