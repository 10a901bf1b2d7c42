//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Grayscale, RGB and CMYK sources are all decoded to
//! 32-bit RGB.

use crate::{IoError, IoResult};
use bandcrop_core::{ImageFormat, Raster, color};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use std::io::{Read, Write};

/// Default quality used by [`write_jpeg`].
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let n = width as usize * height as usize;

    let pixels: Vec<u32> = match info.pixel_format {
        PixelFormat::L8 => data.iter().map(|&g| color::compose_rgb(g, g, g)).collect(),
        // Big-endian samples, keep the high byte
        PixelFormat::L16 => data
            .chunks_exact(2)
            .map(|s| color::compose_rgb(s[0], s[0], s[0]))
            .collect(),
        PixelFormat::RGB24 => data
            .chunks_exact(3)
            .map(|p| color::compose_rgb(p[0], p[1], p[2]))
            .collect(),
        PixelFormat::CMYK32 => data
            .chunks_exact(4)
            .map(|p| {
                let k = p[3] as u32;
                let conv = |c: u8| (255 - ((c as u32 * (255 - k)) / 255 + k).min(255)) as u8;
                color::compose_rgb(conv(p[0]), conv(p[1]), conv(p[2]))
            })
            .collect(),
    };

    if pixels.len() != n {
        return Err(IoError::InvalidData(format!(
            "JPEG produced {} pixels, expected {}",
            pixels.len(),
            n
        )));
    }

    Ok(Raster::from_pixels(width, height, 3, pixels)?.with_informat(ImageFormat::Jpeg))
}

/// Write a raster as a baseline RGB JPEG.
///
/// Alpha is dropped. `quality` is clamped to 1..=100.
pub fn write_jpeg<W: Write>(raster: &Raster, writer: W, quality: u8) -> IoResult<()> {
    let width = u16::try_from(raster.width()).map_err(|_| {
        IoError::EncodeError(format!("width {} exceeds JPEG limit", raster.width()))
    })?;
    let height = u16::try_from(raster.height()).map_err(|_| {
        IoError::EncodeError(format!("height {} exceeds JPEG limit", raster.height()))
    })?;

    let mut data = Vec::with_capacity(raster.data().len() * 3);
    for &pixel in raster.data() {
        let (r, g, b) = color::extract_rgb(pixel);
        data.extend_from_slice(&[r, g, b]);
    }

    let encoder = Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(&data, width, height, ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn close(a: (u8, u8, u8), b: (u8, u8, u8), tol: i32) -> bool {
        (a.0 as i32 - b.0 as i32).abs() <= tol
            && (a.1 as i32 - b.1 as i32).abs() <= tol
            && (a.2 as i32 - b.2 as i32).abs() <= tol
    }

    #[test]
    fn test_jpeg_roundtrip_flat_colors() {
        let mut raster = Raster::new_filled(32, 32, color::compose_rgb(240, 240, 240))
            .unwrap()
            .to_mut();
        for y in 16..32 {
            for x in 0..32 {
                raster.set_rgb(x, y, 20, 20, 20).unwrap();
            }
        }
        let raster: Raster = raster.into();

        let mut buffer = Vec::new();
        write_jpeg(&raster, &mut buffer, 95).unwrap();

        let decoded = read_jpeg(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.width(), 32);
        assert_eq!(decoded.height(), 32);
        assert_eq!(decoded.informat(), ImageFormat::Jpeg);
        assert!(close(decoded.get_rgb(4, 4).unwrap(), (240, 240, 240), 8));
        assert!(close(decoded.get_rgb(4, 28).unwrap(), (20, 20, 20), 8));
    }

    #[test]
    fn test_jpeg_garbage() {
        let result = read_jpeg(Cursor::new(vec![0xFF, 0xD8, 0xFF, 0x00, 0x01]));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
