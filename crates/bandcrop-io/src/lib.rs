//! bandcrop-io - Frame image I/O
//!
//! Decodes extracted video frames into [`Raster`]s and writes debug
//! artifacts back out.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature |
//! |--------|------|-------|---------|
//! | PNG    | Yes  | Yes   | `png-format` |
//! | JPEG   | Yes  | Yes   | `jpeg` |
//!
//! # Examples
//!
//! ```no_run
//! use bandcrop_io::{read_image, write_image, ImageFormat};
//!
//! let frame = read_image("video-frame.jpg").unwrap();
//! write_image(&frame, "copy.png", ImageFormat::Png).unwrap();
//! ```

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use bandcrop_core::ImageFormat;
pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};

use bandcrop_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path, sniffing the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    let raster = read_image_format(BufReader::new(file), format)?;
    log::debug!(
        "decoded {} ({:?}, {}x{})",
        path.display(),
        format,
        raster.width(),
        raster.height()
    );
    Ok(raster)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Raster> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

fn read_image_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<Raster> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "reading {:?} is not enabled",
            other
        ))),
    }
}

/// Encode an image into an in-memory buffer.
pub fn write_image_mem(raster: &Raster, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(raster, &mut buffer, format)?;
    Ok(buffer)
}

/// Write an image to a file path.
///
/// `ImageFormat::Unknown` picks the format from the path's extension.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let format = match format {
        ImageFormat::Unknown => path
            .extension()
            .and_then(|e| e.to_str())
            .map(ImageFormat::from_extension)
            .unwrap_or(ImageFormat::Unknown),
        f => f,
    };

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_format(raster, &mut writer, format)?;
    writer.flush()?;
    log::debug!("wrote {} ({:?})", path.display(), format);
    Ok(())
}

fn write_image_format<W: Write>(raster: &Raster, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(raster, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(raster, writer, jpeg::DEFAULT_JPEG_QUALITY),
        other => {
            let _ = writer;
            Err(IoError::UnsupportedFormat(format!(
                "writing {:?} is not enabled",
                other
            )))
        }
    }
}
