use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;
use std::io::{BufWriter, Write};
use std::path::Path;

const MAGIC: &[u8] = b"P6";
const MAX_VALUE: u32 = 255;

#[derive(Debug)]
pub enum PpmError {
    Io(std::io::Error),
    InvalidMagic,
    InvalidHeader { reason: String },
    UnsupportedMaxValue { max_value: u32 },
    TruncatedData { expected: usize, actual: usize },
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for PpmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {}", err),
            Self::InvalidMagic => write!(f, "not a binary PPM (expected P6)"),
            Self::InvalidHeader { reason } => write!(f, "invalid PPM header: {}", reason),
            Self::UnsupportedMaxValue { max_value } => {
                write!(f, "unsupported max value {} (expected {})", max_value, MAX_VALUE)
            }
            Self::TruncatedData { expected, actual } => {
                write!(f, "expected {} bytes of pixel data, found {}", expected, actual)
            }
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for PpmError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PpmError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<PixelBufferError> for PpmError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Writes and reads frames as binary PPM (P6, 8 bits per channel).
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    type Failure = PpmError;

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), PpmError> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        write_ppm(&mut file, buffer)?;
        file.flush()?;

        Ok(())
    }

    fn load(&self, filepath: impl AsRef<Path>) -> Result<PixelBuffer, PpmError> {
        let bytes = std::fs::read(filepath)?;

        read_ppm(&bytes)
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_ppm(writer: &mut impl Write, buffer: &PixelBuffer) -> std::io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // P6 means binary RGB, then width, height and max colour value
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "{}", MAX_VALUE)?;
    writer.write_all(buffer.buffer())
}

/// Parses a P6 image. Header tokens may be separated by any whitespace and
/// interleaved with `#` comments. Bytes after the pixel data are ignored.
pub fn read_ppm(bytes: &[u8]) -> Result<PixelBuffer, PpmError> {
    let mut header = HeaderCursor { bytes, position: 0 };

    if header.next_token() != Some(MAGIC) {
        return Err(PpmError::InvalidMagic);
    }

    let width = header.next_number("width")?;
    let height = header.next_number("height")?;
    let max_value = header.next_number("max value")?;

    if max_value != MAX_VALUE {
        return Err(PpmError::UnsupportedMaxValue { max_value });
    }

    // exactly one whitespace byte separates the header from the raster
    match bytes.get(header.position) {
        Some(byte) if byte.is_ascii_whitespace() => header.position += 1,
        _ => {
            return Err(PpmError::InvalidHeader {
                reason: "missing separator before pixel data".to_string(),
            });
        }
    }

    let pixel_rect = PixelRect::with_size(width, height).map_err(|err| PpmError::InvalidHeader {
        reason: err.to_string(),
    })?;

    let expected = (pixel_rect.size() as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or_else(|| PpmError::InvalidHeader {
            reason: format!("image {}x{} is too large", width, height),
        })?;
    let data = &bytes[header.position..];

    if data.len() < expected {
        return Err(PpmError::TruncatedData {
            expected,
            actual: data.len(),
        });
    }

    Ok(PixelBuffer::from_data(pixel_rect, data[..expected].to_vec())?)
}

struct HeaderCursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> HeaderCursor<'a> {
    fn next_token(&mut self) -> Option<&'a [u8]> {
        loop {
            match self.bytes.get(self.position) {
                Some(byte) if byte.is_ascii_whitespace() => self.position += 1,
                Some(b'#') => self.skip_comment(),
                Some(_) => break,
                None => return None,
            }
        }

        let start = self.position;
        while matches!(self.bytes.get(self.position), Some(byte) if !byte.is_ascii_whitespace() && *byte != b'#')
        {
            self.position += 1;
        }

        Some(&self.bytes[start..self.position])
    }

    fn skip_comment(&mut self) {
        while let Some(&byte) = self.bytes.get(self.position) {
            self.position += 1;
            if byte == b'\n' {
                break;
            }
        }
    }

    fn next_number(&mut self, field: &str) -> Result<u32, PpmError> {
        let token = self.next_token().ok_or_else(|| PpmError::InvalidHeader {
            reason: format!("missing {}", field),
        })?;

        std::str::from_utf8(token)
            .ok()
            .and_then(|text| text.parse().ok())
            .ok_or_else(|| PpmError::InvalidHeader {
                reason: format!("{} is not a number: {:?}", field, String::from_utf8_lossy(token)),
            })
    }
}
