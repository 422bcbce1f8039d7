//! Compression schemes for archived rotations.

use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Deserialize;
use std::fmt;
use std::io::{self, Write};

/// Compression applied to a rotation while its contents are copied over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionScheme {
    /// Plain byte-for-byte copy.
    #[default]
    None,
    /// Gzip via flate2 at the default compression level.
    Gzip,
}

impl CompressionScheme {
    /// File extension (without the dot) that marks a compressed rotation.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Gzip => "gz",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
        }
    }

    /// Appends `.<extension>` to `name` unless the scheme has no extension or
    /// the name already ends with it, so repeated application cannot stack
    /// suffixes like `.gz.gz`.
    #[must_use]
    pub fn append_extension(self, name: &str) -> String {
        let ext = self.extension();
        if ext.is_empty() || name.ends_with(&format!(".{ext}")) {
            return name.to_string();
        }
        format!("{name}.{ext}")
    }

    /// Wraps `writer` in the scheme's encoder. The plain variant passes bytes
    /// through untouched, so callers stream the same way for both.
    pub fn wrap<W: Write>(self, writer: W) -> CompressionWriter<W> {
        match self {
            Self::None => CompressionWriter::Plain(writer),
            Self::Gzip => CompressionWriter::Gzip(GzEncoder::new(writer, Compression::default())),
        }
    }
}

impl fmt::Display for CompressionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either a raw writer or a gzip encoder around one, behind a single `Write`.
pub enum CompressionWriter<W: Write> {
    Plain(W),
    Gzip(GzEncoder<W>),
}

impl<W: Write> CompressionWriter<W> {
    /// Flushes encoder state and returns the inner writer. The gzip trailer is
    /// only written here, so skipping `finish` truncates the archive.
    ///
    /// # Errors
    /// I/O failure writing buffered or trailer bytes.
    pub fn finish(self) -> io::Result<W> {
        match self {
            Self::Plain(writer) => Ok(writer),
            Self::Gzip(encoder) => encoder.finish(),
        }
    }
}

impl<W: Write> Write for CompressionWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(writer) => writer.write(buf),
            Self::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(writer) => writer.flush(),
            Self::Gzip(encoder) => encoder.flush(),
        }
    }
}
