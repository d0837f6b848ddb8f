//! Source files and per-file conversion.
//!
//! A [`SourceFile`] pairs a path with its [`Contents`], which is either
//! nothing (directories), a complete buffer, or a stream of byte chunks.
//! [`convert`] keeps that shape: a buffer comes back as a buffer, a stream as
//! a stream, and null contents pass through untouched.

use crate::decode::decode_buffer;
use crate::error::{Error, Result};
use crate::escape::escape;
use crate::options::Css2JsOptions;
use crate::stream::{css_to_js_stream, decode_stream, read_chunks};
use crate::wrapper::wrap;
use encoding_rs::Encoding;
use futures::TryStreamExt;
use futures::stream::BoxStream;
use std::fmt;
use std::path::{Path, PathBuf};

/// Byte chunks of a streamed source or output.
pub type ByteStream = BoxStream<'static, std::io::Result<Vec<u8>>>;

/// Payload of a [`SourceFile`].
///
/// The `is_*` helpers let callers such as pipeline filters check the shape
/// without taking the payload.
pub enum Contents {
    Null,
    Buffer(Vec<u8>),
    Stream(ByteStream),
}

impl Contents {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_buffer(&self) -> bool {
        matches!(self, Self::Buffer(_))
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }
}

impl fmt::Debug for Contents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Buffer(bytes) => f.debug_tuple("Buffer").field(&bytes.len()).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// How regular files are read by [`SourceFile::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Read the whole file into memory
    #[default]
    Buffer,
    /// Read the file lazily in chunks of at most `chunk_size` bytes
    Stream { chunk_size: usize },
}

#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: Contents,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, contents: Contents) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }

    /// Load a source from disk.
    ///
    /// Regular files become buffers or streams according to `mode`,
    /// directories become null contents, and anything else (sockets, devices,
    /// FIFOs) is rejected with [`Error::UnsupportedSource`].
    pub async fn load(path: impl Into<PathBuf>, mode: ReadMode) -> Result<Self> {
        let path = path.into();
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| Error::read(&path, e))?;
        let file_type = metadata.file_type();

        let contents = if file_type.is_dir() {
            Contents::Null
        } else if file_type.is_file() {
            match mode {
                ReadMode::Buffer => {
                    let bytes = tokio::fs::read(&path)
                        .await
                        .map_err(|e| Error::read(&path, e))?;
                    Contents::Buffer(bytes)
                }
                ReadMode::Stream { chunk_size } => {
                    let file = tokio::fs::File::open(&path)
                        .await
                        .map_err(|e| Error::read(&path, e))?;
                    Contents::Stream(Box::pin(read_chunks(file, chunk_size)))
                }
            }
        } else {
            return Err(Error::UnsupportedSource {
                kind: describe_file_type(&file_type),
                path,
            });
        };

        Ok(Self { path, contents })
    }
}

#[cfg(unix)]
fn describe_file_type(file_type: &std::fs::FileType) -> &'static str {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_socket() {
        "socket"
    } else if file_type.is_fifo() {
        "fifo"
    } else if file_type.is_block_device() {
        "block device"
    } else if file_type.is_char_device() {
        "character device"
    } else if file_type.is_symlink() {
        "symlink"
    } else {
        "unknown"
    }
}

#[cfg(not(unix))]
fn describe_file_type(file_type: &std::fs::FileType) -> &'static str {
    if file_type.is_symlink() {
        "symlink"
    } else {
        "unknown"
    }
}

/// Replace (or add) the extension of `path`.
pub fn replace_extension(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

/// Convert one source file into its JavaScript counterpart.
///
/// Buffers are converted eagerly. Streams are converted lazily: the returned
/// stream pulls from the source as it is polled. Converted files get a `.js`
/// extension.
pub fn convert(
    file: SourceFile,
    options: &Css2JsOptions,
    encoding: &'static Encoding,
) -> SourceFile {
    let SourceFile { path, contents } = file;

    match contents {
        Contents::Null => {
            tracing::debug!(path = %path.display(), "passing through null contents");
            SourceFile::new(path, Contents::Null)
        }
        Contents::Buffer(bytes) => {
            tracing::debug!(
                path = %path.display(),
                bytes = bytes.len(),
                encoding = encoding.name(),
                "converting buffered source"
            );
            let css = decode_buffer(&bytes, encoding);
            let js = wrap(&escape(&css, options), options);
            SourceFile::new(
                replace_extension(&path, "js"),
                Contents::Buffer(js.into_bytes()),
            )
        }
        Contents::Stream(source) => {
            tracing::debug!(
                path = %path.display(),
                encoding = encoding.name(),
                "converting streamed source"
            );
            let text = decode_stream(source, encoding);
            let js = css_to_js_stream(text, options.clone()).map_ok(String::into_bytes);
            SourceFile::new(
                replace_extension(&path, "js"),
                Contents::Stream(Box::pin(js)),
            )
        }
    }
}
