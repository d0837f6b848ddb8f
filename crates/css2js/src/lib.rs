//! Embed CSS into JavaScript.
//!
//! This crate turns a stylesheet into a JavaScript statement that, when run in
//! a browser, creates a `<style>` element and fills it with the CSS. Instead
//! of shipping a separate stylesheet, a library can carry its styles inside
//! its script.
//!
//! ## Features
//!
//! - **Buffers and streams**: whole files or chunked sources, with identical
//!   output for any chunking
//! - **Line handling**: `\r\n`, `\r` and `\n` all normalize the same way;
//!   optional splitting into concatenated literals, trimming of spaces before
//!   newlines and of trailing newlines
//! - **Encodings**: WHATWG encoding labels, falling back to UTF-8
//! - **Custom wrappers**: replace the default `<style>` injector with any
//!   prefix/suffix pair
//!
//! ## Example Usage
//!
//! ```rust
//! use css2js::{Css2JsOptions, escape, wrap};
//!
//! let options = Css2JsOptions::new()
//!     .with_prefix("var css = \"")
//!     .with_suffix("\";");
//!
//! let js = wrap(&escape("a { color: red }\nb { color: blue }\n", &options), &options);
//! assert_eq!(js, "var css = \"a { color: red }\\n\" +\n\"b { color: blue }\";");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! bytes ─▶ decode ─▶ Transcoder (escape, per chunk) ─▶ Wrapper (prefix + body + suffix)
//! ```

pub mod decode;
pub mod error;
pub mod escape;
pub mod file;
pub mod options;
pub mod stream;
pub mod wrapper;

pub use decode::{ChunkDecoder, decode_buffer, resolve_encoding};
pub use error::{Error, Result};
pub use escape::{Transcoder, escape};
pub use file::{ByteStream, Contents, ReadMode, SourceFile, convert, replace_extension};
pub use options::Css2JsOptions;
pub use stream::{DEFAULT_CHUNK_SIZE, css_to_js_stream, decode_stream, escape_stream, read_chunks};
pub use wrapper::{DEFAULT_PREFIX, DEFAULT_SUFFIX, Wrapper, wrap};

pub use encoding_rs::Encoding;
