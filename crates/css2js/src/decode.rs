//! Byte-to-text decoding for buffered and chunked sources.
//!
//! Encoding labels follow the WHATWG Encoding Standard (`utf-8`, `latin1`,
//! `windows-1252`, `shift_jis`, ...). A missing or unknown label falls back to
//! UTF-8 instead of failing the job, and malformed sequences decode to U+FFFD.
//! A byte-order mark, when present, takes precedence over the label.

use encoding_rs::{CoderResult, Decoder, Encoding, UTF_8};
use std::borrow::Cow;

/// Resolve an encoding label, falling back to UTF-8.
pub fn resolve_encoding(label: Option<&str>) -> &'static Encoding {
    let Some(label) = label else {
        return UTF_8;
    };

    match Encoding::for_label(label.as_bytes()) {
        Some(encoding) => encoding,
        None => {
            tracing::warn!(label, "unsupported encoding label, falling back to UTF-8");
            UTF_8
        }
    }
}

/// Decode a complete buffer.
///
/// Uses `Cow<str>` to avoid allocation when the input is already valid UTF-8.
pub fn decode_buffer<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Cow<'a, str> {
    let (text, actual, malformed) = encoding.decode(bytes);
    if malformed {
        tracing::debug!(encoding = actual.name(), "replaced malformed byte sequences");
    }
    text
}

/// Incremental decoder for chunked input.
///
/// Multi-byte sequences split across chunk boundaries are buffered inside
/// the decoder and completed by the next chunk.
pub struct ChunkDecoder {
    decoder: Decoder,
}

impl ChunkDecoder {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self {
            decoder: encoding.new_decoder(),
        }
    }

    /// Decode the next chunk. Pass `last = true` once, after the final chunk
    /// (an empty slice is fine), to flush an incomplete trailing sequence.
    pub fn decode(&mut self, bytes: &[u8], last: bool) -> String {
        let capacity = self
            .decoder
            .max_utf8_buffer_length(bytes.len())
            .unwrap_or(bytes.len().saturating_mul(3));
        let mut out = String::with_capacity(capacity);

        let mut consumed = 0;
        loop {
            let (result, read, _malformed) =
                self.decoder
                    .decode_to_string(&bytes[consumed..], &mut out, last);
            consumed += read;
            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => out.reserve(bytes.len() - consumed + 16),
            }
        }
        out
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.decoder.encoding()
    }
}

impl std::fmt::Debug for ChunkDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkDecoder")
            .field("encoding", &self.encoding().name())
            .finish()
    }
}
