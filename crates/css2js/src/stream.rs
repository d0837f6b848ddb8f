//! Streaming adapters.
//!
//! Each adapter is a pull-based [`Stream`]: nothing is read from the source
//! until the consumer polls, so a slow consumer naturally applies backpressure
//! and a source with no data ready suspends the job. A source error is
//! forwarded as-is and ends the stream. Nothing further is emitted after it,
//! in particular no suffix.

use crate::decode::ChunkDecoder;
use crate::escape::Transcoder;
use crate::options::Css2JsOptions;
use crate::wrapper::Wrapper;
use async_stream::try_stream;
use encoding_rs::Encoding;
use futures::{Stream, StreamExt};
use std::pin::pin;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Chunk size used when reading sources in streaming mode.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Read `reader` as a stream of byte chunks of at most `chunk_size` bytes.
pub fn read_chunks<R>(reader: R, chunk_size: usize) -> impl Stream<Item = std::io::Result<Vec<u8>>>
where
    R: AsyncRead,
{
    try_stream! {
        let mut reader = pin!(reader);
        let mut buf = vec![0u8; chunk_size.max(1)];
        loop {
            let read = reader.read(&mut buf).await?;
            if read == 0 {
                break;
            }
            yield buf[..read].to_vec();
        }
    }
}

/// Decode a byte stream into text chunks.
pub fn decode_stream<S, B, E>(
    source: S,
    encoding: &'static Encoding,
) -> impl Stream<Item = Result<String, E>>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
{
    try_stream! {
        let mut decoder = ChunkDecoder::new(encoding);
        let mut source = pin!(source);
        while let Some(chunk) = source.next().await {
            let chunk = chunk?;
            let text = decoder.decode(chunk.as_ref(), false);
            if !text.is_empty() {
                yield text;
            }
        }

        let tail = decoder.decode(&[], true);
        if !tail.is_empty() {
            yield tail;
        }
    }
}

/// Escape a stream of CSS text into escaped body chunks.
///
/// Chunks that settle no output (for example a chunk made only of newlines)
/// produce no item.
pub fn escape_stream<S, T, E>(
    source: S,
    options: Css2JsOptions,
) -> impl Stream<Item = Result<String, E>>
where
    S: Stream<Item = Result<T, E>>,
    T: AsRef<str>,
{
    try_stream! {
        let mut transcoder = Transcoder::new(&options);
        let mut source = pin!(source);
        while let Some(chunk) = source.next().await {
            let chunk = chunk?;
            let escaped = transcoder.transform(chunk.as_ref());
            if !escaped.is_empty() {
                yield escaped;
            }
        }

        let tail = transcoder.finish();
        if !tail.is_empty() {
            yield tail;
        }
    }
}

/// Convert a stream of CSS text into the wrapped JavaScript, chunk by chunk.
///
/// The prefix is emitted first, then the escaped body, then the suffix once
/// the source has ended cleanly.
pub fn css_to_js_stream<S, T, E>(
    source: S,
    options: Css2JsOptions,
) -> impl Stream<Item = Result<String, E>>
where
    S: Stream<Item = Result<T, E>>,
    T: AsRef<str>,
{
    try_stream! {
        let (prefix, suffix) = {
            let wrapper = Wrapper::new(&options);
            (wrapper.prefix().to_owned(), wrapper.suffix().to_owned())
        };

        if !prefix.is_empty() {
            yield prefix;
        }

        let mut body = pin!(escape_stream(source, options));
        while let Some(chunk) = body.next().await {
            yield chunk?;
        }

        if !suffix.is_empty() {
            yield suffix;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrapper::{DEFAULT_PREFIX, DEFAULT_SUFFIX};
    use futures::TryStreamExt;
    use futures::stream;

    fn text_source(chunks: &[&str]) -> impl Stream<Item = Result<String, std::io::Error>> {
        stream::iter(
            chunks
                .iter()
                .map(|chunk| Ok(chunk.to_string()))
                .collect::<Vec<_>>(),
        )
    }

    #[tokio::test]
    async fn test_css_to_js_stream_embeds_css() {
        let source = text_source(&[".d-b {", " display: blo", "ck }"]);
        let output: Vec<String> = css_to_js_stream(source, Css2JsOptions::default())
            .try_collect()
            .await
            .unwrap();

        assert_eq!(
            output.concat(),
            format!("{DEFAULT_PREFIX}.d-b {{ display: block }}{DEFAULT_SUFFIX}")
        );
        assert_eq!(output.first().map(String::as_str), Some(DEFAULT_PREFIX));
        assert_eq!(output.last().map(String::as_str), Some(DEFAULT_SUFFIX));
    }

    #[tokio::test]
    async fn test_escape_stream_skips_empty_items() {
        let source = text_source(&["a {}", "\n", "\n"]);
        let output: Vec<String> = escape_stream(source, Css2JsOptions::default())
            .try_collect()
            .await
            .unwrap();

        assert_eq!(output, vec!["a {}".to_string()]);
    }

    #[tokio::test]
    async fn test_source_error_stops_before_suffix() {
        let source = stream::iter(vec![
            Ok("a {}\n".to_string()),
            Err(std::io::Error::other("connection reset")),
            Ok("b {}".to_string()),
        ]);

        let items: Vec<_> = css_to_js_stream(source, Css2JsOptions::default())
            .collect()
            .await;

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_deref().unwrap(), DEFAULT_PREFIX);
        assert_eq!(items[1].as_deref().unwrap(), "a {}");
        assert!(items[2].is_err());
    }

    #[tokio::test]
    async fn test_decode_stream_split_multibyte() {
        let bytes = "a::before { content: \"é\" }".as_bytes();
        let split = bytes.iter().position(|&b| b == 0xC3).unwrap() + 1;
        let source = stream::iter(vec![
            Ok::<_, std::io::Error>(bytes[..split].to_vec()),
            Ok(bytes[split..].to_vec()),
        ]);

        let text: Vec<String> = decode_stream(source, encoding_rs::UTF_8)
            .try_collect()
            .await
            .unwrap();

        assert_eq!(text.concat(), "a::before { content: \"é\" }");
    }

    #[tokio::test]
    async fn test_read_chunks_respects_chunk_size() {
        let reader: &[u8] = b"abcdefghij";
        let chunks: Vec<Vec<u8>> = read_chunks(reader, 4).try_collect().await.unwrap();

        assert_eq!(chunks, vec![b"abcd".to_vec(), b"efgh".to_vec(), b"ij".to_vec()]);
    }
}
