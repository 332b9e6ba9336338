//! Splits a chunked byte stream back into the lines the hub wrote.
//!
//! The server terminates every message with `\r\n`; a bare `\n` is accepted
//! too. Chunk boundaries carry no meaning, so a line may arrive in pieces or
//! several lines in one chunk.

use bytes::{Buf, Bytes, BytesMut};
use futures::Stream;
use futures::stream::{self, BoxStream, StreamExt};

use crate::utils::error::{Error, Result};

#[derive(Debug, Default)]
pub struct LineDecoder {
    buf: BytesMut,
}

impl LineDecoder {
    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Pop the next complete line, without its terminator.
    pub fn next_line(&mut self) -> Option<String> {
        let end = self.buf.iter().position(|&b| b == b'\n')?;
        let mut line = self.buf.split_to(end);
        self.buf.advance(1);
        if line.last() == Some(&b'\r') {
            line.truncate(line.len() - 1);
        }
        Some(String::from_utf8_lossy(&line).into_owned())
    }

    /// Bytes received after the last complete line.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }
}

/// Turn a stream of body chunks into a stream of lines.
///
/// The stream ends when the body ends; an incomplete trailing line is
/// discarded. The first chunk error is yielded and ends the stream.
pub fn lines<S, E>(chunks: S) -> BoxStream<'static, Result<String>>
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Send + 'static,
    E: Into<Error> + Send + 'static,
{
    let state = (chunks.boxed(), LineDecoder::default());

    stream::unfold(Some(state), |state| async move {
        let (mut chunks, mut decoder) = state?;
        loop {
            if let Some(line) = decoder.next_line() {
                return Some((Ok(line), Some((chunks, decoder))));
            }
            match chunks.next().await {
                Some(Ok(chunk)) => decoder.push(&chunk),
                Some(Err(e)) => return Some((Err(e.into()), None)),
                None => return None,
            }
        }
    })
    .boxed()
}
