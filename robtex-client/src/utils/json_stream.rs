//! Incremental decoder for a stream of JSON values.
//!
//! The passive DNS endpoints answer with one JSON object per line. Values are
//! decoded as a stream of concatenated JSON values: any whitespace (or none) may
//! separate them, and a value may span several lines or several body chunks.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Deserializer;

/// Buffers body chunks and emits every complete value they contain.
///
/// The buffer is only parsed when a chunk closes a top-level object, array or
/// string, so a large value arriving in small chunks is scanned once instead of
/// re-parsed on every chunk. Top-level numbers and literals are emitted by the
/// next closing chunk or by [`finish`](Self::finish).
pub struct JsonStreamDecoder<T> {
    buf: Vec<u8>,
    scanner: BoundaryScanner,
    _marker: PhantomData<fn() -> T>,
}

/// Tracks nesting across chunks to spot where top-level values end.
#[derive(Debug, Default)]
struct BoundaryScanner {
    depth: usize,
    in_string: bool,
    escaped: bool,
}

impl BoundaryScanner {
    /// Advance over `bytes`; true if a top-level value closed inside them.
    fn closes_value(&mut self, bytes: &[u8]) -> bool {
        let mut closed = false;
        for &b in bytes {
            if self.in_string {
                if self.escaped {
                    self.escaped = false;
                } else if b == b'\\' {
                    self.escaped = true;
                } else if b == b'"' {
                    self.in_string = false;
                    closed |= self.depth == 0;
                }
                continue;
            }
            match b {
                b'"' => self.in_string = true,
                b'{' | b'[' => self.depth += 1,
                // Stray closers on malformed input still trigger a parse
                b'}' | b']' => {
                    self.depth = self.depth.saturating_sub(1);
                    closed |= self.depth == 0;
                }
                _ => {}
            }
        }
        closed
    }
}

impl<T: DeserializeOwned> JsonStreamDecoder<T> {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            scanner: BoundaryScanner::default(),
            _marker: PhantomData,
        }
    }

    /// Append a chunk and push every value completed by it onto `out`.
    ///
    /// An incomplete trailing value stays buffered for the next chunk.
    pub fn feed(&mut self, chunk: &[u8], out: &mut Vec<T>) -> serde_json::Result<()> {
        self.buf.extend_from_slice(chunk);
        if !self.scanner.closes_value(chunk) {
            return Ok(());
        }
        self.drain(out, false)
    }

    /// Signal end of stream. A value left incomplete is an error.
    pub fn finish(mut self, out: &mut Vec<T>) -> serde_json::Result<()> {
        self.drain(out, true)
    }

    fn drain(&mut self, out: &mut Vec<T>, eof: bool) -> serde_json::Result<()> {
        let mut stream = Deserializer::from_slice(&self.buf).into_iter::<T>();
        let mut consumed = 0;

        loop {
            match stream.next() {
                Some(Ok(value)) => {
                    out.push(value);
                    consumed = stream.byte_offset();
                }
                // Value cut at the chunk boundary, wait for more input
                Some(Err(e)) if e.is_eof() && !eof => break,
                Some(Err(e)) => return Err(e),
                None => {
                    consumed = stream.byte_offset();
                    break;
                }
            }
        }

        self.buf.drain(..consumed);
        Ok(())
    }
}

impl<T: DeserializeOwned> Default for JsonStreamDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}
