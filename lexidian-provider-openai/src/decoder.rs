//! Incremental decoder for the completion stream.
//!
//! The response body is a sequence of newline-separated lines:
//! ```text
//! data: {"id":"cmpl-1","choices":[{"text":"Hel","index":0}]}
//!
//! data: {"id":"cmpl-1","choices":[{"text":"lo","index":0}]}
//!
//! data: [DONE]
//! ```
//!
//! Transport chunks can split a line, the `data: ` prefix or a UTF-8 code
//! point anywhere. [`StreamDecoder`] carries the undecoded bytes and the
//! unterminated line over to the next chunk, so the frames produced never
//! depend on where the chunk boundaries fall.

use lexidian_types::StreamFrame;

use crate::types::CompletionChunk;

/// Prefix of every data line.
const DATA_PREFIX: &str = "data: ";

/// Payload marking the end of the stream.
const DONE_SENTINEL: &str = "[DONE]";

/// Decoder state for one in-flight response.
///
/// Not restartable: create a new decoder per request.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    /// Trailing bytes of an incomplete UTF-8 sequence.
    remainder: Vec<u8>,
    /// Decoded text of the current, not yet terminated line.
    line_buf: String,
    /// Set once `End` has been emitted or the transport closed.
    finished: bool,
}

impl StreamDecoder {
    /// Create a decoder with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the decoder is terminal. Further input is ignored.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Decode one transport chunk and return the frames completed by it.
    ///
    /// Returns nothing once the decoder is terminal.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<StreamFrame> {
        if self.finished {
            return Vec::new();
        }

        self.remainder.extend_from_slice(chunk);
        self.decode_remainder();

        let mut frames = Vec::new();
        while let Some(newline_pos) = self.line_buf.find('\n') {
            let line: String = self.line_buf.drain(..=newline_pos).collect();
            let Some(frame) = parse_line(&line) else {
                continue;
            };
            let end = frame == StreamFrame::End;
            frames.push(frame);
            if end {
                self.terminate();
                break;
            }
        }
        frames
    }

    /// The transport closed: flush the final unterminated line and go terminal.
    ///
    /// Bytes still waiting for the rest of a code point can no longer
    /// complete and are decoded lossily.
    pub fn finish(&mut self) -> Vec<StreamFrame> {
        if self.finished {
            return Vec::new();
        }

        let rest = std::mem::take(&mut self.remainder);
        self.line_buf.push_str(&String::from_utf8_lossy(&rest));
        let line = std::mem::take(&mut self.line_buf);
        self.terminate();

        parse_line(&line).into_iter().collect()
    }

    /// Move every complete code point from `remainder` into `line_buf`.
    ///
    /// An incomplete sequence at the end stays in `remainder`. Invalid bytes
    /// anywhere else can never become valid and are replaced with U+FFFD.
    fn decode_remainder(&mut self) {
        loop {
            match std::str::from_utf8(&self.remainder) {
                Ok(text) => {
                    self.line_buf.push_str(text);
                    self.remainder.clear();
                    return;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    self.line_buf
                        .push_str(&String::from_utf8_lossy(&self.remainder[..valid]));
                    match e.error_len() {
                        None => {
                            self.remainder.drain(..valid);
                            return;
                        }
                        Some(invalid) => {
                            self.line_buf.push(char::REPLACEMENT_CHARACTER);
                            self.remainder.drain(..valid + invalid);
                        }
                    }
                }
            }
        }
    }

    fn terminate(&mut self) {
        self.finished = true;
        self.remainder.clear();
        self.line_buf.clear();
    }
}

/// Turn one complete line into a frame. Blank lines produce none.
fn parse_line(line: &str) -> Option<StreamFrame> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return Some(StreamFrame::Unparseable(line.to_string()));
    };
    let payload = payload.trim();
    if payload == DONE_SENTINEL {
        return Some(StreamFrame::End);
    }

    let text = serde_json::from_str::<CompletionChunk>(payload)
        .ok()
        .and_then(|chunk| chunk.choices.into_iter().next())
        .map(|choice| choice.text);

    Some(match text {
        Some(text) => StreamFrame::TextDelta(text),
        None => StreamFrame::Unparseable(line.to_string()),
    })
}
