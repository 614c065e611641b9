//! Blocking pull cursor over a streamed message response.

use std::io::{self, BufRead, BufReader, Read};

use crate::error::ClientError;

use super::events::StreamEvent;

/// Outcome of a single [`MessageStream::read_text`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamUpdate {
    /// Newly observed text: the latest fragment, or the whole transcript so
    /// far in accumulation mode
    Text(String),
    /// The content block closed; no further text will arrive
    Done,
}

/// Incremental decoder for a server-sent-event response body.
///
/// Wraps any blocking byte source and yields one text update per call. The
/// cursor is single-consumer and not restartable: after [`StreamUpdate::Done`]
/// or an error, discard it (and its source) and issue a new request to stream
/// again.
#[derive(Debug)]
pub struct MessageStream<R> {
    reader: BufReader<R>,
    transcript: String,
    done: bool,
}

impl<R: Read> MessageStream<R> {
    /// Wrap a raw byte source carrying server-sent events.
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
            transcript: String::new(),
            done: false,
        }
    }

    /// Read lines until the next text fragment or the end of the stream.
    ///
    /// Lines without the `data:` prefix are skipped, as are events other
    /// than `content_block_delta`. A `content_block_stop` event yields
    /// [`StreamUpdate::Done`]; from then on the source is never touched
    /// again. With `accumulate` set, each delta is appended to an internal
    /// transcript and the whole transcript is returned instead of the
    /// fragment.
    ///
    /// Running out of input before `content_block_stop` is an IO error, and
    /// an unparseable `data:` payload is a JSON error.
    pub fn read_text(&mut self, accumulate: bool) -> Result<StreamUpdate, ClientError> {
        if self.done {
            return Ok(StreamUpdate::Done);
        }

        let mut line = Vec::new();
        loop {
            line.clear();
            let read = self.reader.read_until(b'\n', &mut line)?;
            // A truncated final line means the terminal event never arrived.
            if read == 0 || line.last() != Some(&b'\n') {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stream ended before content_block_stop",
                )
                .into());
            }

            let Some(payload) = line.strip_prefix(b"data:") else {
                continue;
            };

            match serde_json::from_slice::<StreamEvent>(payload)? {
                StreamEvent::ContentBlockStop { .. } => {
                    self.done = true;
                    return Ok(StreamUpdate::Done);
                }
                StreamEvent::ContentBlockDelta {
                    delta: Some(delta), ..
                } => {
                    let text = if accumulate {
                        self.transcript.push_str(&delta.text);
                        self.transcript.clone()
                    } else {
                        delta.text
                    };
                    return Ok(StreamUpdate::Text(text));
                }
                _ => {}
            }
        }
    }
}
