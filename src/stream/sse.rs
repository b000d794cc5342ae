use serde::de::DeserializeOwned;

use crate::core::IexError;

/// One server-sent event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamEvent {
    /// The `event:` field, if the server named the event.
    pub event: Option<String>,
    /// The last `id:` seen on the stream.
    pub id: Option<String>,
    /// All `data:` lines of the event, joined with `\n`.
    pub data: String,
}

impl StreamEvent {
    /// Parses `data` as JSON. Feeds deliver a JSON array per event.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::Data`] if `data` is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, IexError> {
        serde_json::from_str(&self.data)
            .map_err(|e| IexError::Data(format!("stream event json parse: {e}")))
    }
}

/// Longest line kept while waiting for its terminator; a longer one is discarded
/// together with the event it belongs to.
pub const MAX_LINE_BYTES: usize = 1 << 20;

/// Incremental decoder for a `text/event-stream` body.
///
/// Chunks may split lines (and UTF-8 sequences) anywhere; only complete lines
/// are interpreted.
#[derive(Debug, Default)]
pub struct SseDecoder {
    pending: Vec<u8>,
    data: String,
    has_data: bool,
    event: Option<String>,
    last_id: Option<String>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes a chunk and returns the events it completed, in order.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<StreamEvent> {
        // everything already buffered is newline-free
        let mut search = self.pending.len();
        self.pending.extend_from_slice(chunk);

        let mut out = Vec::new();
        let mut start = 0;
        while let Some(rel) = self.pending[search..].iter().position(|b| *b == b'\n') {
            let end = search + rel;
            let raw = &self.pending[start..end];
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = String::from_utf8_lossy(raw).into_owned();
            if let Some(ev) = self.process_line(&line) {
                out.push(ev);
            }
            start = end + 1;
            search = start;
        }
        self.pending.drain(..start);

        if self.pending.len() > MAX_LINE_BYTES {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                buffered = self.pending.len(),
                "dropping unterminated stream line"
            );
            self.pending.clear();
            self.reset_event();
        }
        out
    }

    fn process_line(&mut self, line: &str) -> Option<StreamEvent> {
        if line.is_empty() {
            return self.dispatch();
        }
        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((f, v)) => (f, v.strip_prefix(' ').unwrap_or(v)),
            None => (line, ""),
        };

        match field {
            "data" => {
                if self.has_data {
                    self.data.push('\n');
                }
                self.data.push_str(value);
                self.has_data = true;
            }
            "event" => self.event = Some(value.to_string()),
            "id" => self.last_id = Some(value.to_string()),
            _ => {}
        }
        None
    }

    fn reset_event(&mut self) {
        self.data.clear();
        self.has_data = false;
        self.event = None;
    }

    fn dispatch(&mut self) -> Option<StreamEvent> {
        if !self.has_data {
            self.event = None;
            return None;
        }
        self.has_data = false;
        Some(StreamEvent {
            event: self.event.take(),
            id: self.last_id.clone(),
            data: std::mem::take(&mut self.data),
        })
    }
}
