use futures::StreamExt;
use reqwest::header::ACCEPT;
use tokio::{
    select,
    sync::{mpsc, oneshot},
    task::JoinHandle,
};
use url::Url;

use crate::core::net::redact_token;
use crate::core::{IexClient, IexError};
use crate::stream::sse::{SseDecoder, StreamEvent};
use crate::stream::target::{StreamTarget, resolve_stream_target};

/// A handle for a running stream task.
///
/// Dropping the handle closes the subscription.
pub struct StreamHandle {
    join: JoinHandle<Result<(), IexError>>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl StreamHandle {
    /// Politely ask the stream to stop and wait for it to finish.
    ///
    /// # Errors
    ///
    /// Returns the error that ended the session, if it failed before being stopped.
    pub async fn stop(mut self) -> Result<(), IexError> {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        join_result(self.join.await)
    }

    /// Waits until the server or the transport ends the session.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::Http`] if the subscription was refused and
    /// [`IexError::Transport`] if the connection failed.
    pub async fn wait(self) -> Result<(), IexError> {
        let StreamHandle { join, stop_tx } = self;
        let res = join.await;
        drop(stop_tx);
        join_result(res)
    }

    /// Immediately abort the background task (no more events will be delivered).
    pub fn abort(self) {
        self.join.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

fn join_result(
    res: Result<Result<(), IexError>, tokio::task::JoinError>,
) -> Result<(), IexError> {
    match res {
        Ok(inner) => inner,
        Err(e) if e.is_cancelled() => Ok(()),
        Err(e) => Err(IexError::Transport(format!("stream task failed: {e}"))),
    }
}

/// Builder to resolve and open an SSE subscription.
pub struct StreamBuilder {
    client: IexClient,
    method: String,
    symbols: Vec<String>,
    channels: Option<Vec<String>>,
    no_snapshot: bool,
    capacity: usize,
}

impl StreamBuilder {
    /// Start from an existing client (cloned internally) and a feed name.
    pub fn new(client: &IexClient, method: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            method: method.into(),
            symbols: Vec::new(),
            channels: None,
            no_snapshot: false,
            capacity: 1024,
        }
    }

    /// Stream these symbols (replaces). No symbols means the whole market.
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = syms.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single symbol.
    pub fn add_symbol(mut self, sym: impl Into<String>) -> Self {
        self.symbols.push(sym.into());
        self
    }

    /// Deep sub-channels (replaces). Required for the `deep` feed.
    pub fn channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channels = Some(channels.into_iter().map(Into::into).collect());
        self
    }

    /// Ask the server to skip the initial snapshot.
    pub fn no_snapshot(mut self, yes: bool) -> Self {
        self.no_snapshot = yes;
        self
    }

    /// Buffer size of the channel returned by [`StreamBuilder::start`]. Default: 1024.
    pub fn capacity(mut self, n: usize) -> Self {
        self.capacity = n.max(1);
        self
    }

    /// Validates the call and resolves its endpoint without connecting.
    ///
    /// # Errors
    ///
    /// See [`resolve_stream_target`].
    pub fn target(&self) -> Result<StreamTarget, IexError> {
        resolve_stream_target(
            &self.method,
            self.symbols.as_slice(),
            self.channels.as_deref(),
            self.client.version(),
        )
    }

    /// The URL the subscription would connect to.
    ///
    /// # Errors
    ///
    /// See [`resolve_stream_target`].
    pub fn url(&self) -> Result<Url, IexError> {
        self.target()?.url(
            self.client.sse_endpoints(),
            self.client.config().token(),
            self.no_snapshot,
        )
    }

    /// Start the stream. Returns a handle and a receiver of events.
    ///
    /// Drop the receiver to stop once the next event cannot be delivered,
    /// or call `handle.stop().await` / `handle.abort()`.
    ///
    /// # Errors
    ///
    /// Validation errors are returned before any connection is attempted.
    pub fn start(self) -> Result<(StreamHandle, mpsc::Receiver<StreamEvent>), IexError> {
        let (tx, rx) = mpsc::channel::<StreamEvent>(self.capacity);
        let handle = self.spawn(Sink::Channel(tx))?;
        Ok((handle, rx))
    }

    /// Start the stream, calling `on_data` for every event in arrival order.
    ///
    /// # Errors
    ///
    /// Validation errors are returned before any connection is attempted.
    pub fn subscribe<F>(self, on_data: F) -> Result<StreamHandle, IexError>
    where
        F: FnMut(StreamEvent) + Send + 'static,
    {
        self.spawn(Sink::Handler(Box::new(on_data)))
    }

    fn spawn(self, sink: Sink) -> Result<StreamHandle, IexError> {
        let url = self.url()?;
        let http = self.client.http().clone();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let join = tokio::spawn(run_session(http, url, sink, stop_rx));

        Ok(StreamHandle {
            join,
            stop_tx: Some(stop_tx),
        })
    }
}

enum Sink {
    Channel(mpsc::Sender<StreamEvent>),
    Handler(Box<dyn FnMut(StreamEvent) + Send>),
}

enum Delivery {
    Sent,
    Closed,
    Stopped,
}

impl Sink {
    /// Hands one event over; a full channel must not keep a stop request waiting.
    async fn deliver(
        &mut self,
        ev: StreamEvent,
        stop_rx: &mut oneshot::Receiver<()>,
    ) -> Delivery {
        match self {
            Sink::Channel(tx) => select! {
                sent = tx.send(ev) => match sent {
                    Ok(()) => Delivery::Sent,
                    Err(_) => Delivery::Closed,
                },
                _ = stop_rx => Delivery::Stopped,
            },
            Sink::Handler(f) => {
                f(ev);
                Delivery::Sent
            }
        }
    }
}

async fn run_session(
    http: reqwest::Client,
    url: Url,
    mut sink: Sink,
    mut stop_rx: oneshot::Receiver<()>,
) -> Result<(), IexError> {
    let shown = redact_token(&url);
    #[cfg(feature = "tracing")]
    tracing::debug!(url = %shown, "opening stream");

    let request = http
        .get(url)
        .header(ACCEPT, "text/event-stream")
        .send();

    let resp = select! {
        r = request => r.map_err(|e| {
            IexError::Transport(format!("connect to {shown} failed: {e}"))
        })?,
        _ = &mut stop_rx => return Ok(()),
    };

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(IexError::Http {
            status: status.as_u16(),
            body,
            url: shown,
        });
    }

    let mut body = Box::pin(resp.bytes_stream());
    let mut decoder = SseDecoder::new();

    loop {
        select! {
            chunk = body.next() => match chunk {
                Some(Ok(bytes)) => {
                    for ev in decoder.feed(&bytes) {
                        match sink.deliver(ev, &mut stop_rx).await {
                            Delivery::Sent => {}
                            Delivery::Closed => {
                                #[cfg(feature = "tracing")]
                                tracing::debug!(url = %shown, "receiver dropped, closing stream");
                                return Ok(());
                            }
                            Delivery::Stopped => return Ok(()),
                        }
                    }
                }
                Some(Err(e)) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(url = %shown, error = %e, "stream read failed");
                    return Err(IexError::Transport(format!("stream read failed: {e}")));
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(url = %shown, "stream ended by server");
                    return Ok(());
                }
            },
            _ = &mut stop_rx => return Ok(()),
        }
    }
}
