//! Resolution of a subscription into a concrete SSE endpoint.
//!
//! A feed URL varies along three independent axes: the environment
//! (production or sandbox), the symbol cardinality and whether the feed is
//! the multiplexed `deep` feed. [`resolve_stream_target`] validates a call and
//! fixes all three; [`StreamTarget::url`] renders any combination of them.

use std::fmt;
use std::str::FromStr;

use url::Url;
use url::form_urlencoded;

use crate::core::request::{normalize_symbols, quote_symbols};
use crate::core::{ApiVersion, IexError};

/// Name of the multiplexed feed.
pub const DEEP: &str = "deep";

/// How a request addresses symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// No symbols: the whole market.
    FullMarket,
    SingleSymbol,
    MultiSymbol,
}

impl Scheme {
    pub fn for_count(n: usize) -> Self {
        match n {
            0 => Scheme::FullMarket,
            1 => Scheme::SingleSymbol,
            _ => Scheme::MultiSymbol,
        }
    }
}

/// Sub-channels that may be requested on the `deep` feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeepChannel {
    TradingStatus,
    Auction,
    OpHaltStatus,
    SsrStatus,
    SecurityEvent,
    TradeBreaks,
    Trades,
    Book,
    SystemEvent,
    /// Every channel at once.
    All,
}

impl DeepChannel {
    pub const ALL_CHANNELS: [DeepChannel; 10] = [
        DeepChannel::TradingStatus,
        DeepChannel::Auction,
        DeepChannel::OpHaltStatus,
        DeepChannel::SsrStatus,
        DeepChannel::SecurityEvent,
        DeepChannel::TradeBreaks,
        DeepChannel::Trades,
        DeepChannel::Book,
        DeepChannel::SystemEvent,
        DeepChannel::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DeepChannel::TradingStatus => "tradingstatus",
            DeepChannel::Auction => "auction",
            DeepChannel::OpHaltStatus => "op-halt-status",
            DeepChannel::SsrStatus => "ssr-status",
            DeepChannel::SecurityEvent => "security-event",
            DeepChannel::TradeBreaks => "trade-breaks",
            DeepChannel::Trades => "trades",
            DeepChannel::Book => "book",
            DeepChannel::SystemEvent => "system-event",
            DeepChannel::All => DEEP,
        }
    }
}

impl FromStr for DeepChannel {
    type Err = IexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the flat feed is called "trading-status"; accept that spelling too
        if s == "trading-status" {
            return Ok(DeepChannel::TradingStatus);
        }
        DeepChannel::ALL_CHANNELS
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| IexError::validation(format!("Deep channel not recognized: {s}")))
    }
}

impl fmt::Display for DeepChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SSE hosts for both environments. Production URLs get the version appended.
///
/// Both URLs must end in `/`; [`crate::IexClientBuilder`] takes care of that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEndpoints {
    pub base: Url,
    pub sandbox: Url,
}

/// A validated subscription: which feed, which symbols, which environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamTarget {
    pub scheme: Scheme,
    /// Path segment of the feed; `deep` for multiplexed subscriptions.
    pub channel: String,
    pub symbols: Vec<String>,
    /// Requested sub-channels; empty unless `is_deep`.
    pub channels: Vec<DeepChannel>,
    pub version: ApiVersion,
    pub is_sandbox: bool,
    pub is_deep: bool,
}

/// Validates a subscription request and resolves its endpoint shape.
///
/// `method` names the feed (`tops`, `last`, `deep`, ...). The `deep` feed
/// requires `channels`; every channel must be a [`DeepChannel`]. Nothing is
/// sent over the network here.
///
/// # Errors
///
/// Returns [`IexError::Validation`] for an empty method, missing or
/// unrecognized deep channels, or channels passed to a flat feed.
pub fn resolve_stream_target<S, C>(
    method: &str,
    symbols: &[S],
    channels: Option<&[C]>,
    version: ApiVersion,
) -> Result<StreamTarget, IexError>
where
    S: AsRef<str>,
    C: AsRef<str>,
{
    let method = method.trim();
    if method.is_empty() {
        return Err(IexError::validation("method cannot be blank"));
    }

    let symbols = normalize_symbols(symbols);
    let scheme = Scheme::for_count(symbols.len());
    let is_deep = method == DEEP;

    let channels = match (is_deep, channels) {
        (true, None) => {
            return Err(IexError::validation(
                "Must specify channels for deep subscriptions",
            ));
        }
        (true, Some(raw)) => parse_channels(raw)?,
        (false, Some(raw)) if raw.iter().any(|c| !c.as_ref().trim().is_empty()) => {
            return Err(IexError::validation(format!(
                "channels are only valid for the {DEEP} feed, not {method}"
            )));
        }
        (false, _) => Vec::new(),
    };

    Ok(StreamTarget {
        scheme,
        channel: method.to_string(),
        symbols,
        channels,
        version,
        is_sandbox: version.is_sandbox(),
        is_deep,
    })
}

fn parse_channels<C: AsRef<str>>(raw: &[C]) -> Result<Vec<DeepChannel>, IexError> {
    let mut out = Vec::new();
    for entry in raw {
        for name in entry.as_ref().split(',') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let channel: DeepChannel = name.parse()?;
            if !out.contains(&channel) {
                out.push(channel);
            }
        }
    }
    if out.is_empty() {
        return Err(IexError::validation(
            "Must specify channels for deep subscriptions",
        ));
    }
    Ok(out)
}

impl StreamTarget {
    /// The feed prefix for this target's environment, ending in `/`.
    pub fn prefix(&self, endpoints: &SseEndpoints) -> Result<Url, IexError> {
        if self.is_sandbox {
            Ok(endpoints.sandbox.clone())
        } else {
            Ok(endpoints.base.join(&format!("{}/", self.version.as_str()))?)
        }
    }

    /// Renders the subscription URL.
    ///
    /// `{prefix}{channel}?[symbols=A,B&][channels=c1,c2&]token=T[&nosnapshot=true]`
    pub fn url(
        &self,
        endpoints: &SseEndpoints,
        token: &str,
        no_snapshot: bool,
    ) -> Result<Url, IexError> {
        let mut url = self.prefix(endpoints)?.join(&self.channel)?;

        let mut params: Vec<String> = Vec::new();
        if self.scheme != Scheme::FullMarket {
            params.push(format!("symbols={}", quote_symbols(&self.symbols.join(","))));
        }
        if self.is_deep {
            let joined = self
                .channels
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(",");
            params.push(format!("channels={joined}"));
        }
        params.push(format!(
            "token={}",
            form_urlencoded::byte_serialize(token.as_bytes()).collect::<String>()
        ));
        if no_snapshot {
            params.push("nosnapshot=true".to_string());
        }

        url.set_query(Some(&params.join("&")));
        Ok(url)
    }
}
