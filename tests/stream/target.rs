use iex_rs::stream::{DEEP, SseEndpoints, resolve_stream_target};
use iex_rs::{ApiVersion, DeepChannel, FxFeed, IexError, Scheme};
use url::Url;

use crate::common::offline_client;

fn endpoints() -> SseEndpoints {
    SseEndpoints {
        base: Url::parse("https://cloud-sse.iexapis.com/").unwrap(),
        sandbox: Url::parse("https://sandbox-sse.iexapis.com/stable/").unwrap(),
    }
}

const NO_CHANNELS: Option<&[&str]> = None;

fn url_for(
    method: &str,
    symbols: &[&str],
    channels: Option<&[&str]>,
    version: ApiVersion,
    no_snapshot: bool,
) -> String {
    resolve_stream_target(method, symbols, channels, version)
        .unwrap()
        .url(&endpoints(), "pk_abc", no_snapshot)
        .unwrap()
        .to_string()
}

#[test]
fn scheme_follows_symbol_count() {
    let cases: [(&[&str], Scheme); 4] = [
        (&[], Scheme::FullMarket),
        (&["AAPL"], Scheme::SingleSymbol),
        (&["AAPL", "MSFT"], Scheme::MultiSymbol),
        (&["AAPL,MSFT,IBM"], Scheme::MultiSymbol),
    ];
    for (symbols, expected) in cases {
        let target = resolve_stream_target("tops", symbols, NO_CHANNELS, ApiVersion::V1).unwrap();
        assert_eq!(target.scheme, expected, "{symbols:?}");
        assert!(!target.is_deep);
        assert!(target.channels.is_empty());
    }
}

#[test]
fn full_market_url_has_no_symbols() {
    assert_eq!(
        url_for("tops", &[], None, ApiVersion::V1, false),
        "https://cloud-sse.iexapis.com/v1/tops?token=pk_abc"
    );
}

#[test]
fn symbol_urls_for_each_version() {
    assert_eq!(
        url_for("last", &["aapl"], None, ApiVersion::Stable, false),
        "https://cloud-sse.iexapis.com/stable/last?symbols=AAPL&token=pk_abc"
    );
    assert_eq!(
        url_for("tops", &["AAPL", "msft"], None, ApiVersion::Beta, true),
        "https://cloud-sse.iexapis.com/beta/tops?symbols=AAPL,MSFT&token=pk_abc&nosnapshot=true"
    );
}

#[test]
fn sandbox_uses_its_own_host() {
    let target =
        resolve_stream_target("tops", &["AAPL"], NO_CHANNELS, ApiVersion::Sandbox).unwrap();
    assert!(target.is_sandbox);
    assert_eq!(
        target.url(&endpoints(), "Tsk_abc", false).unwrap().as_str(),
        "https://sandbox-sse.iexapis.com/stable/tops?symbols=AAPL&token=Tsk_abc"
    );
}

#[test]
fn deep_feed_carries_channels() {
    let channels = ["trades", "book,trades"];
    let target =
        resolve_stream_target(DEEP, &["AAPL"], Some(&channels[..]), ApiVersion::V1).unwrap();
    assert!(target.is_deep);
    assert_eq!(target.channels, [DeepChannel::Trades, DeepChannel::Book]);
    assert_eq!(
        url_for(DEEP, &["AAPL"], Some(&channels), ApiVersion::V1, false),
        "https://cloud-sse.iexapis.com/v1/deep?symbols=AAPL&channels=trades,book&token=pk_abc"
    );
    assert_eq!(
        url_for(DEEP, &[], Some(&["deep"]), ApiVersion::V1, true),
        "https://cloud-sse.iexapis.com/v1/deep?channels=deep&token=pk_abc&nosnapshot=true"
    );
}

#[test]
fn deep_without_channels_is_rejected() {
    let err = resolve_stream_target(DEEP, &["AAPL"], NO_CHANNELS, ApiVersion::V1).unwrap_err();
    match err {
        IexError::Validation(msg) => {
            assert_eq!(msg, "Must specify channels for deep subscriptions");
        }
        other => panic!("expected Validation error, got {other:?}"),
    }
    assert!(resolve_stream_target(DEEP, &["AAPL"], Some(&[" "][..]), ApiVersion::V1).is_err());
}

#[test]
fn unknown_deep_channel_is_named_in_the_error() {
    let err = resolve_stream_target(
        DEEP,
        &["AAPL"],
        Some(&["trades", "not-a-real-channel"][..]),
        ApiVersion::V1,
    )
    .unwrap_err();
    match err {
        IexError::Validation(msg) => assert!(msg.contains("not-a-real-channel"), "{msg}"),
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[test]
fn blank_method_and_flat_feed_channels_are_rejected() {
    assert!(resolve_stream_target(" ", &["AAPL"], NO_CHANNELS, ApiVersion::V1).is_err());
    assert!(resolve_stream_target("tops", &["AAPL"], Some(&["book"][..]), ApiVersion::V1).is_err());
}

#[test]
fn deep_channel_names() {
    assert_eq!("trading-status".parse::<DeepChannel>().unwrap(), DeepChannel::TradingStatus);
    for channel in DeepChannel::ALL_CHANNELS {
        assert_eq!(channel.as_str().parse::<DeepChannel>().unwrap(), channel);
    }
    assert_eq!(DeepChannel::All.to_string(), "deep");
}

#[test]
fn client_helpers_resolve_against_client_config() {
    let client = offline_client("pk_abc", "stable");

    let url = client.tops_sse(["AAPL"]).no_snapshot(true).url().unwrap();
    assert_eq!(
        url.as_str(),
        "https://cloud-sse.iexapis.com/stable/tops?symbols=AAPL&token=pk_abc&nosnapshot=true"
    );

    let target = client.trades_sse(["AAPL", "MSFT"]).target().unwrap();
    assert!(target.is_deep);
    assert_eq!(target.scheme, Scheme::MultiSymbol);
    assert_eq!(target.channels, [DeepChannel::Trades]);

    let url = client.fx_sse(["EURUSD"], FxFeed::OneMinute).url().unwrap();
    assert_eq!(url.path(), "/stable/forex1Minute");

    let url = client.trading_status_sse(Vec::<String>::new()).url().unwrap();
    assert_eq!(url.path(), "/stable/trading-status");
    assert_eq!(url.query(), Some("token=pk_abc"));
}

#[test]
fn client_with_test_token_streams_from_sandbox() {
    let client = offline_client("Tsk_abc", "v1");
    let url = client.last_sse(["AAPL"]).url().unwrap();
    assert_eq!(
        url.as_str(),
        "https://sandbox-sse.iexapis.com/stable/last?symbols=AAPL&token=Tsk_abc"
    );
}

#[test]
fn stream_builder_rejects_deep_without_channels() {
    let client = offline_client("pk_abc", "v1");
    assert!(matches!(
        client.stream(DEEP).symbols(["AAPL"]).target(),
        Err(IexError::Validation(_))
    ));
}
