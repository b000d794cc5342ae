use iex_rs::premium::{WallStreetHorizon, wall_street_horizon_request};
use iex_rs::stocks::fundamental_valuations_request;
use iex_rs::timeseries::{TimeSeriesArgs, TimeSeriesOptions, time_series_request};
use iex_rs::{IexError, RequestSpec};

fn plain(args: &TimeSeriesArgs) -> RequestSpec {
    time_series_request(args, &TimeSeriesOptions::default()).unwrap()
}

#[test]
fn path_grows_with_key_and_subkey() {
    assert_eq!(
        plain(&TimeSeriesArgs::new("REPORTED_FINANCIALS")).target(),
        "time-series/REPORTED_FINANCIALS"
    );
    assert_eq!(
        plain(&TimeSeriesArgs::new("REPORTED_FINANCIALS").key("AAPL")).target(),
        "time-series/REPORTED_FINANCIALS/AAPL"
    );
    assert_eq!(
        plain(
            &TimeSeriesArgs::new("REPORTED_FINANCIALS")
                .key("AAPL")
                .subkey("10-K")
        )
        .target(),
        "time-series/REPORTED_FINANCIALS/AAPL/10-K"
    );
}

#[test]
fn key_and_subkey_are_percent_encoded() {
    assert_eq!(
        plain(&TimeSeriesArgs::new("NEWS").key("AAPL?x=1").subkey("a/b c")).target(),
        "time-series/NEWS/AAPL%3Fx%3D1/a%2Fb%20c"
    );
    let spec = fundamental_valuations_request("BRK/B", None, &TimeSeriesOptions::default())
        .unwrap();
    assert_eq!(spec.target(), "time-series/fundamental_valuations/BRK%2FB");
}

#[test]
fn subkey_without_key_is_ignored() {
    assert_eq!(
        plain(&TimeSeriesArgs::new("NEWS").subkey("ignored")).target(),
        "time-series/NEWS"
    );
}

#[test]
fn empty_id_is_rejected() {
    let err = time_series_request(&TimeSeriesArgs::new(""), &TimeSeriesOptions::default())
        .unwrap_err();
    match err {
        IexError::Validation(msg) => assert_eq!(msg, "id must be a non-empty string"),
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[test]
fn options_are_sparse_and_ordered() {
    let opts = TimeSeriesOptions {
        range: Some("1y".into()),
        calendar: true,
        limit: Some(0),
        date_field: Some("filingDate".into()),
        from: Some("2023-01-01".into()),
        to: Some("2023/12/31".into()),
        last: Some(4),
        sort: Some("ASC".into()),
        interval: Some(-1),
        ..Default::default()
    };
    let spec = time_series_request(&TimeSeriesArgs::new("INCOME").key("AAPL"), &opts).unwrap();
    assert_eq!(
        spec.target(),
        "time-series/INCOME/AAPL?range=1y&calendar=true&dateField=filingDate\
         &from=20230101&to=20231231&last=4&sort=asc"
    );
}

#[test]
fn bad_sort_is_rejected() {
    let opts = TimeSeriesOptions {
        sort: Some("random".into()),
        ..Default::default()
    };
    assert!(time_series_request(&TimeSeriesArgs::new("INCOME"), &opts).is_err());
}

#[test]
fn wall_street_horizon_calendars_are_time_series() {
    let opts = TimeSeriesOptions::default();
    assert_eq!(
        wall_street_horizon_request(WallStreetHorizon::AnalystDays, Some("aapl"), &opts)
            .unwrap()
            .target(),
        "time-series/PREMIUM_WALLSTREETHORIZON_ANALYST_DAY/AAPL"
    );
    assert_eq!(
        wall_street_horizon_request(WallStreetHorizon::WitchingHours, None, &opts)
            .unwrap()
            .target(),
        "time-series/PREMIUM_WALLSTREETHORIZON_WITCHING_HOURS"
    );
    assert_eq!(
        WallStreetHorizon::FdaAdvisoryCommitteeMeetings.id(),
        "PREMIUM_WALLSTREETHORIZON_STOCK_SPECIFIC_FDA_ADVISORY_COMMITTEE_MEETING"
    );
}

#[test]
fn fundamental_valuations_use_frequency_as_subkey() {
    let opts = TimeSeriesOptions::default();
    assert_eq!(
        fundamental_valuations_request("AAPL", Some("quarterly"), &opts)
            .unwrap()
            .target(),
        "time-series/fundamental_valuations/AAPL/quarterly"
    );
    assert_eq!(
        fundamental_valuations_request("AAPL", None, &opts)
            .unwrap()
            .target(),
        "time-series/fundamental_valuations/AAPL"
    );
    assert!(fundamental_valuations_request("", None, &opts).is_err());
}
