use iex_rs::IexError;
use iex_rs::stocks::{CHART_RANGES, ChartOptions, chart_request};

fn target(opts: &ChartOptions) -> String {
    chart_request(opts).unwrap().target()
}

#[test]
fn default_range_is_one_month() {
    assert_eq!(target(&ChartOptions::new("AAPL")), "stock/AAPL/chart/1m");
    assert_eq!(
        target(&ChartOptions::new("AAPL").range("")),
        "stock/AAPL/chart/1m"
    );
}

#[test]
fn every_listed_range_and_1d_are_accepted() {
    for range in CHART_RANGES.iter().copied().chain(["1d"]) {
        let spec = chart_request(&ChartOptions::new("AAPL").range(range)).unwrap();
        assert_eq!(spec.path(), format!("stock/AAPL/chart/{range}"));
    }
}

#[test]
fn unknown_range_is_rejected() {
    let err = chart_request(&ChartOptions::new("AAPL").range("7y")).unwrap_err();
    match err {
        IexError::Validation(msg) => assert_eq!(msg, "Range not recognized: 7y"),
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[test]
fn empty_symbol_is_rejected() {
    assert!(matches!(
        chart_request(&ChartOptions::new(" ")),
        Err(IexError::Validation(_))
    ));
}

#[test]
fn date_moves_into_the_path() {
    assert_eq!(
        target(&ChartOptions::new("AAPL").date("2024-03-01")),
        "stock/AAPL/chart/date/20240301"
    );
    assert_eq!(
        target(&ChartOptions::new("AAPL").date("2024-03-01").by_day(true)),
        "stock/AAPL/chart/date/20240301?chartByDay=true"
    );
}

#[test]
fn exact_date_wins_and_is_not_repeated_in_query() {
    let spec = chart_request(
        &ChartOptions::new("AAPL")
            .range("5d")
            .date("20240101")
            .exact_date("20240102"),
    )
    .unwrap();
    assert_eq!(spec.path(), "stock/AAPL/chart/date/20240102");
    assert!(spec.query().get("exactDate").is_none());
    assert!(spec.query().is_empty());
}

#[test]
fn query_parameters_follow_a_fixed_order() {
    let opts = ChartOptions::new("MSFT")
        .range("5d")
        .include_today(true)
        .sort("DESC")
        .display_percent(true)
        .change_from_close(true)
        .interval(2)
        .simplify(true)
        .by_day(true)
        .close_only(true)
        .last(10);
    assert_eq!(
        target(&opts),
        "stock/MSFT/chart/5d?chartLast=10&chartCloseOnly=true&chartByDay=true\
         &chartSimplify=true&chartInterval=2&changeFromClose=true&displayPercent=true\
         &sort=desc&includeToday=true"
    );
}

#[test]
fn unset_and_non_positive_options_are_omitted() {
    let opts = ChartOptions::new("AAPL")
        .range("1y")
        .last(0)
        .interval(-1)
        .close_only(false);
    assert_eq!(target(&opts), "stock/AAPL/chart/1y");
}

#[test]
fn bad_sort_and_bad_date_are_rejected() {
    assert!(chart_request(&ChartOptions::new("AAPL").sort("sideways")).is_err());
    assert!(chart_request(&ChartOptions::new("AAPL").date("March 1st")).is_err());
}
