use iex_rs::DateArg;
use iex_rs::events::{UpcomingEvent, upcoming_request};

fn target(event: UpcomingEvent, symbols: &[&str], date: Option<&str>) -> String {
    let date = date.map(DateArg::from);
    upcoming_request(event, symbols, date.as_ref())
        .unwrap()
        .target()
}

#[test]
fn whole_market_without_symbols() {
    assert_eq!(
        target(UpcomingEvent::Earnings, &[], None),
        "stock/market/upcoming-earnings"
    );
    assert_eq!(
        target(UpcomingEvent::Ipos, &[], Some("2024-01-05")),
        "stock/market/upcoming-ipos?exactDate=20240105"
    );
}

#[test]
fn single_symbol_goes_into_the_path() {
    assert_eq!(
        target(UpcomingEvent::Dividends, &["aapl"], None),
        "stock/AAPL/upcoming-dividends"
    );
    assert_eq!(
        target(UpcomingEvent::Splits, &["AAPL"], Some("20240105")),
        "stock/AAPL/upcoming-splits?exactDate=20240105"
    );
}

#[test]
fn many_symbols_become_a_query_parameter() {
    assert_eq!(
        target(UpcomingEvent::Events, &["AAPL", "MSFT"], None),
        "stock/market/upcoming-events?symbols=AAPL,MSFT"
    );
    assert_eq!(
        target(UpcomingEvent::Events, &["AAPL", "MSFT"], Some("2024/01/05")),
        "stock/market/upcoming-events?symbols=AAPL,MSFT&exactDate=20240105"
    );
}

#[test]
fn duplicate_symbols_collapse_to_one() {
    assert_eq!(
        target(UpcomingEvent::Earnings, &["aapl", "AAPL", " "], None),
        "stock/AAPL/upcoming-earnings"
    );
}

#[test]
fn unparsable_exact_date_is_rejected() {
    let date = DateArg::from("soon");
    assert!(upcoming_request(UpcomingEvent::Events, &["AAPL"], Some(&date)).is_err());
}
