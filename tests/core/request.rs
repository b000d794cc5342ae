use chrono::NaiveDate;
use iex_rs::core::request::{normalize_symbols, quote_symbols, require_symbol, validate_sort};
use iex_rs::{DateArg, IexError, OutputFormat, Query, RequestSpec, StandardOptions};

#[test]
fn query_drops_unset_values_and_keeps_order() {
    let mut q = Query::new();
    q.flag("off", false)
        .positive("zero", Some(0))
        .positive("negative", Some(-3))
        .positive("missing", None)
        .text("empty", Some(""))
        .text("none", None)
        .positive("last", Some(5))
        .flag("on", true)
        .text("sort", Some("asc"));

    let keys: Vec<&str> = q.pairs().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["last", "on", "sort"]);
    assert_eq!(q.get("on"), Some("true"));
    assert_eq!(q.get("zero"), None);
}

#[test]
fn request_target_joins_path_and_query() {
    let spec = RequestSpec::new("stock/AAPL/previous");
    assert_eq!(spec.target(), "stock/AAPL/previous");

    let mut q = Query::new();
    q.raw("symbols", "A,B").positive("last", Some(2));
    let spec = RequestSpec::new("stock/market/upcoming-events").with_query(q);
    assert_eq!(spec.query_string(), "symbols=A,B&last=2");
    assert_eq!(spec.target(), "stock/market/upcoming-events?symbols=A,B&last=2");
}

#[test]
fn standard_options_merge() {
    let spec = RequestSpec::new("ref-data/symbols").with_options(&StandardOptions {
        filter: Some(String::new()),
        format: None,
    });
    assert_eq!(spec.filter(), None);
    assert_eq!(spec.format(), None);

    let spec = RequestSpec::new("ref-data/symbols")
        .with_options(&StandardOptions::filter("symbol,name"))
        .with_options(&StandardOptions::format(OutputFormat::Csv));
    assert_eq!(spec.filter(), Some("symbol,name"));
    assert_eq!(spec.format(), Some(OutputFormat::Csv));
}

#[test]
fn dates_normalize_to_compact_form() {
    for raw in ["20240105", "2024-01-05", "2024/01/05", " 2024-01-05 "] {
        assert_eq!(DateArg::from(raw).normalize().unwrap(), "20240105", "{raw}");
    }
    let d = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    assert_eq!(DateArg::from(d).normalize().unwrap(), "20231231");
}

#[test]
fn unrecognized_date_is_rejected() {
    let err = DateArg::from("01/05/2024").normalize().unwrap_err();
    match err {
        IexError::Validation(msg) => assert!(msg.contains("Date not recognized"), "{msg}"),
        other => panic!("expected Validation error, got {other:?}"),
    }
    assert!(DateArg::from("2024-02-30").normalize().is_err());
}

#[test]
fn empty_symbol_is_rejected() {
    assert_eq!(require_symbol(" aapl ").unwrap(), "aapl");
    let err = require_symbol("   ").unwrap_err();
    match err {
        IexError::Validation(msg) => assert_eq!(msg, "symbol must be a non-empty string"),
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[test]
fn symbols_are_normalized_and_deduplicated() {
    let got = normalize_symbols(["aapl, msft", "AAPL", " ", "ibm"]);
    assert_eq!(got, ["AAPL", "MSFT", "IBM"]);
    assert!(normalize_symbols(Vec::<String>::new()).is_empty());
}

#[test]
fn symbols_are_percent_encoded_one_by_one() {
    assert_eq!(quote_symbols("AAPL,MSFT"), "AAPL,MSFT");
    assert_eq!(quote_symbols("BRK.B"), "BRK.B");
    assert_eq!(quote_symbols("A B"), "A%20B");
    assert_eq!(quote_symbols("X/Y,Z"), "X%2FY,Z");
}

#[test]
fn sort_direction_validation() {
    assert_eq!(validate_sort("DESC").unwrap(), "desc");
    assert_eq!(validate_sort("asc").unwrap(), "asc");
    let err = validate_sort("up").unwrap_err();
    assert!(err.to_string().contains("Sort not recognized: up"), "{err}");
}
