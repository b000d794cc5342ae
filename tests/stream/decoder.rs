use iex_rs::stream::{MAX_LINE_BYTES, SseDecoder};
use serde_json::Value;

#[test]
fn event_completes_only_on_blank_line() {
    let mut dec = SseDecoder::new();
    assert!(dec.feed(b"data: [1]\n").is_empty());
    let events = dec.feed(b"\n");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].data, "[1]");
    assert_eq!(events[0].event, None);
}

#[test]
fn lines_may_be_split_across_chunks() {
    let mut dec = SseDecoder::new();
    assert!(dec.feed(b"da").is_empty());
    assert!(dec.feed(b"ta: {\"a\"").is_empty());
    let events = dec.feed(b":1}\n\ndata: {\"a\":2}\n\n");
    let data: Vec<&str> = events.iter().map(|e| e.data.as_str()).collect();
    assert_eq!(data, [r#"{"a":1}"#, r#"{"a":2}"#]);
}

#[test]
fn utf8_split_inside_a_character_is_reassembled() {
    let bytes = "data: caf\u{e9}\n\n".as_bytes();
    let split = bytes.len() - 3;
    let mut dec = SseDecoder::new();
    assert!(dec.feed(&bytes[..split]).is_empty());
    let events = dec.feed(&bytes[split..]);
    assert_eq!(events[0].data, "caf\u{e9}");
}

#[test]
fn crlf_comments_and_fields() {
    let mut dec = SseDecoder::new();
    let events = dec.feed(
        b": keep-alive\r\n\r\nevent: message\r\nid: 42\r\n\
          data:first\r\ndata: second\r\nretry: 10\r\n\r\n",
    );
    assert_eq!(events.len(), 1);
    let ev = &events[0];
    assert_eq!(ev.event.as_deref(), Some("message"));
    assert_eq!(ev.id.as_deref(), Some("42"));
    assert_eq!(ev.data, "first\nsecond");
}

#[test]
fn last_id_carries_over_and_event_name_resets() {
    let mut dec = SseDecoder::new();
    let events = dec.feed(b"event: a\nid: 7\ndata: x\n\ndata: y\n\n");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event.as_deref(), Some("a"));
    assert_eq!(events[1].event, None);
    assert_eq!(events[1].id.as_deref(), Some("7"));
}

#[test]
fn payload_decodes_as_json() {
    let mut dec = SseDecoder::new();
    let events =
        dec.feed(b"data: [{\"symbol\":\"AAPL\",\"lastSalePrice\":187.5}]\n\n");
    let rows: Vec<Value> = events[0].json().unwrap();
    assert_eq!(rows[0]["symbol"], "AAPL");

    let mut dec = SseDecoder::new();
    let events = dec.feed(b"data: not json\n\n");
    assert!(events[0].json::<Value>().is_err());
}

#[test]
fn many_events_in_one_chunk_keep_order_and_leave_the_tail() {
    let mut body = String::new();
    for n in 0..2_000 {
        body.push_str(&format!("id: {n}\ndata: [{n}]\n\n"));
    }
    body.push_str("data: [parti");

    let mut dec = SseDecoder::new();
    let events = dec.feed(body.as_bytes());
    assert_eq!(events.len(), 2_000);
    assert_eq!(events[0].data, "[0]");
    assert_eq!(events[1_999].data, "[1999]");
    assert_eq!(events[1_999].id.as_deref(), Some("1999"));

    let events = dec.feed(b"al]\n\n");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].data, "[partial]");
}

#[test]
fn unterminated_line_past_the_limit_is_dropped() {
    let mut dec = SseDecoder::new();
    assert!(dec.feed(b"data: kept\n").is_empty());

    let mut huge = b"data: ".to_vec();
    huge.resize(MAX_LINE_BYTES + 1, b'x');
    assert!(dec.feed(&huge).is_empty());

    // the rest of the oversized line and its event are gone
    let events = dec.feed(b"xxxx\n\ndata: after\n\n");
    let data: Vec<&str> = events.iter().map(|e| e.data.as_str()).collect();
    assert_eq!(data, ["after"]);
}
