//! Share token end-to-end tests
//!
//! Encode application state into a token and decode it back through the
//! public API only.

use burndown_core::compact::CompactState;
use burndown_core::transport;
use burndown_core::{
    decode_print_data, encode_print_data, GuidelineSettings, ItemId, Period, PrintData, WorkItem,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn summer_homework() -> PrintData {
    PrintData::new()
        .with_period(Some(Period::new(date(2025, 7, 20), date(2025, 8, 31))))
        .with_item_added(WorkItem::fixed(ItemId::new("a"), "Reading Report", 10))
        .with_item_added(WorkItem::repeating(ItemId::new("b"), "Kanji Drill", 1, 15, "page"))
}

/// Same items with ids replaced by their positions
fn renumbered(data: &PrintData) -> PrintData {
    PrintData {
        items: data
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| item.clone().with_id(ItemId::positional(index)))
            .collect(),
        ..data.clone()
    }
}

#[test]
fn test_summer_scenario() {
    let token = encode_print_data(&summer_homework()).expect("encode");
    let decoded = decode_print_data(&token).expect("decode");

    let period = decoded.period.expect("period survives");
    assert_eq!(period.day_count(), 43);
    assert_eq!(period.start_date, date(2025, 7, 20));
    assert_eq!(period.end_date, date(2025, 8, 31));

    let points: Vec<u64> = decoded.items.iter().map(WorkItem::effective_points).collect();
    assert_eq!(points, vec![10, 15]);
    assert_eq!(decoded.total_points(), 25);
    assert_eq!(decoded.guidelines, GuidelineSettings::default());
}

#[test]
fn test_custom_guidelines_scenario() {
    let guidelines = GuidelineSettings {
        show_ideal_line: false,
        show_last_minute_line: true,
        ideal_days_before_end: 3,
    };
    let data = summer_homework().with_guidelines(guidelines);

    let compact = CompactState::from_print_data(&data);
    let pairs = serde_json::to_value(&compact.guidelines).unwrap();
    assert_eq!(pairs, serde_json::json!([["si", 0], ["id", 3]]));

    let decoded = decode_print_data(&encode_print_data(&data).unwrap()).unwrap();
    assert_eq!(decoded.guidelines, guidelines);
}

#[test]
fn test_round_trip_varied_states() {
    let states = vec![
        PrintData::new(),
        summer_homework(),
        summer_homework().with_period(None),
        PrintData::new()
            .with_period(Some(Period::new(date(2025, 12, 24), date(2026, 1, 7))))
            .with_item_added(WorkItem::repeating(ItemId::new("q"), "Diary", 1, 14, "day"))
            .with_item_added(WorkItem::repeating(ItemId::new("r"), "Problems", 3, 0, ""))
            .with_item_added(WorkItem::fixed(ItemId::new("s"), "", 0))
            .with_guidelines(GuidelineSettings {
                show_ideal_line: true,
                show_last_minute_line: false,
                ideal_days_before_end: 1,
            }),
        PrintData::new()
            // inverted period is carried as is
            .with_period(Some(Period::new(date(2025, 9, 1), date(2025, 8, 1))))
            .with_item_added(WorkItem::fixed(ItemId::new("t"), "漢字ドリル 📚 \"quoted\"", u32::MAX)),
        PrintData::new()
            .with_period(Some(Period::new(date(1970, 1, 1), date(1969, 12, 31)))),
    ];

    for state in states {
        let token = encode_print_data(&state).unwrap();
        let decoded = decode_print_data(&token).unwrap();
        assert_eq!(decoded, renumbered(&state), "token {}", token);
    }
}

#[test]
fn test_default_unit_name_is_not_on_the_wire() {
    let data = PrintData::new()
        .with_item_added(WorkItem::repeating(ItemId::new("a"), "Math Drill", 1, 15, "page"));
    let compact = CompactState::from_print_data(&data);
    let json = serde_json::to_string(&compact).unwrap();
    assert_eq!(json, r#"{"h":[[1,"Math Drill",1,15]]}"#);
}

#[test]
fn test_malformed_tokens_fail_cleanly() {
    let good = encode_print_data(&summer_homework()).unwrap();
    let mut flipped: Vec<char> = good.chars().collect();
    let mid = flipped.len() / 2;
    flipped[mid] = if flipped[mid] == 'A' { 'B' } else { 'A' };

    let malformed = vec![
        String::new(),
        "%%%".to_string(),
        "a".to_string(),
        "AAAA".to_string(),
        // "hello world", never compressed
        "aGVsbG8gd29ybGQ".to_string(),
        good[..good.len() / 2].to_string(),
        flipped.into_iter().collect(),
    ];

    for token in malformed {
        let err = decode_print_data(&token).expect_err(&token);
        assert!(err.is_decode(), "{:?}", err);
    }
}

#[test]
fn test_transport_is_independent_of_state() {
    let compact = CompactState::from_print_data(&summer_homework());
    let token = transport::encode_token(&compact).unwrap();
    assert_eq!(transport::decode_token(&token).unwrap(), compact);
}
