//! Integration test: limit-up classification over a multi-instrument panel
//!
//! Covers the end-to-end behaviour of the engine:
//! 1. Board rates per prefix family
//! 2. Sealed / broken / none boundaries
//! 3. Independence from input order
//! 4. Daily aggregation with explicit zeros
//! 5. Restricted instruments never produce events

use chrono::NaiveDate;
use limitup_board::{NoExclusion, RestrictedList};
use limitup_core::{BoardCategory, DailyBar, LimitEvent, TradeDate};
use limitup_engine::{LimitEventEngine, PanelError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn day(d: u32) -> TradeDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn bar(code: &str, d: u32, high: Decimal, close: Decimal) -> DailyBar {
    DailyBar::new(code, day(d), close, high, close, close)
}

/// Three sessions for each board family
fn sample_panel() -> Vec<DailyBar> {
    vec![
        // Main board: sealed on day 4, broken on day 5
        bar("600519", 3, dec!(10.00), dec!(10.00)),
        bar("600519", 4, dec!(11.00), dec!(11.00)),
        bar("600519", 5, dec!(12.10), dec!(11.50)),
        // ChiNext: broken on day 4
        bar("300750", 3, dec!(20.00), dec!(20.00)),
        bar("300750", 4, dec!(24.00), dec!(23.00)),
        bar("300750", 5, dec!(23.50), dec!(23.10)),
        // STAR: sealed on day 4
        bar("688001", 3, dec!(50.00), dec!(50.00)),
        bar("688001", 4, dec!(60.00), dec!(60.00)),
        bar("688001", 5, dec!(61.00), dec!(60.50)),
        // NEEQ: sealed on day 5
        bar("831010", 3, dec!(20.00), dec!(20.00)),
        bar("831010", 4, dec!(21.00), dec!(20.00)),
        bar("831010", 5, dec!(26.00), dec!(26.00)),
    ]
}

#[test]
fn test_panel_classification() {
    let _ = env_logger::try_init();

    let engine = LimitEventEngine::new();
    let panel = engine.evaluate(sample_panel()).unwrap();
    assert_eq!(panel.len(), 12);

    let events: Vec<_> = panel
        .events()
        .into_iter()
        .map(|r| (r.trade_date, r.instrument.as_str(), r.board, r.limit_event))
        .collect();

    assert_eq!(
        events,
        vec![
            (day(4), "300750", BoardCategory::Chinext, LimitEvent::Broken),
            (day(4), "600519", BoardCategory::Main, LimitEvent::Sealed),
            (day(4), "688001", BoardCategory::Star, LimitEvent::Sealed),
            (day(5), "600519", BoardCategory::Main, LimitEvent::Broken),
            (day(5), "831010", BoardCategory::Neeq, LimitEvent::Sealed),
        ]
    );
}

#[test]
fn test_first_session_never_an_event() {
    let engine = LimitEventEngine::new();
    let panel = engine.evaluate(sample_panel()).unwrap();

    for row in panel.rows().iter().filter(|r| r.trade_date == day(3)) {
        assert_eq!(row.prev_close, None, "{}", row.instrument);
        assert_eq!(row.limit_price, None);
        assert_eq!(row.limit_event, LimitEvent::None);
    }
}

#[test]
fn test_reversed_input_gives_same_result() {
    let engine = LimitEventEngine::new();

    let sorted = engine.evaluate(sample_panel()).unwrap();
    let mut reversed_bars = sample_panel();
    reversed_bars.reverse();
    let reversed = engine.evaluate(reversed_bars).unwrap();

    assert_eq!(sorted, reversed);
}

#[test]
fn test_daily_summary() {
    let engine = LimitEventEngine::new();
    let summary = engine.evaluate(sample_panel()).unwrap().daily_summary();

    let rows: Vec<_> = summary
        .iter()
        .map(|s| (s.trade_date, s.sealed_count, s.broken_count, s.total_count))
        .collect();

    assert_eq!(
        rows,
        vec![
            (day(3), 0, 0, 0),
            (day(4), 2, 1, 3),
            (day(5), 1, 1, 2),
        ]
    );
}

#[test]
fn test_three_sealed_zero_broken() {
    let engine = LimitEventEngine::new().with_exclusion(Box::new(NoExclusion));
    let mut bars = Vec::new();
    for code in ["600000", "600001", "600002"] {
        bars.push(bar(code, 3, dec!(10.00), dec!(10.00)));
        bars.push(bar(code, 4, dec!(11.00), dec!(11.00)));
    }

    let summary = engine.evaluate(bars).unwrap().daily_summary();
    let day4 = summary.iter().find(|s| s.trade_date == day(4)).unwrap();
    assert_eq!(
        (day4.sealed_count, day4.broken_count, day4.total_count),
        (3, 0, 3)
    );
}

#[test]
fn test_restricted_instruments_never_events() {
    let engine = LimitEventEngine::new()
        .with_exclusion(Box::new(RestrictedList::new(["600519", "688001"])));
    let panel = engine.evaluate(sample_panel()).unwrap();

    for row in panel.rows() {
        if matches!(row.instrument.as_str(), "600519" | "688001") {
            assert!(row.excluded);
            assert_eq!(row.limit_event, LimitEvent::None);
        }
    }
    assert_eq!(panel.counts().total, 2);
}

#[test]
fn test_single_date_query() {
    let engine = LimitEventEngine::new();
    let events = engine.evaluate_on(sample_panel(), day(5)).unwrap();

    let codes: Vec<_> = events.iter().map(|r| r.instrument.as_str()).collect();
    assert_eq!(codes, vec!["600519", "831010"]);
    assert!(events.iter().all(|r| r.trade_date == day(5)));
}

#[test]
fn test_rows_on_date_include_non_events() {
    let engine = LimitEventEngine::new();
    let panel = engine.evaluate(sample_panel()).unwrap();

    let rows = panel.on_date(day(4));
    assert_eq!(rows.len(), 4);
    let events: Vec<_> = rows
        .iter()
        .map(|r| (r.instrument.as_str(), r.limit_event))
        .collect();
    assert_eq!(
        events,
        vec![
            ("300750", LimitEvent::Broken),
            ("600519", LimitEvent::Sealed),
            ("688001", LimitEvent::Sealed),
            ("831010", LimitEvent::None),
        ]
    );
    assert!(panel.on_date(day(6)).is_empty());
}

#[test]
fn test_duplicate_date_fails_batch() {
    let engine = LimitEventEngine::new();
    let mut bars = sample_panel();
    bars.push(bar("300750", 4, dec!(24.00), dec!(24.00)));

    let err = engine.evaluate(bars).unwrap_err();
    assert!(matches!(err, PanelError::InputOrdering { .. }));
}
