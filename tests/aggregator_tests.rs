use gc_trace_tools::aggregator::{calculate_pause_stats, total_reclaimed};
use gc_trace_tools::parser::{parse_trace, PauseEvent};

#[test]
fn test_empty_input_reduces_to_zero() {
    let parsed = parse_trace("").unwrap();
    assert_eq!(total_reclaimed(&parsed.pause_events), 0);
}

#[test]
fn test_multiple_lines_accumulate() {
    let input = "\
pause total_size_before=300000 total_size_after=0
pause total_size_before=100000 total_size_after=200000
";

    let parsed = parse_trace(input).unwrap();

    // 300000 + (-100000)
    assert_eq!(total_reclaimed(&parsed.pause_events), 200000);
}

#[test]
fn test_reduction_is_idempotent() {
    let events = vec![
        PauseEvent {
            total_size_before: 1000000,
            total_size_after: 400000,
        },
        PauseEvent {
            total_size_before: 500000,
            total_size_after: 200000,
        },
    ];

    assert_eq!(total_reclaimed(&events), total_reclaimed(&events));
    assert_eq!(total_reclaimed(&events), 900000);
}

#[test]
fn test_stats_over_parsed_trace() {
    let input = "\
pause total_size_before=1000 total_size_after=400
minor_gc total_size_before=9 total_size_after=9
pause total_size_before=500 total_size_after=700
";

    let parsed = parse_trace(input).unwrap();
    let stats = calculate_pause_stats(&parsed.pause_events);

    assert_eq!(stats.pause_count, 2);
    assert_eq!(stats.total_reclaimed_bytes, 400);
    assert_eq!(stats.largest_reclaimed, 600);
    assert_eq!(stats.smallest_reclaimed, -200);
    assert_eq!(stats.grew_count, 1);
}

#[test]
fn test_stats_empty_is_default_zero() {
    let stats = calculate_pause_stats(&[]);

    assert_eq!(stats.pause_count, 0);
    assert_eq!(stats.total_reclaimed_bytes, 0);
    assert_eq!(stats.largest_reclaimed, 0);
    assert_eq!(stats.mean_reclaimed, 0);
    assert!(!stats.net_growth());
}

#[test]
fn test_large_accumulator_values() {
    // Well beyond 2^53, still exact in i64
    let events = vec![PauseEvent {
        total_size_before: 1 << 60,
        total_size_after: 1 << 59,
    }];

    assert_eq!(total_reclaimed(&events), 1 << 59);
}
