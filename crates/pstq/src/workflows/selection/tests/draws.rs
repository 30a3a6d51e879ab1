use chrono::NaiveDate;

use crate::workflows::selection::draws::{
    average_cutoff, display_order, draw_count, recent_rounds, rounds_for, total_invited, Stream,
};

#[test]
fn recent_rounds_include_uncut_exceptional_talent_draws() {
    let rounds = recent_rounds();
    assert_eq!(rounds.len(), 13);
    let uncut: Vec<_> = rounds.iter().filter(|round| round.cutoff.is_none()).collect();
    assert_eq!(uncut.len(), 3);
    assert!(uncut
        .iter()
        .all(|round| round.stream == Stream::ExceptionalTalent));
    assert!(!Stream::ExceptionalTalent.publishes_cutoff());
}

#[test]
fn average_ignores_rounds_without_cutoff() {
    let rounds = recent_rounds();
    assert!((average_cutoff(&rounds) - 681.7).abs() < 1e-9);
    assert_eq!(average_cutoff(&[]), 0.0);
    let exceptional = rounds_for(&rounds, Stream::ExceptionalTalent);
    assert_eq!(exceptional.len(), 3);
    assert_eq!(average_cutoff(&exceptional), 0.0);
}

#[test]
fn display_order_is_newest_then_stream_then_highest_cutoff() {
    let ordered = display_order(&recent_rounds());
    let newest = NaiveDate::from_ymd_opt(2025, 12, 4).expect("valid date");

    let head: Vec<(Stream, Option<i32>)> = ordered
        .iter()
        .take(7)
        .map(|round| (round.stream, round.cutoff))
        .collect();
    assert!(ordered.iter().take(7).all(|round| round.date == newest));
    assert_eq!(
        head,
        vec![
            (Stream::HighlyQualified, Some(781)),
            (Stream::HighlyQualified, Some(644)),
            (Stream::IntermediateManual, Some(612)),
            (Stream::IntermediateManual, Some(573)),
            (Stream::RegulatedProfessions, Some(717)),
            (Stream::RegulatedProfessions, Some(535)),
            (Stream::ExceptionalTalent, None),
        ]
    );

    let last = ordered.last().expect("rounds present");
    assert_eq!(last.stream, Stream::ExceptionalTalent);
    assert_eq!(last.date, NaiveDate::from_ymd_opt(2025, 7, 17).expect("valid"));
}

#[test]
fn invitations_count_each_draw_once() {
    let rounds = recent_rounds();
    assert_eq!(draw_count(&rounds), 10);
    assert_eq!(total_invited(&rounds), 2906);
}

#[test]
fn rounds_describe_themselves_for_target_pickers() {
    let rounds = recent_rounds();
    assert_eq!(
        rounds[0].describe(),
        "2025-12-04 - Stream 1: Highly qualified workers (781 pts)"
    );
}
