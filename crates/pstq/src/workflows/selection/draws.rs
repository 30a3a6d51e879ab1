//! Published invitation rounds, used as reference cut-offs for projection targets.

use chrono::NaiveDate;
use serde::Serialize;

/// Selection stream an invitation round belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    HighlyQualified,
    IntermediateManual,
    RegulatedProfessions,
    ExceptionalTalent,
}

impl Stream {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::HighlyQualified,
            Self::IntermediateManual,
            Self::RegulatedProfessions,
            Self::ExceptionalTalent,
        ]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::HighlyQualified => 1,
            Self::IntermediateManual => 2,
            Self::RegulatedProfessions => 3,
            Self::ExceptionalTalent => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlyQualified => "Stream 1: Highly qualified workers",
            Self::IntermediateManual => "Stream 2: Intermediate and manual skills",
            Self::RegulatedProfessions => "Stream 3: Regulated professions",
            Self::ExceptionalTalent => "Stream 4: Exceptional talent",
        }
    }

    /// Exceptional talent rounds invite without publishing a points cut-off.
    pub const fn publishes_cutoff(self) -> bool {
        !matches!(self, Self::ExceptionalTalent)
    }
}

/// One published cut-off within a draw. A draw may publish several cut-offs
/// per stream; `invited` is the draw total and repeats on each of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvitationRound {
    pub date: NaiveDate,
    pub stream: Stream,
    pub cutoff: Option<i32>,
    pub invited: u32,
    pub note: &'static str,
}

impl InvitationRound {
    /// Short label suitable for picking a projection target.
    pub fn describe(&self) -> String {
        match self.cutoff {
            Some(cutoff) => format!("{} - {} ({cutoff} pts)", self.date, self.stream.label()),
            None => format!("{} - {}", self.date, self.stream.label()),
        }
    }
}

const ROUNDS: [(i32, u32, u32, Stream, Option<i32>, u32, &str); 13] = [
    (2025, 12, 4, Stream::HighlyQualified, Some(781), 605, "Quebec diploma holders"),
    (2025, 12, 4, Stream::HighlyQualified, Some(644), 605, "Manufacturing occupations"),
    (2025, 12, 4, Stream::IntermediateManual, Some(612), 604, "Priority occupations"),
    (2025, 12, 4, Stream::IntermediateManual, Some(573), 604, "Manufacturing occupations"),
    (2025, 12, 4, Stream::RegulatedProfessions, Some(717), 649, "Priority professions"),
    (2025, 12, 4, Stream::RegulatedProfessions, Some(535), 649, "Construction trades"),
    (2025, 8, 28, Stream::HighlyQualified, Some(760), 227, "General round"),
    (2025, 8, 14, Stream::RegulatedProfessions, Some(766), 277, "General round"),
    (2025, 7, 31, Stream::IntermediateManual, Some(661), 273, "General round"),
    (2025, 7, 17, Stream::HighlyQualified, Some(768), 216, "General round"),
    (2025, 7, 17, Stream::ExceptionalTalent, None, 22, "Partner organization referrals"),
    (2025, 8, 25, Stream::ExceptionalTalent, None, 21, "Exceptional talent"),
    (2025, 12, 4, Stream::ExceptionalTalent, None, 12, "Doctorate or equivalent"),
];

/// Most recent published rounds, in publication-record order.
pub fn recent_rounds() -> Vec<InvitationRound> {
    ROUNDS
        .iter()
        .filter_map(|&(year, month, day, stream, cutoff, invited, note)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| InvitationRound {
                date,
                stream,
                cutoff,
                invited,
                note,
            })
        })
        .collect()
}

/// Mean of every published cut-off; rounds without one are ignored. 0.0 when none remain.
pub fn average_cutoff(rounds: &[InvitationRound]) -> f64 {
    let cutoffs: Vec<i32> = rounds.iter().filter_map(|round| round.cutoff).collect();
    if cutoffs.is_empty() {
        return 0.0;
    }
    let sum: i64 = cutoffs.iter().map(|cutoff| i64::from(*cutoff)).sum();
    sum as f64 / cutoffs.len() as f64
}

pub fn rounds_for(rounds: &[InvitationRound], stream: Stream) -> Vec<InvitationRound> {
    rounds
        .iter()
        .filter(|round| round.stream == stream)
        .cloned()
        .collect()
}

/// Newest date first, then stream, then the higher cut-off first (missing cut-offs last).
pub fn display_order(rounds: &[InvitationRound]) -> Vec<InvitationRound> {
    let mut ordered = rounds.to_vec();
    ordered.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then(a.stream.cmp(&b.stream))
            .then(b.cutoff.cmp(&a.cutoff))
    });
    ordered
}

/// Invitations issued, counting each (date, stream) draw once.
pub fn total_invited(rounds: &[InvitationRound]) -> u32 {
    distinct_draws(rounds)
        .into_iter()
        .map(|round| round.invited)
        .sum()
}

/// Number of distinct (date, stream) draws.
pub fn draw_count(rounds: &[InvitationRound]) -> usize {
    distinct_draws(rounds).len()
}

fn distinct_draws(rounds: &[InvitationRound]) -> Vec<&InvitationRound> {
    let mut seen = Vec::new();
    let mut draws = Vec::new();
    for round in rounds {
        let key = (round.date, round.stream);
        if !seen.contains(&key) {
            seen.push(key);
            draws.push(round);
        }
    }
    draws
}
