//! Conversion of raw French test results to the 0-12 Quebec scale.

use serde::{Deserialize, Serialize};

use super::domain::FrenchSkills;
use super::grid::{Band, BandTable, OPEN_END};

/// Accepted standardized French tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestKind {
    #[serde(alias = "tef_canada", alias = "TEF Canada")]
    TefCanada,
    #[serde(alias = "TEFAQ")]
    Tefaq,
    #[serde(alias = "tcf_canada", alias = "TCF Canada")]
    TcfCanada,
}

impl TestKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::TefCanada => "TEF Canada",
            Self::Tefaq => "TEFAQ",
            Self::TcfCanada => "TCF Canada",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "tefcanada" | "tef" => Some(Self::TefCanada),
            "tefaq" => Some(Self::Tefaq),
            "tcfcanada" | "tcf" => Some(Self::TcfCanada),
            _ => None,
        }
    }

    /// Highest raw score the test reports for `skill`.
    pub const fn scale_max(self, skill: Skill) -> i32 {
        match (self, skill) {
            (Self::TcfCanada, Skill::Speaking | Skill::Writing) => 20,
            _ => 699,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Listening,
    Speaking,
    Reading,
    Writing,
}

impl Skill {
    pub const fn ordered() -> [Self; 4] {
        [Self::Listening, Self::Speaking, Self::Reading, Self::Writing]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Listening => "Listening",
            Self::Speaking => "Speaking",
            Self::Reading => "Reading",
            Self::Writing => "Writing",
        }
    }
}

/// TEF Canada and TEFAQ share the 0-699 scale on every skill.
static TEF: BandTable = bands![
    (0, 100, 0),
    (100, 200, 1),
    (200, 260, 3),
    (260, 300, 4),
    (300, 350, 5),
    (350, 400, 6),
    (400, 450, 7),
    (450, 500, 8),
    (500, 550, 9),
    (550, 600, 10),
    (600, 650, 11),
    (650, OPEN_END, 12),
];

static TCF_LISTENING: BandTable = bands![
    (0, 331, 0),
    (331, 369, 4),
    (369, 398, 5),
    (398, 458, 6),
    (458, 503, 7),
    (503, 523, 8),
    (523, 549, 9),
    (549, 580, 10),
    (580, 600, 11),
    (600, OPEN_END, 12),
];

static TCF_READING: BandTable = bands![
    (0, 342, 0),
    (342, 375, 4),
    (375, 406, 5),
    (406, 453, 6),
    (453, 500, 7),
    (500, 524, 8),
    (524, 549, 9),
    (549, 580, 10),
    (580, 600, 11),
    (600, OPEN_END, 12),
];

/// Speaking and writing are marked out of 20.
static TCF_PRODUCTIVE: BandTable = bands![
    (0, 6, 0),
    (6, 7, 4),
    (7, 10, 5),
    (10, 12, 6),
    (12, 14, 7),
    (14, 16, 8),
    (16, 18, 9),
    (18, 20, 10),
    (20, OPEN_END, 12),
];

pub fn conversion_table(test: TestKind, skill: Skill) -> &'static BandTable {
    match (test, skill) {
        (TestKind::TefCanada | TestKind::Tefaq, _) => &TEF,
        (TestKind::TcfCanada, Skill::Listening) => &TCF_LISTENING,
        (TestKind::TcfCanada, Skill::Reading) => &TCF_READING,
        (TestKind::TcfCanada, Skill::Speaking | Skill::Writing) => &TCF_PRODUCTIVE,
    }
}

/// Quebec scale level for a raw score. Scores above the scale keep the top level;
/// negative scores map to 0.
pub fn level_for(test: TestKind, skill: Skill, raw_score: i32) -> i32 {
    conversion_table(test, skill).points(raw_score)
}

/// Position of a raw score inside its current level band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelProgress {
    pub level: i32,
    /// Raw score that unlocks the next level; `None` at the top level.
    pub next_threshold: Option<i32>,
    pub points_needed: i32,
    pub floor: i32,
    pub scale_max: i32,
    pub percent: f64,
}

pub fn progress(test: TestKind, skill: Skill, raw_score: i32) -> LevelProgress {
    let table = conversion_table(test, skill);
    let level = table.points(raw_score);
    let scale_max = test.scale_max(skill);
    let score = i64::from(raw_score);

    let mut floor = 0_i64;
    let mut next = None;
    for threshold in table.thresholds() {
        if score < threshold {
            next = Some(threshold);
            break;
        }
        floor = threshold;
    }

    match next {
        None => LevelProgress {
            level,
            next_threshold: None,
            points_needed: 0,
            floor: clamp_i32(floor),
            scale_max,
            percent: 100.0,
        },
        Some(next) => {
            let span = (next - floor).max(1);
            let percent = ((score - floor) as f64 / span as f64 * 100.0).clamp(0.0, 100.0);
            LevelProgress {
                level,
                next_threshold: Some(clamp_i32(next)),
                points_needed: clamp_i32(next - score),
                floor: clamp_i32(floor),
                scale_max,
                percent,
            }
        }
    }
}

fn clamp_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// CEFR band for a Quebec scale level.
pub const fn cefr_label(level: i32) -> &'static str {
    match level {
        11.. => "C2",
        9..=10 => "C1",
        7..=8 => "B2",
        5..=6 => "B1",
        1..=4 => "A1-A2",
        _ => "Pre-A1",
    }
}

/// Raw results of one test sitting, one score per skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestScores {
    pub listening: i32,
    pub speaking: i32,
    pub reading: i32,
    pub writing: i32,
}

impl TestScores {
    pub const fn get(&self, skill: Skill) -> i32 {
        match skill {
            Skill::Listening => self.listening,
            Skill::Speaking => self.speaking,
            Skill::Reading => self.reading,
            Skill::Writing => self.writing,
        }
    }
}

impl FrenchSkills {
    pub fn from_test_scores(test: TestKind, scores: &TestScores) -> Self {
        Self {
            listening: level_for(test, Skill::Listening, scores.listening),
            speaking: level_for(test, Skill::Speaking, scores.speaking),
            reading: level_for(test, Skill::Reading, scores.reading),
            writing: level_for(test, Skill::Writing, scores.writing),
        }
    }
}
