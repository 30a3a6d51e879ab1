use serde::{Deserialize, Serialize};

use crate::workflows::selection::domain::{FrenchSkills, Profile};

/// Dimension a projection axis sweeps over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    #[serde(alias = "time_travel")]
    MonthsElapsed,
    #[serde(alias = "fr_target")]
    ApplicantFrenchTarget,
    #[serde(alias = "sp_fr_target")]
    SpouseFrenchTarget,
}

impl AxisKind {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::MonthsElapsed,
            Self::ApplicantFrenchTarget,
            Self::SpouseFrenchTarget,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::MonthsElapsed => "months_elapsed",
            Self::ApplicantFrenchTarget => "applicant_french_target",
            Self::SpouseFrenchTarget => "spouse_french_target",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MonthsElapsed => "Future Months Worked",
            Self::ApplicantFrenchTarget => "My French Target (All Skills)",
            Self::SpouseFrenchTarget => "Spouse French Target (All Skills)",
        }
    }

    pub fn default_values(self) -> Vec<i32> {
        match self {
            Self::MonthsElapsed => vec![0, 6, 12, 18, 24, 30, 36, 48, 60],
            Self::ApplicantFrenchTarget | Self::SpouseFrenchTarget => {
                vec![4, 5, 6, 7, 8, 9, 10, 12]
            }
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "months_elapsed" | "months" | "time_travel" => Some(Self::MonthsElapsed),
            "applicant_french_target" | "french" | "fr_target" => {
                Some(Self::ApplicantFrenchTarget)
            }
            "spouse_french_target" | "spouse_french" | "sp_fr_target" => {
                Some(Self::SpouseFrenchTarget)
            }
            _ => None,
        }
    }
}

/// One projection axis: what it sweeps and the values, in caller order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub kind: AxisKind,
    #[serde(default)]
    pub values: Vec<i32>,
}

impl AxisSpec {
    pub fn new(kind: AxisKind, values: impl Into<Vec<i32>>) -> Self {
        Self {
            kind,
            values: values.into(),
        }
    }

    pub fn with_defaults(kind: AxisKind) -> Self {
        Self::new(kind, kind.default_values())
    }
}

/// Hypothetical future for one grid cell, resolved from both axis values.
///
/// Fields are merged last-writer-wins: when both axes share a kind, the y value
/// replaces the x value instead of compounding it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub months_elapsed: Option<i32>,
    pub french_target: Option<i32>,
    pub spouse_french_target: Option<i32>,
}

impl Scenario {
    pub fn resolve(x: (AxisKind, i32), y: (AxisKind, i32)) -> Self {
        Self::default().with(x.0, x.1).with(y.0, y.1)
    }

    pub fn with(mut self, kind: AxisKind, value: i32) -> Self {
        match kind {
            AxisKind::MonthsElapsed => self.months_elapsed = Some(value.max(0)),
            AxisKind::ApplicantFrenchTarget => self.french_target = Some(value),
            AxisKind::SpouseFrenchTarget => self.spouse_french_target = Some(value),
        }
        self
    }

    pub fn months(&self) -> i32 {
        self.months_elapsed.unwrap_or(0)
    }

    /// Clone `baseline` and project it into this scenario. The baseline is never touched.
    pub fn apply(&self, baseline: &Profile) -> Profile {
        let mut projected = baseline.clone();
        if let Some(months) = self.months_elapsed {
            advance_time(&mut projected, months);
        }
        if let Some(level) = self.french_target {
            projected.french = FrenchSkills::uniform(level);
        }
        if let Some(level) = self.spouse_french_target {
            projected.spouse.french = FrenchSkills::uniform(level);
        }
        projected
    }
}

/// Advance every time-dependent field by `months`.
///
/// Ages move in whole years only. Region residence and work only accrue when the
/// baseline counter is already positive; a zero counter is read as "not applicable".
/// Region study months never accrue.
fn advance_time(profile: &mut Profile, months: i32) {
    let months = months.max(0);
    let years = months / 12;
    let has_spouse = profile.has_accompanying_spouse;

    profile.age = profile.age.saturating_add(years);
    profile.general_experience_months = profile.general_experience_months.saturating_add(months);
    profile.shortage_occupation_months = profile.shortage_occupation_months.saturating_add(months);
    profile.quebec_experience_months = profile.quebec_experience_months.saturating_add(months);

    let ties = &mut profile.regional_ties;
    if ties.residence_months > 0 {
        ties.residence_months = ties.residence_months.saturating_add(months);
    }
    if ties.work_months > 0 {
        ties.work_months = ties.work_months.saturating_add(months);
    }

    if has_spouse {
        let spouse = &mut profile.spouse;
        spouse.age = spouse.age.saturating_add(years);
        spouse.quebec_experience_months = spouse.quebec_experience_months.saturating_add(months);
    }
}
