mod audit;
mod rules;

pub use audit::{AuditKey, Category, ScoreAudit};

use serde::Serialize;

use super::domain::Profile;
use super::grid::{CategoryCeilings, PointGrid};

/// Stateless evaluator that applies a point grid to a profile.
///
/// The engine only reads the grid and allocates a fresh audit per call, so one
/// instance can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    grid: &'static PointGrid,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(PointGrid::official())
    }
}

impl ScoringEngine {
    pub fn new(grid: &'static PointGrid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &'static PointGrid {
        self.grid
    }

    pub fn score(&self, profile: &Profile) -> ScoreOutcome {
        let (total_score, audit) = rules::score_profile(profile, self.grid);
        ScoreOutcome {
            total_score,
            ceilings: CategoryCeilings::from_grid(self.grid, profile.has_accompanying_spouse),
            audit,
        }
    }
}

/// Score for one profile together with its itemized audit trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOutcome {
    pub total_score: i32,
    pub audit: ScoreAudit,
    pub ceilings: CategoryCeilings,
}

impl ScoreOutcome {
    /// Best attainable points for one audit line, for "points / max" rendering.
    pub fn ceiling(&self, key: AuditKey) -> i32 {
        let c = &self.ceilings;
        match key {
            AuditKey::FrenchListening
            | AuditKey::FrenchSpeaking
            | AuditKey::FrenchReading
            | AuditKey::FrenchWriting => c.french_per_skill,
            AuditKey::French => c.french,
            AuditKey::Age => c.age,
            AuditKey::Experience => c.experience,
            AuditKey::Education => c.education,
            AuditKey::HumanCapitalTotal => c.human_capital,
            AuditKey::Shortage => c.shortage,
            AuditKey::QuebecExperience => c.quebec_experience,
            AuditKey::QuebecDiploma => c.quebec_diploma,
            AuditKey::RegionResidence => c.region_residence,
            AuditKey::RegionWork => c.region_work,
            AuditKey::RegionStudy => c.region_study,
            AuditKey::Regions => c.regions,
            AuditKey::JobOffer => c.job_offer,
            AuditKey::RegulatedLicense => c.regulated_license,
            AuditKey::QuebecNeedsTotal => c.quebec_needs,
            AuditKey::Family => c.family,
            AuditKey::SpouseFrench => c.spouse_french,
            AuditKey::SpouseAge => c.spouse_age,
            AuditKey::SpouseQuebecExperience => c.spouse_quebec_experience,
            AuditKey::SpouseEducation => c.spouse_education,
            AuditKey::AdaptationTotal => c.adaptation,
            AuditKey::Total => c.human_capital + c.quebec_needs + c.adaptation,
        }
    }
}

/// Score a profile against the official grid.
///
/// Never fails: unmapped categories and out-of-range numbers simply score zero.
pub fn calculate_score(profile: &Profile) -> (i32, ScoreAudit) {
    rules::score_profile(profile, PointGrid::official())
}
