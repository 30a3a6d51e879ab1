use serde::Serialize;

use super::matrix::{CellResult, ProjectionMatrix};
use crate::workflows::selection::domain::Profile;
use crate::workflows::selection::scoring::{AuditKey, ScoreAudit};

/// Level under which a reading or writing result is treated as an untapped lever.
const WEAK_WRITTEN_LEVEL: i32 = 5;
/// Spouse French points at or above this value leave nothing to gain.
const SPOUSE_FRENCH_CEILING: i32 = 40;

/// Facts about a baseline and its projection that frame the usual trade-offs
/// (job offer versus shortage occupation, written French, spouse French, diploma).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategySignals {
    pub baseline_score: i32,
    pub target_score: i32,
    /// Points still missing at baseline; zero once the target is met.
    pub baseline_gap: i32,
    pub job_offer_points: i32,
    pub shortage_points: i32,
    pub weak_written_french: bool,
    pub spouse_can_improve: bool,
    pub projection_max: Option<i32>,
    pub target_reachable: bool,
    pub first_reaching: Option<CellResult>,
}

impl StrategySignals {
    pub fn assess(
        profile: &Profile,
        audit: &ScoreAudit,
        matrix: &ProjectionMatrix,
        target_score: i32,
    ) -> Self {
        let baseline_score = audit.total();
        let projection_max = matrix.max_score();
        let first_reaching = matrix.first_reaching(target_score).cloned();

        Self {
            baseline_score,
            target_score,
            baseline_gap: (target_score - baseline_score).max(0),
            job_offer_points: audit.points(AuditKey::JobOffer),
            shortage_points: audit.points(AuditKey::Shortage),
            weak_written_french: profile.french.reading < WEAK_WRITTEN_LEVEL
                || profile.french.writing < WEAK_WRITTEN_LEVEL,
            spouse_can_improve: profile.has_accompanying_spouse
                && audit.points(AuditKey::SpouseFrench) < SPOUSE_FRENCH_CEILING,
            projection_max,
            target_reachable: baseline_score >= target_score || first_reaching.is_some(),
            first_reaching,
        }
    }

    pub fn has_job_offer_points(&self) -> bool {
        self.job_offer_points > 0
    }

    /// Swapping occupations to chase shortage points usually forfeits the job offer.
    /// True when the best shortage award could not even replace it.
    pub fn occupation_change_is_net_loss(&self, best_shortage: i32) -> bool {
        self.has_job_offer_points() && best_shortage <= self.job_offer_points
    }
}
