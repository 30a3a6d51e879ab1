//! Skilled worker selection: point-grid scoring, what-if projection, and the
//! reference data (invitation rounds, French test conversion) around them.

pub mod domain;
pub mod draws;
#[macro_use]
pub mod grid;
pub mod french;
pub mod projection;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Education, FrenchSkills, JobOffer, Profile, ProfileLoadError, RegionalTies,
    ShortageDiagnosis, SpouseEducation, SpouseProfile,
};
pub use draws::{InvitationRound, Stream};
pub use french::{LevelProgress, Skill, TestKind, TestScores};
pub use grid::{CategoryCeilings, PointGrid};
pub use projection::{
    run_projection, AxisKind, AxisSpec, CellResult, ProjectionMatrix, Scenario, Simulator,
    StrategySignals,
};
pub use router::selection_router;
pub use scoring::{calculate_score, AuditKey, Category, ScoreAudit, ScoreOutcome, ScoringEngine};
pub use service::{
    DrawsView, FrenchAssessment, FrenchRequest, ProjectionRequest, ProjectionRequestError,
    ProjectionView, SelectionService, SkillAssessment,
};
