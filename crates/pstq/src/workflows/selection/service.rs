use std::io::Write;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{FrenchSkills, Profile};
use super::draws::{self, InvitationRound};
use super::french::{self, LevelProgress, Skill, TestKind, TestScores};
use super::projection::{
    descending_rows, write_score_pivot, AxisKind, AxisSpec, CellResult, Simulator,
    StrategySignals,
};
use super::scoring::{ScoreOutcome, ScoringEngine};
use crate::config::SimulationConfig;

/// Body of a projection request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub baseline: Profile,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    /// Anchor for the date labels; the service clock is used when absent.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub target_score: Option<i32>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProjectionRequestError {
    #[error("{axis:?} axis has {len} values; at most {max} are accepted")]
    AxisTooLarge {
        axis: AxisKind,
        len: usize,
        max: usize,
    },
    #[error("target score must not be negative, got {0}")]
    NegativeTarget(i32),
}

/// Projection result as returned to API callers.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionView {
    pub x_axis: AxisKind,
    pub y_axis: AxisKind,
    pub x_values: Vec<i32>,
    pub y_values: Vec<i32>,
    /// Rows in y-axis order, each holding one cell per x value.
    pub cells: Vec<Vec<CellResult>>,
    pub baseline_score: i32,
    pub min_score: Option<i32>,
    pub max_score: Option<i32>,
    pub signals: StrategySignals,
}

impl ProjectionView {
    /// True when no row holds a cell, which happens as soon as either axis is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }

    /// Rows paired with their y value, highest y first.
    pub fn rows_descending(&self) -> Vec<(i32, &[CellResult])> {
        descending_rows(&self.y_values, &self.cells)
    }

    /// Score pivot as CSV, same layout as `ProjectionMatrix::write_csv`.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        write_score_pivot(
            writer,
            (self.x_axis, self.x_values.as_slice()),
            (self.y_axis, self.y_values.as_slice()),
            &self.cells,
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrenchRequest {
    pub test: TestKind,
    pub scores: TestScores,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillAssessment {
    pub skill: Skill,
    pub raw_score: i32,
    pub cefr: &'static str,
    pub progress: LevelProgress,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrenchAssessment {
    pub test: TestKind,
    pub levels: FrenchSkills,
    pub skills: Vec<SkillAssessment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrawsView {
    pub rounds: Vec<InvitationRound>,
    pub average_cutoff: f64,
    pub total_invited: u32,
    pub draw_count: usize,
}

/// Application service behind the selection endpoints and CLI commands.
#[derive(Debug, Clone, Default)]
pub struct SelectionService {
    engine: ScoringEngine,
    simulation: SimulationConfig,
}

impl SelectionService {
    pub fn new(engine: ScoringEngine, simulation: SimulationConfig) -> Self {
        Self { engine, simulation }
    }

    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }

    pub fn score(&self, profile: &Profile) -> ScoreOutcome {
        let outcome = self.engine.score(profile);
        debug!(
            total = outcome.total_score,
            human_capital = outcome.audit.human_capital(),
            quebec_needs = outcome.audit.quebec_needs(),
            adaptation = outcome.audit.adaptation(),
            "profile scored"
        );
        outcome
    }

    pub fn project(
        &self,
        request: &ProjectionRequest,
    ) -> Result<ProjectionView, ProjectionRequestError> {
        for axis in [&request.x_axis, &request.y_axis] {
            if axis.values.len() > self.simulation.max_axis_values {
                return Err(ProjectionRequestError::AxisTooLarge {
                    axis: axis.kind,
                    len: axis.values.len(),
                    max: self.simulation.max_axis_values,
                });
            }
        }
        let target = request.target_score.unwrap_or(self.simulation.target_score);
        if target < 0 {
            return Err(ProjectionRequestError::NegativeTarget(target));
        }

        let today = request
            .today
            .unwrap_or_else(|| Local::now().date_naive());
        let baseline = self.engine.score(&request.baseline);
        let matrix = Simulator::new(self.engine).project(
            &request.baseline,
            &request.x_axis,
            &request.y_axis,
            today,
        );
        let signals = StrategySignals::assess(&request.baseline, &baseline.audit, &matrix, target);

        info!(
            x_axis = request.x_axis.kind.key(),
            y_axis = request.y_axis.kind.key(),
            cells = matrix.len(),
            baseline = baseline.total_score,
            target,
            reachable = signals.target_reachable,
            "projection served"
        );

        Ok(ProjectionView {
            x_axis: matrix.x_kind,
            y_axis: matrix.y_kind,
            x_values: matrix.x_values.clone(),
            y_values: matrix.y_values.clone(),
            min_score: matrix.min_score(),
            max_score: matrix.max_score(),
            cells: matrix.rows().to_vec(),
            baseline_score: baseline.total_score,
            signals,
        })
    }

    pub fn french(&self, request: &FrenchRequest) -> FrenchAssessment {
        let skills = Skill::ordered()
            .into_iter()
            .map(|skill| {
                let raw_score = request.scores.get(skill);
                let progress = french::progress(request.test, skill, raw_score);
                SkillAssessment {
                    skill,
                    raw_score,
                    cefr: french::cefr_label(progress.level),
                    progress,
                }
            })
            .collect();

        FrenchAssessment {
            test: request.test,
            levels: FrenchSkills::from_test_scores(request.test, &request.scores),
            skills,
        }
    }

    pub fn draws(&self) -> DrawsView {
        let rounds = draws::recent_rounds();
        DrawsView {
            average_cutoff: draws::average_cutoff(&rounds),
            total_invited: draws::total_invited(&rounds),
            draw_count: draws::draw_count(&rounds),
            rounds: draws::display_order(&rounds),
        }
    }
}
