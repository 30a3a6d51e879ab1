//! What-if projection: re-score cloned profiles across a two-axis grid of futures.

mod matrix;
mod scenario;
mod strategy;

pub use matrix::{CellResult, ProjectionMatrix};
pub(crate) use matrix::{descending_rows, write_score_pivot};
pub use scenario::{AxisKind, AxisSpec, Scenario};
pub use strategy::StrategySignals;

use std::time::Instant;

use chrono::{Months, NaiveDate};
use tracing::debug;

use super::domain::Profile;
use super::scoring::ScoringEngine;

/// Minimum months of Quebec experience for the simplified eligibility proxy.
pub const SECONDARY_MIN_QUEBEC_MONTHS: i32 = 24;
/// Minimum oral French level (listening and speaking) for the simplified eligibility proxy.
pub const SECONDARY_MIN_ORAL_LEVEL: i32 = 7;

/// Drives the scoring engine over every cell of a projection grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    engine: ScoringEngine,
}

impl Simulator {
    pub fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    /// Evaluate `|x| * |y|` scenarios. `today` anchors the date labels so results stay
    /// reproducible; an empty axis yields an empty matrix.
    pub fn project(
        &self,
        baseline: &Profile,
        x_axis: &AxisSpec,
        y_axis: &AxisSpec,
        today: NaiveDate,
    ) -> ProjectionMatrix {
        let started = Instant::now();

        let rows: Vec<Vec<CellResult>> = y_axis
            .values
            .iter()
            .map(|&y| {
                x_axis
                    .values
                    .iter()
                    .map(|&x| {
                        let scenario = Scenario::resolve((x_axis.kind, x), (y_axis.kind, y));
                        self.evaluate(baseline, &scenario, x, y, today)
                    })
                    .collect()
            })
            .collect();

        let matrix = ProjectionMatrix::new(
            x_axis.kind,
            y_axis.kind,
            x_axis.values.clone(),
            y_axis.values.clone(),
            rows,
        );

        debug!(
            x_axis = x_axis.kind.key(),
            y_axis = y_axis.kind.key(),
            cells = matrix.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "projection evaluated"
        );

        matrix
    }

    fn evaluate(
        &self,
        baseline: &Profile,
        scenario: &Scenario,
        x: i32,
        y: i32,
        today: NaiveDate,
    ) -> CellResult {
        let projected = scenario.apply(baseline);
        let outcome = self.engine.score(&projected);
        let months = scenario.months();

        CellResult {
            x,
            y,
            score: outcome.total_score,
            age: projected.age,
            months_elapsed: months,
            date_label: date_label(today, months),
            secondary_eligibility: secondary_eligibility(&projected),
        }
    }
}

/// Project `baseline` across both axes using the official grid.
pub fn run_projection(
    baseline: &Profile,
    x_axis: &AxisSpec,
    y_axis: &AxisSpec,
    today: NaiveDate,
) -> ProjectionMatrix {
    Simulator::default().project(baseline, x_axis, y_axis, today)
}

/// Coarse "Mon YYYY" label for `today` advanced by whole calendar months.
pub fn date_label(today: NaiveDate, months: i32) -> String {
    let months = u32::try_from(months).unwrap_or(0);
    today
        .checked_add_months(Months::new(months))
        .unwrap_or(today)
        .format("%b %Y")
        .to_string()
}

/// Illustrative proxy of the former experience-based program, independent of the grid score.
pub fn secondary_eligibility(profile: &Profile) -> bool {
    profile.quebec_experience_months >= SECONDARY_MIN_QUEBEC_MONTHS
        && profile.french.oral_floor() >= SECONDARY_MIN_ORAL_LEVEL
}
