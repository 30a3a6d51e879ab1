use crate::infra::{bootstrap, parse_axis_kind, parse_date, parse_test_kind};
use chrono::{Local, NaiveDate};
use clap::Args;
use pstq::error::AppError;
use pstq::workflows::selection::{
    AuditKey, AxisKind, AxisSpec, Category, CellResult, DrawsView, Education, FrenchAssessment,
    FrenchRequest, FrenchSkills, JobOffer, Profile, ProjectionRequest, ProjectionView,
    RegionalTies, ScoreOutcome, ScoringEngine, SelectionService, ShortageDiagnosis,
    SpouseEducation, SpouseProfile, StrategySignals, TestKind, TestScores,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Profile document (JSON)
    #[arg(long)]
    pub(crate) profile: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ProjectArgs {
    /// Profile document (JSON) used as the baseline
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Horizontal axis
    #[arg(long, value_parser = parse_axis_kind, default_value = "months_elapsed")]
    pub(crate) x: AxisKind,
    /// Vertical axis
    #[arg(long, value_parser = parse_axis_kind, default_value = "applicant_french_target")]
    pub(crate) y: AxisKind,
    /// Comma separated values for the horizontal axis (defaults depend on the axis)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub(crate) x_values: Vec<i32>,
    /// Comma separated values for the vertical axis (defaults depend on the axis)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub(crate) y_values: Vec<i32>,
    /// Score to aim for (defaults to PSTQ_TARGET_SCORE)
    #[arg(long)]
    pub(crate) target: Option<i32>,
    /// Anchor date for the date labels (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the score pivot as CSV instead of a table
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug)]
pub(crate) struct FrenchArgs {
    /// Test taken: tef-canada, tefaq or tcf-canada
    #[arg(long, value_parser = parse_test_kind, default_value = "tef-canada")]
    pub(crate) test: TestKind,
    #[arg(long, default_value_t = 0)]
    pub(crate) listening: i32,
    #[arg(long, default_value_t = 0)]
    pub(crate) speaking: i32,
    #[arg(long, default_value_t = 0)]
    pub(crate) reading: i32,
    #[arg(long, default_value_t = 0)]
    pub(crate) writing: i32,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Anchor date for the projection (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Score to aim for (defaults to PSTQ_TARGET_SCORE)
    #[arg(long)]
    pub(crate) target: Option<i32>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let service = SelectionService::new(ScoringEngine::default(), config.simulation);

    let profile = Profile::from_path(&args.profile)?;
    let outcome = service.score(&profile);
    info!(profile = %args.profile.display(), total = outcome.total_score, "scored profile");

    render_score(&profile, &outcome);
    Ok(())
}

pub(crate) fn run_project(args: ProjectArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let service = SelectionService::new(ScoringEngine::default(), config.simulation);

    let baseline = Profile::from_path(&args.profile)?;
    let request = ProjectionRequest {
        baseline,
        x_axis: axis_or_default(args.x, args.x_values),
        y_axis: axis_or_default(args.y, args.y_values),
        today: Some(args.today.unwrap_or_else(|| Local::now().date_naive())),
        target_score: args.target,
    };
    let view = service.project(&request)?;

    if args.csv {
        view.write_csv(std::io::stdout())?;
    } else {
        render_projection(&view);
        render_signals(&view.signals);
    }
    Ok(())
}

pub(crate) fn run_french(args: FrenchArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let service = SelectionService::new(ScoringEngine::default(), config.simulation);

    let request = FrenchRequest {
        test: args.test,
        scores: TestScores {
            listening: args.listening,
            speaking: args.speaking,
            reading: args.reading,
            writing: args.writing,
        },
    };
    render_french(&service.french(&request));
    Ok(())
}

pub(crate) fn run_draws() -> Result<(), AppError> {
    let config = bootstrap()?;
    let service = SelectionService::new(ScoringEngine::default(), config.simulation);
    render_draws(&service.draws());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let service = SelectionService::new(ScoringEngine::default(), config.simulation);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    println!("Selection grid demo: couple, Bach 2y, French 7, job offer outside Montreal");
    let profile = demo_profile();
    let outcome = service.score(&profile);
    render_score(&profile, &outcome);

    let request = ProjectionRequest {
        baseline: profile,
        x_axis: AxisSpec::with_defaults(AxisKind::MonthsElapsed),
        y_axis: AxisSpec::with_defaults(AxisKind::ApplicantFrenchTarget),
        today: Some(today),
        target_score: args.target,
    };
    let view = service.project(&request)?;
    println!();
    render_projection(&view);
    render_signals(&view.signals);

    println!();
    render_draws(&service.draws());
    Ok(())
}

fn axis_or_default(kind: AxisKind, values: Vec<i32>) -> AxisSpec {
    if values.is_empty() {
        AxisSpec::with_defaults(kind)
    } else {
        AxisSpec::new(kind, values)
    }
}

/// Couple profile used by the demo command.
pub(crate) fn demo_profile() -> Profile {
    Profile {
        age: 35,
        education: Education::Bachelor2y,
        general_experience_months: 36,
        french: FrenchSkills::uniform(7),
        shortage_diagnosis: ShortageDiagnosis::None,
        shortage_occupation_months: 12,
        quebec_experience_months: 12,
        validated_job_offer: JobOffer::OutsideMetro,
        has_regulated_license: false,
        quebec_diploma: Education::None,
        regional_ties: RegionalTies {
            residence_months: 36,
            work_months: 12,
            study_months: 0,
        },
        has_accompanying_spouse: true,
        spouse: SpouseProfile {
            age: 35,
            education: SpouseEducation::Masters,
            quebec_experience_months: 12,
            french: FrenchSkills {
                listening: 0,
                speaking: 7,
                reading: 0,
                writing: 0,
            },
        },
        has_family_in_province: false,
    }
}

pub(crate) fn render_score(profile: &Profile, outcome: &ScoreOutcome) {
    println!(
        "Total score: {} / {}",
        outcome.total_score,
        outcome.ceiling(AuditKey::Total)
    );
    if profile.has_accompanying_spouse {
        println!("Household: accompanied by spouse");
    } else {
        println!("Household: single applicant");
    }

    let mut current: Option<Category> = None;
    for (key, points) in outcome.audit.iter() {
        if key == AuditKey::Total {
            continue;
        }
        let category = key.category();
        if current != Some(category) {
            println!("\n{}", category.label());
            current = Some(category);
        }
        let indent = if key.is_subtotal() { "" } else { "  " };
        println!(
            "{indent}- {}: {} / {}",
            key.label(),
            points,
            outcome.ceiling(key)
        );
    }
}

pub(crate) fn render_projection(view: &ProjectionView) {
    print!("{}", projection_table(view));
}

pub(crate) fn projection_table(view: &ProjectionView) -> String {
    let mut out = format!(
        "Projection: {} (columns) x {} (rows), target {}\n",
        view.x_axis.label(),
        view.y_axis.label(),
        view.signals.target_score
    );
    if view.is_empty() {
        out.push_str("No cells: one of the axes has no values.\n");
        return out;
    }

    out.push_str(&format!("{:>8}", ""));
    for x in &view.x_values {
        out.push_str(&format!("{:>8}", x));
    }
    out.push('\n');

    // Highest y value on top, the way a heatmap reads.
    for (y, row) in view.rows_descending() {
        out.push_str(&format!("{:>8}", y));
        for cell in row {
            out.push_str(&format!("{:>8}", cell_marker(cell, view.signals.target_score)));
        }
        out.push('\n');
    }
    out.push_str("  * meets target   + simplified experience-program proxy met\n");

    if let (Some(min), Some(max)) = (view.min_score, view.max_score) {
        out.push_str(&format!(
            "Range: {min} to {max} (baseline {})\n",
            view.baseline_score
        ));
    }
    out
}

pub(crate) fn cell_marker(cell: &CellResult, target: i32) -> String {
    let mut marker = cell.score.to_string();
    if cell.score >= target {
        marker.push('*');
    }
    if cell.secondary_eligibility {
        marker.push('+');
    }
    marker
}

pub(crate) fn render_signals(signals: &StrategySignals) {
    println!("\nStrategy signals");
    println!(
        "- Baseline {} vs target {} (gap {})",
        signals.baseline_score, signals.target_score, signals.baseline_gap
    );
    println!(
        "- Validated job offer points: {}",
        signals.job_offer_points
    );
    println!("- Shortage occupation points: {}", signals.shortage_points);
    println!(
        "- Reading or writing below level 5: {}",
        yes_no(signals.weak_written_french)
    );
    println!(
        "- Spouse French can still add points: {}",
        yes_no(signals.spouse_can_improve)
    );
    match &signals.first_reaching {
        Some(cell) => println!(
            "- Target first reached at x={} y={} ({}, score {})",
            cell.x, cell.y, cell.date_label, cell.score
        ),
        None if signals.target_reachable => println!("- Target already met at baseline"),
        None => println!(
            "- Target not reachable in this grid (best {})",
            signals
                .projection_max
                .map(|score| score.to_string())
                .unwrap_or_else(|| "n/a".to_string())
        ),
    }
}

pub(crate) fn render_french(assessment: &FrenchAssessment) {
    println!("{} results on the Quebec scale", assessment.test.label());
    for skill in &assessment.skills {
        let progress = &skill.progress;
        match progress.next_threshold {
            Some(next) => println!(
                "- {}: {} -> level {} ({}) | {} more for {} ({:.0}% through band)",
                skill.skill.label(),
                skill.raw_score,
                progress.level,
                skill.cefr,
                progress.points_needed,
                next,
                progress.percent
            ),
            None => println!(
                "- {}: {} -> level {} ({}) | top band reached",
                skill.skill.label(),
                skill.raw_score,
                progress.level,
                skill.cefr
            ),
        }
    }
}

pub(crate) fn render_draws(view: &DrawsView) {
    println!("Recent invitation rounds");
    println!(
        "- {} draws | {} invitations | average cut-off {:.1}",
        view.draw_count, view.total_invited, view.average_cutoff
    );
    let mut previous = None;
    for round in &view.rounds {
        let key = (round.date, round.stream);
        let invited = if previous == Some(key) {
            String::new()
        } else {
            round.invited.to_string()
        };
        previous = Some(key);
        let cutoff = round
            .cutoff
            .map(|cutoff| cutoff.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {} | {:<42} | {:>5} | {:>5} | {}",
            round.date,
            round.stream.label(),
            cutoff,
            invited,
            round.note
        );
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pstq::workflows::selection::calculate_score;

    #[test]
    fn demo_profile_scores_as_documented() {
        let (total, _) = calculate_score(&demo_profile());
        assert_eq!(total, 521);
    }

    #[test]
    fn cell_marker_flags_target_and_proxy() {
        let cell = CellResult {
            x: 24,
            y: 7,
            score: 658,
            age: 37,
            months_elapsed: 24,
            date_label: "Jan 2028".to_string(),
            secondary_eligibility: true,
        };
        assert_eq!(cell_marker(&cell, 600), "658*+");
        assert_eq!(cell_marker(&cell, 700), "658+");
    }

    #[test]
    fn empty_cli_values_fall_back_to_axis_defaults() {
        let axis = axis_or_default(AxisKind::ApplicantFrenchTarget, Vec::new());
        assert_eq!(axis.values, vec![4, 5, 6, 7, 8, 9, 10, 12]);
        let custom = axis_or_default(AxisKind::MonthsElapsed, vec![3]);
        assert_eq!(custom.values, vec![3]);
    }

    fn demo_request(x_values: Vec<i32>, y_values: Vec<i32>) -> ProjectionRequest {
        ProjectionRequest {
            baseline: demo_profile(),
            x_axis: AxisSpec::new(AxisKind::MonthsElapsed, x_values),
            y_axis: AxisSpec::new(AxisKind::ApplicantFrenchTarget, y_values),
            today: NaiveDate::from_ymd_opt(2026, 1, 15),
            target_score: Some(600),
        }
    }

    #[test]
    fn empty_x_axis_renders_the_no_cells_notice() {
        let view = SelectionService::default()
            .project(&demo_request(Vec::new(), vec![7, 9]))
            .expect("projection runs");
        assert_eq!(view.cells.len(), 2);

        let table = projection_table(&view);
        assert!(table.contains("No cells"));
        assert!(!table.contains("Range:"));
    }

    #[test]
    fn projection_table_lists_highest_y_first() {
        let view = SelectionService::default()
            .project(&demo_request(vec![0], vec![5, 9, 7]))
            .expect("projection runs");

        let table = projection_table(&view);
        let row_labels: Vec<&str> = table
            .lines()
            .skip(2)
            .take(3)
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(row_labels, vec!["9", "7", "5"]);
    }
}
