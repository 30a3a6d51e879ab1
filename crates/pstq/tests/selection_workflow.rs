use std::io::Write;

use chrono::NaiveDate;
use pstq::workflows::selection::{
    calculate_score, run_projection, AuditKey, AxisKind, AxisSpec, Profile, StrategySignals,
};

const PROFILE_JSON: &str = r#"{
    "age": 35,
    "education": "Bach 2y",
    "general_experience_months": 36,
    "french": { "listening": 7, "speaking": 7, "reading": 7, "writing": 7 },
    "shortage_diagnosis": "None",
    "shortage_occupation_months": 12,
    "quebec_experience_months": 12,
    "validated_job_offer": "Outside Montreal",
    "has_regulated_license": false,
    "quebec_diploma": "None",
    "regional_ties": { "residence_months": 36, "work_months": 12, "study_months": 0 },
    "has_accompanying_spouse": true,
    "spouse": {
        "age": 35,
        "education": "Masters",
        "quebec_experience_months": 12,
        "french": { "listening": 0, "speaking": 7, "reading": 0, "writing": 0 }
    },
    "has_family_in_province": false
}"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date")
}

#[test]
fn profile_document_scores_and_projects_end_to_end() {
    let mut file = tempfile();
    file.1
        .write_all(PROFILE_JSON.as_bytes())
        .expect("write profile");
    let profile = Profile::from_path(&file.0).expect("profile loads");
    std::fs::remove_file(&file.0).ok();

    let (total, audit) = calculate_score(&profile);
    assert_eq!(total, 521);
    assert_eq!(audit.human_capital(), 320);
    assert_eq!(audit.quebec_needs(), 151);
    assert_eq!(audit.adaptation(), 50);
    assert_eq!(audit.points(AuditKey::SpouseEducation), 18);

    let matrix = run_projection(
        &profile,
        &AxisSpec::with_defaults(AxisKind::MonthsElapsed),
        &AxisSpec::with_defaults(AxisKind::ApplicantFrenchTarget),
        today(),
    );
    assert_eq!(matrix.len(), 9 * 8);
    assert_eq!(matrix.cell(0, 7).map(|cell| cell.score), Some(521));
    assert!(matrix.max_score() > Some(521));

    let signals = StrategySignals::assess(&profile, &audit, &matrix, 600);
    assert!(signals.target_reachable);
    assert!(signals.has_job_offer_points());
}

#[test]
fn missing_profile_file_reports_path() {
    let error = Profile::from_path("/definitely/not/here.json").expect_err("missing file");
    assert!(error.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn malformed_profile_is_rejected() {
    let error = Profile::from_json("{ not json").expect_err("invalid json");
    assert!(error.to_string().contains("not valid JSON"));
}

fn tempfile() -> (std::path::PathBuf, std::fs::File) {
    let path = std::env::temp_dir().join(format!(
        "pstq-profile-{}-{}.json",
        std::process::id(),
        line!()
    ));
    let file = std::fs::File::create(&path).expect("create temp profile");
    (path, file)
}
