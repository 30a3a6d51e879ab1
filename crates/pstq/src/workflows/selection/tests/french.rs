use crate::workflows::selection::domain::FrenchSkills;
use crate::workflows::selection::french::{
    cefr_label, level_for, progress, Skill, TestKind, TestScores,
};

#[test]
fn tef_scale_is_shared_by_all_skills() {
    for skill in Skill::ordered() {
        assert_eq!(level_for(TestKind::TefCanada, skill, 99), 0);
        assert_eq!(level_for(TestKind::TefCanada, skill, 199), 1);
        assert_eq!(level_for(TestKind::TefCanada, skill, 259), 3);
        assert_eq!(level_for(TestKind::TefCanada, skill, 260), 4);
        assert_eq!(level_for(TestKind::Tefaq, skill, 415), 7);
        assert_eq!(level_for(TestKind::Tefaq, skill, 699), 12);
    }
}

#[test]
fn tcf_uses_per_skill_tables() {
    assert_eq!(level_for(TestKind::TcfCanada, Skill::Listening, 330), 0);
    assert_eq!(level_for(TestKind::TcfCanada, Skill::Listening, 331), 4);
    assert_eq!(level_for(TestKind::TcfCanada, Skill::Listening, 458), 7);
    assert_eq!(level_for(TestKind::TcfCanada, Skill::Reading, 341), 0);
    assert_eq!(level_for(TestKind::TcfCanada, Skill::Reading, 453), 7);
    assert_eq!(level_for(TestKind::TcfCanada, Skill::Speaking, 5), 0);
    assert_eq!(level_for(TestKind::TcfCanada, Skill::Speaking, 6), 4);
    assert_eq!(level_for(TestKind::TcfCanada, Skill::Writing, 19), 10);
    assert_eq!(level_for(TestKind::TcfCanada, Skill::Writing, 20), 12);
}

#[test]
fn scores_above_the_scale_keep_the_top_level() {
    assert_eq!(level_for(TestKind::TcfCanada, Skill::Speaking, 25), 12);
    assert_eq!(level_for(TestKind::TcfCanada, Skill::Reading, 900), 12);
    assert_eq!(level_for(TestKind::TefCanada, Skill::Writing, -4), 0);
}

#[test]
fn progress_reports_position_within_band() {
    let tef = progress(TestKind::TefCanada, Skill::Listening, 415);
    assert_eq!(tef.level, 7);
    assert_eq!(tef.next_threshold, Some(450));
    assert_eq!(tef.points_needed, 35);
    assert_eq!(tef.floor, 400);
    assert_eq!(tef.scale_max, 699);
    assert!((tef.percent - 30.0).abs() < 1e-9);

    let below = progress(TestKind::TefCanada, Skill::Reading, 40);
    assert_eq!(below.next_threshold, Some(100));
    assert_eq!(below.floor, 0);

    let oral = progress(TestKind::TcfCanada, Skill::Speaking, 8);
    assert_eq!(oral.next_threshold, Some(10));
    assert_eq!(oral.points_needed, 2);
    assert_eq!(oral.floor, 7);
    assert_eq!(oral.scale_max, 20);
}

#[test]
fn progress_is_complete_at_the_top_level() {
    let top = progress(TestKind::TefCanada, Skill::Speaking, 680);
    assert_eq!(top.level, 12);
    assert_eq!(top.next_threshold, None);
    assert_eq!(top.points_needed, 0);
    assert_eq!(top.floor, 650);
    assert!((top.percent - 100.0).abs() < 1e-9);
}

#[test]
fn cefr_labels_cover_the_scale() {
    assert_eq!(cefr_label(12), "C2");
    assert_eq!(cefr_label(9), "C1");
    assert_eq!(cefr_label(8), "B2");
    assert_eq!(cefr_label(5), "B1");
    assert_eq!(cefr_label(3), "A1-A2");
    assert_eq!(cefr_label(0), "Pre-A1");
}

#[test]
fn test_scores_convert_to_skill_levels() {
    let scores = TestScores {
        listening: 458,
        speaking: 12,
        reading: 500,
        writing: 6,
    };
    let skills = FrenchSkills::from_test_scores(TestKind::TcfCanada, &scores);
    assert_eq!(skills.as_array(), [7, 7, 8, 4]);
}

#[test]
fn test_kinds_parse_from_labels_and_keys() {
    assert_eq!(TestKind::parse("TEF Canada"), Some(TestKind::TefCanada));
    assert_eq!(TestKind::parse("tcf-canada"), Some(TestKind::TcfCanada));
    assert_eq!(TestKind::parse("DELF"), None);
    let kind: TestKind = serde_json::from_str("\"tefaq\"").expect("kind parses");
    assert_eq!(kind, TestKind::Tefaq);
}
