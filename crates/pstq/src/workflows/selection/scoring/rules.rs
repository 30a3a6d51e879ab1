use super::audit::{AuditKey, ScoreAudit};
use crate::workflows::selection::domain::Profile;
use crate::workflows::selection::grid::PointGrid;

const FRENCH_KEYS: [AuditKey; 4] = [
    AuditKey::FrenchListening,
    AuditKey::FrenchSpeaking,
    AuditKey::FrenchReading,
    AuditKey::FrenchWriting,
];

pub(crate) fn score_profile(profile: &Profile, grid: &PointGrid) -> (i32, ScoreAudit) {
    let mut audit = ScoreAudit::default();

    let human_capital = human_capital(profile, grid, &mut audit);
    let quebec_needs = quebec_needs(profile, grid, &mut audit);
    let adaptation = adaptation(profile, grid, &mut audit);

    let total = human_capital + quebec_needs + adaptation;
    audit.record(AuditKey::Total, total);

    (total, audit)
}

fn human_capital(profile: &Profile, grid: &PointGrid, audit: &mut ScoreAudit) -> i32 {
    let has_spouse = profile.has_accompanying_spouse;
    let french_scale = grid.french.select(has_spouse);

    let mut french = 0;
    for (key, level) in FRENCH_KEYS.into_iter().zip(profile.french.as_array()) {
        french += audit.record(key, french_scale.points(level));
    }
    audit.record(AuditKey::French, french);

    let age = audit.record(AuditKey::Age, grid.age.select(has_spouse).points(profile.age));
    let experience = audit.record(
        AuditKey::Experience,
        grid.general_experience
            .select(has_spouse)
            .points(profile.general_experience_months),
    );
    let education = audit.record(
        AuditKey::Education,
        grid.education.points(profile.education, has_spouse),
    );

    let subtotal = (french + age + experience + education).min(grid.caps.human_capital);
    audit.record(AuditKey::HumanCapitalTotal, subtotal)
}

fn quebec_needs(profile: &Profile, grid: &PointGrid, audit: &mut ScoreAudit) -> i32 {
    let shortage = audit.record(
        AuditKey::Shortage,
        grid.shortage(profile.shortage_diagnosis)
            .points(profile.shortage_occupation_months),
    );
    let quebec_experience = audit.record(
        AuditKey::QuebecExperience,
        grid.quebec_experience.points(profile.quebec_experience_months),
    );
    let diploma = audit.record(
        AuditKey::QuebecDiploma,
        grid.quebec_diploma.points(profile.quebec_diploma),
    );

    let ties = &profile.regional_ties;
    let residence = audit.record(
        AuditKey::RegionResidence,
        grid.region_residence.points(ties.residence_months),
    );
    let work = audit.record(
        AuditKey::RegionWork,
        grid.region_work.points(ties.work_months),
    );
    let study = audit.record(
        AuditKey::RegionStudy,
        grid.region_study.points(ties.study_months),
    );
    let regions = audit.record(AuditKey::Regions, residence + work + study);

    let job_offer = audit.record(
        AuditKey::JobOffer,
        grid.awards.job_offer(profile.validated_job_offer),
    );
    let license = audit.record(
        AuditKey::RegulatedLicense,
        if profile.has_regulated_license {
            grid.awards.regulated_license
        } else {
            0
        },
    );

    let subtotal = (shortage + quebec_experience + diploma + regions + job_offer + license)
        .min(grid.caps.quebec_needs);
    audit.record(AuditKey::QuebecNeedsTotal, subtotal)
}

fn adaptation(profile: &Profile, grid: &PointGrid, audit: &mut ScoreAudit) -> i32 {
    let mut raw = audit.record(
        AuditKey::Family,
        if profile.has_family_in_province {
            grid.awards.family_in_province
        } else {
            0
        },
    );

    // Spouse data is only read through the gated accessor; stale values never score.
    if let Some(spouse) = profile.accompanying_spouse() {
        let french = spouse
            .french
            .as_array()
            .into_iter()
            .map(|level| grid.spouse_french.points(level))
            .sum();
        raw += audit.record(AuditKey::SpouseFrench, french);
        raw += audit.record(AuditKey::SpouseAge, grid.spouse_age.points(spouse.age));
        raw += audit.record(
            AuditKey::SpouseQuebecExperience,
            grid.spouse_quebec_experience
                .points(spouse.quebec_experience_months),
        );
        raw += audit.record(
            AuditKey::SpouseEducation,
            grid.spouse_education.points(spouse.education),
        );
    }

    audit.record(AuditKey::AdaptationTotal, raw.min(grid.caps.adaptation))
}
