use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::config::SimulationConfig;
use crate::workflows::selection::domain::{
    Education, FrenchSkills, JobOffer, Profile, RegionalTies, ShortageDiagnosis, SpouseEducation,
    SpouseProfile,
};
use crate::workflows::selection::scoring::ScoringEngine;
use crate::workflows::selection::{selection_router, SelectionService};

/// Couple profile used as the end-to-end regression fixture (scores 521).
pub(super) fn couple_profile() -> Profile {
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

/// Single applicant with every grid component maxed out.
pub(super) fn maxed_single_profile() -> Profile {
    Profile {
        age: 25,
        education: Education::Doctorate,
        general_experience_months: 60,
        french: FrenchSkills::uniform(12),
        shortage_diagnosis: ShortageDiagnosis::Deficit,
        shortage_occupation_months: 60,
        quebec_experience_months: 60,
        validated_job_offer: JobOffer::OutsideMetro,
        has_regulated_license: true,
        quebec_diploma: Education::Doctorate,
        regional_ties: RegionalTies {
            residence_months: 60,
            work_months: 60,
            study_months: 60,
        },
        has_accompanying_spouse: false,
        spouse: SpouseProfile::default(),
        has_family_in_province: true,
    }
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date")
}

pub(super) fn service() -> SelectionService {
    SelectionService::new(ScoringEngine::default(), SimulationConfig::default())
}

pub(super) fn router() -> axum::Router {
    selection_router(Arc::new(service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
