use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Highest diploma category, shared by the human-capital grid and the Quebec diploma bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum Education {
    #[default]
    None,
    HighSchool,
    Dep600h,
    Dep900h,
    Dep1y,
    CollegeGeneral,
    Tech900h,
    Tech2y,
    Tech3y,
    Bachelor1y,
    Bachelor2y,
    Bachelor3y,
    Bachelor5y,
    Master1y,
    Master2y,
    MedicalSpecialty,
    Doctorate,
}

impl Education {
    pub const fn ordered() -> [Self; 17] {
        [
            Self::None,
            Self::HighSchool,
            Self::Dep600h,
            Self::Dep900h,
            Self::Dep1y,
            Self::CollegeGeneral,
            Self::Tech900h,
            Self::Tech2y,
            Self::Tech3y,
            Self::Bachelor1y,
            Self::Bachelor2y,
            Self::Bachelor3y,
            Self::Bachelor5y,
            Self::Master1y,
            Self::Master2y,
            Self::MedicalSpecialty,
            Self::Doctorate,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::HighSchool => "HS",
            Self::Dep600h => "DEP 600h",
            Self::Dep900h => "DEP 900h",
            Self::Dep1y => "DEP 1y",
            Self::CollegeGeneral => "College Gen",
            Self::Tech900h => "Tech 900h",
            Self::Tech2y => "Tech 2y",
            Self::Tech3y => "Tech 3y",
            Self::Bachelor1y => "Bach 1y",
            Self::Bachelor2y => "Bach 2y",
            Self::Bachelor3y => "Bach 3y",
            Self::Bachelor5y => "Bach 5y",
            Self::Master1y => "Masters 1y",
            Self::Master2y => "Masters 2y",
            Self::MedicalSpecialty => "MedSpec",
            Self::Doctorate => "PhD",
        }
    }

    /// Lenient parse; anything unrecognised becomes `None`, which scores zero.
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "high_school" | "hs" => Self::HighSchool,
            "dep600h" | "dep_600h" => Self::Dep600h,
            "dep_900h" | "dep900h" | "vocational_(dep)" => Self::Dep900h,
            "dep1y" | "dep_1y" => Self::Dep1y,
            "college_general" | "college_gen" => Self::CollegeGeneral,
            "tech900h" | "tech_900h" => Self::Tech900h,
            "tech2y" | "tech_2y" => Self::Tech2y,
            "tech3y" | "tech_3y" | "tech_diploma_3y" => Self::Tech3y,
            "bachelor1y" | "bach_1y" | "bachelors_1y" => Self::Bachelor1y,
            "bachelor2y" | "bach_2y" | "bachelors_2y" => Self::Bachelor2y,
            "bachelor3y" | "bach_3y" | "bachelors_3y" | "bachelors_3y+" => Self::Bachelor3y,
            "bachelor5y" | "bach_5y" | "bachelors_5y" => Self::Bachelor5y,
            "master1y" | "masters_1y" => Self::Master1y,
            "master2y" | "masters_2y" | "masters" => Self::Master2y,
            "medical_specialty" | "medspec" => Self::MedicalSpecialty,
            "doctorate" | "phd" => Self::Doctorate,
            _ => Self::None,
        }
    }
}

impl From<String> for Education {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Spouse diploma categories use their own coarser grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum SpouseEducation {
    #[default]
    None,
    HighSchool,
    TechDiploma,
    Bachelors,
    Masters,
    Doctorate,
}

impl SpouseEducation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::HighSchool => "High School",
            Self::TechDiploma => "Tech Diploma",
            Self::Bachelors => "Bachelors",
            Self::Masters => "Masters",
            Self::Doctorate => "PhD",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "high_school" | "hs" => Self::HighSchool,
            "tech_diploma" | "tech" => Self::TechDiploma,
            "bachelors" | "bachelor" => Self::Bachelors,
            "masters" | "master" => Self::Masters,
            "doctorate" | "phd" => Self::Doctorate,
            _ => Self::None,
        }
    }
}

impl From<String> for SpouseEducation {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Labour-market diagnosis attached to the applicant's primary occupation.
///
/// `Unclassified` carries no band set at all, unlike `None` which still awards
/// points for long tenure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum ShortageDiagnosis {
    #[default]
    None,
    Slight,
    Deficit,
    Unclassified,
}

impl ShortageDiagnosis {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Slight => "Slight",
            Self::Deficit => "Deficit",
            Self::Unclassified => "Unclassified",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "none" | "balanced" => Self::None,
            "slight" | "slight_deficit" => Self::Slight,
            "deficit" => Self::Deficit,
            _ => Self::Unclassified,
        }
    }
}

impl From<String> for ShortageDiagnosis {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Validated job offer status. A single enum, so "inside" and "outside" can never both hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum JobOffer {
    #[default]
    None,
    InsideMetro,
    OutsideMetro,
}

impl JobOffer {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::InsideMetro => "Inside Montreal",
            Self::OutsideMetro => "Outside Montreal",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "inside_metro" | "inside_montreal" | "inside" => Self::InsideMetro,
            "outside_metro" | "outside_montreal" | "outside" => Self::OutsideMetro,
            _ => Self::None,
        }
    }
}

impl From<String> for JobOffer {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Quebec-scale proficiency (0-12) for each of the four skills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrenchSkills {
    #[serde(default)]
    pub listening: i32,
    #[serde(default)]
    pub speaking: i32,
    #[serde(default)]
    pub reading: i32,
    #[serde(default)]
    pub writing: i32,
}

impl FrenchSkills {
    pub const fn uniform(level: i32) -> Self {
        Self {
            listening: level,
            speaking: level,
            reading: level,
            writing: level,
        }
    }

    pub const fn as_array(&self) -> [i32; 4] {
        [self.listening, self.speaking, self.reading, self.writing]
    }

    /// Lowest of the two oral skills, used by the simplified eligibility proxy.
    pub fn oral_floor(&self) -> i32 {
        self.listening.min(self.speaking)
    }
}

/// Months spent outside the Montreal metropolitan community.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionalTies {
    #[serde(default)]
    pub residence_months: i32,
    #[serde(default)]
    pub work_months: i32,
    #[serde(default)]
    pub study_months: i32,
}

/// Accompanying spouse details. Only read when `Profile::has_accompanying_spouse` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpouseProfile {
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub education: SpouseEducation,
    #[serde(default)]
    pub quebec_experience_months: i32,
    #[serde(default)]
    pub french: FrenchSkills,
}

/// Applicant profile consumed by the scoring engine.
///
/// Every field defaults to zero or `None` so partially filled forms still score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub age: i32,
    pub education: Education,
    pub general_experience_months: i32,
    pub french: FrenchSkills,
    pub shortage_diagnosis: ShortageDiagnosis,
    pub shortage_occupation_months: i32,
    pub quebec_experience_months: i32,
    pub validated_job_offer: JobOffer,
    pub has_regulated_license: bool,
    pub quebec_diploma: Education,
    pub regional_ties: RegionalTies,
    pub has_accompanying_spouse: bool,
    pub spouse: SpouseProfile,
    pub has_family_in_province: bool,
}

impl Profile {
    /// Spouse details, or `None` when no spouse accompanies the application.
    ///
    /// Stale values left in `spouse` are never visible through this accessor.
    pub fn accompanying_spouse(&self) -> Option<&SpouseProfile> {
        self.has_accompanying_spouse.then_some(&self.spouse)
    }

    pub fn from_json(raw: &str) -> Result<Self, ProfileLoadError> {
        serde_json::from_str(raw).map_err(ProfileLoadError::Parse)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProfileLoadError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ProfileLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }
}

/// Raised when a profile document cannot be read or decoded.
#[derive(Debug, thiserror::Error)]
pub enum ProfileLoadError {
    #[error("failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("profile is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_lenient_parse() {
        for education in Education::ordered() {
            assert_eq!(Education::parse(education.label()), education);
        }
        assert_eq!(Education::parse("Bachelors 2y"), Education::Bachelor2y);
        assert_eq!(SpouseEducation::parse("High School"), SpouseEducation::HighSchool);
        assert_eq!(JobOffer::parse("Outside Montreal"), JobOffer::OutsideMetro);
    }

    #[test]
    fn unknown_labels_fall_back_to_zero_scoring_variants() {
        assert_eq!(Education::parse("Basket weaving"), Education::None);
        assert_eq!(JobOffer::parse("maybe"), JobOffer::None);
        assert_eq!(
            ShortageDiagnosis::parse("unknown"),
            ShortageDiagnosis::Unclassified
        );
    }

    #[test]
    fn serialized_keys_parse_back() {
        let encoded = serde_json::to_string(&Education::Bachelor3y).expect("serializes");
        assert_eq!(encoded, "\"bachelor3y\"");
        let decoded: Education = serde_json::from_str(&encoded).expect("deserializes");
        assert_eq!(decoded, Education::Bachelor3y);
    }

    #[test]
    fn partial_profile_documents_use_defaults() {
        let profile = Profile::from_json(r#"{ "age": 29, "education": "PhD" }"#)
            .expect("partial profile parses");
        assert_eq!(profile.age, 29);
        assert_eq!(profile.education, Education::Doctorate);
        assert_eq!(profile.general_experience_months, 0);
        assert!(profile.accompanying_spouse().is_none());
    }
}
