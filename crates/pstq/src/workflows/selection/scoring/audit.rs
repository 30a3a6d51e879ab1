use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Pillar of the selection grid that a line item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HumanCapital,
    QuebecNeeds,
    Adaptation,
    Overall,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HumanCapital => "Human Capital",
            Self::QuebecNeeds => "Quebec Needs",
            Self::Adaptation => "Adaptation",
            Self::Overall => "Total",
        }
    }
}

/// Keys of the score audit, in the order the engine records them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditKey {
    FrenchListening,
    FrenchSpeaking,
    FrenchReading,
    FrenchWriting,
    French,
    Age,
    Experience,
    Education,
    HumanCapitalTotal,
    Shortage,
    QuebecExperience,
    QuebecDiploma,
    RegionResidence,
    RegionWork,
    RegionStudy,
    Regions,
    JobOffer,
    RegulatedLicense,
    QuebecNeedsTotal,
    Family,
    SpouseFrench,
    SpouseAge,
    SpouseQuebecExperience,
    SpouseEducation,
    AdaptationTotal,
    Total,
}

impl AuditKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrenchListening => "fr_l_pts",
            Self::FrenchSpeaking => "fr_s_pts",
            Self::FrenchReading => "fr_r_pts",
            Self::FrenchWriting => "fr_w_pts",
            Self::French => "hc_french",
            Self::Age => "hc_age",
            Self::Experience => "hc_exp",
            Self::Education => "hc_edu",
            Self::HumanCapitalTotal => "total_hc",
            Self::Shortage => "qn_diag",
            Self::QuebecExperience => "qn_qc_exp",
            Self::QuebecDiploma => "qn_dip",
            Self::RegionResidence => "out_res_pts",
            Self::RegionWork => "out_work_pts",
            Self::RegionStudy => "out_study_pts",
            Self::Regions => "qn_out",
            Self::JobOffer => "qn_vjo",
            Self::RegulatedLicense => "qn_auth",
            Self::QuebecNeedsTotal => "total_qn",
            Self::Family => "ad_fam",
            Self::SpouseFrench => "ad_fr",
            Self::SpouseAge => "ad_age",
            Self::SpouseQuebecExperience => "ad_exp",
            Self::SpouseEducation => "ad_edu",
            Self::AdaptationTotal => "total_ad",
            Self::Total => "total",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FrenchListening => "French listening",
            Self::FrenchSpeaking => "French speaking",
            Self::FrenchReading => "French reading",
            Self::FrenchWriting => "French writing",
            Self::French => "French",
            Self::Age => "Age",
            Self::Experience => "Work experience",
            Self::Education => "Education",
            Self::HumanCapitalTotal => "Human capital subtotal",
            Self::Shortage => "Shortage occupation",
            Self::QuebecExperience => "Quebec work experience",
            Self::QuebecDiploma => "Quebec diploma",
            Self::RegionResidence => "Regional residence",
            Self::RegionWork => "Regional work",
            Self::RegionStudy => "Regional study",
            Self::Regions => "Regional ties",
            Self::JobOffer => "Validated job offer",
            Self::RegulatedLicense => "Regulated profession licence",
            Self::QuebecNeedsTotal => "Quebec needs subtotal",
            Self::Family => "Family in Quebec",
            Self::SpouseFrench => "Spouse French",
            Self::SpouseAge => "Spouse age",
            Self::SpouseQuebecExperience => "Spouse Quebec experience",
            Self::SpouseEducation => "Spouse education",
            Self::AdaptationTotal => "Adaptation subtotal",
            Self::Total => "Total",
        }
    }

    pub const fn category(self) -> Category {
        match self {
            Self::FrenchListening
            | Self::FrenchSpeaking
            | Self::FrenchReading
            | Self::FrenchWriting
            | Self::French
            | Self::Age
            | Self::Experience
            | Self::Education
            | Self::HumanCapitalTotal => Category::HumanCapital,
            Self::Shortage
            | Self::QuebecExperience
            | Self::QuebecDiploma
            | Self::RegionResidence
            | Self::RegionWork
            | Self::RegionStudy
            | Self::Regions
            | Self::JobOffer
            | Self::RegulatedLicense
            | Self::QuebecNeedsTotal => Category::QuebecNeeds,
            Self::Family
            | Self::SpouseFrench
            | Self::SpouseAge
            | Self::SpouseQuebecExperience
            | Self::SpouseEducation
            | Self::AdaptationTotal => Category::Adaptation,
            Self::Total => Category::Overall,
        }
    }

    pub const fn is_subtotal(self) -> bool {
        matches!(
            self,
            Self::HumanCapitalTotal | Self::QuebecNeedsTotal | Self::AdaptationTotal | Self::Total
        )
    }
}

/// Ordered line items of one scoring run. Built fresh per call and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreAudit {
    entries: Vec<(AuditKey, i32)>,
}

impl ScoreAudit {
    pub(crate) fn record(&mut self, key: AuditKey, points: i32) -> i32 {
        self.entries.push((key, points));
        points
    }

    pub fn get(&self, key: AuditKey) -> Option<i32> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, points)| *points)
    }

    /// Points for `key`, treating an absent line item as zero.
    pub fn points(&self, key: AuditKey) -> i32 {
        self.get(key).unwrap_or(0)
    }

    pub fn contains(&self, key: AuditKey) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AuditKey, i32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn human_capital(&self) -> i32 {
        self.points(AuditKey::HumanCapitalTotal)
    }

    pub fn quebec_needs(&self) -> i32 {
        self.points(AuditKey::QuebecNeedsTotal)
    }

    pub fn adaptation(&self) -> i32 {
        self.points(AuditKey::AdaptationTotal)
    }

    pub fn total(&self) -> i32 {
        self.points(AuditKey::Total)
    }
}

impl Serialize for ScoreAudit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, points) in &self.entries {
            map.serialize_entry(key.as_str(), points)?;
        }
        map.end()
    }
}
