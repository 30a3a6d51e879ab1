use super::{Band, BandTable, ExactTable, HouseholdBands, PairExactTable, PointPair, OPEN_END};
use crate::workflows::selection::domain::{
    Education, JobOffer, ShortageDiagnosis, SpouseEducation,
};

/// Maximum points counted per pillar; excess is discarded, never redistributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCaps {
    pub human_capital: i32,
    pub quebec_needs: i32,
    pub adaptation: i32,
}

impl CategoryCaps {
    pub const fn total(&self) -> i32 {
        self.human_capital + self.quebec_needs + self.adaptation
    }
}

/// Flat awards that are not band or category driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatAwards {
    pub job_offer_inside_metro: i32,
    pub job_offer_outside_metro: i32,
    pub regulated_license: i32,
    pub family_in_province: i32,
}

impl FlatAwards {
    pub const fn job_offer(&self, offer: JobOffer) -> i32 {
        match offer {
            JobOffer::OutsideMetro => self.job_offer_outside_metro,
            JobOffer::InsideMetro => self.job_offer_inside_metro,
            JobOffer::None => 0,
        }
    }
}

/// Complete point grid of the selection program.
#[derive(Debug, Clone)]
pub struct PointGrid {
    pub french: HouseholdBands,
    pub age: HouseholdBands,
    pub general_experience: HouseholdBands,
    pub education: PairExactTable<Education>,
    pub shortage_none: BandTable,
    pub shortage_slight: BandTable,
    pub shortage_deficit: BandTable,
    pub quebec_experience: BandTable,
    pub quebec_diploma: ExactTable<Education>,
    pub region_residence: BandTable,
    pub region_work: BandTable,
    pub region_study: BandTable,
    pub spouse_french: BandTable,
    pub spouse_age: BandTable,
    pub spouse_quebec_experience: BandTable,
    pub spouse_education: ExactTable<SpouseEducation>,
    pub awards: FlatAwards,
    pub caps: CategoryCaps,
}

impl PointGrid {
    pub fn official() -> &'static PointGrid {
        &OFFICIAL_GRID
    }

    pub fn shortage(&self, diagnosis: ShortageDiagnosis) -> &BandTable {
        match diagnosis {
            ShortageDiagnosis::None => &self.shortage_none,
            ShortageDiagnosis::Slight => &self.shortage_slight,
            ShortageDiagnosis::Deficit => &self.shortage_deficit,
            ShortageDiagnosis::Unclassified => &UNCLASSIFIED,
        }
    }
}

static UNCLASSIFIED: BandTable = BandTable::empty();

pub static OFFICIAL_GRID: PointGrid = PointGrid {
    french: HouseholdBands {
        single: bands![
            (5, 7, 38),
            (7, 9, 44),
            (9, OPEN_END, 50),
        ],
        with_spouse: bands![
            (5, 7, 30),
            (7, 9, 35),
            (9, OPEN_END, 40),
        ],
    },
    age: HouseholdBands {
        single: bands![
            (18, 20, 110),
            (20, 31, 120),
            (31, 32, 110),
            (32, 33, 100),
            (33, 34, 90),
            (34, 35, 80),
            (35, 36, 75),
            (36, 37, 70),
            (37, 38, 65),
            (38, 39, 60),
            (39, 40, 55),
            (40, 41, 50),
            (41, 42, 40),
            (42, 43, 30),
            (43, 44, 20),
            (44, 45, 10),
            (45, OPEN_END, 0),
        ],
        with_spouse: bands![
            (18, 20, 90),
            (20, 31, 100),
            (31, 32, 95),
            (32, 33, 90),
            (33, 34, 81),
            (34, 35, 72),
            (35, 36, 68),
            (36, 37, 63),
            (37, 38, 59),
            (38, 39, 54),
            (39, 40, 50),
            (40, 41, 45),
            (41, 42, 36),
            (42, 43, 27),
            (43, 44, 18),
            (44, 45, 9),
            (45, OPEN_END, 0),
        ],
    },
    general_experience: HouseholdBands {
        single: bands![
            (0, 12, 0),
            (12, 24, 20),
            (24, 36, 40),
            (36, 48, 50),
            (48, OPEN_END, 70),
        ],
        with_spouse: bands![
            (0, 12, 0),
            (12, 24, 15),
            (24, 36, 30),
            (36, 48, 35),
            (48, OPEN_END, 50),
        ],
    },
    education: pairs![
        (Education::Doctorate, (130, 110)),
        (Education::MedicalSpecialty, (130, 110)),
        (Education::Master2y, (117, 99)),
        (Education::Master1y, (110, 93)),
        (Education::Bachelor5y, (110, 93)),
        (Education::Bachelor3y, (104, 88)),
        (Education::Bachelor2y, (91, 77)),
        (Education::Bachelor1y, (78, 66)),
        (Education::Tech3y, (78, 66)),
        (Education::Tech2y, (52, 44)),
        (Education::Tech900h, (52, 44)),
        (Education::CollegeGeneral, (39, 33)),
        (Education::Dep1y, (26, 22)),
        (Education::Dep900h, (26, 22)),
        (Education::Dep600h, (13, 11)),
        (Education::HighSchool, (13, 11)),
    ],
    shortage_none: bands![
        (0, 12, 0),
        (12, 24, 5),
        (24, 36, 10),
        (36, 48, 15),
        (48, OPEN_END, 25),
    ],
    shortage_slight: bands![
        (0, 12, 0),
        (12, 24, 70),
        (24, 36, 80),
        (36, 48, 90),
        (48, OPEN_END, 100),
    ],
    shortage_deficit: bands![
        (0, 12, 0),
        (12, 24, 90),
        (24, 36, 100),
        (36, 48, 110),
        (48, OPEN_END, 120),
    ],
    quebec_experience: bands![
        (0, 12, 0),
        (12, 24, 40),
        (24, 36, 80),
        (36, 48, 120),
        (48, OPEN_END, 160),
    ],
    quebec_diploma: exact![
        (Education::Doctorate, 200),
        (Education::MedicalSpecialty, 200),
        (Education::Master2y, 180),
        (Education::Master1y, 170),
        (Education::Bachelor5y, 170),
        (Education::Bachelor3y, 160),
        (Education::Bachelor2y, 140),
        (Education::Bachelor1y, 120),
        (Education::Tech3y, 120),
        (Education::Tech900h, 80),
        (Education::CollegeGeneral, 60),
        (Education::Dep900h, 40),
        (Education::Dep600h, 20),
        (Education::HighSchool, 20),
        (Education::None, 0),
    ],
    region_residence: bands![
        (0, 6, 0),
        (6, 12, 6),
        (12, 24, 16),
        (24, 36, 24),
        (36, 48, 32),
        (48, OPEN_END, 40),
    ],
    region_work: bands![
        (0, 6, 0),
        (6, 12, 9),
        (12, 24, 24),
        (24, 36, 36),
        (36, 48, 48),
        (48, OPEN_END, 60),
    ],
    region_study: bands![
        (0, 6, 0),
        (6, 12, 3),
        (12, 24, 8),
        (24, 36, 12),
        (36, 48, 16),
        (48, OPEN_END, 20),
    ],
    // Level 4 scores on the spouse scale only; levels 1-3 never do.
    spouse_french: bands![
        (4, 5, 4),
        (5, 7, 6),
        (7, 9, 8),
        (9, OPEN_END, 10),
    ],
    spouse_age: bands![
        (16, 20, 18),
        (20, 31, 20),
        (31, 32, 18),
        (32, 33, 17),
        (33, 34, 16),
        (34, 35, 15),
        (35, 36, 14),
        (36, 37, 12),
        (37, 38, 10),
        (38, 39, 8),
        (39, 40, 7),
        (40, 41, 6),
        (41, 42, 5),
        (42, 43, 4),
        (43, 44, 3),
        (44, 45, 2),
        (45, OPEN_END, 0),
    ],
    spouse_quebec_experience: bands![
        (0, 6, 0),
        (6, 12, 5),
        (12, 24, 10),
        (24, 36, 15),
        (36, 48, 23),
        (48, OPEN_END, 30),
    ],
    spouse_education: exact![
        (SpouseEducation::Doctorate, 20),
        (SpouseEducation::Masters, 18),
        (SpouseEducation::Bachelors, 16),
        (SpouseEducation::TechDiploma, 12),
        (SpouseEducation::HighSchool, 2),
        (SpouseEducation::None, 0),
    ],
    awards: FlatAwards {
        job_offer_inside_metro: 30,
        job_offer_outside_metro: 50,
        regulated_license: 50,
        family_in_province: 10,
    },
    caps: CategoryCaps {
        human_capital: 520,
        quebec_needs: 700,
        adaptation: 180,
    },
};
