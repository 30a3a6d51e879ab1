use serde::Serialize;

use super::PointGrid;

/// Best attainable points per component, used to render "points / max" next to the audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCeilings {
    pub french_per_skill: i32,
    pub french: i32,
    pub age: i32,
    pub education: i32,
    pub experience: i32,
    pub human_capital: i32,
    pub shortage: i32,
    pub quebec_experience: i32,
    pub quebec_diploma: i32,
    pub job_offer: i32,
    pub regulated_license: i32,
    pub region_residence: i32,
    pub region_work: i32,
    pub region_study: i32,
    pub regions: i32,
    pub quebec_needs: i32,
    pub spouse_french: i32,
    pub spouse_age: i32,
    pub spouse_quebec_experience: i32,
    pub spouse_education: i32,
    pub family: i32,
    pub adaptation: i32,
}

impl CategoryCeilings {
    pub fn for_household(has_spouse: bool) -> Self {
        Self::from_grid(PointGrid::official(), has_spouse)
    }

    pub fn from_grid(grid: &PointGrid, has_spouse: bool) -> Self {
        let french_per_skill = grid.french.select(has_spouse).max_points();
        let shortage = [
            grid.shortage_none.max_points(),
            grid.shortage_slight.max_points(),
            grid.shortage_deficit.max_points(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0);
        let region_residence = grid.region_residence.max_points();
        let region_work = grid.region_work.max_points();
        let region_study = grid.region_study.max_points();

        Self {
            french_per_skill,
            french: french_per_skill * 4,
            age: grid.age.select(has_spouse).max_points(),
            education: grid.education.max_points(has_spouse),
            experience: grid.general_experience.select(has_spouse).max_points(),
            human_capital: grid.caps.human_capital,
            shortage,
            quebec_experience: grid.quebec_experience.max_points(),
            quebec_diploma: grid.quebec_diploma.max_points(),
            job_offer: grid
                .awards
                .job_offer_outside_metro
                .max(grid.awards.job_offer_inside_metro),
            regulated_license: grid.awards.regulated_license,
            region_residence,
            region_work,
            region_study,
            regions: region_residence + region_work + region_study,
            quebec_needs: grid.caps.quebec_needs,
            spouse_french: grid.spouse_french.max_points() * 4,
            spouse_age: grid.spouse_age.max_points(),
            spouse_quebec_experience: grid.spouse_quebec_experience.max_points(),
            spouse_education: grid.spouse_education.max_points(),
            family: grid.awards.family_in_province,
            adaptation: grid.caps.adaptation,
        }
    }
}
