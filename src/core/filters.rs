use crate::models::{CandidateFilters, MatchingCriteria, Profile};

/// Translate matching criteria into store filters
///
/// The age range becomes an inclusive birth-year range relative to
/// `current_year`: the oldest accepted age gives the earliest birth year.
pub fn build_candidate_filters(criteria: &MatchingCriteria, current_year: i32) -> CandidateFilters {
    let birth_year_range = criteria.age_range.map(|range| {
        (
            current_year - i32::from(range.max),
            current_year - i32::from(range.min),
        )
    });

    CandidateFilters {
        exclude_id: criteria.profile_id.clone(),
        birth_year_range,
        locations: criteria.location_preference.clone(),
        industries: criteria.industry_preference.clone(),
        stages: criteria.stage_preference.clone(),
        require_active: true,
        exclude_contacted: criteria.exclude_contacted,
    }
}

/// Check a profile against the store filters
///
/// Covers everything except `exclude_contacted`, which depends on action
/// history only the store knows. A profile missing a field that a filter
/// constrains does not pass that filter.
#[inline]
pub fn matches_filters(filters: &CandidateFilters, candidate: &Profile) -> bool {
    if candidate.id == filters.exclude_id {
        return false;
    }

    if filters.require_active && !candidate.is_active {
        return false;
    }

    if let Some((earliest, latest)) = filters.birth_year_range {
        match candidate.birth_year {
            Some(year) if year >= earliest && year <= latest => {}
            _ => return false,
        }
    }

    if !filters.locations.is_empty()
        && !candidate.location.as_ref().is_some_and(|l| filters.locations.contains(l)) {
        return false;
    }

    if !filters.industries.is_empty()
        && !candidate.industry.as_ref().is_some_and(|i| filters.industries.contains(i)) {
        return false;
    }

    if !filters.stages.is_empty()
        && !candidate.stage.is_some_and(|s| filters.stages.contains(&s)) {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRange, BusinessStage};

    fn create_candidate(id: &str, birth_year: i32, location: &str) -> Profile {
        let mut profile = Profile::new(id);
        profile.birth_year = Some(birth_year);
        profile.location = Some(location.to_string());
        profile.stage = Some(BusinessStage::Mvp);
        profile.industry = Some("FINTECH".to_string());
        profile
    }

    #[test]
    fn test_age_range_becomes_birth_years() {
        let mut criteria = MatchingCriteria::for_profile("me");
        criteria.age_range = Some(AgeRange { min: 25, max: 35 });

        let filters = build_candidate_filters(&criteria, 2026);

        assert_eq!(filters.birth_year_range, Some((1991, 2001)));
        assert_eq!(filters.exclude_id, "me");
        assert!(filters.require_active);
    }

    #[test]
    fn test_self_is_excluded() {
        let filters = build_candidate_filters(&MatchingCriteria::for_profile("me"), 2026);
        assert!(!matches_filters(&filters, &create_candidate("me", 1995, "Pune")));
        assert!(matches_filters(&filters, &create_candidate("other", 1995, "Pune")));
    }

    #[test]
    fn test_inactive_profile_filtered() {
        let filters = build_candidate_filters(&MatchingCriteria::for_profile("me"), 2026);
        let mut candidate = create_candidate("other", 1995, "Pune");
        candidate.is_active = false;
        assert!(!matches_filters(&filters, &candidate));
    }

    #[test]
    fn test_birth_year_bounds_inclusive() {
        let mut criteria = MatchingCriteria::for_profile("me");
        criteria.age_range = Some(AgeRange { min: 25, max: 35 });
        let filters = build_candidate_filters(&criteria, 2026);

        assert!(matches_filters(&filters, &create_candidate("a", 1991, "Pune")));
        assert!(matches_filters(&filters, &create_candidate("b", 2001, "Pune")));
        assert!(!matches_filters(&filters, &create_candidate("c", 1990, "Pune")));
        assert!(!matches_filters(&filters, &Profile::new("no-birth-year")));
    }

    #[test]
    fn test_membership_filters() {
        let mut criteria = MatchingCriteria::for_profile("me");
        criteria.location_preference = vec!["Pune".to_string(), "Mumbai".to_string()];
        criteria.stage_preference = vec![BusinessStage::Mvp];
        criteria.industry_preference = vec!["FINTECH".to_string()];
        let filters = build_candidate_filters(&criteria, 2026);

        assert!(matches_filters(&filters, &create_candidate("a", 1995, "Mumbai")));
        assert!(!matches_filters(&filters, &create_candidate("b", 1995, "Delhi")));

        let mut growth = create_candidate("c", 1995, "Pune");
        growth.stage = Some(BusinessStage::Growth);
        assert!(!matches_filters(&filters, &growth));

        let mut no_industry = create_candidate("d", 1995, "Pune");
        no_industry.industry = None;
        assert!(!matches_filters(&filters, &no_industry));
    }
}
