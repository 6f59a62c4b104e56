use quiz_core::{CountryFilter, CountryReport};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountrySectionVm {
    pub title: String,
    pub items: Vec<String>,
}

/// "Part A" / "Part B" sections for the report page.
#[must_use]
pub fn map_country_sections(filter: &CountryFilter, report: &CountryReport) -> Vec<CountrySectionVm> {
    vec![
        CountrySectionVm {
            title: format!("Part A: {}", filter.initial_heading()),
            items: report.by_initial.clone(),
        },
        CountrySectionVm {
            title: format!("Part B: {}", filter.vowel_heading()),
            items: report.by_vowel_count.clone(),
        },
    ]
}
