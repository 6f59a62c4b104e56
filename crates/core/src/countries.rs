//! Batch projections over a list of country names.

use serde::Serialize;
use thiserror::Error;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FilterError {
    #[error("at least one initial letter is required")]
    NoInitials,

    #[error("initial {0:?} is not a letter")]
    NonAlphabeticInitial(char),
}

/// One input line. `None` stands for an absent entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameRecord(Option<String>);

impl NameRecord {
    #[must_use]
    pub fn absent() -> Self {
        Self(None)
    }

    /// The name, unless the record is absent or blank.
    #[must_use]
    pub fn present(&self) -> Option<&str> {
        self.0.as_deref().filter(|name| !name.trim().is_empty())
    }
}

impl From<&str> for NameRecord {
    fn from(value: &str) -> Self {
        Self(Some(value.to_owned()))
    }
}

impl From<String> for NameRecord {
    fn from(value: String) -> Self {
        Self(Some(value))
    }
}

impl From<Option<String>> for NameRecord {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

/// Vowels in `s`, ignoring case.
#[must_use]
pub fn count_vowels(s: &str) -> usize {
    s.chars()
        .filter(|c| VOWELS.contains(&c.to_ascii_lowercase()))
        .count()
}

#[must_use]
pub fn reverse_chars(s: &str) -> String {
    s.chars().rev().collect()
}

/// Names that are neither absent nor blank, in input order.
pub fn present_names(records: &[NameRecord]) -> impl Iterator<Item = &str> {
    records.iter().filter_map(NameRecord::present)
}

/// Both projections of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountryReport {
    pub by_initial: Vec<String>,
    pub by_vowel_count: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryFilter {
    initials: Vec<char>,
    vowel_target: usize,
}

impl CountryFilter {
    pub const DEFAULT_INITIALS: [char; 2] = ['A', 'T'];
    pub const DEFAULT_VOWEL_TARGET: usize = 2;

    /// Initials are matched case-insensitively and stored uppercase.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` if `initials` is empty or holds a non-letter.
    pub fn new(
        initials: impl IntoIterator<Item = char>,
        vowel_target: usize,
    ) -> Result<Self, FilterError> {
        let mut normalized = Vec::new();
        for initial in initials {
            if !initial.is_alphabetic() {
                return Err(FilterError::NonAlphabeticInitial(initial));
            }
            let upper = fold_upper(initial);
            if !normalized.contains(&upper) {
                normalized.push(upper);
            }
        }
        if normalized.is_empty() {
            return Err(FilterError::NoInitials);
        }

        Ok(Self {
            initials: normalized,
            vowel_target,
        })
    }

    #[must_use]
    pub fn initials(&self) -> &[char] {
        &self.initials
    }

    #[must_use]
    pub fn vowel_target(&self) -> usize {
        self.vowel_target
    }

    /// Names starting with one of the initials, uppercased, shortest first.
    ///
    /// The sort is stable, so equal lengths keep input order.
    #[must_use]
    pub fn by_initial(&self, records: &[NameRecord]) -> Vec<String> {
        let mut matched: Vec<String> = present_names(records)
            .filter(|name| {
                name.chars()
                    .next()
                    .is_some_and(|first| self.initials.contains(&fold_upper(first)))
            })
            .map(str::to_uppercase)
            .collect();
        matched.sort_by_key(|name| name.chars().count());
        matched
    }

    /// Names with exactly `vowel_target` vowels, each reversed.
    #[must_use]
    pub fn by_vowel_count(&self, records: &[NameRecord]) -> Vec<String> {
        present_names(records)
            .filter(|name| count_vowels(name) == self.vowel_target)
            .map(reverse_chars)
            .collect()
    }

    /// e.g. "Countries starting with A or T, in uppercase, sorted by length"
    #[must_use]
    pub fn initial_heading(&self) -> String {
        let initials = self
            .initials
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" or ");
        format!("Countries starting with {initials}, in uppercase, sorted by length")
    }

    #[must_use]
    pub fn vowel_heading(&self) -> String {
        let noun = if self.vowel_target == 1 { "vowel" } else { "vowels" };
        format!(
            "Countries with exactly {} {noun}, reversed",
            self.vowel_target
        )
    }

    #[must_use]
    pub fn report(&self, records: &[NameRecord]) -> CountryReport {
        CountryReport {
            by_initial: self.by_initial(records),
            by_vowel_count: self.by_vowel_count(records),
        }
    }
}

impl Default for CountryFilter {
    fn default() -> Self {
        Self {
            initials: Self::DEFAULT_INITIALS.to_vec(),
            vowel_target: Self::DEFAULT_VOWEL_TARGET,
        }
    }
}

// Single-char uppercase; multi-char expansions keep the original.
fn fold_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
