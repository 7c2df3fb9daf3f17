//! Profile — the request-scoped record of what the user told us about themselves.
//!
//! Built fresh on every submission, consumed once by the recommendation fetcher,
//! dropped after rendering. Never persisted, never logged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_HOUSEHOLD_SIZE: i64 = 1;
pub const MAX_HOUSEHOLD_SIZE: i64 = 20;

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("Unknown {field} option: '{value}'")]
    UnknownOption { field: &'static str, value: String },

    #[error("household_size must be between 1 and 20, got {0}")]
    HouseholdSizeOutOfRange(i64),

    #[error("household_size must be a whole number, got '{0}'")]
    HouseholdSizeNotANumber(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Enumerations (display labels are the wire values)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum BackgroundCategory {
    IndigenousHeritage,
    LowIncome,
    FirstGeneration,
    Rural,
    RecentImmigrant,
    SingleParent,
    MilitaryFamily,
    Caregiver,
}

impl BackgroundCategory {
    pub const ALL: [BackgroundCategory; 8] = [
        Self::IndigenousHeritage,
        Self::LowIncome,
        Self::FirstGeneration,
        Self::Rural,
        Self::RecentImmigrant,
        Self::SingleParent,
        Self::MilitaryFamily,
        Self::Caregiver,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::IndigenousHeritage => "Indigenous or Native heritage",
            Self::LowIncome => "Low-income household",
            Self::FirstGeneration => "First-generation college student",
            Self::Rural => "Rural household",
            Self::RecentImmigrant => "Recent immigrant",
            Self::SingleParent => "Single-parent household",
            Self::MilitaryFamily => "Military family",
            Self::Caregiver => "Caregiver for children or relatives",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, ProfileError> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .ok_or_else(|| ProfileError::UnknownOption {
                field: "background_categories",
                value: label.to_string(),
            })
    }
}

/// Ordered income buckets (USD). `Undisclosed` sorts first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "&'static str")]
pub enum IncomeRange {
    #[default]
    Undisclosed,
    UpTo20k,
    From20kTo40k,
    From40kTo60k,
    From60kTo80k,
    From80kTo100k,
    Over100k,
}

impl IncomeRange {
    pub const ALL: [IncomeRange; 7] = [
        Self::Undisclosed,
        Self::UpTo20k,
        Self::From20kTo40k,
        Self::From40kTo60k,
        Self::From60kTo80k,
        Self::From80kTo100k,
        Self::Over100k,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Undisclosed => "Prefer not to say",
            Self::UpTo20k => "0–20,000",
            Self::From20kTo40k => "20,001–40,000",
            Self::From40kTo60k => "40,001–60,000",
            Self::From60kTo80k => "60,001–80,000",
            Self::From80kTo100k => "80,001–100,000",
            Self::Over100k => "100,001+",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, ProfileError> {
        Self::ALL
            .into_iter()
            .find(|r| r.label() == label)
            .ok_or_else(|| ProfileError::UnknownOption {
                field: "income_range",
                value: label.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum EducationGoal {
    HighSchool,
    Associate,
    Bachelor,
    Graduate,
    Vocational,
    WorkforceTraining,
    #[default]
    Undecided,
}

impl EducationGoal {
    pub const ALL: [EducationGoal; 7] = [
        Self::HighSchool,
        Self::Associate,
        Self::Bachelor,
        Self::Graduate,
        Self::Vocational,
        Self::WorkforceTraining,
        Self::Undecided,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::HighSchool => "High school completion",
            Self::Associate => "Associate degree",
            Self::Bachelor => "Bachelor's degree",
            Self::Graduate => "Graduate studies",
            Self::Vocational => "Vocational / technical training",
            Self::WorkforceTraining => "Job training / workforce program",
            Self::Undecided => "Other / not sure yet",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, ProfileError> {
        Self::ALL
            .into_iter()
            .find(|g| g.label() == label)
            .ok_or_else(|| ProfileError::UnknownOption {
                field: "education_goal",
                value: label.to_string(),
            })
    }
}

macro_rules! label_conversions {
    ($($ty:ty),*) => {$(
        impl From<$ty> for &'static str {
            fn from(value: $ty) -> Self {
                value.label()
            }
        }
    )*};
}

label_conversions!(BackgroundCategory, IncomeRange, EducationGoal);

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

/// Normalized profile. Field order here is the order sent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub background_categories: Vec<BackgroundCategory>,
    pub income_range: IncomeRange,
    pub household_size: u8,
    pub state: String,
    pub zip_code: String,
    pub education_goal: EducationGoal,
}

/// Raw user input as submitted, before normalization.
/// Used directly as the JSON API request body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    pub background_categories: Vec<String>,
    pub income_range: Option<String>,
    pub household_size: Option<i64>,
    pub state: String,
    pub zip_code: String,
    pub education_goal: Option<String>,
    /// Form value for `household_size` that did not parse as a number.
    /// Kept so the page can echo it; rejected by `into_profile`.
    #[serde(skip)]
    pub household_size_raw: Option<String>,
}

impl ProfileInput {
    /// Builds input from urlencoded form pairs. Multiselect values arrive as
    /// repeated `background_categories` keys. Unknown keys are ignored.
    /// Never fails: bad values are kept verbatim and rejected by `into_profile`.
    pub fn from_form_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut input = ProfileInput::default();

        for (key, value) in pairs {
            match key.as_str() {
                "background_categories" => input.background_categories.push(value),
                "income_range" => input.income_range = non_empty(value),
                "household_size" => {
                    input.household_size = None;
                    input.household_size_raw = None;
                    if let Some(raw) = non_empty(value) {
                        match raw.trim().parse::<i64>() {
                            Ok(n) => input.household_size = Some(n),
                            Err(_) => input.household_size_raw = Some(raw),
                        }
                    }
                }
                "state" => input.state = value,
                "zip_code" => input.zip_code = value,
                "education_goal" => input.education_goal = non_empty(value),
                _ => {}
            }
        }

        input
    }

    /// Validates enumerations and the household range, then normalizes free text:
    /// state is trimmed and uppercased, ZIP is trimmed.
    pub fn into_profile(self) -> Result<Profile, ProfileError> {
        let mut background_categories = Vec::with_capacity(self.background_categories.len());
        for label in &self.background_categories {
            let category = BackgroundCategory::from_label(label)?;
            if !background_categories.contains(&category) {
                background_categories.push(category);
            }
        }

        if let Some(raw) = self.household_size_raw {
            return Err(ProfileError::HouseholdSizeNotANumber(raw));
        }

        let household_size = self.household_size.unwrap_or(MIN_HOUSEHOLD_SIZE);
        if !(MIN_HOUSEHOLD_SIZE..=MAX_HOUSEHOLD_SIZE).contains(&household_size) {
            return Err(ProfileError::HouseholdSizeOutOfRange(household_size));
        }

        Ok(Profile {
            background_categories,
            income_range: self
                .income_range
                .as_deref()
                .map(IncomeRange::from_label)
                .transpose()?
                .unwrap_or_default(),
            household_size: household_size as u8,
            state: self.state.trim().to_uppercase(),
            zip_code: self.zip_code.trim().to_string(),
            education_goal: self
                .education_goal
                .as_deref()
                .map(EducationGoal::from_label)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
