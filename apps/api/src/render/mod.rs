//! HTML rendering for the form page and the recommendation cards.
//!
//! Recommendations arrive exactly as upstream emitted them; this is the one
//! place missing fields are replaced with placeholder text.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use handlebars::Handlebars;
use serde::Serialize;

use crate::models::profile::{
    BackgroundCategory, EducationGoal, IncomeRange, ProfileInput, MAX_HOUSEHOLD_SIZE,
    MIN_HOUSEHOLD_SIZE,
};
use crate::models::recommendation::Recommendation;

pub mod templates;

use templates::{PAGE_TEMPLATE, PAGE_TEMPLATE_NAME};

pub const NAME_PLACEHOLDER: &str = "(no name)";
pub const CATEGORY_PLACEHOLDER: &str = "N/A";
pub const DESCRIPTION_PLACEHOLDER: &str = "";
pub const WHY_PLACEHOLDER: &str = "No explanation provided.";

pub const EMPTY_RESULT_MESSAGE: &str = "No programs were returned this time. \
    You can try again later, or adjust your answers slightly \
    (for example, add more background details or include your state).";

// ────────────────────────────────────────────────────────────────────────────
// Recommendation cards
// ────────────────────────────────────────────────────────────────────────────

/// One card, with every field filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    /// 1-based position in upstream order.
    pub index: usize,
    pub name: String,
    pub category: String,
    /// CSS modifier: the known category, or "unknown". Display text is untouched.
    pub category_class: &'static str,
    pub description: String,
    /// Clickable href: an http(s) URL, or a bare host given an `https://` scheme.
    pub link: Option<String>,
    /// A present link that cannot be made safely clickable, shown as text.
    pub link_text: Option<String>,
    pub why_it_matches: String,
}

impl RecommendationView {
    pub fn from_recommendation(index: usize, rec: &Recommendation) -> Self {
        let (link, link_text) = classify_link(rec.link.as_deref());
        Self {
            index,
            name: or_placeholder(&rec.name, NAME_PLACEHOLDER),
            category: or_placeholder(&rec.category, CATEGORY_PLACEHOLDER),
            category_class: rec.known_category().map_or("unknown", |c| c.as_str()),
            description: or_placeholder(&rec.description, DESCRIPTION_PLACEHOLDER),
            link,
            link_text,
            why_it_matches: or_placeholder(&rec.why_it_matches, WHY_PLACEHOLDER),
        }
    }

    pub fn list(recommendations: &[Recommendation]) -> Vec<Self> {
        recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| Self::from_recommendation(i + 1, rec))
            .collect()
    }
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Splits a raw link into (clickable href, plain text). Blank links yield neither.
fn classify_link(raw: Option<&str>) -> (Option<String>, Option<String>) {
    let link = match raw.map(str::trim) {
        Some(l) if !l.is_empty() => l,
        _ => return (None, None),
    };

    if link.contains(char::is_whitespace) {
        return (None, Some(link.to_string()));
    }

    let lower = link.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        (Some(link.to_string()), None)
    } else if is_bare_host(link) {
        (Some(format!("https://{link}")), None)
    } else {
        (None, Some(link.to_string()))
    }
}

/// `www.hud.gov` or `benefits.gov/path`: a dotted hostname with no scheme.
fn is_bare_host(link: &str) -> bool {
    let host = link.split(['/', '?', '#']).next().unwrap_or_default();
    host.contains('.')
        && !host.starts_with('.')
        && !host.ends_with('.')
        && host.starts_with(|c: char| c.is_ascii_alphanumeric())
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

// ────────────────────────────────────────────────────────────────────────────
// Page view model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct OptionView {
    label: &'static str,
    selected: bool,
}

/// Form state, echoed back so a submitted page keeps the user's answers.
#[derive(Debug, Serialize)]
struct FormView {
    background_options: Vec<OptionView>,
    income_options: Vec<OptionView>,
    education_options: Vec<OptionView>,
    household_size: String,
    min_household: i64,
    max_household: i64,
    state: String,
    zip_code: String,
}

impl FormView {
    fn from_input(input: &ProfileInput) -> Self {
        let income = input
            .income_range
            .as_deref()
            .unwrap_or(IncomeRange::default().label());
        let goal = input
            .education_goal
            .as_deref()
            .unwrap_or(EducationGoal::default().label());

        Self {
            background_options: BackgroundCategory::ALL
                .iter()
                .map(|c| OptionView {
                    label: c.label(),
                    selected: input.background_categories.iter().any(|s| s == c.label()),
                })
                .collect(),
            income_options: IncomeRange::ALL
                .iter()
                .map(|r| OptionView {
                    label: r.label(),
                    selected: r.label() == income,
                })
                .collect(),
            education_options: EducationGoal::ALL
                .iter()
                .map(|g| OptionView {
                    label: g.label(),
                    selected: g.label() == goal,
                })
                .collect(),
            household_size: input.household_size_raw.clone().unwrap_or_else(|| {
                input
                    .household_size
                    .unwrap_or(MIN_HOUSEHOLD_SIZE)
                    .to_string()
            }),
            min_household: MIN_HOUSEHOLD_SIZE,
            max_household: MAX_HOUSEHOLD_SIZE,
            state: input.state.clone(),
            zip_code: input.zip_code.clone(),
        }
    }
}

/// What happened to a submission.
#[derive(Debug)]
pub enum Outcome {
    Recommendations(Vec<Recommendation>),
    /// User-facing message; no partial results accompany it.
    Failed(String),
}

#[derive(Debug, Serialize)]
struct OutcomeView {
    error: Option<String>,
    empty_message: Option<&'static str>,
    cards: Vec<RecommendationView>,
    generated_at: String,
}

#[derive(Debug, Serialize)]
pub struct PageView {
    configured: bool,
    form: FormView,
    outcome: Option<OutcomeView>,
}

impl PageView {
    pub fn new(
        configured: bool,
        input: &ProfileInput,
        outcome: Option<Outcome>,
        now: DateTime<Utc>,
    ) -> Self {
        let outcome = outcome.map(|o| match o {
            Outcome::Failed(message) => OutcomeView {
                error: Some(message),
                empty_message: None,
                cards: Vec::new(),
                generated_at: String::new(),
            },
            Outcome::Recommendations(recs) => OutcomeView {
                error: None,
                empty_message: recs.is_empty().then_some(EMPTY_RESULT_MESSAGE),
                cards: RecommendationView::list(&recs),
                generated_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            },
        });

        Self {
            configured,
            form: FormView::from_input(input),
            outcome,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer
// ────────────────────────────────────────────────────────────────────────────

/// Compiled page templates. Built once at startup and shared via `AppState`.
#[derive(Clone)]
pub struct PageRenderer {
    engine: Arc<Handlebars<'static>>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars
            .register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .map_err(|e| anyhow!("Failed to compile page template: {e}"))?;
        Ok(Self {
            engine: Arc::new(handlebars),
        })
    }

    pub fn render_page(&self, view: &PageView) -> Result<String> {
        self.engine
            .render(PAGE_TEMPLATE_NAME, view)
            .map_err(|e| anyhow!("Failed to render page: {e}"))
    }
}
