use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The closed set of categories the model is asked to choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Scholarship,
    Grant,
    HousingSupport,
    FoodNutrition,
    WorkforceProgram,
    Other,
}

impl RecommendationCategory {
    pub const ALL: [RecommendationCategory; 6] = [
        Self::Scholarship,
        Self::Grant,
        Self::HousingSupport,
        Self::FoodNutrition,
        Self::WorkforceProgram,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scholarship => "scholarship",
            Self::Grant => "grant",
            Self::HousingSupport => "housing_support",
            Self::FoodNutrition => "food_nutrition",
            Self::WorkforceProgram => "workforce_program",
            Self::Other => "other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(raw))
    }
}

/// One assistance program as emitted upstream.
///
/// Every field is optional: items missing fields are kept and the renderer
/// fills in placeholders. `category` is carried verbatim, including values
/// outside `RecommendationCategory`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default, deserialize_with = "loose_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_string", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "loose_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "loose_string", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "loose_string", skip_serializing_if = "Option::is_none")]
    pub why_it_matches: Option<String>,
}

impl Recommendation {
    /// The category if it is one of the six known values.
    pub fn known_category(&self) -> Option<RecommendationCategory> {
        self.category.as_deref().and_then(RecommendationCategory::parse)
    }
}

/// Strings pass through, other scalars are stringified, null / arrays / objects
/// count as absent.
fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_item_deserializes() {
        let rec: Recommendation = serde_json::from_value(json!({
            "name": "Federal Pell Grant",
            "category": "grant",
            "description": "Need-based federal grant for undergraduates.",
            "link": "https://studentaid.gov/understand-aid/types/grants/pell",
            "why_it_matches": "Low household income qualifies you."
        }))
        .unwrap();
        assert_eq!(rec.name.as_deref(), Some("Federal Pell Grant"));
        assert_eq!(rec.known_category(), Some(RecommendationCategory::Grant));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let rec: Recommendation = serde_json::from_value(json!({"name": "X"})).unwrap();
        assert_eq!(rec.name.as_deref(), Some("X"));
        assert!(rec.category.is_none());
        assert!(rec.description.is_none());
        assert!(rec.link.is_none());
        assert!(rec.why_it_matches.is_none());
    }

    #[test]
    fn test_loose_fields_accept_odd_scalars() {
        let rec: Recommendation = serde_json::from_value(json!({
            "name": 529,
            "category": null,
            "description": ["a", "b"],
            "link": {"url": "https://example.gov"},
            "why_it_matches": true
        }))
        .unwrap();
        assert_eq!(rec.name.as_deref(), Some("529"));
        assert!(rec.category.is_none());
        assert!(rec.description.is_none());
        assert!(rec.link.is_none());
        assert_eq!(rec.why_it_matches.as_deref(), Some("true"));
    }

    #[test]
    fn test_unknown_category_is_kept_verbatim() {
        let rec: Recommendation =
            serde_json::from_value(json!({"name": "Y", "category": "tax_credit"})).unwrap();
        assert_eq!(rec.category.as_deref(), Some("tax_credit"));
        assert_eq!(rec.known_category(), None);
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!(
            RecommendationCategory::parse(" Housing_Support "),
            Some(RecommendationCategory::HousingSupport)
        );
        assert_eq!(RecommendationCategory::parse("housing support"), None);
    }

    #[test]
    fn test_category_serde_matches_as_str() {
        for c in RecommendationCategory::ALL {
            assert_eq!(serde_json::to_value(c).unwrap(), json!(c.as_str()));
        }
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let rec = Recommendation {
            name: Some("X".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&rec).unwrap(), json!({"name": "X"}));
    }
}
