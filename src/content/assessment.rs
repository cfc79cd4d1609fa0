use serde_json::Value;

use crate::foundation::core::{Rgb8, palette};

/// Pedagogical evaluation of one session.
///
/// Deserialization is lenient: absent or mistyped fields fall back to typed defaults
/// instead of failing, and both the English and the Spanish key names are accepted.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Assessment {
    pub objectives: Vec<String>,
    pub narrative: String,
    pub attitude: Attitude,
    pub recommendations: String,
}

/// Attitude is either a 0–100 score or free text.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Attitude {
    Score(u8),
    Text(String),
}

impl Default for Attitude {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Score band used to tint the attitude column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum AttitudeTier {
    Excellent,
    Good,
    NeedsSupport,
}

impl AttitudeTier {
    pub const EXCELLENT_MIN: u8 = 80;
    pub const GOOD_MIN: u8 = 60;

    pub fn classify(score: u8) -> Self {
        if score >= Self::EXCELLENT_MIN {
            Self::Excellent
        } else if score >= Self::GOOD_MIN {
            Self::Good
        } else {
            Self::NeedsSupport
        }
    }

    pub fn color(self) -> Rgb8 {
        match self {
            Self::Excellent => palette::TIER_EXCELLENT,
            Self::Good => palette::TIER_GOOD,
            Self::NeedsSupport => palette::TIER_NEEDS_SUPPORT,
        }
    }
}

pub(crate) const OBJECTIVE_KEYS: [&str; 2] = ["objectives", "objetivos"];
pub(crate) const NARRATIVE_KEYS: [&str; 2] = ["narrative", "desarrollo"];
pub(crate) const ATTITUDE_KEYS: [&str; 2] = ["attitude", "actitud"];
pub(crate) const RECOMMENDATION_KEYS: [&str; 2] = ["recommendations", "recomendaciones"];

impl Assessment {
    /// Build an assessment from arbitrary JSON, substituting defaults for anything
    /// missing or of the wrong shape. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let field = |keys: &[&str]| keys.iter().find_map(|k| value.get(*k));

        Self {
            objectives: field(&OBJECTIVE_KEYS)
                .map(objectives_from)
                .unwrap_or_default(),
            narrative: field(&NARRATIVE_KEYS).map(text_from).unwrap_or_default(),
            attitude: field(&ATTITUDE_KEYS).map(attitude_from).unwrap_or_default(),
            recommendations: field(&RECOMMENDATION_KEYS)
                .map(text_from)
                .unwrap_or_default(),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Assessment {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

fn objectives_from(v: &Value) -> Vec<String> {
    match v {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Value::String(s) => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn text_from(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn attitude_from(v: &Value) -> Attitude {
    match v {
        Value::Number(n) => n.as_f64().map(score_from).unwrap_or_default(),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(n) => score_from(n),
            Err(_) => Attitude::Text(s.clone()),
        },
        _ => Attitude::default(),
    }
}

fn score_from(n: f64) -> Attitude {
    if !n.is_finite() {
        return Attitude::default();
    }
    Attitude::Score(n.round().clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/content/assessment.rs"]
mod tests;
