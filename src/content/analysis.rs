//! Strict handling of the language model's assessment output.
//!
//! The model is asked for a bare JSON object. [`parse_analysis`] accepts exactly that,
//! optionally wrapped in a Markdown code fence, and rejects everything else with a
//! [`CardError::Upstream`] carrying the raw text. Substituting canned content is a
//! separate, explicit decision made by [`assessment_or_default`].

use serde_json::Value;

use crate::{
    content::assessment::{
        ATTITUDE_KEYS, Assessment, Attitude, NARRATIVE_KEYS, OBJECTIVE_KEYS, RECOMMENDATION_KEYS,
    },
    foundation::{
        core::Locale,
        error::{CardError, CardResult},
    },
};

/// Parse model output into an [`Assessment`].
pub fn parse_analysis(raw: &str) -> CardResult<Assessment> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Err(CardError::upstream("empty response", raw));
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| CardError::upstream(format!("invalid JSON: {e}"), raw))?;
    let Value::Object(map) = &value else {
        return Err(CardError::upstream("top-level value is not an object", raw));
    };

    for (name, keys) in [
        ("objectives", &OBJECTIVE_KEYS),
        ("narrative", &NARRATIVE_KEYS),
        ("attitude", &ATTITUDE_KEYS),
        ("recommendations", &RECOMMENDATION_KEYS),
    ] {
        if !keys.iter().any(|k| map.contains_key(*k)) {
            return Err(CardError::upstream(
                format!("missing required field '{name}'"),
                raw,
            ));
        }
    }

    Ok(Assessment::from_value(&value))
}

fn strip_code_fence(raw: &str) -> &str {
    let mut s = raw.trim();
    if let Some(rest) = s.strip_prefix("```json") {
        s = rest;
    } else if let Some(rest) = s.strip_prefix("```") {
        s = rest;
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest;
    }
    s.trim()
}

/// Canned assessment used when upstream output is unusable.
pub fn default_assessment(locale: Locale) -> Assessment {
    let (objectives, narrative, attitude, recommendations) = match locale {
        Locale::Es => (
            [
                "Revisar contenido de la clase",
                "Fomentar participación",
                "Evaluar comprensión",
            ],
            "Clase enfocada en el aprendizaje activo y la participación de los estudiantes.",
            "Actitud positiva y participativa durante la sesión.",
            "Continuar fomentando la participación activa y el diálogo en clase.",
        ),
        Locale::En => (
            [
                "Review class content",
                "Encourage participation",
                "Check understanding",
            ],
            "Class focused on active learning and student participation.",
            "Positive and participative attitude during the session.",
            "Keep encouraging active participation and dialogue in class.",
        ),
    };

    Assessment {
        objectives: objectives.iter().map(|s| s.to_string()).collect(),
        narrative: narrative.to_string(),
        attitude: Attitude::Text(attitude.to_string()),
        recommendations: recommendations.to_string(),
    }
}

/// Fallback policy: keep a parsed assessment, or log the upstream failure and return
/// [`default_assessment`]. The flag reports whether the fallback was used.
pub fn assessment_or_default(parsed: CardResult<Assessment>, locale: Locale) -> (Assessment, bool) {
    match parsed {
        Ok(a) => (a, false),
        Err(CardError::Upstream { reason, raw }) => {
            tracing::warn!(%reason, raw_len = raw.len(), "using default assessment");
            (default_assessment(locale), true)
        }
        Err(err) => {
            tracing::warn!(%err, "using default assessment");
            (default_assessment(locale), true)
        }
    }
}

/// Prompt asking the model for the four-field assessment JSON.
pub fn build_analysis_prompt(transcript: &str) -> String {
    format!(
        r#"Eres un analista pedagógico experto. Analiza esta transcripción de clase y genera un análisis en formato JSON.

IMPORTANTE: Responde ÚNICAMENTE con el objeto JSON, sin texto adicional antes o después.

Estructura JSON requerida:
{{
  "objetivos": ["objetivo 1", "objetivo 2", "objetivo 3"],
  "desarrollo": "resumen detallado de la clase en máximo 200 palabras",
  "actitud": "descripción textual de la actitud y participación de los estudiantes (ej: 'Excelente actitud. Muy participativo y enfocado.')",
  "recomendaciones": "recomendaciones para mejorar en máximo 150 palabras"
}}

TRANSCRIPCIÓN DE LA CLASE:
{transcript}

Genera ahora el análisis en JSON puro (sin markdown, sin explicaciones):"#
    )
}

#[cfg(test)]
#[path = "../../tests/unit/content/analysis.rs"]
mod tests;
