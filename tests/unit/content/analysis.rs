use super::*;

const GOOD: &str = r#"{
  "objetivos": ["Repasar fracciones", "Resolver problemas"],
  "desarrollo": "El estudiante participó. Hizo preguntas.",
  "actitud": 91,
  "recomendaciones": "Practicar decimales."
}"#;

#[test]
fn bare_json_parses() {
    let a = parse_analysis(GOOD).unwrap();
    assert_eq!(a.objectives.len(), 2);
    assert_eq!(a.attitude, Attitude::Score(91));
}

#[test]
fn fenced_json_parses() {
    let fenced = format!("```json\n{GOOD}\n```");
    assert_eq!(parse_analysis(&fenced).unwrap(), parse_analysis(GOOD).unwrap());
    let plain_fence = format!("```\n{GOOD}\n```");
    assert!(parse_analysis(&plain_fence).is_ok());
}

#[test]
fn chatty_output_is_rejected_with_raw_text() {
    let raw = format!("Claro, aquí está el análisis: {GOOD}");
    let err = parse_analysis(&raw).unwrap_err();
    let CardError::Upstream { reason, raw: kept } = err else {
        panic!("expected upstream error");
    };
    assert!(reason.contains("invalid JSON"));
    assert_eq!(kept, raw);
}

#[test]
fn missing_field_is_rejected() {
    let err = parse_analysis(r#"{"objetivos":[],"desarrollo":"","actitud":""}"#).unwrap_err();
    assert!(err.to_string().contains("recommendations"));
}

#[test]
fn non_object_and_empty_are_rejected() {
    assert!(parse_analysis("[1,2,3]").is_err());
    assert!(parse_analysis("   ").is_err());
    assert!(parse_analysis("```json\n```").is_err());
}

#[test]
fn fallback_policy_is_explicit() {
    let (a, used) = assessment_or_default(parse_analysis(GOOD), Locale::Es);
    assert!(!used);
    assert_eq!(a.attitude, Attitude::Score(91));

    let (b, used) = assessment_or_default(parse_analysis("nope"), Locale::Es);
    assert!(used);
    assert_eq!(b, default_assessment(Locale::Es));
    assert_eq!(b.objectives.len(), 3);
}

#[test]
fn prompt_embeds_transcript_and_keys() {
    let p = build_analysis_prompt("hola clase");
    assert!(p.contains("hola clase"));
    for key in ["objetivos", "desarrollo", "actitud", "recomendaciones"] {
        assert!(p.contains(key));
    }
    assert!(p.contains("{\n  \"objetivos\""));
}
