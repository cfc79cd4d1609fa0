use super::*;
use crate::{layout::metrics::COLUMN_WIDTH, text::measure::FixedAdvance};

const BODY: FixedAdvance = FixedAdvance { advance: 10.0 };

fn long_text(words: usize) -> String {
    vec!["palabra"; words].join(" ")
}

#[test]
fn scenario_sections_follow_caps_and_formats() {
    let assessment = Assessment {
        objectives: vec!["Review fractions".into(), "Practice word problems".into()],
        narrative: "Student engaged well. Completed three exercises. Asked clarifying questions."
            .into(),
        attitude: Attitude::Score(88),
        recommendations: "Continue with decimal operations next session.".into(),
    };
    let prepared = prepare_sections(&assessment, Locale::Es, &BODY, COLUMN_WIDTH);

    assert_eq!(
        prepared.objectives.items,
        vec![vec!["• Review fractions".to_string()], vec!["• Practice word problems".to_string()]]
    );
    assert_eq!(prepared.narrative.item_count(), 3);
    assert_eq!(prepared.narrative.items[0], vec!["• Student engaged well.".to_string()]);
    assert_eq!(prepared.tier, Some(AttitudeTier::Excellent));
    assert_eq!(prepared.attitude.lines[0], "88/100 · Excelente");
    assert_eq!(prepared.attitude.color, palette::TIER_EXCELLENT);
    assert_eq!(prepared.attitude.marker, Some(palette::TIER_EXCELLENT));
    assert_eq!(prepared.objectives.heading, "Objetivos de la Sesión");
}

#[test]
fn blank_objectives_are_skipped_before_the_cap() {
    let assessment = Assessment {
        objectives: vec!["".into(), "a".into(), "  ".into(), "b".into(), "c".into(), "d".into()],
        ..Assessment::default()
    };
    let prepared = prepare_sections(&assessment, Locale::En, &BODY, COLUMN_WIDTH);
    assert_eq!(prepared.objectives.item_count(), 3);
    assert_eq!(prepared.objectives.items[2], vec!["• c".to_string()]);
}

#[test]
fn long_items_keep_two_lines_and_blocks_keep_eight() {
    let assessment = Assessment {
        objectives: vec![long_text(40)],
        narrative: format!("{}. {}", long_text(40), long_text(3)),
        attitude: Attitude::Text(long_text(200)),
        recommendations: long_text(200),
    };
    let prepared = prepare_sections(&assessment, Locale::Es, &BODY, COLUMN_WIDTH);
    assert_eq!(prepared.objectives.line_count(), 2);
    assert_eq!(prepared.narrative.line_count(), 3);
    assert_eq!(prepared.recommendations.line_count(), 8);
    assert_eq!(prepared.attitude.line_count(), 8);
    assert_eq!(prepared.attitude.color, palette::TEXT_DARK);
    assert_eq!(prepared.attitude.marker, None);
    assert_eq!(prepared.tier, None);
}

#[test]
fn empty_assessment_leaves_only_headings() {
    let prepared = prepare_sections(&Assessment::default(), Locale::Es, &BODY, COLUMN_WIDTH);
    assert_eq!(prepared.objectives.height(), 50.0);
    assert_eq!(prepared.narrative.height(), 50.0);
    assert_eq!(prepared.recommendations.height(), 50.0);
    assert_eq!(prepared.attitude.height(), 50.0);
}

#[test]
fn narrative_sentences_drop_blanks() {
    let got: Vec<&str> = narrative_sentences(" a. . b .c.d.e.f").collect();
    assert_eq!(got, vec!["a", "b", "c", "d"]);
}

#[test]
fn score_tiers_pick_their_colors() {
    for (score, tier) in [
        (80, AttitudeTier::Excellent),
        (79, AttitudeTier::Good),
        (60, AttitudeTier::Good),
        (59, AttitudeTier::NeedsSupport),
    ] {
        let assessment = Assessment {
            attitude: Attitude::Score(score),
            ..Assessment::default()
        };
        let prepared = prepare_sections(&assessment, Locale::En, &BODY, COLUMN_WIDTH);
        assert_eq!(prepared.tier, Some(tier));
        assert_eq!(prepared.attitude.color, tier.color());
    }
}
