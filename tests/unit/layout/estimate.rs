use super::*;
use crate::{
    content::assessment::Attitude,
    layout::metrics::{COLUMN_WIDTH, MIN_CANVAS_HEIGHT},
    text::measure::FixedAdvance,
};

const BODY: FixedAdvance = FixedAdvance { advance: 10.0 };

fn long_text(words: usize) -> String {
    vec!["palabra"; words].join(" ")
}

fn scenario() -> Assessment {
    Assessment {
        objectives: vec!["Review fractions".into(), "Practice word problems".into()],
        narrative: "Student engaged well. Completed three exercises. Asked clarifying questions."
            .into(),
        attitude: Attitude::Score(88),
        recommendations: "Continue with decimal operations next session.".into(),
    }
}

#[test]
fn scenario_estimate_matches_hand_count() {
    let est = estimate(&scenario(), Locale::Es, &BODY, false);
    assert_eq!(est.objectives.height, 50.0 + 2.0 * 30.0 + 2.0 * 5.0);
    assert_eq!(est.narrative.height, 50.0 + 3.0 * 30.0 + 3.0 * 5.0);
    assert_eq!(est.recommendations.lines, 1);
    assert_eq!(est.attitude.lines, 2);
    assert_eq!(est.top_row(), 155.0);
    assert_eq!(est.bottom_row(), 110.0);
    assert_eq!(est.total(), 170.0 + 20.0 + 155.0 + 60.0 + 110.0 + 100.0);
    assert_eq!(canvas_height(&est), MIN_CANVAS_HEIGHT);
}

#[test]
fn photo_block_is_reserved_only_when_present() {
    let without = estimate(&scenario(), Locale::Es, &BODY, false);
    let with = estimate(&scenario(), Locale::Es, &BODY, true);
    assert_eq!(without.photo_block, 0.0);
    assert_eq!(with.total() - without.total(), 295.0);
}

#[test]
fn full_content_grows_past_the_minimum() {
    let assessment = Assessment {
        objectives: vec![long_text(15); 5],
        narrative: vec![long_text(15); 6].join(". "),
        attitude: Attitude::Text(long_text(200)),
        recommendations: long_text(200),
    };
    let est = estimate(&assessment, Locale::Es, &BODY, true);
    assert_eq!(est.objectives.height, 50.0 + 6.0 * 30.0 + 3.0 * 5.0);
    assert_eq!(est.narrative.height, 50.0 + 8.0 * 30.0 + 4.0 * 5.0);
    assert_eq!(est.bottom_row(), 50.0 + 8.0 * 30.0);
    let expected = 170.0 + 295.0 + 20.0 + 310.0 + 60.0 + 290.0 + 100.0 + 160.0 + 100.0;
    assert_eq!(canvas_height(&est), expected as u32);
}

#[test]
fn adding_content_never_shrinks_the_canvas() {
    let mut assessment = Assessment::default();
    let mut last = canvas_height(&estimate(&assessment, Locale::Es, &BODY, false));
    for i in 0..5 {
        assessment.objectives.push(long_text(5 + i * 4));
        assessment.narrative.push_str(&format!("{}. ", long_text(3 + i * 6)));
        assessment.recommendations.push_str(&format!(" {}", long_text(20)));
        for has_photo in [false, true] {
            let h = canvas_height(&estimate(&assessment, Locale::Es, &BODY, has_photo));
            assert!(h >= last, "height dropped from {last} to {h} at step {i}");
        }
        last = canvas_height(&estimate(&assessment, Locale::Es, &BODY, false));
    }
}

#[test]
fn column_width_is_derived_from_card_geometry() {
    assert_eq!(COLUMN_WIDTH, 730.0);
}
