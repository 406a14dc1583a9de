use super::*;
use crate::fixtures::sample_result;

#[test]
fn renders_prediction_fields_as_display_text() {
    let mut view = ResultsView::default();
    view.render(&sample_result("CRITICAL", true, &["Deploy rescue teams"]));

    assert_eq!(view.major_label, "YES ⚠️");
    assert_eq!(view.major_color, WARNING_COLOR);
    assert_eq!(view.major_probability, "87.5%");
    assert_eq!(view.damage_index, "0.812");
    assert_eq!(view.response_time, "6.4 hours");
    assert_eq!(view.alert_level, "LEVEL 5 - MAXIMUM ALERT");
    assert_eq!(view.priority_level.as_deref(), Some("Priority level 5"));
    assert_eq!(view.personnel, "500+ emergency responders");
    assert_eq!(view.medical_teams, "20");
    assert_eq!(view.rescue_units, "30");
    assert_eq!(view.shelters, "30,000 units");
    assert_eq!(view.equipment, "Bulldozers, cranes");
}

#[test]
fn minor_disaster_uses_positive_label() {
    let mut result = sample_result("LOW", false, &[]);
    result.predictions.is_major_disaster = false;
    result.predictions.major_probability = 12.0;

    let mut view = ResultsView::default();
    view.render(&result);
    assert_eq!(view.major_label, "NO ✓");
    assert_eq!(view.major_color, POSITIVE_COLOR);
    assert_eq!(view.major_probability, "12%");
}

#[test]
fn banner_follows_priority_mapping() {
    let cases = [
        ("CRITICAL", PriorityStyle::Critical, "🔴 CRITICAL PRIORITY"),
        ("HIGH", PriorityStyle::High, "🟠 HIGH PRIORITY"),
        ("MEDIUM", PriorityStyle::Medium, "🟡 MEDIUM PRIORITY"),
        ("LOW", PriorityStyle::Low, "🟢 LOW PRIORITY"),
        ("UNKNOWN", PriorityStyle::Low, "⚪ UNKNOWN PRIORITY"),
    ];
    for (priority, style, label) in cases {
        let mut view = ResultsView::default();
        view.render(&sample_result(priority, false, &[]));
        assert_eq!(view.banner_style, Some(style), "style for {priority}");
        assert_eq!(view.banner_label, label);
    }
}

#[test]
fn banner_colors_are_distinct_per_style() {
    let colors = [
        banner_color(PriorityStyle::Critical),
        banner_color(PriorityStyle::High),
        banner_color(PriorityStyle::Medium),
        banner_color(PriorityStyle::Low),
    ];
    for (idx, color) in colors.iter().enumerate() {
        assert!(!colors[idx + 1..].contains(color));
    }
}

#[test]
fn evacuation_block_visibility_matches_recommendation() {
    let mut view = ResultsView::default();
    view.render(&sample_result("HIGH", true, &[]));
    assert!(view.evacuation.is_some());
    assert_eq!(
        view.evacuation,
        Some(EvacuationView {
            people_to_evacuate: "35,000".into(),
            evacuation_centers: "70".into(),
            vehicles_needed: "700".into(),
        })
    );

    view.render(&sample_result("HIGH", false, &[]));
    assert_eq!(view.evacuation, None);
}

#[test]
fn recommended_evacuation_with_missing_counts_shows_placeholder() {
    let mut result = sample_result("HIGH", true, &[]);
    result.emergency_response.evacuation.people_to_evacuate = None;
    result.emergency_response.evacuation.vehicles_needed = None;

    let mut view = ResultsView::default();
    view.render(&result);
    let evacuation = view.evacuation.expect("visible");
    assert_eq!(evacuation.people_to_evacuate, "N/A");
    assert_eq!(evacuation.evacuation_centers, "70");
    assert_eq!(evacuation.vehicles_needed, "N/A");
}

#[test]
fn action_items_replace_previous_render() {
    let mut view = ResultsView::default();
    view.render(&sample_result("LOW", false, &["a", "b", "c"]));
    assert_eq!(view.action_items, vec!["a", "b", "c"]);

    view.render(&sample_result("LOW", false, &["Open shelters", "Deploy rescue teams"]));
    assert_eq!(
        view.action_items,
        vec!["Open shelters", "Deploy rescue teams"]
    );

    view.render(&sample_result("LOW", false, &[]));
    assert!(view.action_items.is_empty());
}

#[test]
fn render_is_idempotent() {
    let result = sample_result("MEDIUM", true, &["Deploy rescue teams", "Open shelters"]);

    let mut once = ResultsView::default();
    once.render(&result);

    let mut twice = ResultsView::default();
    twice.render(&result);
    twice.render(&result);

    assert_eq!(once, twice);
}

#[test]
fn scroll_is_requested_once_per_render() {
    let mut view = ResultsView::default();
    assert!(!view.take_scroll_request());

    view.render(&sample_result("LOW", false, &[]));
    assert!(view.take_scroll_request());
    assert!(!view.take_scroll_request());
}

#[test]
fn negative_counts_render_with_sign() {
    let mut result = sample_result("HIGH", true, &[]);
    result.emergency_response.resources.temporary_shelters = -5;
    result.emergency_response.evacuation.people_to_evacuate = Some(-1234);
    result.emergency_response.evacuation.evacuation_centers = Some(-1);
    result.emergency_response.evacuation.vehicles_needed = Some(-1);

    let mut view = ResultsView::default();
    view.render(&result);

    assert_eq!(view.shelters, "-5 units");
    assert_eq!(
        view.evacuation,
        Some(EvacuationView {
            people_to_evacuate: "-1,234".into(),
            evacuation_centers: "-1".into(),
            vehicles_needed: "-1".into(),
        })
    );
}

#[test]
fn damage_index_ties_round_up() {
    let mut result = sample_result("LOW", false, &[]);
    result.predictions.predicted_damage_index = 0.8125;

    let mut view = ResultsView::default();
    view.render(&result);
    assert_eq!(view.damage_index, "0.813");
}
