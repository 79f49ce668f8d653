use hydrochart::core::{
    CanvasBox, ChartGeometry, ChartKind, DataPoint, ScreenBounds,
};
use hydrochart::data::FixtureDataSource;
use hydrochart::interaction::SelectionState;
use hydrochart::metrics::{MetricCatalog, MetricEntry, MetricId};
use hydrochart::{ChartError, TrendChartConfig, TrendChartEngine};

const FIXTURE: &str = r#"{
  "trends": {
    "hydration": {
      "weekly": [
        { "day": "Mon", "avgLevel": 80 },
        { "day": "Tue", "avgLevel": 85 },
        { "day": "Wed", "avgLevel": 82 },
        { "day": "Thu", "avgLevel": 88 }
      ]
    },
    "skinTemp": {
      "weekly": [
        { "day": "Mon", "value": 36.2 },
        { "day": "Tue", "value": 36.4 }
      ]
    }
  }
}"#;

fn config(kind: ChartKind) -> TrendChartConfig {
    TrendChartConfig::new(CanvasBox::new(300.0, 150.0)).with_kind(kind)
}

fn engine(kind: ChartKind) -> TrendChartEngine {
    let source = FixtureDataSource::new(FIXTURE);
    TrendChartEngine::from_source(&source, config(kind)).expect("engine init")
}

#[test]
fn engine_starts_on_hydration_with_no_selection() {
    let engine = engine(ChartKind::Curve);
    assert_eq!(engine.active_metric(), MetricId::Hydration);
    assert_eq!(engine.selection_state(), SelectionState::Unselected);
}

#[test]
fn geometry_follows_the_configured_variant() {
    let curve = engine(ChartKind::Curve).geometry().expect("curve geometry");
    assert!(matches!(curve, ChartGeometry::Curve(_)));
    assert_eq!(curve.point_count(), 4);

    let bars = engine(ChartKind::Bar).geometry().expect("bar geometry");
    assert!(matches!(bars, ChartGeometry::Bars(_)));
    assert_eq!(bars.point_count(), 4);
}

#[test]
fn metric_switch_swaps_series_and_clears_selection_atomically() {
    let mut engine = engine(ChartKind::Bar);
    engine.select_point(3);
    assert_eq!(engine.selection_state(), SelectionState::Selected(3));

    engine.select_metric(MetricId::SkinTemp).expect("switch");
    assert_eq!(engine.active_metric(), MetricId::SkinTemp);
    assert_eq!(engine.selection_state(), SelectionState::Unselected);
    assert_eq!(engine.geometry().expect("geometry").point_count(), 2);
}

#[test]
fn selecting_an_uncataloged_metric_fails() {
    let mut engine = engine(ChartKind::Curve);
    let error = engine
        .select_metric(MetricId::Impedance)
        .expect_err("missing metric");
    assert!(matches!(error, ChartError::UnknownMetric(_)));
    assert_eq!(engine.active_metric(), MetricId::Hydration);
}

#[test]
fn double_tap_on_the_same_bar_toggles_back_to_unselected() {
    let mut engine = engine(ChartKind::Bar);

    // Segment width 75 → x = 100 lands in segment 1.
    assert_eq!(engine.tap(100.0).expect("tap"), SelectionState::Selected(1));
    assert_eq!(engine.tap(100.0).expect("tap"), SelectionState::Unselected);
}

#[test]
fn taps_outside_the_chart_leave_the_selection_unchanged() {
    let mut engine = engine(ChartKind::Bar);
    engine.select_point(2);
    assert_eq!(engine.tap(-5.0).expect("tap"), SelectionState::Selected(2));
    assert_eq!(engine.tap(900.0).expect("tap"), SelectionState::Selected(2));
}

#[test]
fn curve_taps_snap_to_the_nearest_point() {
    let mut engine = engine(ChartKind::Curve);
    // Curve x positions: 20, 106.67.., 193.33.., 280.
    assert_eq!(engine.tap(275.0).expect("tap"), SelectionState::Selected(3));
}

#[test]
fn tooltip_anchor_requires_a_selection_and_bar_geometry() {
    let bounds = ScreenBounds::new(0.0, 375.0);

    let mut engine = engine(ChartKind::Bar);
    assert_eq!(engine.tooltip_anchor(bounds).expect("anchor"), None);

    engine.select_point(0);
    let anchor = engine
        .tooltip_anchor(bounds)
        .expect("anchor")
        .expect("selected anchor");
    // Bar 0 center is 37.5 → clamped to the left margin.
    assert!((anchor - 8.0).abs() <= 1e-9);

    // The curve variant carries no bar geometry to anchor against.
    let mut curve_engine = self::engine(ChartKind::Curve);
    curve_engine.select_point(1);
    assert_eq!(curve_engine.tooltip_anchor(bounds).expect("anchor"), None);
}

#[test]
fn axis_ticks_match_the_variant_policy() {
    let curve_ticks = engine(ChartKind::Curve).axis_ticks().expect("ticks");
    assert_eq!(curve_ticks.len(), 3);
    assert_eq!(curve_ticks[0], 80.0);
    assert_eq!(curve_ticks[2], 88.0);

    let bar_ticks = engine(ChartKind::Bar).axis_ticks().expect("ticks");
    assert_eq!(bar_ticks.as_slice(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn empty_active_series_renders_a_blank_chart_not_an_error() {
    let mut catalog = MetricCatalog::new();
    catalog.insert(MetricId::Hydration, MetricEntry::new(Vec::new()));
    let engine =
        TrendChartEngine::new(catalog, config(ChartKind::Curve)).expect("engine init");

    assert_eq!(engine.geometry().expect("geometry").point_count(), 0);
    assert!(engine.axis_ticks().expect("ticks").is_empty());
    assert_eq!(engine.hit_test(50.0).expect("hit test"), None);
}

#[test]
fn summary_and_formatting_follow_the_active_metric() {
    let mut engine = engine(ChartKind::Curve);
    let summary = engine.active_summary();
    assert_eq!(summary.current, 88.0);
    assert!((summary.change_percent - 10.0).abs() <= 1e-9);
    assert_eq!(engine.format_active_value(summary.current), "88");
    assert_eq!(engine.active_display().unit, "%");

    engine.select_metric(MetricId::SkinTemp).expect("switch");
    assert_eq!(engine.format_active_value(36.4), "36.4");
    assert_eq!(engine.active_display().label, "SKIN TEMP");
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let source = FixtureDataSource::new(FIXTURE);
    let bad = TrendChartConfig::new(CanvasBox::new(-1.0, 150.0));
    assert!(TrendChartEngine::from_source(&source, bad).is_err());
}

#[test]
fn engine_layouts_are_pure_across_calls() {
    let engine = engine(ChartKind::Bar);
    assert_eq!(
        engine.geometry().expect("first"),
        engine.geometry().expect("second")
    );
}

#[test]
fn catalog_entries_built_by_hand_behave_like_fixture_ones() {
    let mut catalog = MetricCatalog::new();
    catalog.insert(
        MetricId::HeartRate,
        MetricEntry::new(vec![
            DataPoint::new("Mon", 62.0),
            DataPoint::new("Tue", 64.0),
        ]),
    );
    let engine = TrendChartEngine::new(catalog, config(ChartKind::Bar)).expect("engine");
    assert_eq!(engine.active_metric(), MetricId::HeartRate);
    assert_eq!(engine.geometry().expect("geometry").point_count(), 2);
}
