use hydrochart::ChartError;
use hydrochart::data::{FixtureDataSource, TrendDataSource};
use hydrochart::metrics::MetricId;

const FIXTURE: &str = r#"{
  "trends": {
    "hydration": {
      "weekly": [
        { "day": "Mon", "avgLevel": 80 },
        { "day": "Tue", "avgLevel": 85 },
        { "day": "Wed", "avgLevel": 88 }
      ],
      "consistency": 0.82,
      "score": 91
    },
    "skinTemp": {
      "weekly": [
        { "day": "Mon", "value": 36.2 },
        { "day": "Tue", "value": 36.4 }
      ]
    }
  }
}"#;

#[test]
fn parses_both_value_field_spellings() {
    let catalog = FixtureDataSource::parse(FIXTURE).expect("parse");
    assert_eq!(catalog.len(), 2);

    let hydration = catalog.get(MetricId::Hydration).expect("hydration entry");
    assert_eq!(hydration.series.len(), 3);
    assert_eq!(hydration.series[0].label, "Mon");
    assert_eq!(hydration.series[0].value, 80.0);
    assert_eq!(hydration.consistency, Some(0.82));
    assert_eq!(hydration.score, Some(91.0));

    let skin_temp = catalog.get(MetricId::SkinTemp).expect("skinTemp entry");
    assert_eq!(skin_temp.series[1].value, 36.4);
    assert_eq!(skin_temp.consistency, None);
}

#[test]
fn derives_summaries_while_parsing() {
    let catalog = FixtureDataSource::parse(FIXTURE).expect("parse");
    let summary = catalog.get(MetricId::Hydration).expect("entry").summary;
    assert_eq!(summary.current, 88.0);
    assert!((summary.change_percent - 10.0).abs() <= 1e-9);
}

#[test]
fn keeps_fixture_order_for_tab_presentation() {
    let catalog = FixtureDataSource::parse(FIXTURE).expect("parse");
    let order: Vec<MetricId> = catalog.metric_ids().collect();
    assert_eq!(order, vec![MetricId::Hydration, MetricId::SkinTemp]);
    assert_eq!(catalog.first_metric(), Some(MetricId::Hydration));
}

#[test]
fn unrecognized_metrics_are_skipped_not_fatal() {
    let json = r#"{
      "trends": {
        "bloodOxygen": { "weekly": [{ "day": "Mon", "value": 97 }] },
        "heartRate": { "weekly": [{ "day": "Mon", "value": 64 }] }
      }
    }"#;
    let catalog = FixtureDataSource::parse(json).expect("parse");
    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains(MetricId::HeartRate));
}

#[test]
fn malformed_json_is_surfaced() {
    let error = FixtureDataSource::parse("{ not json").expect_err("malformed");
    assert!(matches!(error, ChartError::InvalidData(_)));

    let missing_day = r#"{ "trends": { "hydration": { "weekly": [{ "value": 80 }] } } }"#;
    assert!(FixtureDataSource::parse(missing_day).is_err());
}

#[test]
fn source_trait_fetches_the_owned_fixture() {
    let source = FixtureDataSource::new(FIXTURE);
    let catalog = source.fetch_trends().expect("fetch");
    assert_eq!(catalog.len(), 2);
}
