use hydrochart::core::{BarLayoutEngine, BarStyle, CanvasBox, ChartLayoutEngine, DataPoint};
use proptest::prelude::*;

fn series_strategy() -> impl Strategy<Value = Vec<DataPoint>> {
    prop::collection::vec(0.0f64..1_000.0, 1..16).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| DataPoint::new(format!("D{index}"), value))
            .collect()
    })
}

fn engine() -> BarLayoutEngine {
    BarLayoutEngine::new(BarStyle::default()).expect("bar engine")
}

proptest! {
    #[test]
    fn every_bar_honors_the_visibility_floor(series in series_strategy()) {
        let canvas = CanvasBox::new(300.0, 150.0);
        let geometry = engine().layout(&series, canvas).expect("layout");

        prop_assert_eq!(geometry.len(), series.len());
        for bar in geometry.bars() {
            prop_assert!(bar.height >= BarStyle::default().min_visible_height);
        }
    }

    #[test]
    fn bars_rest_on_the_plot_bottom(series in series_strategy()) {
        let canvas = CanvasBox::new(300.0, 150.0);
        let geometry = engine().layout(&series, canvas).expect("layout");

        for bar in geometry.bars() {
            prop_assert!((bar.y + bar.height - canvas.plot_bottom()).abs() <= 1e-9);
        }
    }

    #[test]
    fn hit_testing_the_center_finds_the_same_bar(series in series_strategy()) {
        let canvas = CanvasBox::new(300.0, 150.0);
        let geometry = engine().layout(&series, canvas).expect("layout");

        for (index, bar) in geometry.bars().iter().enumerate() {
            prop_assert_eq!(geometry.hit_test(bar.center_x), Some(index));
        }
    }

    #[test]
    fn hit_testing_never_reports_outside_taps(
        series in series_strategy(),
        x in -10_000.0f64..10_000.0,
    ) {
        let canvas = CanvasBox::new(300.0, 150.0);
        let geometry = engine().layout(&series, canvas).expect("layout");

        match geometry.hit_test(x) {
            Some(index) => {
                prop_assert!(index < geometry.len());
                prop_assert!((0.0..canvas.width).contains(&x));
            }
            None => prop_assert!(x < 0.0 || x >= canvas.width),
        }
    }

    #[test]
    fn layout_is_a_pure_function(series in series_strategy()) {
        let canvas = CanvasBox::new(375.0, 200.0);
        let first = engine().layout(&series, canvas).expect("layout");
        let second = engine().layout(&series, canvas).expect("layout");
        prop_assert_eq!(first, second);
    }
}
