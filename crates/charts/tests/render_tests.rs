// File: crates/charts/tests/render_tests.rs
// Summary: SVG output structure for each chart component, plus error paths.

use synthviz_charts::charts::{area, bar, density, donut, dual_axis, line, scatter, treemap};
use synthviz_charts::svg::num;
use synthviz_charts::{
    AreaChartConfig, ArchPoint, BarChartConfig, BarColor, BarDatum, ChartError,
    DensityChartConfig, DonutChartConfig, DonutEntry, DualAxisChartConfig, DualAxisPoint,
    LineChartConfig, LinePoint, Margin, ScatterChartConfig, TreemapChartConfig, TreemapLeaf,
};
use synthviz_stats::{Observation, StatsError};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn bars(n: usize) -> Vec<BarDatum> {
    (0..n)
        .map(|i| BarDatum { label: (1980 + i).to_string(), value: (i + 1) as f64 })
        .collect()
}

#[test]
fn bar_chart_draws_one_rect_per_datum() {
    let svg = bar::render(&bars(5), &BarChartConfig::default()).unwrap();
    assert_eq!(count(&svg, "<rect"), 5);
    assert!(svg.starts_with("<svg xmlns="));
    assert!(svg.contains("aria-label=\"Bar Chart\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn bar_chart_filters_axis_labels() {
    let config = BarChartConfig {
        label_filter: Some(|label| label.parse::<i32>().map_or(false, |y| y % 5 == 0)),
        ..BarChartConfig::default()
    };
    let svg = bar::render(&bars(10), &config).unwrap();
    // Only 1980 and 1985 survive the filter.
    assert!(svg.contains(">1980</text>"));
    assert!(svg.contains(">1985</text>"));
    assert!(!svg.contains(">1981</text>"));
}

#[test]
fn bar_chart_applies_per_bar_colors() {
    let config = BarChartConfig {
        color: BarColor::PerBar(|d| if d.value > 2.0 { "#ff0000" } else { "#00ff00" }),
        ..BarChartConfig::default()
    };
    let svg = bar::render(&bars(4), &config).unwrap();
    assert_eq!(count(&svg, "fill=\"#00ff00\""), 2);
    assert_eq!(count(&svg, "fill=\"#ff0000\""), 2);
}

#[test]
fn bar_chart_rejects_empty_data() {
    let err = bar::render(&[], &BarChartConfig::default()).unwrap_err();
    assert!(matches!(err, ChartError::EmptyData));
}

#[test]
fn margins_larger_than_the_canvas_are_rejected() {
    let config = BarChartConfig {
        width: 50.0,
        margin: Margin::new(20.0, 30.0, 40.0, 60.0),
        ..BarChartConfig::default()
    };
    let err = bar::render(&bars(3), &config).unwrap_err();
    assert!(matches!(err, ChartError::InvalidDimensions { .. }));
}

#[test]
fn bar_chart_band_padding_moves_the_first_bar() {
    let data = bars(4);
    let svg = bar::render(
        &data,
        &BarChartConfig { band_padding: 0.3, ..BarChartConfig::default() },
    )
    .unwrap();
    // Inner width 910 (1000 minus 60/30 margins); step = 910 / (4 + 0.3).
    let step = 910.0 / 4.3;
    assert!(svg.contains(&format!("x=\"{}\"", num(step * 0.3))));
    assert!(svg.contains(&format!("width=\"{}\"", num(step * 0.7))));
}

#[test]
fn line_chart_draws_a_single_monotone_line() {
    let data: Vec<LinePoint> = (1985..2015)
        .map(|y| LinePoint { x: y as f64, y: 1.0 + ((y - 1985) % 6) as f64 })
        .collect();
    let config = LineChartConfig {
        title: Some("Average Multitimbrality per Year".into()),
        ..LineChartConfig::default()
    };
    let svg = line::render(&data, &config).unwrap();
    assert_eq!(count(&svg, "<path"), 1);
    assert!(svg.contains("stroke=\"#FF7F50\""));
    assert!(svg.contains("fill=\"none\""));
    assert!(svg.contains(">Average Multitimbrality per Year</text>"));
    // Gridlines in both orientations share the dashed style.
    assert!(count(&svg, "stroke-dasharray=\"2,2\"") > 10);
}

#[test]
fn line_chart_rejects_empty_data() {
    let err = line::render(&[], &LineChartConfig::default()).unwrap_err();
    assert!(matches!(err, ChartError::EmptyData));
}

#[test]
fn density_chart_draws_a_single_area_path() {
    let sample: Vec<f64> = (0..50).map(|i| 10.0 + (i % 7) as f64 * 3.0).collect();
    let svg = density::render(&sample, &DensityChartConfig::default()).unwrap();
    assert_eq!(count(&svg, "<path"), 1);
    assert!(svg.contains("fill-opacity=\"0.6\""));
}

#[test]
fn density_chart_propagates_bad_bandwidth() {
    let config = DensityChartConfig { bandwidth: 0.0, ..DensityChartConfig::default() };
    let err = density::render(&[1.0, 2.0], &config).unwrap_err();
    assert!(matches!(err, ChartError::Stats(StatsError::InvalidBandwidth(_))));
}

#[test]
fn density_chart_propagates_empty_sample() {
    let err = density::render(&[], &DensityChartConfig::default()).unwrap_err();
    assert!(matches!(err, ChartError::Stats(StatsError::EmptyInput)));
}

#[test]
fn scatter_draws_points_and_a_trend_line() {
    let data: Vec<Observation> =
        (0..20).map(|i| Observation::new(i as f64, (i * i) as f64)).collect();
    let svg = scatter::render(&data, &ScatterChartConfig::default()).unwrap();
    assert_eq!(count(&svg, "<circle"), 20);
    assert_eq!(count(&svg, "<path"), 1);
}

#[test]
fn scatter_colors_prediction_points_differently() {
    let mut data: Vec<Observation> =
        (0..10).map(|i| Observation::new(2015.0 + i as f64, 100.0 + i as f64)).collect();
    data.push(Observation::predicted(2027.0, 160.0));
    let config = ScatterChartConfig { trend_degree: Some(1), ..ScatterChartConfig::default() };
    let svg = scatter::render(&data, &config).unwrap();
    assert_eq!(count(&svg, "fill=\"#FF0000\""), 1);
    assert_eq!(count(&svg, "fill=\"#800080\""), 10);
}

#[test]
fn scatter_without_trend_draws_no_path() {
    let data: Vec<Observation> = (0..5).map(|i| Observation::new(i as f64, i as f64)).collect();
    let config = ScatterChartConfig { trend_degree: None, ..ScatterChartConfig::default() };
    let svg = scatter::render(&data, &config).unwrap();
    assert_eq!(count(&svg, "<path"), 0);
}

#[test]
fn scatter_surfaces_singular_fits() {
    // Every x identical: no quadratic can be identified.
    let data: Vec<Observation> =
        (0..6).map(|i| Observation::new(5.0, i as f64)).collect();
    let err = scatter::render(&data, &ScatterChartConfig::default()).unwrap_err();
    assert!(matches!(err, ChartError::Stats(StatsError::SingularSystem { .. })));
}

#[test]
fn scatter_legend_adds_three_entries() {
    let data: Vec<Observation> = (0..8).map(|i| Observation::new(i as f64, i as f64)).collect();
    let config = ScatterChartConfig {
        trend_degree: Some(1),
        legend: Some(("Points".into(), "Fit".into(), "Forecast".into())),
        ..ScatterChartConfig::default()
    };
    let svg = scatter::render(&data, &config).unwrap();
    assert!(svg.contains(">Points</text>"));
    assert!(svg.contains(">Fit</text>"));
    assert!(svg.contains(">Forecast</text>"));
}

#[test]
fn dual_axis_draws_area_line_and_both_axes() {
    let data: Vec<DualAxisPoint> = (1990..2010)
        .map(|y| DualAxisPoint {
            year: y as f64,
            release_count: (y - 1980) as f64,
            average_polyphony: 8.0 + (y % 4) as f64,
        })
        .collect();
    let config = DualAxisChartConfig {
        left_label: Some("Releases".into()),
        right_label: Some("Avg Polyphony".into()),
        ..DualAxisChartConfig::default()
    };
    let svg = dual_axis::render(&data, &config).unwrap();
    assert_eq!(count(&svg, "<path"), 2);
    assert!(svg.contains(">Releases</text>"));
    assert!(svg.contains(">Avg Polyphony</text>"));
    assert!(svg.contains("rotate(90)"));
}

#[test]
fn area_chart_stacks_two_bands() {
    let data: Vec<ArchPoint> = (1995..2015)
        .map(|y| ArchPoint { year: y as f64, digital: (y - 1990) as f64, analog: 10.0 })
        .collect();
    let svg = area::render(&data, &AreaChartConfig::default()).unwrap();
    assert_eq!(count(&svg, "fill-opacity=\"0.8\""), 2);
    assert!(svg.contains(">Digital</text>"));
    assert!(svg.contains(">Analog</text>"));
}

#[test]
fn donut_labels_slices_with_percentages() {
    let data = vec![
        DonutEntry { label: "8 voices".into(), count: 75.0 },
        DonutEntry { label: "16 voices".into(), count: 25.0 },
    ];
    let svg = donut::render(&data, &DonutChartConfig::default()).unwrap();
    assert_eq!(count(&svg, "<path"), 2);
    assert!(svg.contains(">75.0%</text>"));
    assert!(svg.contains(">25.0%</text>"));
    // Centered viewBox so origin-based arc geometry lands in view.
    assert!(svg.contains("viewBox=\"-300 -300 600 600\""));
}

#[test]
fn donut_escapes_markup_in_labels() {
    let data = vec![
        DonutEntry { label: "<8 voices>".into(), count: 1.0 },
        DonutEntry { label: "a & b".into(), count: 1.0 },
    ];
    let svg = donut::render(&data, &DonutChartConfig::default()).unwrap();
    assert!(svg.contains("&lt;8 voices&gt;"));
    assert!(svg.contains("a &amp; b"));
}

#[test]
fn donut_rejects_empty_and_zero_totals() {
    let err = donut::render(&[], &DonutChartConfig::default()).unwrap_err();
    assert!(matches!(err, ChartError::EmptyData));

    let data = vec![DonutEntry { label: "x".into(), count: 0.0 }];
    let err = donut::render(&data, &DonutChartConfig::default()).unwrap_err();
    assert!(matches!(err, ChartError::EmptyData));
}

#[test]
fn treemap_draws_one_cell_per_leaf() {
    let data: Vec<TreemapLeaf> = (0..12)
        .map(|i| TreemapLeaf { label: format!("word{i}"), value: (12 - i) as f64 })
        .collect();
    let config = TreemapChartConfig {
        title: Some("Top Words".into()),
        ..TreemapChartConfig::default()
    };
    let svg = treemap::render(&data, &config).unwrap();
    assert_eq!(count(&svg, "<rect"), 12);
    assert!(svg.contains(">Top Words</text>"));
}

#[test]
fn treemap_accepts_alternate_cell_palettes() {
    let data = vec![
        TreemapLeaf { label: "alpha".into(), value: 3.0 },
        TreemapLeaf { label: "beta".into(), value: 2.0 },
    ];
    let config = TreemapChartConfig {
        colors: synthviz_charts::theme::TREEMAP_LEVEL_2,
        ..TreemapChartConfig::default()
    };
    let svg = treemap::render(&data, &config).unwrap();
    assert!(svg.contains("fill=\"#F4C430\""));
}

#[test]
fn treemap_tolerates_an_empty_color_slice() {
    let data = vec![
        TreemapLeaf { label: "alpha".into(), value: 3.0 },
        TreemapLeaf { label: "beta".into(), value: 2.0 },
    ];
    let config = TreemapChartConfig { colors: &[], ..TreemapChartConfig::default() };
    let svg = treemap::render(&data, &config).unwrap();
    // Falls back to the default purple cells instead of panicking.
    assert!(svg.contains("fill=\"#9B6B9E\""));
}

#[test]
fn treemap_rejects_empty_data() {
    let err = treemap::render(&[], &TreemapChartConfig::default()).unwrap_err();
    assert!(matches!(err, ChartError::EmptyData));
}
