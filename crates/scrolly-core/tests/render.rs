// File: crates/scrolly-core/tests/render.rs
// Purpose: Validate scene construction: scales, gaps, emphasis, axes, and full redraws.

use scrolly_core::theme::Theme;
use scrolly_core::{load_wide, ChartView, Group, RenderOptions, RenderStatus, Step, WideRecord};

const FIXTURE: &str = include_str!("fixtures/sample_assets.json");

fn view() -> ChartView {
    ChartView::with_records(load_wide(FIXTURE).unwrap(), RenderOptions::default())
}

#[test]
fn policy_step_highlights_exactly_latinx() {
    let mut v = view();
    assert_eq!(v.render(Step::Policy.highlight()), RenderStatus::Drawn);

    let theme = Theme::light();
    let opts = RenderOptions::default();
    let scene = v.scene();
    assert_eq!(scene.highlighted(), vec![Group::Latinx]);
    for line in scene.series() {
        if line.group == Group::Latinx {
            assert_eq!(line.color, theme.accent_line);
            assert_eq!(line.width, opts.accent_width);
        } else {
            assert_eq!(line.color, theme.neutral_line);
            assert_eq!(line.width, opts.neutral_width);
        }
    }
    // Drawn last, on top of the neutral lines.
    assert_eq!(scene.series().last().map(|s| s.group), Some(Group::Latinx));
}

#[test]
fn no_highlight_draws_everything_neutral() {
    let mut v = view();
    v.render(None);
    assert!(v.scene().highlighted().is_empty());
    assert_eq!(v.scene().series().count(), 4);
    assert!(v.scene().series().all(|s| s.color == Theme::light().neutral_line));
}

#[test]
fn step_mapping() {
    assert_eq!(Step::Intro.highlight(), None);
    assert_eq!(Step::National.highlight(), Some(Group::Black));
    assert_eq!(Step::Insights.highlight(), Some(Group::White));
    assert_eq!(Step::Policy.highlight(), Some(Group::Latinx));
}

#[test]
fn points_land_inside_the_plot() {
    let mut v = view();
    v.render(None);
    let white = v.scene().series_for(Group::White).unwrap();
    let pts: Vec<(f32, f32)> = white.segments.concat();
    assert_eq!(pts.len(), 4);
    // First year at the left edge, last year at the right edge.
    assert_eq!(pts[0].0, 60.0);
    assert_eq!(pts[3].0, 460.0);
    // White 2019 is the largest value in the data set: top of the plot.
    assert_eq!(pts[3].1, 40.0);
    for (x, y) in pts {
        assert!((60.0..=460.0).contains(&x) && (40.0..=360.0).contains(&y));
    }
}

#[test]
fn nulls_break_lines_instead_of_interpolating() {
    let mut v = view();
    v.render(None);
    // Asian: 2010, (2013 missing), 2016, (2019 null)
    let asian = v.scene().series_for(Group::Asian).unwrap();
    assert_eq!(asian.segments.len(), 2);
    assert_eq!(asian.point_count(), 2);
}

#[test]
fn axes_use_year_and_grouped_labels() {
    let mut v = view();
    v.render(None);
    let years: Vec<&str> = v.scene().labels("axis-x").collect();
    assert_eq!(years, vec!["2010", "2012", "2014", "2016", "2018"]);
    let values: Vec<&str> = v.scene().labels("axis-y").collect();
    assert_eq!(values.first(), Some(&"0"));
    assert_eq!(values.last(), Some(&"200,000"));
    assert_eq!(v.scene().rules("domain").count(), 2);
}

#[test]
fn labels_can_be_turned_off() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let mut v = ChartView::with_records(load_wide(FIXTURE).unwrap(), opts);
    v.render(None);
    assert_eq!(v.scene().labels("axis-x").count(), 0);
    assert!(v.scene().rules("tick").count() > 0);
}

#[test]
fn each_render_replaces_the_whole_scene() {
    let mut v = view();
    v.render(Step::National.highlight());
    let first_len = v.scene().elements.len();
    v.render(Step::Insights.highlight());
    assert_eq!(v.scene().elements.len(), first_len);
    assert_eq!(v.scene().highlighted(), vec![Group::White]);
    assert_eq!(v.highlight(), Some(Group::White));
}

#[test]
fn empty_dataset_render_is_a_no_op() {
    let mut v = ChartView::new(RenderOptions::default());
    assert_eq!(v.render(Some(Group::Black)), RenderStatus::Empty);
    assert!(v.scene().is_blank());
    assert_eq!(v.highlight(), None);
    assert!(v.ensure_data().is_err());

    let mut v = ChartView::with_records(load_wide("[]").unwrap(), RenderOptions::default());
    assert_eq!(v.render(None), RenderStatus::Empty);
    assert!(v.scene().is_blank());
}

#[test]
fn replace_data_takes_effect_on_next_render() {
    let mut v = view();
    v.render(None);
    let single = vec![WideRecord { black: Some(10.0), ..WideRecord::empty(2007) }];
    v.replace_data(single.clone());
    assert_eq!(v.records(), single.as_slice());
    // Scene is untouched until the next render.
    assert_eq!(v.scene().series_for(Group::White).unwrap().point_count(), 4);

    v.render(None);
    let black = v.scene().series_for(Group::Black).unwrap();
    // One year: x collapses to the middle of the plot; 10 is the max: top of the plot.
    assert_eq!(black.segments, vec![vec![(260.0, 40.0)]]);
    assert_eq!(v.scene().series_for(Group::White).unwrap().point_count(), 0);
}

#[test]
fn svg_marks_the_highlighted_path() {
    let mut v = view();
    v.render(Step::National.highlight());
    let svg = v.scene().to_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"500\" height=\"400\""));
    assert!(svg.contains("class=\"line highlighted\" data-group=\"Black\" fill=\"none\" stroke=\"#e4572e\" stroke-width=\"4\""));
    assert_eq!(svg.matches("class=\"line highlighted\"").count(), 1);
    assert_eq!(svg.matches("<path ").count(), 4);
}
