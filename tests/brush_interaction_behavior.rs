//! Behavior-driven tests for brushing the overview chart
//!
//! These tests drive the chart the way a pointer would: pixel drags on the
//! overview axis, including drags that spill past either end.

use focusline_core::{
    read_csv, BrushGesture, ChartConfig, ChartContext, Selection, UtcDateTime, ValidationError,
};

fn month(input: &str) -> UtcDateTime {
    UtcDateTime::parse_month_year(input).expect("valid month")
}

/// Five months over a 400px-wide plot.
fn chart() -> ChartContext {
    let dataset = read_csv(
        "date,price\nJan 2013,10\nFeb 2013,20\nMar 2013,30\nApr 2013,40\nMay 2013,50\n".as_bytes(),
    )
    .expect("dataset");
    let config = ChartConfig {
        width: 450.0,
        ..ChartConfig::default()
    };
    ChartContext::new(dataset, config).expect("chart")
}

// =============================================================================
// Pixel Drags
// =============================================================================

#[test]
fn dragging_the_full_axis_selects_the_full_overview() {
    let mut chart = chart();
    let width = chart.config().plot_width();

    let update = chart
        .handle(BrushGesture::Drag {
            start_px: 0.0,
            end_px: width,
        })
        .expect("drag");

    let interval = update.selection.as_interval().expect("active selection");
    assert_eq!(interval.min(), month("Jan 2013"));
    assert_eq!(interval.max(), month("May 2013"));
    assert_eq!(update.focus, *chart.overview());
}

#[test]
fn drag_spilling_past_the_axis_is_clamped() {
    // Given: A drag starting left of the axis and ending past its right edge
    let mut chart = chart();

    // When: It is applied
    let update = chart
        .handle(BrushGesture::Drag {
            start_px: -250.0,
            end_px: 10_000.0,
        })
        .expect("drag");

    // Then: The focus never leaves the overview bounds
    assert!(chart.overview().contains_domain(&update.focus));
    assert_eq!(update.focus, *chart.overview());
}

#[test]
fn right_to_left_drag_selects_the_same_window() {
    let mut forward = chart();
    let mut backward = chart();

    let a = forward
        .handle(BrushGesture::Drag {
            start_px: 100.0,
            end_px: 300.0,
        })
        .expect("drag");
    let b = backward
        .handle(BrushGesture::Drag {
            start_px: 300.0,
            end_px: 100.0,
        })
        .expect("drag");

    assert_eq!(a.focus, b.focus);
    assert!(a.focus.min() < a.focus.max());
}

#[test]
fn zero_width_drag_clears_an_active_brush() {
    let mut chart = chart();
    chart
        .handle(BrushGesture::Drag {
            start_px: 100.0,
            end_px: 300.0,
        })
        .expect("drag");
    assert!(!chart.brush().is_empty());

    let update = chart
        .handle(BrushGesture::Drag {
            start_px: 120.0,
            end_px: 120.0,
        })
        .expect("drag");

    assert_eq!(update.selection, Selection::Empty);
    assert_eq!(update.focus, *chart.overview());
    assert_eq!(chart.focus_x().domain(), chart.overview());
}

#[test]
fn explicit_clear_behaves_like_zero_width_drag() {
    let mut chart = chart();
    chart
        .handle("Feb 2013..Apr 2013".parse().expect("gesture"))
        .expect("select");

    let update = chart.handle(BrushGesture::Clear).expect("clear");

    assert!(update.selection.is_empty());
    assert_eq!(update.focus, *chart.overview());
}

// =============================================================================
// Domain-Unit Selections
// =============================================================================

#[test]
fn month_selection_outside_the_data_is_clamped_to_the_overview() {
    let mut chart = chart();

    let update = chart
        .handle("Nov 2012..Mar 2013".parse().expect("gesture"))
        .expect("select");

    assert_eq!(update.focus.min(), month("Jan 2013"));
    assert_eq!(update.focus.max(), month("Mar 2013"));
}

#[test]
fn focus_frame_spreads_the_window_across_the_plot() {
    let mut chart = chart();
    chart
        .handle("Feb 2013..Apr 2013".parse().expect("gesture"))
        .expect("select");

    let xs = chart
        .focus_frame()
        .points
        .iter()
        .map(|point| point.x)
        .collect::<Vec<_>>();

    assert_eq!(xs.len(), 3);
    assert_eq!(xs[0], 0.0);
    assert_eq!(xs[2], 400.0);
    assert!(xs[1] > 0.0 && xs[1] < 400.0);
}

#[test]
fn garbage_gesture_text_is_a_validation_error() {
    let err = "zoom in".parse::<BrushGesture>().expect_err("must fail");
    assert!(matches!(err, ValidationError::InvalidGesture { .. }));
}
