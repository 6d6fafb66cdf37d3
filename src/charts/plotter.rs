//! Chart Plotter Module
//! Builds line series from samples and draws them with egui_plot.

use crate::data::{ParseResult, Sample};
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use serde::{Deserialize, Serialize};

pub const CHART_TITLE: &str = "Data Curves";

/// Padding added around the data on value axes
const AXIS_PADDING: f64 = 0.5;

/// Series colors, in series order
pub const PALETTE: [Color32; 2] = [
    Color32::from_rgb(52, 152, 219), // Blue
    Color32::from_rgb(231, 76, 60),  // Red
];

/// What goes on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotConvention {
    /// Row index on X; one line for the X column and one for the Y column
    #[default]
    IndexVsColumns,
    /// A single line of (x, y) pairs
    XAgainstY,
}

/// A named polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub points: Vec<[f64; 2]>,
}

/// Inclusive axis ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRanges {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl AxisRanges {
    /// View after a clear
    pub const UNIT: AxisRanges = AxisRanges {
        x: (0.0, 1.0),
        y: (0.0, 1.0),
    };
}

/// Split samples into plot series under `convention`.
pub fn series_for(samples: &[Sample], convention: PlotConvention) -> Vec<Series> {
    match convention {
        PlotConvention::IndexVsColumns => vec![
            Series {
                name: "X column",
                points: samples
                    .iter()
                    .enumerate()
                    .map(|(i, s)| [i as f64, s.x])
                    .collect(),
            },
            Series {
                name: "Y column",
                points: samples
                    .iter()
                    .enumerate()
                    .map(|(i, s)| [i as f64, s.y])
                    .collect(),
            },
        ],
        PlotConvention::XAgainstY => vec![Series {
            name: "Y vs X",
            points: samples.iter().map(|s| [s.x, s.y]).collect(),
        }],
    }
}

/// Axis ranges covering the data, `None` when there is nothing to plot.
pub fn axis_ranges(result: &ParseResult, convention: PlotConvention) -> Option<AxisRanges> {
    let (sx, sy) = (result.stats_x?, result.stats_y?);
    let ranges = match convention {
        PlotConvention::IndexVsColumns => AxisRanges {
            x: (0.0, (result.len().saturating_sub(1) as f64).max(1.0)),
            y: (
                sx.min.min(sy.min) - AXIS_PADDING,
                sx.max.max(sy.max) + AXIS_PADDING,
            ),
        },
        PlotConvention::XAgainstY => AxisRanges {
            x: (sx.min - AXIS_PADDING, sx.max + AXIS_PADDING),
            y: (sy.min - AXIS_PADDING, sy.max + AXIS_PADDING),
        },
    };
    Some(ranges)
}

pub fn axis_labels(convention: PlotConvention) -> (&'static str, &'static str) {
    match convention {
        PlotConvention::IndexVsColumns => ("Row", "Value"),
        PlotConvention::XAgainstY => ("X", "Y"),
    }
}

/// Draws the interactive chart.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn series_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Draw the line chart. `reset` drops any user zoom/pan and refits the view.
    pub fn draw_line_chart(
        ui: &mut egui::Ui,
        result: Option<&ParseResult>,
        convention: PlotConvention,
        reset: bool,
    ) {
        let ranges = result
            .and_then(|r| axis_ranges(r, convention))
            .unwrap_or(AxisRanges::UNIT);
        let series = result
            .map(|r| series_for(&r.samples, convention))
            .unwrap_or_default();
        let (x_label, y_label) = axis_labels(convention);

        let mut plot = Plot::new("series_chart")
            .legend(Legend::default())
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .include_x(ranges.x.0)
            .include_x(ranges.x.1)
            .include_y(ranges.y.0)
            .include_y(ranges.y.1);
        if reset {
            plot = plot.reset();
        }

        plot.show(ui, |plot_ui| {
            for (i, s) in series.into_iter().enumerate() {
                plot_ui.line(
                    Line::new(PlotPoints::from(s.points))
                        .color(Self::series_color(i))
                        .width(1.5)
                        .name(s.name),
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CsvSeriesProcessor;

    fn parse(text: &str) -> ParseResult {
        CsvSeriesProcessor::parse(text.lines())
    }

    #[test]
    fn test_index_series() {
        let result = parse("1,2\n3,4\n5,6");
        let series = series_for(&result.samples, PlotConvention::IndexVsColumns);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].points, vec![[0.0, 1.0], [1.0, 3.0], [2.0, 5.0]]);
        assert_eq!(series[1].points, vec![[0.0, 2.0], [1.0, 4.0], [2.0, 6.0]]);
    }

    #[test]
    fn test_xy_series() {
        let result = parse("1,2\n3,4");
        let series = series_for(&result.samples, PlotConvention::XAgainstY);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points, vec![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_index_axis_ranges() {
        let result = parse("1,2\n3,4\n5,6");
        let ranges = axis_ranges(&result, PlotConvention::IndexVsColumns).unwrap();
        assert_eq!(ranges.x, (0.0, 2.0));
        assert_eq!(ranges.y, (0.5, 6.5));
    }

    #[test]
    fn test_single_row_keeps_unit_width() {
        let result = parse("4,-1");
        let ranges = axis_ranges(&result, PlotConvention::IndexVsColumns).unwrap();
        assert_eq!(ranges.x, (0.0, 1.0));
        assert_eq!(ranges.y, (-1.5, 4.5));
    }

    #[test]
    fn test_xy_axis_ranges() {
        let result = parse("1,20\n3,40");
        let ranges = axis_ranges(&result, PlotConvention::XAgainstY).unwrap();
        assert_eq!(ranges.x, (0.5, 3.5));
        assert_eq!(ranges.y, (19.5, 40.5));
    }

    #[test]
    fn test_empty_has_no_ranges() {
        let result = parse("");
        assert!(axis_ranges(&result, PlotConvention::IndexVsColumns).is_none());
        assert!(series_for(&result.samples, PlotConvention::IndexVsColumns)
            .iter()
            .all(|s| s.points.is_empty()));
    }
}
