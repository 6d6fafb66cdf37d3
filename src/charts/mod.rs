//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::{ChartPlotter, PlotConvention, CHART_TITLE};
pub use renderer::StaticChartRenderer;
