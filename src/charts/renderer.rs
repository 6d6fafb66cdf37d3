//! Static Chart Renderer
//! Draws the series chart off-screen with plotters and writes it as a raster
//! image. The encoding is picked from the file extension.

use crate::charts::plotter::{axis_labels, axis_ranges, series_for, AxisRanges, CHART_TITLE};
use crate::charts::PlotConvention;
use crate::data::ParseResult;
use crate::error::{Result, ViewerError};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use std::path::Path;

// Same order as the interactive palette
const SERIES_COLORS: [RGBColor; 2] = [RGBColor(52, 152, 219), RGBColor(231, 76, 60)];

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the chart and save it to `path` (`.png`, `.jpg`/`.jpeg` or `.bmp`).
    pub fn export_image(
        path: &Path,
        result: &ParseResult,
        convention: PlotConvention,
        width: u32,
        height: u32,
    ) -> Result<()> {
        // Check the extension before spending time on drawing
        let format = Self::image_format(path)?;
        let pixels = Self::render_rgb(result, convention, width, height)?;

        let img = RgbImage::from_raw(width, height, pixels)
            .ok_or_else(|| ViewerError::Render("pixel buffer size mismatch".to_string()))?;
        img.save_with_format(path, format)?;
        Ok(())
    }

    pub fn image_format(path: &Path) -> Result<ImageFormat> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "bmp" => Ok(ImageFormat::Bmp),
            _ => Err(ViewerError::UnsupportedFormat { extension }),
        }
    }

    /// Render into a packed RGB8 buffer of `width * height * 3` bytes.
    pub fn render_rgb(
        result: &ParseResult,
        convention: PlotConvention,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        let ranges = axis_ranges(result, convention).unwrap_or(AxisRanges::UNIT);
        let (x_label, y_label) = axis_labels(convention);

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(CHART_TITLE, ("sans-serif", 20))
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(55)
                .build_cartesian_2d(ranges.x.0..ranges.x.1, ranges.y.0..ranges.y.1)
                .map_err(render_error)?;

            chart
                .configure_mesh()
                .x_desc(x_label)
                .y_desc(y_label)
                .draw()
                .map_err(render_error)?;

            for (i, series) in series_for(&result.samples, convention)
                .into_iter()
                .enumerate()
            {
                let color = SERIES_COLORS[i % SERIES_COLORS.len()];
                chart
                    .draw_series(LineSeries::new(
                        series.points.into_iter().map(|[x, y]| (x, y)),
                        color.stroke_width(2),
                    ))
                    .map_err(render_error)?
                    .label(series.name)
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });
            }

            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(render_error)?;

            root.present().map_err(render_error)?;
        }

        Ok(buffer)
    }
}

fn render_error(e: impl std::fmt::Display) -> ViewerError {
    ViewerError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CsvSeriesProcessor;

    fn sample_data() -> ParseResult {
        CsvSeriesProcessor::parse("1,2\n3,5\n2,-1\n4,0.5".lines())
    }

    fn assert_written(path: &Path, format: ImageFormat, width: u32, height: u32) {
        let bytes = std::fs::read(path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), format);
        let img = image::open(path).unwrap();
        assert_eq!((img.width(), img.height()), (width, height));
    }

    #[test]
    fn test_image_format_by_extension() {
        let format = |name: &str| StaticChartRenderer::image_format(Path::new(name));
        assert_eq!(format("chart.png").unwrap(), ImageFormat::Png);
        assert_eq!(format("chart.JPG").unwrap(), ImageFormat::Jpeg);
        assert_eq!(format("chart.jpeg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(format("dir/chart.bmp").unwrap(), ImageFormat::Bmp);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = StaticChartRenderer::image_format(Path::new("chart.gif")).unwrap_err();
        match err {
            ViewerError::UnsupportedFormat { extension } => assert_eq!(extension, "gif"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = StaticChartRenderer::image_format(Path::new("chart")).unwrap_err();
        assert!(matches!(err, ViewerError::UnsupportedFormat { extension } if extension.is_empty()));
    }

    #[test]
    fn test_export_rejects_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.tiff");
        let result = ParseResult::default();
        assert!(StaticChartRenderer::export_image(
            &path,
            &result,
            PlotConvention::IndexVsColumns,
            320,
            240
        )
        .is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_export_png_and_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let result = sample_data();

        let png = dir.path().join("chart.png");
        StaticChartRenderer::export_image(&png, &result, PlotConvention::IndexVsColumns, 320, 240)
            .unwrap();
        assert_written(&png, ImageFormat::Png, 320, 240);

        let jpg = dir.path().join("chart.jpg");
        StaticChartRenderer::export_image(&jpg, &result, PlotConvention::XAgainstY, 400, 300)
            .unwrap();
        assert_written(&jpg, ImageFormat::Jpeg, 400, 300);
    }

    #[test]
    fn test_render_draws_on_white_background() {
        let pixels =
            StaticChartRenderer::render_rgb(&sample_data(), PlotConvention::IndexVsColumns, 200, 150)
                .unwrap();
        assert_eq!(pixels.len(), 200 * 150 * 3);
        // Top-left corner is margin, the chart body has colored strokes
        assert_eq!(&pixels[..3], &[255, 255, 255]);
        assert!(pixels.chunks(3).any(|px| px != [255, 255, 255]));
    }
}
