// File: crates/dayline-core/src/chart.rs
// Summary: Immutable chart state and the Skia rendering pipeline (PNG/SVG/RGBA).

use anyhow::Result;
use skia_safe as skia;

use crate::error::ChartError;
use crate::options::ChartOptions;
use crate::palette::Palette;
use crate::scale::{TimeScale, ValueScale};
use crate::series::{Domains, Series};
use crate::theme::Theme;
use crate::ticks::{time_tick_label, time_ticks, value_tick_label, value_ticks};
use crate::tsv;
use crate::types::{HEIGHT, WIDTH};

const Y_TICK_COUNT: usize = 6;
const X_TICK_SPACING_PX: i32 = 80;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

/// Everything a render needs, computed once per load and never mutated.
///
/// Two states exist: empty (`domains` is `None` or no series survived the
/// one-point filter) and ready. Rendering is a pure projection of this value;
/// a new load replaces the whole state rather than updating it.
pub struct ChartState {
    pub options: ChartOptions,
    pub series: Vec<Series>,
    pub domains: Option<Domains>,
}

impl ChartState {
    /// The state rendered when no data has loaded (or the load failed).
    pub fn empty(options: ChartOptions) -> Self {
        Self { options, series: Vec::new(), domains: None }
    }

    /// Parse a day file's text into a ready (or empty) state.
    pub fn from_tsv(options: ChartOptions, text: &str) -> Result<Self, ChartError> {
        let rows = tsv::parse_rows(text)?;
        let series = tsv::build_series(&rows, &options.categories, options.scale)?;
        let timestamps: Vec<_> = rows.iter().map(|r| r.timestamp).collect();
        let domains = Domains::compute(&timestamps, &series);
        Ok(Self { options, series, domains })
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty() || self.domains.is_none()
    }

    /// Render to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw_scene(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to an RGBA8 buffer; returns (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw_scene(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = opts.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * opts.height as usize];
        let ok = surface
            .canvas()
            .read_pixels(&info, &mut pixels, row_bytes, (0, 0));
        anyhow::ensure!(ok, "RGBA readback failed");
        Ok((pixels, opts.width, opts.height, row_bytes))
    }

    /// Render to an SVG file.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let canvas = skia::svg::Canvas::new(
            skia::Rect::from_wh(opts.width as f32, opts.height as f32),
            None,
        );
        self.draw_scene(&canvas, opts);
        let data = canvas.end();
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, data.as_bytes())?;
        Ok(())
    }

    // Full clear-and-redraw: clear to the background, then nothing further in
    // the empty state; axes, per-series paths, and end labels otherwise.
    fn draw_scene(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let Some(domains) = &self.domains else { return };
        if self.series.is_empty() {
            return;
        }

        let m = &self.options.margin;
        let plot_w = (opts.width - m.hsum() as i32).max(1);
        let plot_h = (opts.height - m.vsum() as i32).max(1);
        let left = m.left as f32;
        let top = m.top as f32;
        let right = left + plot_w as f32;
        let bottom = top + plot_h as f32;

        let x_scale = TimeScale::new(domains.x, (left, right));
        let y_scale = ValueScale::new(domains.y, (top, bottom));

        let mut grid_paint = skia::Paint::default();
        grid_paint.set_color(theme.grid);
        grid_paint.set_anti_alias(true);
        grid_paint.set_stroke_width(1.0);

        let mut tick_paint = skia::Paint::default();
        tick_paint.set_color(theme.tick);
        tick_paint.set_anti_alias(true);
        tick_paint.set_stroke_width(1.0);

        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(theme.axis_line);
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.5);

        let mut label_paint = skia::Paint::default();
        label_paint.set_color(theme.axis_label);
        label_paint.set_anti_alias(true);

        let mut font = skia::Font::default();
        font.set_size(12.0);

        // X axis: time ticks along the bottom, drawn as grid lines spanning
        // the plot height.
        let x_tick_count = (plot_w / X_TICK_SPACING_PX).max(2) as usize;
        for t in time_ticks(domains.x, x_tick_count) {
            let x = x_scale.to_px(t);
            canvas.draw_line((x, top), (x, bottom), &grid_paint);
            if opts.draw_labels {
                let label = time_tick_label(&t);
                let (w, _) = font.measure_str(&label, Some(&label_paint));
                canvas.draw_str(&label, (x - w * 0.5, bottom + 16.0), &font, &label_paint);
            }
        }
        canvas.draw_line((left, bottom), (right, bottom), &axis_paint);

        // Y axis: linear value ticks on the left.
        canvas.draw_line((left, top), (left, bottom), &axis_paint);
        for v in value_ticks(domains.y, Y_TICK_COUNT) {
            let y = y_scale.to_px(v);
            canvas.draw_line((left - 6.0, y), (left, y), &tick_paint);
            if opts.draw_labels {
                let label = value_tick_label(v);
                let (w, _) = font.measure_str(&label, Some(&label_paint));
                canvas.draw_str(&label, (left - 9.0 - w, y + 4.0), &font, &label_paint);
            }
        }

        // Series paths, colored by category position, plus the series name
        // just right of its last point.
        let palette = Palette::default();
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.5);

        for s in &self.series {
            let Some((first, rest)) = s.points.split_first() else { continue };
            stroke.set_color(palette.color_for(&self.options.categories, &s.name));

            let mut builder = skia::PathBuilder::new();
            builder.move_to((x_scale.to_px(first.0), y_scale.to_px(first.1)));
            for &(t, v) in rest {
                builder.line_to((x_scale.to_px(t), y_scale.to_px(v)));
            }
            let path = builder.detach();
            canvas.draw_path(&path, &stroke);

            if opts.draw_labels {
                if let Some((t, v)) = s.last_point() {
                    canvas.draw_str(
                        &s.name,
                        (x_scale.to_px(t) + 3.0, y_scale.to_px(v) + 4.0),
                        &font,
                        &label_paint,
                    );
                }
            }
        }

        // Title sits in the top margin.
        if opts.draw_labels && !self.options.title.is_empty() {
            let mut title_font = skia::Font::default();
            title_font.set_size(16.0);
            let (w, _) = title_font.measure_str(&self.options.title, Some(&label_paint));
            let x = left + (plot_w as f32 - w) * 0.5;
            canvas.draw_str(&self.options.title, (x, top - 14.0), &title_font, &label_paint);
        }
    }
}
