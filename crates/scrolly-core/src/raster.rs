// File: crates/scrolly-core/src/raster.rs
// Summary: Headless PNG rendering of a scene using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::error::{Error, Result};
use crate::scene::{Anchor, Element, Label, Rule, Scene, SeriesLine};

impl Scene {
    /// Rasterize into an in-memory PNG.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((self.width, self.height))
            .ok_or(Error::Raster("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(self.background);

        for el in &self.elements {
            match el {
                Element::Rule(r) => draw_rule(canvas, r),
                Element::Series(s) => draw_series(canvas, s),
                Element::Label(l) => draw_label(canvas, l),
            }
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(Error::Raster("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Rasterize and write a PNG file, creating parent directories.
    pub fn render_to_png(&self, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_color(color);
    paint
}

fn draw_rule(canvas: &skia::Canvas, r: &Rule) {
    let paint = stroke_paint(r.color, r.width);
    canvas.draw_line(r.from, r.to, &paint);
}

fn draw_series(canvas: &skia::Canvas, s: &SeriesLine) {
    let stroke = stroke_paint(s.color, s.width);
    for seg in &s.segments {
        match seg.as_slice() {
            [] => {}
            [only] => {
                // A lone point has no length; show it as a dot of the stroke width.
                let mut dot = skia::Paint::default();
                dot.set_anti_alias(true);
                dot.set_color(s.color);
                canvas.draw_circle(*only, s.width * 0.5, &dot);
            }
            [first, rest @ ..] => {
                let mut builder = skia::PathBuilder::new();
                builder.move_to(*first);
                for &p in rest {
                    builder.line_to(p);
                }
                let path = builder.detach();
                canvas.draw_path(&path, &stroke);
            }
        }
    }
}

fn draw_label(canvas: &skia::Canvas, l: &Label) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(l.color);

    let mut font = skia::Font::default();
    font.set_size(l.size);
    let (width, _) = font.measure_str(&l.text, Some(&paint));
    let x = match l.anchor {
        Anchor::Start => l.at.0,
        Anchor::Middle => l.at.0 - width * 0.5,
        Anchor::End => l.at.0 - width,
    };
    canvas.draw_str(&l.text, (x, l.at.1), &font, &paint);
}
