//! Drawing of match overlays onto a photo.
//!
//! [`Annotator`] walks the match list in order and issues one rectangle and
//! one label per match against a [`Surface`]. The production surface is
//! [`image::RgbImage`]; any other implementation (e.g. a recorder in tests)
//! sees exactly the same sequence of draw calls.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::geometry::{map_box, PixelRect};
use crate::matching::MatchRecord;

/// Label drawn when a match carries no external label.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Pixel width of one bitmap glyph.
const GLYPH_SIZE: i64 = 8;

/// Fixed look of every overlay, independent of image size.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationStyle {
    pub color: Rgb<u8>,
    /// Rectangle outline thickness in pixels, drawn inward.
    pub stroke_width: u32,
    /// Distance between the label origin and the rectangle's top edge.
    pub label_offset: f64,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            color: Rgb([255, 0, 0]),
            stroke_width: 2,
            label_offset: 10.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// Something overlays can be drawn onto.
///
/// Coordinates may lie outside the surface; implementations clip silently.
pub trait Surface {
    fn dimensions(&self) -> (u32, u32);

    fn draw_rect(&mut self, rect: &PixelRect, style: &AnnotationStyle);

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_label(&mut self, x: f64, y: f64, text: &str, style: &AnnotationStyle);
}

impl Surface for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbImage::dimensions(self)
    }

    fn draw_rect(&mut self, rect: &PixelRect, style: &AnnotationStyle) {
        for i in 0..style.stroke_width {
            let inset = i as f32;
            let left = rect.left as f32 + inset;
            let top = rect.top as f32 + inset;
            let right = rect.right as f32 - inset;
            let bottom = rect.bottom as f32 - inset;

            draw_line_segment_mut(self, (left, top), (right, top), style.color);
            draw_line_segment_mut(self, (right, top), (right, bottom), style.color);
            draw_line_segment_mut(self, (right, bottom), (left, bottom), style.color);
            draw_line_segment_mut(self, (left, bottom), (left, top), style.color);
        }
    }

    fn draw_label(&mut self, x: f64, y: f64, text: &str, style: &AnnotationStyle) {
        let mut pen_x = x.round() as i64;
        let pen_y = y.round() as i64;

        for ch in text.chars() {
            let glyph = BASIC_FONTS
                .get(ch)
                .or_else(|| BASIC_FONTS.get('?'))
                .unwrap_or([0; 8]);

            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..8u8 {
                    if (*bits >> col) & 1 == 1 {
                        put_clipped(self, pen_x + i64::from(col), pen_y + row as i64, style.color);
                    }
                }
            }
            pen_x += GLYPH_SIZE;
        }
    }
}

fn put_clipped(image: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if x < image.width() && y < image.height() {
        image.put_pixel(x, y, color);
    }
}

// ---------------------------------------------------------------------------
// Annotator
// ---------------------------------------------------------------------------

/// Draws a box and a name label for every match.
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    style: AnnotationStyle,
}

impl Annotator {
    /// Draw every match onto `surface`, in the order received, and hand the
    /// same surface back.
    ///
    /// An empty match list leaves the surface untouched.
    pub fn annotate<'a, S: Surface>(&self, surface: &'a mut S, matches: &[MatchRecord]) -> &'a mut S {
        let (width, height) = surface.dimensions();

        for record in matches {
            let rect = map_box(&record.bounding_box, width, height);
            surface.draw_rect(&rect, &self.style);

            let label = record.external_label.as_deref().unwrap_or(UNKNOWN_LABEL);
            surface.draw_label(rect.left, rect.top - self.style.label_offset, label, &self.style);
        }

        surface
    }
}
