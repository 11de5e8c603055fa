//! Normalized-to-pixel bounding box mapping.

use serde::Serialize;

use crate::matching::NormalizedBox;

/// Absolute pixel rectangle on a specific image.
///
/// Coordinates are deliberately left unclamped and may fall outside the
/// image; clipping happens only when pixels are written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PixelRect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Map a normalized box onto an image of the given dimensions.
///
/// The mapping is linear and exact:
///
/// ```
/// use rollcall_core::geometry::map_box;
/// use rollcall_core::matching::NormalizedBox;
///
/// let rect = map_box(&NormalizedBox::new(0.25, 0.1, 0.5, 0.3), 400, 200);
/// assert_eq!((rect.left, rect.top, rect.right, rect.bottom), (100.0, 20.0, 300.0, 80.0));
/// ```
pub fn map_box(bbox: &NormalizedBox, image_width: u32, image_height: u32) -> PixelRect {
    let w = f64::from(image_width);
    let h = f64::from(image_height);

    let left = bbox.left * w;
    let top = bbox.top * h;

    PixelRect {
        left,
        top,
        right: left + bbox.width * w,
        bottom: top + bbox.height * h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_reference_box() {
        let rect = map_box(&NormalizedBox::new(0.25, 0.1, 0.5, 0.3), 400, 200);
        assert_eq!(
            rect,
            PixelRect {
                left: 100.0,
                top: 20.0,
                right: 300.0,
                bottom: 80.0,
            }
        );
    }

    #[test]
    fn full_frame_box_covers_image() {
        let rect = map_box(&NormalizedBox::new(0.0, 0.0, 1.0, 1.0), 640, 480);
        assert_eq!(rect.width(), 640.0);
        assert_eq!(rect.height(), 480.0);
    }

    #[test]
    fn edge_box_is_not_clamped() {
        let rect = map_box(&NormalizedBox::new(-0.1, 0.9, 0.3, 0.2), 100, 100);
        assert!(rect.left < 0.0);
        assert!(rect.bottom > 100.0);
        assert!((rect.left - -10.0).abs() < 1e-9);
        assert!((rect.bottom - 110.0).abs() < 1e-9);
    }

    #[test]
    fn same_box_scales_with_image() {
        let bbox = NormalizedBox::new(0.5, 0.5, 0.25, 0.25);
        let small = map_box(&bbox, 100, 100);
        let large = map_box(&bbox, 1000, 1000);
        assert_eq!(large.left, small.left * 10.0);
        assert_eq!(large.width(), small.width() * 10.0);
    }
}
