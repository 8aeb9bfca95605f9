use std::fmt;

use super::frame::{Frame, FrameError};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A size with no drawable area. Nothing can be aspect-fitted into or out of it.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Whole-pixel backing store dimensions. Fractions are dropped and
    /// negative or NaN sides become zero.
    pub fn pixel_dims(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Rect spanning the whole of `size`, anchored at the origin.
    pub fn filling(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

/// CSS color syntax, as accepted by canvas fill styles and gradient stops.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: [ColorStop; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
}

/// One fill pass over a rectangle of the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    pub paint: Paint,
    pub rect: Rect,
}

/// A resizable 2D drawing target the background is painted onto.
#[allow(async_fn_in_trait)]
pub trait Surface {
    type Image;

    /// Current pixel dimensions.
    fn size(&self) -> Size;
    fn resize(&self, size: Size);
    fn clear(&self);
    fn fill(&self, op: &DrawOp);
    fn draw_image(&self, image: &Self::Image, rect: Rect);
    fn image_size(image: &Self::Image) -> Size;

    /// Turn a frame payload into something drawable.
    async fn decode(&self, frame: &Frame) -> Result<Self::Image, FrameError>;
}

/// Placement that scales `image` to fully cover `surface` while preserving its
/// aspect ratio, centering whatever overflows on the longer axis.
///
/// Returns `None` when either side has no area.
pub fn cover_rect(surface: Size, image: Size) -> Option<Rect> {
    if surface.is_empty() || image.is_empty() {
        return None;
    }
    let surface_aspect = surface.width / surface.height;
    let image_aspect = image.width / image.height;

    let rect = if surface_aspect > image_aspect {
        let height = surface.width / image_aspect;
        Rect {
            x: 0.0,
            y: (surface.height - height) / 2.0,
            width: surface.width,
            height,
        }
    } else {
        let width = surface.height * image_aspect;
        Rect {
            x: (surface.width - width) / 2.0,
            y: 0.0,
            width,
            height: surface.height,
        }
    };
    Some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_dims() {
        assert_eq!(Size::new(1280.6, 720.2).pixel_dims(), (1280, 720));
        assert_eq!(Size::new(-4.0, f64::NAN).pixel_dims(), (0, 0));
        assert_eq!(Size::default().pixel_dims(), (0, 0));
    }

    #[test]
    fn test_cover_wide_surface_crops_vertically() {
        // 16:9 surface, 1:1 image
        let rect = cover_rect(Size::new(1600.0, 900.0), Size::new(100.0, 100.0)).unwrap();
        assert_eq!(rect.width, 1600.0);
        assert_eq!(rect.height, 1600.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, -350.0);
    }

    #[test]
    fn test_cover_tall_surface_crops_horizontally() {
        let rect = cover_rect(Size::new(400.0, 800.0), Size::new(200.0, 100.0)).unwrap();
        assert_eq!(rect.height, 800.0);
        assert_eq!(rect.width, 1600.0);
        assert_eq!(rect.x, -600.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn test_cover_matching_aspect_fills_exactly() {
        let rect = cover_rect(Size::new(800.0, 400.0), Size::new(400.0, 200.0)).unwrap();
        assert_eq!(rect, Rect::filling(Size::new(800.0, 400.0)));
    }

    #[test]
    fn test_cover_always_covers_surface() {
        let surfaces = [(300.0, 150.0), (150.0, 300.0), (1920.0, 1080.0), (1.0, 1.0)];
        let images = [(512.0, 512.0), (1024.0, 256.0), (90.0, 160.0)];
        for (sw, sh) in surfaces {
            for (iw, ih) in images {
                let rect = cover_rect(Size::new(sw, sh), Size::new(iw, ih)).unwrap();
                assert!(rect.x <= 0.0 && rect.y <= 0.0);
                assert!(rect.x + rect.width >= sw - 1e-9);
                assert!(rect.y + rect.height >= sh - 1e-9);
                let drawn_aspect = rect.width / rect.height;
                assert!((drawn_aspect - iw / ih).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_cover_rejects_empty_sizes() {
        assert!(cover_rect(Size::new(0.0, 100.0), Size::new(10.0, 10.0)).is_none());
        assert!(cover_rect(Size::new(100.0, 100.0), Size::new(10.0, 0.0)).is_none());
        assert!(cover_rect(Size::default(), Size::default()).is_none());
    }

    #[test]
    fn test_rgba_css() {
        assert_eq!(Rgba::new(0, 255, 209, 0.3).to_string(), "rgba(0, 255, 209, 0.3)");
        assert_eq!(Rgba::BLACK.to_string(), "rgba(0, 0, 0, 1)");
    }
}
