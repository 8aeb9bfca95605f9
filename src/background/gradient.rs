use std::ops::RangeInclusive;

use super::surface::{ColorStop, DrawOp, LinearGradient, Paint, Point, Rect, Rgba, Size};

/// Every oscillating stop alpha stays inside this range.
pub const ALPHA_RANGE: RangeInclusive<f64> = 0.2..=0.5;

const TEAL: Rgba = Rgba::new(0, 255, 209, 1.0);
const BLUE: Rgba = Rgba::new(0, 85, 255, 1.0);
const CYAN: Rgba = Rgba::new(0, 255, 170, 1.0);
const DEEP: Rgba = Rgba::new(0, 100, 150, 0.2);

fn clamp_alpha(alpha: f64) -> f64 {
    alpha.clamp(*ALPHA_RANGE.start(), *ALPHA_RANGE.end())
}

/// Orbit a point around the center of one axis: `len/2 + wave * len/2`.
fn orbit(wave: f64, len: f64) -> f64 {
    wave * len * 0.5 + len * 0.5
}

/// The moving gradient used when no remote frame is available.
///
/// `t` is in seconds. Pure in `(t, size)`, so the same inputs always give the
/// same gradient.
pub fn fallback_gradient(t: f64, size: Size) -> LinearGradient {
    let Size { width, height } = size;

    let start = Point {
        x: orbit((t * 0.5).sin(), width),
        y: orbit((t * 0.3).cos(), height),
    };
    let end = Point {
        x: orbit((t * 0.4).cos(), width),
        y: orbit((t * 0.6).sin(), height),
    };

    let alpha1 = clamp_alpha(0.3 + 0.2 * (t * 0.8).sin());
    let alpha2 = clamp_alpha(0.2 + 0.3 * (t * 0.6).cos());
    let alpha3 = clamp_alpha(0.4 + 0.2 * (t * 1.2).sin());

    LinearGradient {
        start,
        end,
        stops: [
            ColorStop {
                offset: 0.0,
                color: TEAL.with_alpha(alpha1),
            },
            ColorStop {
                offset: 0.3,
                color: BLUE.with_alpha(alpha2),
            },
            ColorStop {
                offset: 0.7,
                color: CYAN.with_alpha(alpha3),
            },
            ColorStop {
                offset: 1.0,
                color: DEEP,
            },
        ],
    }
}

/// Draw instructions for one fallback cycle: an opaque black base, then the
/// gradient over the whole surface. The black pass keeps earlier frames from
/// showing through the translucent stops.
pub fn fallback_ops(t: f64, size: Size) -> [DrawOp; 2] {
    let rect = Rect::filling(size);
    [
        DrawOp {
            paint: Paint::Solid(Rgba::BLACK),
            rect,
        },
        DrawOp {
            paint: Paint::Linear(fallback_gradient(t, size)),
            rect,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: [(f64, f64); 4] = [(1920.0, 1080.0), (375.0, 812.0), (1.0, 1.0), (0.0, 0.0)];

    #[test]
    fn test_fallback_is_deterministic() {
        for (w, h) in SIZES {
            for step in 0..200 {
                let t = step as f64 * 0.137;
                let size = Size::new(w, h);
                assert_eq!(fallback_ops(t, size), fallback_ops(t, size));
            }
        }
    }

    #[test]
    fn test_fallback_changes_over_time() {
        let size = Size::new(800.0, 600.0);
        assert_ne!(fallback_gradient(0.0, size), fallback_gradient(1.0, size));
    }

    #[test]
    fn test_alphas_stay_in_range() {
        for step in 0..2000 {
            let t = step as f64 * 0.05;
            let gradient = fallback_gradient(t, Size::new(100.0, 100.0));
            for stop in &gradient.stops[..3] {
                assert!(
                    ALPHA_RANGE.contains(&stop.color.a),
                    "alpha {} out of range at t={t}",
                    stop.color.a
                );
            }
            assert_eq!(gradient.stops[3].color.a, 0.2);
        }
    }

    #[test]
    fn test_stop_layout_and_palette() {
        let gradient = fallback_gradient(3.0, Size::new(10.0, 10.0));
        let offsets = gradient.stops.map(|s| s.offset);
        assert_eq!(offsets, [0.0, 0.3, 0.7, 1.0]);
        let rgb = gradient.stops.map(|s| (s.color.r, s.color.g, s.color.b));
        assert_eq!(rgb, [(0, 255, 209), (0, 85, 255), (0, 255, 170), (0, 100, 150)]);
    }

    #[test]
    fn test_endpoints_stay_on_surface() {
        let (w, h) = (640.0, 360.0);
        for step in 0..500 {
            let t = step as f64 * 0.21;
            let gradient = fallback_gradient(t, Size::new(w, h));
            for p in [gradient.start, gradient.end] {
                assert!((0.0..=w).contains(&p.x));
                assert!((0.0..=h).contains(&p.y));
            }
        }
    }

    #[test]
    fn test_endpoints_at_time_zero() {
        // sin(0) = 0 and cos(0) = 1
        let gradient = fallback_gradient(0.0, Size::new(200.0, 100.0));
        assert_eq!(gradient.start, Point { x: 100.0, y: 100.0 });
        assert_eq!(gradient.end, Point { x: 200.0, y: 50.0 });
    }

    #[test]
    fn test_ops_black_base_then_gradient() {
        let size = Size::new(300.0, 200.0);
        let [base, top] = fallback_ops(2.5, size);
        assert_eq!(base.paint, Paint::Solid(Rgba::BLACK));
        assert_eq!(base.rect, Rect::filling(size));
        assert!(matches!(top.paint, Paint::Linear(_)));
        assert_eq!(top.rect, Rect::filling(size));
    }
}
