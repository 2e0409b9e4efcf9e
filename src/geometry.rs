//! Barycentric-to-Cartesian projection for the QFL triangle.
//!
//! One [`TriangleFrame`] is the single source of plotting coordinates: the
//! live sample point, every field and block outline vertex, and every label
//! anchor go through [`TriangleFrame::project`], so all geometry lands in one
//! mutually consistent coordinate space. Coordinates follow the SVG
//! convention (y grows downward); quartz sits at the apex, feldspar at the
//! bottom-left corner, lithics at the bottom-right.

use serde::Serialize;

/// Cartesian point in the rendered viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Margin between the viewport edge and the triangle, in pixels.
const PADDING: f64 = 60.0;

/// An equilateral QFL triangle fitted into a square `size`×`size` viewport.
#[derive(Debug, Clone, Copy)]
pub struct TriangleFrame {
    size: f64,
    inner: f64,
    height: f64,
}

impl TriangleFrame {
    /// Frame for a viewport of `size` pixels per edge. `size` controls scale
    /// only; it never affects classification.
    pub fn new(size: f64) -> Self {
        let inner = size - PADDING * 2.0;
        Self {
            size,
            inner,
            height: 3.0f64.sqrt() / 2.0 * inner,
        }
    }

    /// Viewport edge length in pixels.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Apex vertex: 100% quartz.
    pub fn apex(&self) -> Point {
        Point {
            x: self.size / 2.0,
            y: PADDING,
        }
    }

    /// Bottom-left vertex: 100% feldspar.
    pub fn base_feldspar(&self) -> Point {
        Point {
            x: PADDING,
            y: PADDING + self.height,
        }
    }

    /// Bottom-right vertex: 100% lithics.
    pub fn base_lithic(&self) -> Point {
        Point {
            x: self.size - PADDING,
            y: PADDING + self.height,
        }
    }

    /// Project a (q, f, l) triple into the viewport.
    ///
    /// Re-normalizes defensively, so raw triples of any scale are accepted.
    /// Height is driven purely by the quartz share; horizontal position by
    /// the feldspar/lithic balance at that height. A zero-sum triple
    /// degrades to zero shares (never NaN), which lands on the feldspar
    /// vertex — callers gate on `Composition::is_empty` before plotting a
    /// live point.
    pub fn project(&self, q: f64, f: f64, l: f64) -> Point {
        let sum = q + f + l;
        let (share_q, share_l) = if sum > 0.0 {
            (q / sum * 100.0, l / sum * 100.0)
        } else {
            (0.0, 0.0)
        };

        Point {
            x: PADDING + (share_l * self.inner + share_q * self.inner / 2.0) / 100.0,
            y: PADDING + (100.0 - share_q) * self.height / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SIZE: f64 = 320.0;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_pure_endpoints_hit_vertices() {
        let frame = TriangleFrame::new(SIZE);
        assert!(close(frame.project(100.0, 0.0, 0.0), frame.apex()));
        assert!(close(frame.project(0.0, 100.0, 0.0), frame.base_feldspar()));
        assert!(close(frame.project(0.0, 0.0, 100.0), frame.base_lithic()));
    }

    #[test]
    fn test_zero_sum_is_finite_fallback() {
        let frame = TriangleFrame::new(SIZE);
        let p = frame.project(0.0, 0.0, 0.0);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!(close(p, frame.base_feldspar()));
    }

    #[test]
    fn test_projection_ignores_scale() {
        let frame = TriangleFrame::new(SIZE);
        let a = frame.project(20.0, 30.0, 50.0);
        let b = frame.project(2.0, 3.0, 5.0);
        assert!(close(a, b));
    }

    #[test]
    fn test_equal_shares_center_horizontally() {
        let frame = TriangleFrame::new(SIZE);
        let p = frame.project(0.0, 50.0, 50.0);
        assert!((p.x - SIZE / 2.0).abs() < 1e-9);
        assert!((p.y - frame.base_feldspar().y).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_projection_stays_finite_and_inside(
            q in 0.0f64..1000.0,
            f in 0.0f64..1000.0,
            l in 0.0f64..1000.0,
        ) {
            let frame = TriangleFrame::new(SIZE);
            let p = frame.project(q, f, l);
            prop_assert!(p.x.is_finite() && p.y.is_finite());
            prop_assert!(p.x >= PADDING - 1e-9 && p.x <= SIZE - PADDING + 1e-9);
            prop_assert!(p.y >= PADDING - 1e-9 && p.y <= frame.base_feldspar().y + 1e-9);
        }

        #[test]
        fn prop_projection_scale_invariant(
            q in 0.0f64..100.0,
            f in 0.0f64..100.0,
            l in 0.0f64..100.0,
            k in 0.001f64..1000.0,
        ) {
            prop_assume!(q + f + l > 0.0);
            let frame = TriangleFrame::new(SIZE);
            let a = frame.project(q, f, l);
            let b = frame.project(q * k, f * k, l * k);
            prop_assert!((a.x - b.x).abs() < 1e-6);
            prop_assert!((a.y - b.y).abs() < 1e-6);
        }
    }
}
