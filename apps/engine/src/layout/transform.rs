//! Canonical coordinate model and per-view scaling.
#![allow(dead_code)]
//!
//! All document geometry lives in canonical units: the unscaled 210×297
//! logical page (A4-equivalent), top-left origin. Each rendering surface —
//! 60% preview zoom, 80% finish-screen zoom, full-scale export — owns a
//! `ViewContext` that maps canonical units to its pixel space and back.
//!
//! Invariant: `to_canonical(to_view(g)) == g` within float tolerance, for any
//! context. The export view always uses scale 1.0 with zero origin, so export
//! capture sees geometry identical to canonical space with no extra
//! bookkeeping.

use serde::{Deserialize, Serialize};

/// Canonical page width in document units (A4-equivalent millimetres).
pub const PAGE_WIDTH: f32 = 210.0;
/// Canonical page height in document units.
pub const PAGE_HEIGHT: f32 = 297.0;

// ────────────────────────────────────────────────────────────────────────────
// Geometry primitives
// ────────────────────────────────────────────────────────────────────────────

/// A point in canonical document units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanonicalPoint {
    pub x: f32,
    pub y: f32,
}

/// A size in canonical document units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanonicalSize {
    pub width: f32,
    pub height: f32,
}

/// A point in a specific view's pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPoint {
    pub x: f32,
    pub y: f32,
}

/// A size in a specific view's pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSize {
    pub width: f32,
    pub height: f32,
}

impl CanonicalPoint {
    pub const ORIGIN: CanonicalPoint = CanonicalPoint { x: 0.0, y: 0.0 };

    /// Clamps both axes to non-negative values (the lower-bound-only clamp
    /// used by drag and nudge).
    pub fn clamp_non_negative(self) -> Self {
        CanonicalPoint {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// View context
// ────────────────────────────────────────────────────────────────────────────

/// Per-surface scale and origin. Ephemeral — one per rendering surface
/// instance, alive only for the duration of a render or a gesture. Never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewContext {
    /// Pixels per canonical unit. Always finite and > 0.
    pub scale_factor: f32,
    /// Viewport offset of the surface's canonical origin.
    pub origin: ViewPoint,
}

impl ViewContext {
    /// Builds a context at the given scale, normalizing non-finite or
    /// non-positive input to 1.0 so the transform stays total.
    pub fn new(scale_factor: f32) -> Self {
        ViewContext {
            scale_factor: normalize_scale(scale_factor),
            origin: ViewPoint { x: 0.0, y: 0.0 },
        }
    }

    pub fn with_origin(scale_factor: f32, origin: ViewPoint) -> Self {
        ViewContext {
            scale_factor: normalize_scale(scale_factor),
            origin,
        }
    }

    /// The export view: full scale against the canonical page, decoupled from
    /// whatever preview zoom the user last set.
    pub fn export() -> Self {
        ViewContext::new(1.0)
    }

    pub fn to_view_point(&self, p: CanonicalPoint) -> ViewPoint {
        ViewPoint {
            x: self.origin.x + p.x * self.scale_factor,
            y: self.origin.y + p.y * self.scale_factor,
        }
    }

    pub fn to_canonical_point(&self, p: ViewPoint) -> CanonicalPoint {
        CanonicalPoint {
            x: (p.x - self.origin.x) / self.scale_factor,
            y: (p.y - self.origin.y) / self.scale_factor,
        }
    }

    /// Sizes scale without the origin offset.
    pub fn to_view_size(&self, s: CanonicalSize) -> ViewSize {
        ViewSize {
            width: s.width * self.scale_factor,
            height: s.height * self.scale_factor,
        }
    }

    pub fn to_canonical_size(&self, s: ViewSize) -> CanonicalSize {
        CanonicalSize {
            width: s.width / self.scale_factor,
            height: s.height / self.scale_factor,
        }
    }

    /// Converts a view-space pointer delta back to canonical units.
    pub fn to_canonical_delta(&self, dx: f32, dy: f32) -> (f32, f32) {
        (dx / self.scale_factor, dy / self.scale_factor)
    }
}

fn normalize_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_round_trip_is_identity_across_scales() {
        let points = [
            CanonicalPoint { x: 0.0, y: 0.0 },
            CanonicalPoint { x: 100.0, y: 50.0 },
            CanonicalPoint { x: 209.9, y: 296.9 },
            CanonicalPoint { x: 13.37, y: 42.42 },
        ];
        for scale in [0.25, 0.6, 0.8, 1.0, 1.5, 3.0] {
            let ctx = ViewContext::new(scale);
            for p in points {
                let back = ctx.to_canonical_point(ctx.to_view_point(p));
                assert!(
                    (back.x - p.x).abs() < EPS && (back.y - p.y).abs() < EPS,
                    "round trip failed at scale {scale}: {p:?} -> {back:?}"
                );
            }
        }
    }

    #[test]
    fn test_round_trip_with_origin_offset() {
        let ctx = ViewContext::with_origin(0.6, ViewPoint { x: 120.0, y: 48.0 });
        let p = CanonicalPoint { x: 100.0, y: 50.0 };
        let view = ctx.to_view_point(p);
        assert!((view.x - (120.0 + 60.0)).abs() < EPS);
        assert!((view.y - (48.0 + 30.0)).abs() < EPS);
        let back = ctx.to_canonical_point(view);
        assert!((back.x - p.x).abs() < EPS && (back.y - p.y).abs() < EPS);
    }

    #[test]
    fn test_size_scaling_ignores_origin() {
        let ctx = ViewContext::with_origin(2.0, ViewPoint { x: 500.0, y: 500.0 });
        let s = ctx.to_view_size(CanonicalSize {
            width: 30.0,
            height: 10.0,
        });
        assert!((s.width - 60.0).abs() < EPS);
        assert!((s.height - 20.0).abs() < EPS);
    }

    #[test]
    fn test_export_context_is_full_scale_zero_origin() {
        let ctx = ViewContext::export();
        assert_eq!(ctx.scale_factor, 1.0);
        let p = CanonicalPoint { x: 77.0, y: 33.0 };
        let view = ctx.to_view_point(p);
        assert_eq!(view.x, 77.0);
        assert_eq!(view.y, 33.0);
    }

    #[test]
    fn test_degenerate_scale_normalized_to_one() {
        assert_eq!(ViewContext::new(0.0).scale_factor, 1.0);
        assert_eq!(ViewContext::new(-2.5).scale_factor, 1.0);
        assert_eq!(ViewContext::new(f32::NAN).scale_factor, 1.0);
        assert_eq!(ViewContext::new(f32::INFINITY).scale_factor, 1.0);
    }

    #[test]
    fn test_clamp_non_negative() {
        let p = CanonicalPoint { x: -3.0, y: 5.0 }.clamp_non_negative();
        assert_eq!(p, CanonicalPoint { x: 0.0, y: 5.0 });
    }

    #[test]
    fn test_page_constants_are_a4_equivalent() {
        assert_eq!(PAGE_WIDTH, 210.0);
        assert_eq!(PAGE_HEIGHT, 297.0);
    }
}
