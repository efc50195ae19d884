//! Free-floating decorations — lines, shapes, icons, separators.
#![allow(dead_code)]
//!
//! Decoration geometry is always expressed in canonical document units
//! (unscaled, top-left origin of the 210×297 logical page). A decoration never
//! encodes any view's zoom factor; only `ViewContext` introduces scale.
//!
//! Kinds are a closed tagged enum with kind-specific properties — rendering
//! and behavior dispatch over the tag, never over dynamic property inspection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::layout::transform::{CanonicalPoint, CanonicalSize};

// ────────────────────────────────────────────────────────────────────────────
// Kind
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecorationKind {
    Line { thickness: f32, color: String },
    Circle { fill: String },
    Rectangle { fill: String },
    Icon { glyph: String },
    /// Inline horizontal separator. Width is clamped into a fixed range;
    /// height is effectively its thickness.
    Separator { thickness: f32 },
}

/// Minimum size for generic decorations, in canonical units.
pub const MIN_DECORATION_SIZE: CanonicalSize = CanonicalSize {
    width: 20.0,
    height: 10.0,
};

/// Separator width bounds, in canonical units. The upper bound is the full
/// canonical page width.
pub const SEPARATOR_WIDTH_MIN: f32 = 40.0;
pub const SEPARATOR_WIDTH_MAX: f32 = 210.0;
pub const SEPARATOR_HEIGHT: f32 = 4.0;

impl DecorationKind {
    /// Clamps a proposed size to this kind's bounds.
    ///
    /// Generic kinds enforce only the 20×10 minimum (lower bound only, per the
    /// gesture contract). Separators additionally clamp width into a fixed
    /// range and pin height.
    pub fn clamp_size(&self, proposed: CanonicalSize) -> CanonicalSize {
        match self {
            DecorationKind::Separator { .. } => CanonicalSize {
                width: proposed.width.clamp(SEPARATOR_WIDTH_MIN, SEPARATOR_WIDTH_MAX),
                height: SEPARATOR_HEIGHT,
            },
            _ => CanonicalSize {
                width: proposed.width.max(MIN_DECORATION_SIZE.width),
                height: proposed.height.max(MIN_DECORATION_SIZE.height),
            },
        }
    }

    /// Default geometry assigned when the decorator step creates an element.
    pub fn default_size(&self) -> CanonicalSize {
        match self {
            DecorationKind::Line { .. } => CanonicalSize {
                width: 60.0,
                height: 10.0,
            },
            DecorationKind::Circle { .. } | DecorationKind::Icon { .. } => CanonicalSize {
                width: 24.0,
                height: 24.0,
            },
            DecorationKind::Rectangle { .. } => CanonicalSize {
                width: 40.0,
                height: 24.0,
            },
            DecorationKind::Separator { .. } => CanonicalSize {
                width: 170.0,
                height: SEPARATOR_HEIGHT,
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Decoration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub id: Uuid,
    #[serde(flatten)]
    pub kind: DecorationKind,
    pub position: CanonicalPoint,
    pub size: CanonicalSize,
}

impl Decoration {
    /// Creates a decoration with the kind's default geometry at `position`.
    pub fn new(kind: DecorationKind, position: CanonicalPoint) -> Self {
        let size = kind.default_size();
        Decoration {
            id: Uuid::new_v4(),
            kind,
            position,
            size,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
