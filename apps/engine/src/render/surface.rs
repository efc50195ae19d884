//! The shared render surface and the export capture session.
#![allow(dead_code)]
//!
//! The live preview surface is the single shared mutable resource in the
//! engine. Export temporarily forces it to full scale; `CaptureSession` is the
//! scoped acquisition object that records every overridden property and
//! restores it in `Drop`, so restoration runs on every exit path — including
//! errors — without manual calls at each return point.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::layout::planner::PageIndex;
use crate::layout::transform::{PAGE_HEIGHT, PAGE_WIDTH};

// ────────────────────────────────────────────────────────────────────────────
// Surface state
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightMode {
    /// Clipped to a fixed height (the preview viewport).
    Fixed(f32),
    /// Unclipped — grows with content (export mode).
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Hidden,
    Visible,
}

/// The surface properties export overrides and restores. Kept separate from
/// page selection: page 1 is re-selected after export as normal navigation,
/// not as part of restoration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStyle {
    /// CSS-transform-equivalent zoom of the preview.
    pub scale: f32,
    /// Explicit width in canonical units.
    pub width_mm: f32,
    pub height: HeightMode,
    pub overflow: Overflow,
    /// Page-navigation chrome overlaid on the preview.
    pub nav_chrome_visible: bool,
}

impl SurfaceStyle {
    /// A typical live-preview configuration.
    pub fn preview(scale: f32) -> Self {
        SurfaceStyle {
            scale,
            width_mm: PAGE_WIDTH * scale,
            height: HeightMode::Fixed(PAGE_HEIGHT * scale),
            overflow: Overflow::Hidden,
            nav_chrome_visible: true,
        }
    }

    /// The export-mode overrides: full scale, width pinned to the canonical
    /// page, unclipped, chrome hidden.
    pub fn export_mode() -> Self {
        SurfaceStyle {
            scale: 1.0,
            width_mm: PAGE_WIDTH,
            height: HeightMode::Auto,
            overflow: Overflow::Visible,
            nav_chrome_visible: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceState {
    pub style: SurfaceStyle,
    pub current_page: PageIndex,
    /// False when no live preview is mounted; export aborts up front.
    pub attached: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// View handle
// ────────────────────────────────────────────────────────────────────────────

/// Shared handle to the render surface. All work happens on one logical
/// thread; the mutex only serializes the short property reads/writes.
#[derive(Debug, Clone)]
pub struct ViewHandle {
    state: Arc<Mutex<SurfaceState>>,
}

impl ViewHandle {
    pub fn new(style: SurfaceStyle) -> Self {
        ViewHandle {
            state: Arc::new(Mutex::new(SurfaceState {
                style,
                current_page: PageIndex::One,
                attached: true,
            })),
        }
    }

    /// A handle with no mounted preview, for precondition tests.
    pub fn detached() -> Self {
        let handle = ViewHandle::new(SurfaceStyle::preview(0.6));
        handle.lock().attached = false;
        handle
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        // Lock poisoning cannot leave the state half-written (all writers
        // assign whole values), so recover the inner state.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_attached(&self) -> bool {
        self.lock().attached
    }

    pub fn style(&self) -> SurfaceStyle {
        self.lock().style
    }

    pub fn set_style(&self, style: SurfaceStyle) {
        self.lock().style = style;
    }

    pub fn current_page(&self) -> PageIndex {
        self.lock().current_page
    }

    pub fn set_current_page(&self, page: PageIndex) {
        self.lock().current_page = page;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Capture session
// ────────────────────────────────────────────────────────────────────────────

/// RAII guard over the export-mode property overrides.
///
/// `begin` snapshots the surface style and applies `SurfaceStyle::export_mode`;
/// dropping the session writes the snapshot back verbatim. The drop runs
/// unconditionally — early return, `?`, or panic unwinding all restore the
/// surface.
#[derive(Debug)]
pub struct CaptureSession {
    handle: ViewHandle,
    original: SurfaceStyle,
}

impl CaptureSession {
    pub fn begin(handle: &ViewHandle) -> CaptureSession {
        let original = handle.style();
        handle.set_style(SurfaceStyle::export_mode());
        CaptureSession {
            handle: handle.clone(),
            original,
        }
    }

    /// The recorded pre-export property values.
    pub fn original(&self) -> SurfaceStyle {
        self.original
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.handle.set_style(self.original);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_session_applies_export_mode() {
        let handle = ViewHandle::new(SurfaceStyle::preview(0.6));
        let _session = CaptureSession::begin(&handle);
        let style = handle.style();
        assert_eq!(style.scale, 1.0);
        assert_eq!(style.width_mm, PAGE_WIDTH);
        assert_eq!(style.height, HeightMode::Auto);
        assert_eq!(style.overflow, Overflow::Visible);
        assert!(!style.nav_chrome_visible);
    }

    #[test]
    fn test_capture_session_restores_on_drop() {
        let handle = ViewHandle::new(SurfaceStyle::preview(0.8));
        let before = handle.style();
        {
            let _session = CaptureSession::begin(&handle);
            assert_ne!(handle.style(), before);
        }
        assert_eq!(handle.style(), before);
    }

    #[test]
    fn test_capture_session_restores_on_panic() {
        let handle = ViewHandle::new(SurfaceStyle::preview(0.6));
        let before = handle.style();
        let h = handle.clone();
        let result = std::panic::catch_unwind(move || {
            let _session = CaptureSession::begin(&h);
            panic!("rasterizer exploded");
        });
        assert!(result.is_err());
        assert_eq!(handle.style(), before);
    }

    #[test]
    fn test_page_selection_is_not_part_of_restoration() {
        let handle = ViewHandle::new(SurfaceStyle::preview(0.6));
        {
            let _session = CaptureSession::begin(&handle);
            handle.set_current_page(PageIndex::Two);
        }
        // Style restored; page selection untouched by the session.
        assert_eq!(handle.current_page(), PageIndex::Two);
    }
}
