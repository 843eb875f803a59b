//! Viewport visibility math.
//!
//! Works on plain numbers so it can be fed from any layout source: the
//! element's bounding box relative to the top of the viewport and the height
//! of the viewport itself.

use serde::{Deserialize, Serialize};

/// The whole element must be on screen.
pub const DEFAULT_PERCENT_VISIBLE: f64 = 100.0;

/// Vertical extent of an element, relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub top: f64,
    pub bottom: f64,
    pub height: f64,
}

/// Picks the viewport height: `inner` unless it is zero, then `client`.
pub fn window_height(inner: f64, client: f64) -> f64 {
    if inner != 0.0 && !inner.is_nan() {
        inner
    } else {
        client
    }
}

/// Returns `true` if at least `percent_visible` percent of the element is
/// inside the viewport at both its top and bottom edges.
///
/// The part clipped above the viewport and the part clipped below it are
/// checked separately; each one alone must leave `percent_visible` percent
/// visible. Percentages are floored before comparing.
///
/// # Examples
/// ```
/// use utilbelt_core::utils::viewport::{is_in_viewport, ElementRect};
///
/// let rect = ElementRect { top: -25.0, bottom: 75.0, height: 100.0 };
/// assert!(is_in_viewport(&rect, 800.0, 75.0));
/// assert!(!is_in_viewport(&rect, 800.0, 100.0));
/// ```
pub fn is_in_viewport(rect: &ElementRect, window_height: f64, percent_visible: f64) -> bool {
    let clipped_above = rect.top.min(0.0);
    let top_visible = (100.0 - (clipped_above / -rect.height) * 100.0).floor();
    let bottom_visible = (100.0 - ((rect.bottom - window_height) / rect.height) * 100.0).floor();

    // NaN percentages (zero-height elements) compare false and do not fail the check.
    !(top_visible < percent_visible || bottom_visible < percent_visible)
}
