//! Shared numeric constants for the board crate.

// ── Cards ───────────────────────────────────────────────────────

/// Left edge of the first unassigned card, in CSS pixels.
pub const CARD_ORIGIN_X: f64 = 30.0;

/// Top edge of the first unassigned card, in CSS pixels.
pub const CARD_ORIGIN_Y: f64 = 171.0;

/// Card width in CSS pixels.
pub const CARD_WIDTH: f64 = 202.0;

/// Card height in CSS pixels.
pub const CARD_HEIGHT: f64 = 68.0;

/// Vertical gap between stacked unassigned cards.
pub const CARD_GAP: f64 = 12.0;

// ── Zones ───────────────────────────────────────────────────────

/// Left edge of the first drop zone when the roster gives no position.
pub const ZONE_ORIGIN_X: f64 = 867.0;

/// Top edge of the first drop zone when the roster gives no position.
pub const ZONE_ORIGIN_Y: f64 = 429.0;

/// Drop zone width in CSS pixels.
pub const ZONE_WIDTH: f64 = 99.0;

/// Drop zone height in CSS pixels.
pub const ZONE_HEIGHT: f64 = 103.0;

/// Horizontal gap between default-placed zones (laid out right to left).
pub const ZONE_GAP: f64 = 12.0;

// ── Gestures ────────────────────────────────────────────────────

/// Pointer travel in pixels before a press on a card becomes a drag.
/// Shorter presses are treated as a tap that selects the card.
pub const DRAG_THRESHOLD_PX: f64 = 4.0;
