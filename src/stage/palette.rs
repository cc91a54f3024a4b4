//! Colors shared by the stage, chart and breakdown panels.

use crate::foundation::core::Rgba8;

/// Fixed operand stems (amber).
pub const FIXED: Rgba8 = Rgba8::rgb(0xf5, 0x9e, 0x0b);
/// Moving operand stems (blue).
pub const MOVING: Rgba8 = Rgba8::rgb(0x3b, 0x82, 0xf6);
/// Product stems and overlap guides (purple).
pub const PRODUCT: Rgba8 = Rgba8::rgb(0x93, 0x33, 0xea);
/// Darker product label.
pub const PRODUCT_LABEL: Rgba8 = Rgba8::rgb(0x7e, 0x22, 0xce);
/// Row axis lines.
pub const AXIS: Rgba8 = Rgba8::rgb(0xe2, 0xe8, 0xf0);
/// Tick dots.
pub const TICK: Rgba8 = Rgba8::rgb(0xcb, 0xd5, 0xe1);
/// Muted text.
pub const MUTED: Rgba8 = Rgba8::rgb(0x94, 0xa3, 0xb8);
/// Body text.
pub const TEXT: Rgba8 = Rgba8::rgb(0x33, 0x41, 0x55);
/// Panel background.
pub const PANEL: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);
/// Page background.
pub const PAGE: Rgba8 = Rgba8::rgb(0xf8, 0xfa, 0xfc);
/// Output bar at the current index.
pub const BAR_CURRENT: Rgba8 = Rgba8::rgb(0x10, 0xb9, 0x81);
/// Outline of the current bar.
pub const BAR_CURRENT_STROKE: Rgba8 = Rgba8::rgb(0x05, 0x96, 0x69);
/// Output bars already swept.
pub const BAR_DONE: Rgba8 = Rgba8::rgb(0x34, 0xd3, 0x99);
/// Output bars not reached yet.
pub const BAR_PENDING: Rgba8 = Rgba8::rgb(0xe2, 0xe8, 0xf0);
/// Chart zero line.
pub const BASELINE: Rgba8 = Rgba8::rgb(0x94, 0xa3, 0xb8);
