/// Lower bound of the scale factor.
pub const SCALE_MIN: f64 = 1.0;

/// Upper bound of the scale factor.
pub const SCALE_MAX: f64 = 5.0;

/// Amount added or removed by one stepper press.
pub const SCALE_STEP: f64 = 1.0;

/// Scale factor at startup.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Rendered in place of an amount that is not a number.
pub const NOT_A_NUMBER: &str = "NaN";

/// Viewport width (in points) under which the sidebar collapses.
pub const DEFAULT_NARROW_WIDTH: f32 = 640.0;

/// Config file looked up in the working directory by the front ends.
pub const DEFAULT_CONFIG_FILE: &str = "recipe-browser.toml";

/// Routes kept for `back`; the oldest entry is dropped past this.
pub const MAX_HISTORY: usize = 100;
