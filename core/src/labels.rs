//! Text formatters consumed by the chart renderer: per-sample labels, axis ticks and tooltips.

use std::f64::consts::PI;

/// Tolerance used when matching an angle against a canonical tick position.
pub const ANGLE_TOL: f64 = 1.0e-6;

const TICKS: [(f64, &str); 5] = [
    (0.0, "0"),
    (0.5 * PI, "π/2"),
    (PI, "π"),
    (1.5 * PI, "3π/2"),
    (2.0 * PI, "2π"),
];

/// Slack applied before rounding so sample angles a few ulps short of a hundredth tie still
/// round up.
const LABEL_TIE_TOL: f64 = 1.0e-9;

/// Label attached to every sample, e.g. `0.50π` for a quarter rotation. Hundredths are rounded
/// half away from zero.
pub fn sample_label(angle: f64) -> String {
    let hundredths = angle / PI * 100.0;
    let rounded = (hundredths + hundredths.signum() * LABEL_TIE_TOL).round() / 100.0;
    format!("{:.2}π", rounded)
}

/// Axis tick label for `angle` in radians. Only the four quarter-turn positions and the full turn
/// are labelled; every other angle renders as an empty string.
pub fn format_angle_to_pi(angle: f64) -> &'static str {
    TICKS
        .iter()
        .find(|(tick, _)| (angle - tick).abs() <= ANGLE_TOL)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

/// Tooltip text for a sample value.
pub fn format_tooltip_value(value: f64) -> String {
    format!("{:.4}", value)
}
