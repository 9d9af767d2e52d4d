use std::f64::consts::PI;

use shared::shared_wheel_game::WheelConfig;

pub const WIN_LABEL: &str = "WIN";
pub const LOSE_LABEL: &str = "Try Again";

const WIN_COLORS: [&str; 2] = ["#f59e0b", "#f97316"];
const LOSE_COLORS: [&str; 2] = ["#6366f1", "#8b5cf6"];

// Easing function for smooth deceleration
pub fn ease_out_cubic(t: f64) -> f64 {
    // Modified ease-out: 1 - (1-t)^4
    1.0 - (1.0 - t).powi(4)
}

/// Fraction of the spin animation elapsed, clamped to `[0, 1]`.
pub fn spin_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Wheel angle at `progress` of a spin from `from` to `to` degrees.
pub fn animated_rotation(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * ease_out_cubic(progress)
}

pub fn spin_button_label(attempts_left: u32, is_spinning: bool) -> String {
    if is_spinning {
        "Spinning...".to_string()
    } else {
        format!("Spin ({} left)", attempts_left)
    }
}

pub fn segment_label(config: &WheelConfig, index: u32) -> &'static str {
    if config.is_winning(index) {
        WIN_LABEL
    } else {
        LOSE_LABEL
    }
}

pub fn segment_color(config: &WheelConfig, index: u32) -> &'static str {
    let palette = if config.is_winning(index) { WIN_COLORS } else { LOSE_COLORS };
    palette[(index % 2) as usize]
}

/// Start and end of a slice in canvas radians. Canvas angles run clockwise
/// from three o'clock, the wheel's segment 0 starts at twelve.
pub fn segment_arc(segment_count: u32, index: u32) -> (f64, f64) {
    let width = 2.0 * PI / segment_count as f64;
    let start = -PI / 2.0 + index as f64 * width;
    (start, start + width)
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
