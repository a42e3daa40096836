//! The `table.<Name>[0].<Field>=<value>` config format.
//!
//! Rendering is used by the server's `getConfig` handler; parsing is used by
//! the client to read the `Enable` line back.

/// Config name accepted by `getConfig`.
pub const MOTION_DETECT: &str = "MotionDetect";

/// Fixed sensitivity reported by the simulated camera.
pub const SENSITIVITY: u8 = 3;

/// Fixed threshold reported by the simulated camera.
pub const THRESHOLD: u8 = 15;

const ENABLE_PREFIX: &str = "table.MotionDetect[0].Enable=";

/// Render the `getConfig&name=MotionDetect` body. Every line ends in `\n`.
pub fn render_motion_detect(enabled: bool) -> String {
    format!(
        "{ENABLE_PREFIX}{enabled}\n\
         table.MotionDetect[0].Sensitivity={SENSITIVITY}\n\
         table.MotionDetect[0].Threshold={THRESHOLD}\n"
    )
}

/// Whether a `setConfig` query key addresses the motion `Enable` field.
///
/// Substring match, so both `MotionDetect[].Enable` and
/// `MotionDetect[0].Enable` qualify.
pub fn is_motion_enable_key(key: &str) -> bool {
    key.contains(MOTION_DETECT) && key.contains("Enable")
}

/// `true` in any letter case is enabled; everything else is disabled.
pub fn parse_enable_value(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Read the enable flag out of a `getConfig` body.
///
/// Returns `None` when no `table.MotionDetect[0].Enable=` line is present.
pub fn parse_motion_enabled(body: &str) -> Option<bool> {
    body.lines()
        .find_map(|line| line.strip_prefix(ENABLE_PREFIX))
        .map(|value| parse_enable_value(value.trim()))
}
