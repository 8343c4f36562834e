//! Zoom level assignment from significance distances.

use crate::settings::Settings;

/// Zoom level index in `0..num_levels` for a significance distance.
///
/// Larger distances land on smaller indices. The scan never moves past the
/// last index, whatever `num_levels` is or how the distance compares to the
/// float breaks.
pub fn compute_level(settings: &Settings, distance: f64) -> u32 {
    if distance <= settings.very_small() {
        return 0;
    }

    let breaks = settings.zoom_level_breaks();
    let last = breaks.len() - 1;
    let mut level = 0;
    while level < last && distance < breaks[level] {
        level += 1;
    }
    level as u32
}

/// Level code written to the levels string. More significant points get
/// larger codes.
pub fn level_code(settings: &Settings, distance: f64) -> u32 {
    settings.max_level() - compute_level(settings, distance)
}

/// Level code for the first and last point.
///
/// Forced endpoints are visible at every zoom. Otherwise they take the
/// level of the most significant point in the line, not their own
/// (always zero) significance.
pub fn endpoint_level_code(settings: &Settings, abs_max: f64) -> u32 {
    if settings.force_endpoints() {
        settings.max_level()
    } else {
        level_code(settings, abs_max)
    }
}
