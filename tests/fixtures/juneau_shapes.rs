//! Shoreline and trail geometries around Juneau, Alaska.
//!
//! Coordinates are (longitude, latitude), traced from OpenStreetMap.

/// Perseverance Trail, Basin Road trailhead to the Gold Creek overlook.
pub const PERSEVERANCE_TRAIL: &[(f64, f64)] = &[
    (-134.4000, 58.3057),
    (-134.3978, 58.3066),
    (-134.3951, 58.3079),
    (-134.3923, 58.3088),
    (-134.3901, 58.3102),
    (-134.3874, 58.3110),
    (-134.3850, 58.3113),
    (-134.3822, 58.3124),
    (-134.3797, 58.3139),
    (-134.3770, 58.3147),
    (-134.3741, 58.3151),
    (-134.3715, 58.3163),
    (-134.3689, 58.3178),
    (-134.3661, 58.3184),
    (-134.3630, 58.3189),
    (-134.3604, 58.3201),
    (-134.3581, 58.3219),
    (-134.3553, 58.3228),
    (-134.3526, 58.3232),
    (-134.3498, 58.3240),
];

/// Douglas Island boat harbor breakwater outline.
pub const HARBOR_BREAKWATER_WKT: &str = "POLYGON ((\
    -134.41512 58.27695, -134.41460 58.27731, -134.41391 58.27760, \
    -134.41322 58.27774, -134.41250 58.27771, -134.41188 58.27749, \
    -134.41151 58.27712, -134.41175 58.27676, -134.41242 58.27655, \
    -134.41331 58.27648, -134.41420 58.27659, -134.41512 58.27695), \
    (-134.41400 58.27700, -134.41300 58.27700, -134.41300 58.27720, -134.41400 58.27700))";

/// A straight run of Egan Drive, sampled densely.
pub fn egan_drive_straight() -> Vec<(f64, f64)> {
    (0..50)
        .map(|i| {
            let t = f64::from(i) / 49.0;
            (-134.42 + 0.04 * t, 58.29 + 0.02 * t)
        })
        .collect()
}
