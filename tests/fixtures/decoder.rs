//! Reference decoder used to check encoder output.
//!
//! The crate is encoder-only; this lives with the tests so assertions can
//! be made on decoded values instead of opaque strings.

/// Decode a run of encoded numbers into their raw (non-negative) values.
pub fn decode_numbers(text: &str) -> Vec<u64> {
    let mut values = Vec::new();
    let mut value = 0u64;
    let mut shift = 0;

    for byte in text.bytes() {
        assert!((63..=126).contains(&byte), "non-printable chunk {}", byte);
        let chunk = u64::from(byte - 63);
        value |= (chunk & 0x1f) << shift;
        if chunk & 0x20 != 0 {
            shift += 5;
        } else {
            values.push(value);
            value = 0;
            shift = 0;
        }
    }

    assert_eq!(shift, 0, "dangling continuation chunk");
    values
}

pub fn unzigzag(value: u64) -> i64 {
    if value & 1 == 0 {
        (value >> 1) as i64
    } else {
        !((value >> 1) as i64)
    }
}

/// Decode a point string into absolute `(x, y)` values scaled by 1e5.
pub fn decode_points(text: &str) -> Vec<(i64, i64)> {
    let deltas: Vec<i64> = decode_numbers(text).into_iter().map(unzigzag).collect();
    assert_eq!(deltas.len() % 2, 0, "odd number of deltas");

    let mut x = 0i64;
    let mut y = 0i64;
    deltas
        .chunks(2)
        .map(|pair| {
            y += pair[0];
            x += pair[1];
            (x, y)
        })
        .collect()
}

pub fn scaled(x: f64, y: f64) -> (i64, i64) {
    ((x * 1e5).floor() as i64, (y * 1e5).floor() as i64)
}
