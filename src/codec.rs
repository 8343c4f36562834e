//! Variable-length text encoding of signed integer deltas.
//!
//! Each value is split into 5-bit chunks, least significant first. Every
//! chunk except the last carries the `0x20` continuation bit, and all chunks
//! are offset by 63 so the output stays in printable ASCII (`?` through `~`).

/// Scale applied to coordinates before quantizing.
const COORDINATE_SCALE: f64 = 1e5;

const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u64 = 0x1f;
const CONTINUATION: u64 = 0x20;
const CHAR_OFFSET: u64 = 63;

/// Quantize a coordinate component to five decimal digits, rounding down.
///
/// Values outside the `i32` range saturate; NaN maps to zero.
pub fn floor_1e5(coordinate: f64) -> i32 {
    (coordinate * COORDINATE_SCALE).floor() as i32
}

/// Zigzag a signed value so small magnitudes of either sign stay short.
///
/// The shift wraps at 32 bits, so magnitudes of 2^30 and above fold onto
/// the bit patterns of their low 31 bits.
pub fn zigzag(num: i32) -> u32 {
    let shifted = num.wrapping_shl(1);
    if num < 0 { !shifted as u32 } else { shifted as u32 }
}

pub fn encode_number(num: u64) -> String {
    let mut out = String::new();
    write_number(&mut out, num);
    out
}

pub fn encode_signed_number(num: i32) -> String {
    let mut out = String::new();
    write_signed_number(&mut out, num);
    out
}

pub(crate) fn write_number(out: &mut String, mut num: u64) {
    while num >= CONTINUATION {
        push_chunk(out, (CONTINUATION | (num & CHUNK_MASK)) + CHAR_OFFSET);
        num >>= CHUNK_BITS;
    }
    push_chunk(out, num + CHAR_OFFSET);
}

pub(crate) fn write_signed_number(out: &mut String, num: i32) {
    write_number(out, u64::from(zigzag(num)));
}

fn push_chunk(out: &mut String, value: u64) {
    // value is at most 0x3f + 63, always ASCII
    out.push(char::from(value as u8));
}

/// Running delta state for one output buffer.
///
/// Both axes start at zero and are tracked independently.
#[derive(Debug, Default)]
pub(crate) struct DeltaWriter {
    prev_x: i32,
    prev_y: i32,
}

impl DeltaWriter {
    /// Append one point as `(dy, dx)`, latitude-like axis first.
    pub(crate) fn push(&mut self, out: &mut String, x: f64, y: f64) {
        let x_e5 = floor_1e5(x);
        let y_e5 = floor_1e5(y);

        write_signed_number(out, y_e5.wrapping_sub(self.prev_y));
        write_signed_number(out, x_e5.wrapping_sub(self.prev_x));

        self.prev_x = x_e5;
        self.prev_y = y_e5;
    }
}
