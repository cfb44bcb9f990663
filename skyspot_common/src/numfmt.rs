/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! number <-> text conversions that follow the rules of the web pages we read from and render into.
//! Page text fields are parsed leniently (longest numeric prefix wins) and displayed values use
//! fixed-point rounding with ties going away from zero.

/// parse the longest leading decimal literal of `s` (after leading whitespace), e.g. "37.5N" -> 37.5.
/// Returns `None` if there is no such prefix. "Infinity" is accepted like any other literal
pub fn parse_float_prefix (s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bs = s.as_bytes();
    let mut i = 0;

    if i < bs.len() && (bs[i] == b'+' || bs[i] == b'-') { i += 1; }

    if s[i..].starts_with("Infinity") {
        return if bs[0] == b'-' { Some(f64::NEG_INFINITY) } else { Some(f64::INFINITY) }
    }

    let int_start = i;
    while i < bs.len() && bs[i].is_ascii_digit() { i += 1; }
    let mut n_digits = i - int_start;

    if i < bs.len() && bs[i] == b'.' {
        let frac_start = i+1;
        let mut j = frac_start;
        while j < bs.len() && bs[j].is_ascii_digit() { j += 1; }
        n_digits += j - frac_start;
        if n_digits > 0 { i = j; }
    }

    if n_digits == 0 { return None }

    // the exponent only counts if it has at least one digit
    if i < bs.len() && (bs[i] == b'e' || bs[i] == b'E') {
        let mut j = i+1;
        if j < bs.len() && (bs[j] == b'+' || bs[j] == b'-') { j += 1; }
        let exp_start = j;
        while j < bs.len() && bs[j].is_ascii_digit() { j += 1; }
        if j > exp_start { i = j; }
    }

    s[..i].parse::<f64>().ok()
}

/// round half towards positive infinity
#[inline]
pub fn round_half_up (x: f64) -> f64 {
    (x + 0.5).floor()
}

/// fixed-point rendering with `digits` fractional digits. Ties round away from zero
pub fn to_fixed (x: f64, digits: usize) -> String {
    if !x.is_finite() { return format_number(x) }

    let scale = 10f64.powi(digits as i32);
    let v = (x * scale).round() / scale;
    format!("{:.*}", digits, v + 0.0) // flush negative zero
}

/// shortest text that reads back as `x` (integral values without fraction)
pub fn format_number (x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_infinite() {
        if x > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else {
        format!("{}", x + 0.0)
    }
}

/// wrap-around conversion of a float into a 32bit signed integer (truncation, modulo 2^32).
/// Non-finite values map to 0
pub fn to_int32 (x: f64) -> i32 {
    const TWO_32: f64 = 4294967296.0;
    const TWO_31: f64 = 2147483648.0;

    if !x.is_finite() { return 0 }

    let m = x.trunc().rem_euclid(TWO_32);
    let m = if m >= TWO_31 { m - TWO_32 } else { m };
    m as i32
}
