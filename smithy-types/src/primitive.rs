/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Wire encoding for primitive values.

use crate::Number;

/// Encodes a [`Number`] in its shortest form.
///
/// Integers are written without a fractional part. Non-finite floats are written as `NaN`,
/// `Infinity` and `-Infinity`, which is how the query protocols transmit them.
pub fn encode_number(number: Number) -> String {
    match number {
        Number::PosInt(value) => itoa::Buffer::new().format(value).to_owned(),
        Number::NegInt(value) => itoa::Buffer::new().format(value).to_owned(),
        Number::Float(value) => encode_float(value),
    }
}

fn encode_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            "-Infinity".to_owned()
        } else {
            "Infinity".to_owned()
        }
    } else {
        ryu::Buffer::new().format_finite(value).to_owned()
    }
}

#[cfg(test)]
mod test {
    use super::encode_number;
    use crate::Number;

    #[test]
    fn integers() {
        assert_eq!(encode_number(Number::PosInt(12)), "12");
        assert_eq!(encode_number(Number::NegInt(-40)), "-40");
        assert_eq!(encode_number(Number::NegInt(0)), "0");
    }

    #[test]
    fn floats() {
        assert_eq!(encode_number(Number::Float(1.5)), "1.5");
        assert_eq!(encode_number(Number::Float(3.0)), "3.0");
        assert_eq!(encode_number(Number::Float(f64::NAN)), "NaN");
        assert_eq!(encode_number(Number::Float(f64::INFINITY)), "Infinity");
        assert_eq!(encode_number(Number::Float(f64::NEG_INFINITY)), "-Infinity");
    }
}
