/*
 * Copyright 2023 Actyx AG
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
use super::{Double, Float, Int32, Int64, Number, NumberKind};
use crate::error::ParseError;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

macro_rules! numeral {
    ($t:ident, $raw:ty) => {
        impl $t {
            /// Parses the decimal numeral of this kind, ignoring surrounding whitespace.
            ///
            /// The floating kinds also take `inf`, `infinity` and `NaN` (any case, optionally
            /// signed), which is what `Display` prints for non-finite values. Source literals
            /// never spell these, see [`crate::literal::parse`].
            pub fn from_string(s: &str) -> Result<Self, ParseError> {
                s.trim()
                    .parse::<$raw>()
                    .map(Self)
                    .map_err(|e| ParseError::new(Some(Self::KIND), s, e))
            }
        }

        impl FromStr for $t {
            type Err = ParseError;
            fn from_str(s: &str) -> Result<Self, ParseError> {
                Self::from_string(s)
            }
        }

        impl Display for $t {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// f32 parsing rounds the decimal text straight to single precision
numeral!(Int32, i32);
numeral!(Int64, i64);
numeral!(Float, f32);
numeral!(Double, f64);

impl Number {
    pub fn from_string(kind: NumberKind, s: &str) -> Result<Self, ParseError> {
        Ok(match kind {
            NumberKind::Int32 => Number::Int32(Int32::from_string(s)?),
            NumberKind::Int64 => Number::Int64(Int64::from_string(s)?),
            NumberKind::Float => Number::Float(Float::from_string(s)?),
            NumberKind::Double => Number::Double(Double::from_string(s)?),
        })
    }

    /// The value as a host `i32`: `Int64` wraps, floating values truncate toward zero and
    /// saturate, NaN becomes 0.
    pub fn as_i32(&self) -> i32 {
        match self {
            Number::Int32(v) => v.0,
            Number::Int64(v) => v.0 as i32,
            Number::Float(v) => v.0 as i32,
            Number::Double(v) => v.0 as i32,
        }
    }

    /// The value as a host `i64`: floating values truncate toward zero and saturate, NaN
    /// becomes 0.
    pub fn as_i64(&self) -> i64 {
        match self {
            Number::Int32(v) => v.0.into(),
            Number::Int64(v) => v.0,
            Number::Float(v) => v.0 as i64,
            Number::Double(v) => v.0 as i64,
        }
    }

    /// The value rounded to the nearest `f32`.
    pub fn as_f32(&self) -> f32 {
        match self {
            Number::Int32(v) => v.0 as f32,
            Number::Int64(v) => v.0 as f32,
            Number::Float(v) => v.0,
            Number::Double(v) => v.0 as f32,
        }
    }

    /// The value as `f64`, exact for every kind except `Int64` beyond ±2^53.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int32(v) => v.0.into(),
            Number::Int64(v) => v.to_f64_lossy(),
            Number::Float(v) => v.0.into(),
            Number::Double(v) => v.0,
        }
    }

    pub fn to_int32(&self) -> Int32 {
        Int32(self.as_i32())
    }

    pub fn to_int64(&self) -> Int64 {
        Int64(self.as_i64())
    }

    pub fn to_float(&self) -> Float {
        Float(self.as_f32())
    }

    pub fn to_double(&self) -> Double {
        Double(self.as_f64())
    }

    /// Explicit conversion to another kind, see the `as_*` methods for how each step rounds.
    pub fn cast(&self, kind: NumberKind) -> Number {
        match kind {
            NumberKind::Int32 => Number::Int32(self.to_int32()),
            NumberKind::Int64 => Number::Int64(self.to_int64()),
            NumberKind::Float => Number::Float(self.to_float()),
            NumberKind::Double => Number::Double(self.to_double()),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int32(v) => write!(f, "{}", v),
            Number::Int64(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", v),
            Number::Double(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};
    use spectral::{assert_that, string::StrAssertions};

    #[test]
    fn render() {
        assert_eq!(Number::int32(-1).to_string(), "-1");
        assert_eq!(Number::int32(i32::MAX).to_string(), "2147483647");
        assert_eq!(Number::int64(i64::MAX).to_string(), "9223372036854775807");
        assert_eq!(Number::float(3.14).to_string(), "3.14");
        assert_eq!(Number::float(0.1).add(Number::float(0.2)).to_string(), "0.3");
        assert_eq!(Number::double(0.1).add(Number::double(0.2)).to_string(), "0.30000000000000004");
        assert_eq!(Number::double(3.141592653589793).to_string(), "3.141592653589793");
        assert_eq!(Number::double(1.0).to_string(), "1");
        assert_eq!(Number::float(-2.5).to_string(), "-2.5");
    }

    #[test]
    fn parse() {
        assert_eq!(Int32::from_string(" 42 ").unwrap().native_value(), 42);
        assert_eq!(Int32::from_string("-2147483648").unwrap(), Int32::MIN);
        assert_eq!(Int64::from_string("9223372036854775807").unwrap(), Int64::MAX);
        assert_eq!(Float::from_string("3.14").unwrap().native_value(), 3.14f32);
        assert_eq!(Double::from_string("1e3").unwrap().native_value(), 1000.0);
        assert_eq!("12".parse::<Int32>().unwrap().native_value(), 12);

        let err = Int32::from_string("2147483648").unwrap_err();
        assert_eq!(err.kind, Some(NumberKind::Int32));
        assert_that(&err.to_string()).contains("`2147483648` is not a valid Integer literal");
        assert!(Int32::from_string("").is_err());
        assert!(Int32::from_string("1.5").is_err());
        assert!(Int64::from_string("abc").is_err());
        assert!(Float::from_string("1.2.3").is_err());
        assert!(Double::from_string("").is_err());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn non_finite_text_only_outside_of_literals() {
        assert!(Float::from_string("NaN").unwrap().native_value().is_nan());
        assert_eq!(Float::from_string("-inf").unwrap().native_value(), f32::NEG_INFINITY);
        assert_eq!(Double::from_string("infinity").unwrap().native_value(), f64::INFINITY);
        assert!(Int32::from_string("inf").is_err());
        assert!(Int64::from_string("NaN").is_err());

        let inf = Number::double(f64::INFINITY).to_string();
        assert_eq!(inf, "inf");
        assert!(Number::from_string(NumberKind::Double, &inf).is_ok());
        for text in ["NaN", "inf", "-inf", "infinity", "NaN#"].iter() {
            assert!(crate::literal::parse(text).is_err(), "{}", text);
        }
    }

    #[test]
    fn round_trip_samples() {
        let samples = [
            Number::int32(0),
            Number::int32(-1),
            Number::int32(2147483647),
            Number::int64(9223372036854775807),
            Number::float(3.14),
            Number::double(3.141592653589793),
            Number::float(1e30),
            Number::double(-1e-300),
            Number::double(f64::INFINITY),
        ];
        for n in samples.iter() {
            let back = Number::from_string(n.kind(), &n.to_string()).unwrap();
            assert_eq!(back.kind(), n.kind());
            assert!(back.equal_to(n), "{} came back as {}", n, back);
        }
    }

    #[test]
    fn round_trip() {
        fn prop(n: Number) -> TestResult {
            if n.as_f64().is_nan() {
                return TestResult::discard();
            }
            let back = Number::from_string(n.kind(), &n.to_string()).unwrap();
            TestResult::from_bool(back.kind() == n.kind() && back.equal_to(&n))
        }
        quickcheck(prop as fn(Number) -> TestResult);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn casts() {
        assert_eq!(Number::int64(1 << 32).as_i32(), 0);
        assert_eq!(Number::int64(-1).as_i32(), -1);
        assert_eq!(Number::double(-7.9).as_i32(), -7);
        assert_eq!(Number::double(1e20).as_i32(), i32::MAX);
        assert_eq!(Number::float(f64::NAN).as_i64(), 0);
        assert_eq!(Number::int64((1 << 53) + 1).as_f64(), (1i64 << 53) as f64);
        assert_eq!(Number::double(0.1).as_f32(), 0.1f32);

        let n = Number::double(2.75);
        assert_eq!(n.cast(NumberKind::Int32).kind(), NumberKind::Int32);
        assert_eq!(n.cast(NumberKind::Int32).as_i32(), 2);
        assert_eq!(n.cast(NumberKind::Int64).as_i64(), 2);
        assert_eq!(n.cast(NumberKind::Float).as_f64(), 2.75);
        assert_eq!(Number::int32(7).cast(NumberKind::Double).to_string(), "7");
        assert_eq!(Number::int64(i64::MAX).to_int32().native_value(), -1);
    }
}
