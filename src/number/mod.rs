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
//! The four BrightScript numeric kinds.
//!
//! All kinds live in this one module because every operation of one kind may produce a value
//! of any other kind. The left operand's type owns an operation and the right operand's kind
//! selects the branch; see [`Number`] for the dynamically typed entry points.
//!
//! | left \ right | Int32  | Int64  | Float  | Double |
//! |--------------|--------|--------|--------|--------|
//! | Int32        | Int32  | Int64  | Float  | Double |
//! | Int64        | Int64  | Int64  | Float  | Double |
//! | Float        | Float  | Float  | Float  | Double |
//! | Double       | Double | Double | Double | Double |
//!
//! This table governs `+ - * / MOD`. `\` yields `Int64` iff the right operand is `Int64` and
//! `Int32` otherwise; `^` yields `Double` if either side is `Double` and `Float` otherwise.
//!
//! Note that `Float` combined with `Int64` stays `Float`: the floating kind present wins over
//! the integer, regardless of the integer's width.
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

mod arith;
mod compare;
mod convert;

/// Discriminant of a [`Number`], named after what BrightScript's `type()` reports.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NumberKind {
    #[display(fmt = "Integer")]
    Int32,
    #[display(fmt = "LongInteger")]
    Int64,
    #[display(fmt = "Float")]
    Float,
    #[display(fmt = "Double")]
    Double,
}

impl NumberKind {
    pub const ALL: [NumberKind; 4] = [
        NumberKind::Int32,
        NumberKind::Int64,
        NumberKind::Float,
        NumberKind::Double,
    ];

    pub fn is_integer(self) -> bool {
        matches!(self, NumberKind::Int32 | NumberKind::Int64)
    }

    pub fn is_floating(self) -> bool {
        !self.is_integer()
    }
}

/// 32-bit two's-complement integer; arithmetic wraps.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Int32(i32);

/// 64-bit two's-complement integer; arithmetic wraps.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Int64(i64);

/// Single precision float.
///
/// Every way of constructing a `Float` rounds to the nearest `f32` right away, so the value
/// never carries more precision than it will keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Float(f32);

/// Double precision float, the top of the promotion lattice.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Double(f64);

impl Int32 {
    pub const KIND: NumberKind = NumberKind::Int32;
    pub const MIN: Int32 = Int32(i32::MIN);
    pub const MAX: Int32 = Int32(i32::MAX);

    pub fn native_value(self) -> i32 {
        self.0
    }
}

impl From<Int32> for i64 {
    fn from(v: Int32) -> i64 {
        v.0.into()
    }
}

impl From<Int32> for f64 {
    fn from(v: Int32) -> f64 {
        v.0.into()
    }
}

impl Int64 {
    pub const KIND: NumberKind = NumberKind::Int64;
    pub const MIN: Int64 = Int64(i64::MIN);
    pub const MAX: Int64 = Int64(i64::MAX);

    pub fn native_value(self) -> i64 {
        self.0
    }

    /// Nearest `f64`; integers beyond ±2^53 lose their low bits.
    ///
    /// This is the only way an `Int64` enters floating-point arithmetic, so every lossy
    /// conversion is spelled out at its call site.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64_lossy(self) -> f64 {
        self.0 as f64
    }
}

impl From<i32> for Int64 {
    fn from(v: i32) -> Self {
        Self(v.into())
    }
}

impl From<Int32> for Int64 {
    fn from(v: Int32) -> Self {
        Self(v.0.into())
    }
}

impl Float {
    pub const KIND: NumberKind = NumberKind::Float;

    pub fn native_value(self) -> f32 {
        self.0
    }
}

impl From<f64> for Float {
    fn from(v: f64) -> Self {
        // round to nearest, ties to even
        Self(v as f32)
    }
}

impl From<i32> for Float {
    fn from(v: i32) -> Self {
        Self(v as f32)
    }
}

impl From<i64> for Float {
    fn from(v: i64) -> Self {
        // a single rounding step straight to f32, not via f64
        Self(v as f32)
    }
}

impl From<Float> for f64 {
    fn from(v: Float) -> f64 {
        v.0.into()
    }
}

impl Double {
    pub const KIND: NumberKind = NumberKind::Double;

    pub fn native_value(self) -> f64 {
        self.0
    }
}

impl From<f32> for Double {
    fn from(v: f32) -> Self {
        Self(v.into())
    }
}

impl From<i32> for Double {
    fn from(v: i32) -> Self {
        Self(v.into())
    }
}

impl From<i64> for Double {
    fn from(v: i64) -> Self {
        Self(Int64(v).to_f64_lossy())
    }
}

/// A BrightScript numeric value of any of the four kinds.
///
/// Numbers are immutable `Copy` values; every operation returns a fresh one. Equality and
/// ordering work across kinds by value (`Int32(3) == Double(3.0)`), use [`Number::kind`] when
/// the representation matters as well.
#[derive(Debug, Clone, Copy, From, Serialize, Deserialize)]
pub enum Number {
    Int32(Int32),
    Int64(Int64),
    Float(Float),
    Double(Double),
}

impl Number {
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::Int32(_) => NumberKind::Int32,
            Number::Int64(_) => NumberKind::Int64,
            Number::Float(_) => NumberKind::Float,
            Number::Double(_) => NumberKind::Double,
        }
    }

    pub fn int32(v: i32) -> Self {
        Number::Int32(Int32(v))
    }

    pub fn int64(v: i64) -> Self {
        Number::Int64(Int64(v))
    }

    /// Rounds `v` to single precision.
    pub fn float(v: f64) -> Self {
        Number::Float(Float::from(v))
    }

    pub fn double(v: f64) -> Self {
        Number::Double(Double(v))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int32(v) => v.0 == 0,
            Number::Int64(v) => v.0 == 0,
            Number::Float(v) => v.0 == 0.0,
            Number::Double(v) => v.0 == 0.0,
        }
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::int32(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::int64(v)
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(Float(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::double(v)
    }
}
