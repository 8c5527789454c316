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
use crate::{error::NumericError, op::ArithOp};
use num_traits::{Pow, Zero};
use std::ops::{Add, Mul, Neg, Sub};

/// Both operands, already converted to the representation of the result.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Operands {
    Int32(i32, i32),
    Int64(i64, i64),
    /// computed in `f64` and rounded once when the `Float` result is built
    Float(f64, f64),
    Double(f64, f64),
}

impl Operands {
    fn map(
        self,
        int32: impl FnOnce(i32, i32) -> i32,
        int64: impl FnOnce(i64, i64) -> i64,
        floating: impl FnOnce(f64, f64) -> f64,
    ) -> Number {
        match self {
            Operands::Int32(l, r) => Number::int32(int32(l, r)),
            Operands::Int64(l, r) => Number::int64(int64(l, r)),
            Operands::Float(l, r) => Number::float(floating(l, r)),
            Operands::Double(l, r) => Number::double(floating(l, r)),
        }
    }

    fn integer_division_by_zero(&self) -> bool {
        matches!(self, Operands::Int32(_, 0) | Operands::Int64(_, 0))
    }
}

impl Int32 {
    fn operands(self, rhs: Number) -> Operands {
        match rhs {
            Number::Int32(r) => Operands::Int32(self.0, r.0),
            Number::Int64(r) => Operands::Int64(self.0.into(), r.0),
            Number::Float(r) => Operands::Float(self.0.into(), r.0.into()),
            Number::Double(r) => Operands::Double(self.0.into(), r.0),
        }
    }

    pub fn kind(self) -> NumberKind {
        Self::KIND
    }

    pub fn negate(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl Int64 {
    fn operands(self, rhs: Number) -> Operands {
        match rhs {
            Number::Int32(r) => Operands::Int64(self.0, r.0.into()),
            Number::Int64(r) => Operands::Int64(self.0, r.0),
            Number::Float(r) => Operands::Float(self.to_f64_lossy(), r.0.into()),
            Number::Double(r) => Operands::Double(self.to_f64_lossy(), r.0),
        }
    }

    pub fn kind(self) -> NumberKind {
        Self::KIND
    }

    pub fn negate(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl Float {
    fn operands(self, rhs: Number) -> Operands {
        match rhs {
            Number::Int32(r) => Operands::Float(self.0.into(), r.0.into()),
            Number::Int64(r) => Operands::Float(self.0.into(), r.to_f64_lossy()),
            Number::Float(r) => Operands::Float(self.0.into(), r.0.into()),
            Number::Double(r) => Operands::Double(self.0.into(), r.0),
        }
    }

    pub fn kind(self) -> NumberKind {
        Self::KIND
    }

    pub fn negate(self) -> Self {
        Self(-self.0)
    }
}

impl Double {
    fn operands(self, rhs: Number) -> Operands {
        match rhs {
            Number::Int32(r) => Operands::Double(self.0, r.0.into()),
            Number::Int64(r) => Operands::Double(self.0, r.to_f64_lossy()),
            Number::Float(r) => Operands::Double(self.0, r.0.into()),
            Number::Double(r) => Operands::Double(self.0, r.0),
        }
    }

    pub fn kind(self) -> NumberKind {
        Self::KIND
    }

    pub fn negate(self) -> Self {
        Self(-self.0)
    }
}

impl Number {
    fn operands(self, rhs: Number) -> Operands {
        match self {
            Number::Int32(l) => l.operands(rhs),
            Number::Int64(l) => l.operands(rhs),
            Number::Float(l) => l.operands(rhs),
            Number::Double(l) => l.operands(rhs),
        }
    }

    /// Operand value for `^`, which always computes in `f64`.
    fn pow_operand(self) -> f64 {
        match self {
            Number::Int32(v) => v.0.into(),
            Number::Int64(v) => v.to_f64_lossy(),
            Number::Float(v) => v.0.into(),
            Number::Double(v) => v.0,
        }
    }

    pub fn negate(self) -> Self {
        match self {
            Number::Int32(v) => Number::Int32(v.negate()),
            Number::Int64(v) => Number::Int64(v.negate()),
            Number::Float(v) => Number::Float(v.negate()),
            Number::Double(v) => Number::Double(v.negate()),
        }
    }
}

enum Quotient {
    Exact(i64),
    Truncated(f64),
}

fn int_divide(
    left: NumberKind,
    operands: Operands,
    right: NumberKind,
) -> Result<Number, NumericError> {
    let zero = || NumericError::DivideByZero {
        op: ArithOp::IntDiv,
        left,
        right,
    };
    let quotient = match operands {
        Operands::Int32(_, 0) | Operands::Int64(_, 0) => return Err(zero()),
        Operands::Int32(l, r) => Quotient::Exact(l.wrapping_div(r).into()),
        Operands::Int64(l, r) => Quotient::Exact(l.wrapping_div(r)),
        Operands::Float(l, r) | Operands::Double(l, r) => {
            if r.is_zero() {
                return Err(zero());
            }
            Quotient::Truncated((l / r).trunc())
        }
    };
    // narrowing an exact quotient wraps; a floating one saturates and NaN becomes 0
    Ok(match (right, quotient) {
        (NumberKind::Int64, Quotient::Exact(q)) => Number::int64(q),
        (NumberKind::Int64, Quotient::Truncated(q)) => Number::int64(q as i64),
        (NumberKind::Int32, Quotient::Exact(q))
        | (NumberKind::Float, Quotient::Exact(q))
        | (NumberKind::Double, Quotient::Exact(q)) => Number::int32(q as i32),
        (NumberKind::Int32, Quotient::Truncated(q))
        | (NumberKind::Float, Quotient::Truncated(q))
        | (NumberKind::Double, Quotient::Truncated(q)) => Number::int32(q as i32),
    })
}

fn pow(base: Number, exponent: Number) -> Number {
    let value = base.pow_operand().pow(exponent.pow_operand());
    match (base.kind(), exponent.kind()) {
        (NumberKind::Double, _) | (_, NumberKind::Double) => Number::double(value),
        _ => Number::float(value),
    }
}

macro_rules! arithmetic {
    ($($t:ident),*) => {$(
        impl $t {
            pub fn add(self, rhs: impl Into<Number>) -> Number {
                self.operands(rhs.into()).map(i32::wrapping_add, i64::wrapping_add, |l, r| l + r)
            }

            pub fn subtract(self, rhs: impl Into<Number>) -> Number {
                self.operands(rhs.into()).map(i32::wrapping_sub, i64::wrapping_sub, |l, r| l - r)
            }

            pub fn multiply(self, rhs: impl Into<Number>) -> Number {
                self.operands(rhs.into()).map(i32::wrapping_mul, i64::wrapping_mul, |l, r| l * r)
            }

            /// `/`, truncating when both sides are integers.
            ///
            /// Fails only for an integer division by zero, floating-point division follows
            /// IEEE 754.
            pub fn divide(self, rhs: impl Into<Number>) -> Result<Number, NumericError> {
                let rhs = rhs.into();
                let operands = self.operands(rhs);
                if operands.integer_division_by_zero() {
                    return Err(NumericError::DivideByZero {
                        op: ArithOp::Div,
                        left: self.kind(),
                        right: rhs.kind(),
                    });
                }
                Ok(operands.map(i32::wrapping_div, i64::wrapping_div, |l, r| l / r))
            }

            /// `MOD`: remainder of truncating division, its sign follows the dividend.
            pub fn modulo(self, rhs: impl Into<Number>) -> Result<Number, NumericError> {
                let rhs = rhs.into();
                let operands = self.operands(rhs);
                if operands.integer_division_by_zero() {
                    return Err(NumericError::DivideByZero {
                        op: ArithOp::Mod,
                        left: self.kind(),
                        right: rhs.kind(),
                    });
                }
                Ok(operands.map(i32::wrapping_rem, i64::wrapping_rem, |l, r| l % r))
            }

            /// `\`: the quotient truncated toward zero, as `Int64` if `rhs` is an `Int64` and as
            /// `Int32` otherwise.
            pub fn int_divide(self, rhs: impl Into<Number>) -> Result<Number, NumericError> {
                let rhs = rhs.into();
                int_divide(self.kind(), self.operands(rhs), rhs.kind())
            }

            /// `^`: `Double` if either side is a `Double`, `Float` otherwise.
            pub fn pow(self, exponent: impl Into<Number>) -> Number {
                pow(self.into(), exponent.into())
            }
        }
    )*};
}

arithmetic!(Int32, Int64, Float, Double, Number);

impl Add for Number {
    type Output = Number;
    fn add(self, rhs: Self) -> Self::Output {
        Number::add(self, rhs)
    }
}

impl Sub for Number {
    type Output = Number;
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul for Number {
    type Output = Number;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Neg for Number {
    type Output = Number;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}
