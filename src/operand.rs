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
//! The boundary between numbers and the rest of the interpreter's values.
//!
//! The evaluator implements [`Operand`] for its own value type and then hands any right-hand
//! side to [`Number::apply`] or [`Number::test`] without checking its type first.
use crate::{
    error::NumericError,
    number::{Double, Float, Int32, Int64, Number},
    op::{ArithOp, CmpOp},
};
use std::borrow::Cow;

/// Anything that may appear as the right operand of a numeric operation.
pub trait Operand {
    /// `None` if this value is not numeric.
    fn as_number(&self) -> Option<Number>;

    /// Type name used in error messages, e.g. `String` or `roArray`.
    fn type_name(&self) -> Cow<'_, str>;
}

impl Operand for Number {
    fn as_number(&self) -> Option<Number> {
        Some(*self)
    }

    fn type_name(&self) -> Cow<'_, str> {
        Cow::Owned(self.kind().to_string())
    }
}

macro_rules! operand {
    ($($t:ident),*) => {$(
        impl Operand for $t {
            fn as_number(&self) -> Option<Number> {
                Some(Number::$t(*self))
            }

            fn type_name(&self) -> Cow<'_, str> {
                Cow::Owned(Self::KIND.to_string())
            }
        }
    )*};
}

operand!(Int32, Int64, Float, Double);

impl Number {
    /// Applies an arithmetic operator, failing with a type error if `rhs` is not a number.
    pub fn apply(self, op: ArithOp, rhs: &dyn Operand) -> Result<Number, NumericError> {
        let r = rhs.as_number().ok_or_else(|| NumericError::Type {
            op,
            left: self.kind(),
            right: rhs.type_name().into_owned(),
        })?;
        match op {
            ArithOp::Add => Ok(self.add(r)),
            ArithOp::Sub => Ok(self.subtract(r)),
            ArithOp::Mul => Ok(self.multiply(r)),
            ArithOp::Div => self.divide(r),
            ArithOp::Mod => self.modulo(r),
            ArithOp::IntDiv => self.int_divide(r),
            ArithOp::Pow => Ok(self.pow(r)),
        }
    }

    /// Evaluates a comparison; every comparison with a non-number is `false`, `<>` included.
    pub fn test(self, op: CmpOp, rhs: &dyn Operand) -> bool {
        if rhs.as_number().is_none() {
            return false;
        }
        match op {
            CmpOp::Lt => self.less_than(rhs),
            CmpOp::Le => self.less_than(rhs) || self.equal_to(rhs),
            CmpOp::Gt => self.greater_than(rhs),
            CmpOp::Ge => self.greater_than(rhs) || self.equal_to(rhs),
            CmpOp::Eq => self.equal_to(rhs),
            CmpOp::Ne => !self.equal_to(rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::NumberKind;
    use spectral::{assert_that, string::StrAssertions};

    /// stand-in for the interpreter's non-numeric values
    enum Other {
        Str(String),
        Invalid,
        Num(Number),
    }

    impl Operand for Other {
        fn as_number(&self) -> Option<Number> {
            match self {
                Other::Num(n) => Some(*n),
                Other::Str(_) | Other::Invalid => None,
            }
        }

        fn type_name(&self) -> Cow<'_, str> {
            match self {
                Other::Str(_) => Cow::Borrowed("String"),
                Other::Invalid => Cow::Borrowed("Invalid"),
                Other::Num(n) => n.type_name(),
            }
        }
    }

    #[test]
    fn apply_dispatches() {
        let seven = Number::int32(7);
        let two = Other::Num(Number::int64(2));
        let results = ArithOp::ALL
            .iter()
            .map(|op| seven.apply(*op, &two).unwrap())
            .map(|n| (n.kind(), n.to_string()))
            .collect::<Vec<_>>();
        use NumberKind as K;
        assert_eq!(
            results,
            vec![
                (K::Int64, "9".to_owned()),
                (K::Int64, "5".to_owned()),
                (K::Int64, "14".to_owned()),
                (K::Int64, "3".to_owned()),
                (K::Int64, "1".to_owned()),
                (K::Int64, "3".to_owned()),
                (K::Float, "49".to_owned()),
            ]
        );
    }

    #[test]
    fn non_numeric_right_operand_is_a_type_error() {
        for op in ArithOp::ALL {
            let err = Number::float(1.5)
                .apply(*op, &Other::Str("a".to_owned()))
                .unwrap_err();
            assert_eq!(
                err,
                NumericError::Type {
                    op: *op,
                    left: NumberKind::Float,
                    right: "String".to_owned()
                }
            );
        }
        let err = Number::int32(1).apply(ArithOp::Add, &Other::Invalid).unwrap_err();
        assert_that(&err.to_string()).contains("cannot be applied to Integer and Invalid");
    }

    #[test]
    fn division_errors_pass_through() {
        let err = Number::int32(1).apply(ArithOp::IntDiv, &Number::int32(0)).unwrap_err();
        assert_that(&err.to_string()).contains("divide by zero");
    }

    #[test]
    fn comparisons() {
        let one = Number::int32(1);
        let x = Other::Num(Number::double(1.0));
        let results = CmpOp::ALL.iter().map(|op| one.test(*op, &x)).collect::<Vec<_>>();
        assert_eq!(results, vec![false, true, false, true, true, false]);

        let s = Other::Str("1".to_owned());
        for op in CmpOp::ALL {
            assert!(!one.test(*op, &s), "{} against a string", op);
            assert!(!one.test(*op, &Other::Invalid), "{} against invalid", op);
        }
    }

    #[test]
    fn variants_are_operands() {
        assert_eq!(Int64::MAX.type_name(), "LongInteger");
        assert!(Number::int64(i64::MAX).equal_to(&Int64::MAX));
        assert!(Number::float(1.0).less_than(&Double::from(1.5f64)));
    }
}
