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
//! The numeric tower of a BrightScript interpreter.
//!
//! BrightScript knows four numeric kinds: `Integer` (32 bit), `LongInteger` (64 bit), `Float`
//! (single precision) and `Double`. Binary operators promote their operands along a fixed
//! lattice, integer arithmetic wraps silently and every `Float` result is rounded to single
//! precision exactly once.
//!
//! ```
//! use brs_numeric::{literal, ArithOp, CmpOp, Number, NumberKind};
//!
//! let a = literal::parse("7").unwrap();
//! let b = literal::parse("2.5").unwrap();
//! let sum = a.apply(ArithOp::Add, &b).unwrap();
//! assert_eq!(sum.kind(), NumberKind::Float);
//! assert_eq!(sum.to_string(), "9.5");
//!
//! // `\` takes its kind from the divisor
//! let q = Number::int64(7).int_divide(Number::int32(2)).unwrap();
//! assert_eq!(q.kind(), NumberKind::Int32);
//! assert!(q.test(CmpOp::Eq, &Number::double(3.0)));
//! ```
//!
//! Values of the interpreter that are not numbers take part through the [`Operand`] trait.
//!
//! # Feature flags
//!
//! - `arb`: provide [`quickcheck::Arbitrary`](https://docs.rs/quickcheck) instances for all
//!   number types and operators
#![allow(clippy::unreadable_literal)]
#![allow(clippy::inconsistent_digit_grouping)]

#[cfg(any(test, feature = "arb"))]
mod arb;
pub mod config;
pub mod error;
pub mod literal;
pub mod number;
pub mod op;
pub mod operand;

pub use config::LiteralConfig;
pub use error::{NumericError, ParseError};
pub use number::{Double, Float, Int32, Int64, Number, NumberKind};
pub use op::{ArithOp, CmpOp};
pub use operand::Operand;
