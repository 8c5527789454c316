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
use super::Number;
use crate::operand::Operand;
use std::cmp::Ordering;

enum Comparands {
    Integer(i64, i64),
    Floating(f64, f64),
}

/// Integers compare exactly among themselves. As soon as a floating kind is involved both
/// sides are compared as `f64`, which is exact for everything but an `Int64` beyond ±2^53.
fn comparands(left: Number, right: Number) -> Comparands {
    use Comparands::*;
    use Number::*;
    match (left, right) {
        (Int32(l), Int32(r)) => Integer(l.0.into(), r.0.into()),
        (Int32(l), Int64(r)) => Integer(l.0.into(), r.0),
        (Int32(l), Float(r)) => Floating(l.0.into(), r.0.into()),
        (Int32(l), Double(r)) => Floating(l.0.into(), r.0),

        (Int64(l), Int32(r)) => Integer(l.0, r.0.into()),
        (Int64(l), Int64(r)) => Integer(l.0, r.0),
        (Int64(l), Float(r)) => Floating(l.to_f64_lossy(), r.0.into()),
        (Int64(l), Double(r)) => Floating(l.to_f64_lossy(), r.0),

        (Float(l), Int32(r)) => Floating(l.0.into(), r.0.into()),
        (Float(l), Int64(r)) => Floating(l.0.into(), r.to_f64_lossy()),
        (Float(l), Float(r)) => Floating(l.0.into(), r.0.into()),
        (Float(l), Double(r)) => Floating(l.0.into(), r.0),

        (Double(l), Int32(r)) => Floating(l.0, r.0.into()),
        (Double(l), Int64(r)) => Floating(l.0, r.to_f64_lossy()),
        (Double(l), Float(r)) => Floating(l.0, r.0.into()),
        (Double(l), Double(r)) => Floating(l.0, r.0),
    }
}

impl Number {
    /// Value ordering across kinds, `None` if either side is NaN.
    pub fn compare(&self, other: &Number) -> Option<Ordering> {
        match comparands(*self, *other) {
            Comparands::Integer(l, r) => Some(l.cmp(&r)),
            Comparands::Floating(l, r) => l.partial_cmp(&r),
        }
    }

    fn compare_operand<O: Operand + ?Sized>(&self, other: &O) -> Option<Ordering> {
        other.as_number().and_then(|other| self.compare(&other))
    }

    /// `false` whenever `other` is not a number.
    pub fn less_than<O: Operand + ?Sized>(&self, other: &O) -> bool {
        self.compare_operand(other) == Some(Ordering::Less)
    }

    /// `false` whenever `other` is not a number.
    pub fn greater_than<O: Operand + ?Sized>(&self, other: &O) -> bool {
        self.compare_operand(other) == Some(Ordering::Greater)
    }

    /// `false` whenever `other` is not a number.
    pub fn equal_to<O: Operand + ?Sized>(&self, other: &O) -> bool {
        self.compare_operand(other) == Some(Ordering::Equal)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}
