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
use crate::number::{Double, Float, Int32, Int64, Number, NumberKind};
use quickcheck::{Arbitrary, Gen};

impl Arbitrary for NumberKind {
    fn arbitrary(g: &mut Gen) -> Self {
        g.choose(&NumberKind::ALL).copied().unwrap_or(NumberKind::Int32)
    }
}

impl Arbitrary for Int32 {
    fn arbitrary(g: &mut Gen) -> Self {
        i32::arbitrary(g).into()
    }
}

impl Arbitrary for Int64 {
    fn arbitrary(g: &mut Gen) -> Self {
        i64::arbitrary(g).into()
    }
}

impl Arbitrary for Float {
    fn arbitrary(g: &mut Gen) -> Self {
        f32::arbitrary(g).into()
    }
}

impl Arbitrary for Double {
    fn arbitrary(g: &mut Gen) -> Self {
        f64::arbitrary(g).into()
    }
}

impl Arbitrary for Number {
    fn arbitrary(g: &mut Gen) -> Self {
        match NumberKind::arbitrary(g) {
            NumberKind::Int32 => Number::Int32(Int32::arbitrary(g)),
            NumberKind::Int64 => Number::Int64(Int64::arbitrary(g)),
            NumberKind::Float => Number::Float(Float::arbitrary(g)),
            NumberKind::Double => Number::Double(Double::arbitrary(g)),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match *self {
            Number::Int32(v) => Box::new(v.native_value().shrink().map(Number::int32)),
            Number::Int64(v) => Box::new(v.native_value().shrink().map(Number::int64)),
            Number::Float(v) => {
                Box::new(v.native_value().shrink().map(|x| Number::Float(x.into())))
            }
            Number::Double(v) => Box::new(v.native_value().shrink().map(Number::double)),
        }
    }
}
