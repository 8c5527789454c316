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
use crate::{number::NumberKind, op::ArithOp};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};

/// Literal text that is not a valid numeral for the requested kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// `None` when the kind was to be inferred from the literal itself
    pub kind: Option<NumberKind>,
    pub text: String,
    pub reason: String,
}

impl ParseError {
    pub(crate) fn new(kind: Option<NumberKind>, text: &str, reason: impl ToString) -> Self {
        Self {
            kind,
            text: text.to_owned(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            Some(kind) => write!(
                f,
                "`{}` is not a valid {} literal: {}",
                self.text, kind, self.reason
            ),
            None => write!(f, "`{}` is not a valid numeric literal: {}", self.text, self.reason),
        }
    }
}
impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum NumericError {
    #[display(fmt = "{}", _0)]
    Parse(ParseError),
    #[display(
        fmt = "binary operation {} cannot be applied to {} and {}",
        "op.as_str()",
        left,
        right
    )]
    Type {
        op: ArithOp,
        left: NumberKind,
        right: String,
    },
    #[display(fmt = "divide by zero in {} {} {}", left, "op.as_str()", right)]
    DivideByZero {
        op: ArithOp,
        left: NumberKind,
        right: NumberKind,
    },
}

impl From<ParseError> for NumericError {
    fn from(e: ParseError) -> Self {
        NumericError::Parse(e)
    }
}
