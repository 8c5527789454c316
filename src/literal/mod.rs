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
//! Materializes numeric literal tokens, picking the kind from the literal's form.
//!
//! | form                     | kind                                        |
//! |--------------------------|---------------------------------------------|
//! | `42`                     | Int32, or per [`OversizedInteger`] if larger |
//! | `&HFF`                   | Int32 (bit pattern, `&HFFFFFFFF` is -1)     |
//! | `&HFF&`, `42&`           | Int64                                       |
//! | `1.5`, `1e3`, `42!`      | Float                                       |
//! | `1d3`, `1.5#`            | Double                                      |
//! | `42%`                    | Int32                                       |
use crate::{
    config::{LiteralConfig, OversizedInteger},
    error::ParseError,
    number::{Number, NumberKind},
};
use pest::{error::LineColLocation, iterators::Pair, Parser};

#[derive(pest_derive::Parser)]
#[grammar = "literal/literal.pest"]
struct LiteralParser;

type P<'a> = Pair<'a, Rule>;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Body<'a> {
    Hex(&'a str),
    Decimal {
        mantissa: &'a str,
        exponent: Option<(char, &'a str)>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Parts<'a> {
    negative: bool,
    body: Body<'a>,
    suffix: Option<NumberKind>,
}

/// Parses a literal with the default [`LiteralConfig`].
pub fn parse(text: &str) -> Result<Number, ParseError> {
    parse_with(&LiteralConfig::default(), text)
}

pub fn parse_with(config: &LiteralConfig, text: &str) -> Result<Number, ParseError> {
    let parts = split(text)?;
    if parts.suffix.is_some() && !config.type_suffixes {
        return Err(ParseError::new(None, text, "type suffixes are disabled"));
    }
    let number = match parts.body {
        Body::Hex(digits) => {
            if !config.hex {
                return Err(ParseError::new(None, text, "hexadecimal literals are disabled"));
            }
            hex(text, parts.negative, digits, parts.suffix)?
        }
        Body::Decimal { mantissa, exponent } => {
            decimal(config, text, parts.negative, mantissa, exponent, parts.suffix)?
        }
    };
    tracing::trace!(
        literal = text,
        kind = %number.kind(),
        value = %number,
        "materialized numeric literal"
    );
    Ok(number)
}

fn split(text: &str) -> Result<Parts<'_>, ParseError> {
    let literal = LiteralParser::parse(Rule::literal, text)
        .map_err(|e| {
            let column = match e.line_col {
                LineColLocation::Pos((_, col)) | LineColLocation::Span((_, col), _) => col,
            };
            ParseError::new(None, text, format!("unexpected input at column {}", column))
        })?
        .next()
        .ok_or_else(|| ParseError::new(None, text, "empty literal"))?;

    let mut negative = false;
    let mut body = None;
    let mut suffix = None;
    for p in literal.into_inner() {
        match p.as_rule() {
            Rule::sign => negative = p.as_str() == "-",
            Rule::hex => body = Some(Body::Hex(single(p, text)?.as_str())),
            Rule::decimal => body = Some(r_decimal(p, text)?),
            Rule::suffix => suffix = Some(r_suffix(&p, text)?),
            Rule::EOI => {}
            x => return Err(unexpected(text, x)),
        }
    }
    let body = body.ok_or_else(|| ParseError::new(None, text, "no digits"))?;
    Ok(Parts { negative, body, suffix })
}

fn unexpected(text: &str, rule: Rule) -> ParseError {
    ParseError::new(None, text, format!("unexpected token: {:?}", rule))
}

fn single<'a>(p: P<'a>, text: &str) -> Result<P<'a>, ParseError> {
    p.into_inner()
        .next()
        .ok_or_else(|| ParseError::new(None, text, "missing digits"))
}

fn r_decimal<'a>(p: P<'a>, text: &str) -> Result<Body<'a>, ParseError> {
    let mut mantissa = "";
    let mut exponent = None;
    for p in p.into_inner() {
        match p.as_rule() {
            Rule::mantissa => mantissa = p.as_str(),
            Rule::exponent => {
                let mut marker = 'e';
                let mut value = "";
                for p in p.into_inner() {
                    match p.as_rule() {
                        Rule::exponent_marker => {
                            let first = p.as_str().chars().next().unwrap_or('e');
                            marker = first.to_ascii_lowercase();
                        }
                        Rule::exponent_value => value = p.as_str(),
                        x => return Err(unexpected(text, x)),
                    }
                }
                exponent = Some((marker, value));
            }
            x => return Err(unexpected(text, x)),
        }
    }
    Ok(Body::Decimal { mantissa, exponent })
}

fn r_suffix(p: &P<'_>, text: &str) -> Result<NumberKind, ParseError> {
    match p.as_str() {
        "%" => Ok(NumberKind::Int32),
        "&" => Ok(NumberKind::Int64),
        "!" => Ok(NumberKind::Float),
        "#" => Ok(NumberKind::Double),
        s => Err(ParseError::new(None, text, format!("unknown suffix `{}`", s))),
    }
}

fn hex(
    text: &str,
    negative: bool,
    digits: &str,
    suffix: Option<NumberKind>,
) -> Result<Number, ParseError> {
    let kind = suffix.unwrap_or(NumberKind::Int32);
    let too_long = |e: std::num::ParseIntError| ParseError::new(Some(kind), text, e);
    let number = match kind {
        NumberKind::Int32 => {
            let bits = u32::from_str_radix(digits, 16).map_err(too_long)? as i32;
            Number::int32(if negative { bits.wrapping_neg() } else { bits })
        }
        NumberKind::Int64 => {
            let bits = u64::from_str_radix(digits, 16).map_err(too_long)? as i64;
            Number::int64(if negative { bits.wrapping_neg() } else { bits })
        }
        NumberKind::Float | NumberKind::Double => {
            return Err(ParseError::new(
                Some(kind),
                text,
                "hexadecimal literals are always integers",
            ))
        }
    };
    Ok(number)
}

fn decimal(
    config: &LiteralConfig,
    text: &str,
    negative: bool,
    mantissa: &str,
    exponent: Option<(char, &str)>,
    suffix: Option<NumberKind>,
) -> Result<Number, ParseError> {
    let sign = if negative { "-" } else { "" };
    let integral = exponent.is_none() && !mantissa.contains('.');
    let floating = |kind: NumberKind| {
        let numeral = match exponent {
            Some((_, e)) => format!("{}{}e{}", sign, mantissa, e),
            None => format!("{}{}", sign, mantissa),
        };
        Number::from_string(kind, &numeral).map_err(|e| ParseError::new(Some(kind), text, e.reason))
    };
    let integer = |kind: NumberKind| {
        if integral {
            Number::from_string(kind, &format!("{}{}", sign, mantissa))
                .map_err(|e| ParseError::new(Some(kind), text, e.reason))
        } else {
            Err(ParseError::new(Some(kind), text, "fraction or exponent on an integer"))
        }
    };

    match (suffix, exponent) {
        (Some(kind @ NumberKind::Int32), _) => integer(kind),
        (Some(kind @ NumberKind::Int64), _) => integer(kind),
        (Some(kind @ NumberKind::Float), _) => floating(kind),
        (Some(kind @ NumberKind::Double), _) => floating(kind),
        (None, Some(('d', _))) => floating(NumberKind::Double),
        (None, Some(_)) => floating(NumberKind::Float),
        (None, None) if !integral => floating(NumberKind::Float),
        (None, None) => integer(NumberKind::Int32).or_else(|e| match config.oversized_integer {
            OversizedInteger::Reject => Err(e),
            OversizedInteger::Promote => {
                let promoted = integer(NumberKind::Int64)
                    .or_else(|_| floating(NumberKind::Double))?;
                tracing::debug!(
                    literal = text,
                    kind = %promoted.kind(),
                    "integer literal does not fit into Integer"
                );
                Ok(promoted)
            }
        }),
    }
}
