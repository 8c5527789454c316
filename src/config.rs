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
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What to do with an unsuffixed decimal integer literal that does not fit into an `Int32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OversizedInteger {
    /// use `Int64` if it fits there, `Double` otherwise
    Promote,
    Reject,
}

/// Settings for [`literal::parse_with`](crate::literal::parse_with).
///
/// Can be read from JSON, missing keys take their default:
///
/// ```
/// use brs_numeric::config::{LiteralConfig, OversizedInteger};
///
/// let config: LiteralConfig = r#"{ "oversizedInteger": "reject" }"#.parse().unwrap();
/// assert_eq!(config.oversized_integer, OversizedInteger::Reject);
/// assert!(config.type_suffixes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LiteralConfig {
    /// accept the `%`, `&`, `!` and `#` kind suffixes
    pub type_suffixes: bool,
    /// accept `&H` hexadecimal literals
    pub hex: bool,
    pub oversized_integer: OversizedInteger,
}

impl Default for LiteralConfig {
    fn default() -> Self {
        Self {
            type_suffixes: true,
            hex: true,
            oversized_integer: OversizedInteger::Promote,
        }
    }
}

impl FromStr for LiteralConfig {
    type Err = serde_json::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config: LiteralConfig = "{}".parse().unwrap();
        assert_eq!(config, LiteralConfig::default());
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"typeSuffixes":true,"hex":true,"oversizedInteger":"promote"}"#
        );
    }

    #[test]
    fn overrides() {
        let config: LiteralConfig = r#"{ "typeSuffixes": false, "hex": false }"#.parse().unwrap();
        assert!(!config.type_suffixes);
        assert!(!config.hex);
        assert_eq!(config.oversized_integer, OversizedInteger::Promote);

        assert!(r#"{ "oversizedInteger": "wrap" }"#.parse::<LiteralConfig>().is_err());
    }
}
