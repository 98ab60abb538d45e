//! Normalization of the text fields behind GV generation

use crate::error::{ConfigError, GraphError, ParseError, Result};
use crate::graph::generator::{GvParams, MAX_GV_SIZE};

/// Raw GV form fields, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GvInput {
    pub name: String,
    pub size: String,
    pub dividers: String,
}

impl GvInput {
    pub fn new(name: impl Into<String>, size: impl Into<String>, dividers: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            dividers: dividers.into(),
        }
    }
}

/// Remove all whitespace from a name
pub fn normalize_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse the vertex count, an integer in `1..=MAX_GV_SIZE`
pub fn parse_size(text: &str) -> Result<i64> {
    let size = parse_integer(text)?;
    if size < 1 {
        return Err(ConfigError::InvalidSize(size).into());
    }
    if size > MAX_GV_SIZE {
        return Err(ConfigError::SizeTooLarge {
            size,
            max: MAX_GV_SIZE,
        }
        .into());
    }
    Ok(size)
}

/// Parse whitespace-separated positive dividers
pub fn parse_dividers(text: &str) -> Result<Vec<i64>> {
    let dividers = text
        .split_whitespace()
        .map(|token| -> Result<i64> {
            let divider = parse_integer(token)?;
            if divider < 1 {
                return Err(ConfigError::InvalidDivider(divider).into());
            }
            Ok(divider)
        })
        .collect::<Result<Vec<_>>>()?;

    if dividers.is_empty() {
        return Err(ConfigError::NoDividers.into());
    }
    Ok(dividers)
}

fn parse_integer(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| GraphError::from(ParseError::InvalidInteger(trimmed.to_string())))
}

impl GvParams {
    /// Strict conversion: the first bad field is reported
    pub fn from_input(input: &GvInput) -> Result<Self> {
        Ok(Self::new(
            normalize_name(&input.name),
            parse_size(&input.size)?,
            parse_dividers(&input.dividers)?,
        ))
    }

    /// Lenient conversion: unusable fields fall back to `default_size` and
    /// `default_divider`, with a warning for each substitution
    pub fn from_input_lenient(input: &GvInput, default_size: i64, default_divider: i64) -> Self {
        let size = parse_size(&input.size).unwrap_or_else(|err| {
            log::warn!("GV size `{}` rejected ({}), using {}", input.size, err, default_size);
            default_size
        });

        let mut dividers: Vec<i64> = input
            .dividers
            .split_whitespace()
            .map(|token| match parse_integer(token) {
                Ok(divider) if divider >= 1 => divider,
                _ => {
                    log::warn!("GV divider `{}` rejected, using {}", token, default_divider);
                    default_divider
                }
            })
            .collect();
        if dividers.is_empty() {
            log::warn!("No GV dividers given, using {}", default_divider);
            dividers.push(default_divider);
        }

        Self::new(normalize_name(&input.name), size, dividers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_parsing() {
        let params = GvParams::from_input(&GvInput::new(" Jane  Doe ", " 9 ", "2 3  5")).unwrap();
        assert_eq!(params, GvParams::new("JaneDoe", 9, vec![2, 3, 5]));
    }

    #[test]
    fn strict_rejects_bad_fields() {
        assert_eq!(
            parse_size("seven").unwrap_err(),
            GraphError::Parse(ParseError::InvalidInteger("seven".into()))
        );
        assert_eq!(
            parse_size("0").unwrap_err(),
            GraphError::Config(ConfigError::InvalidSize(0))
        );
        assert_eq!(
            parse_size("100000").unwrap_err(),
            GraphError::Config(ConfigError::SizeTooLarge {
                size: 100_000,
                max: MAX_GV_SIZE
            })
        );
        assert_eq!(
            parse_dividers("2 x").unwrap_err(),
            GraphError::Parse(ParseError::InvalidInteger("x".into()))
        );
        assert_eq!(
            parse_dividers("2 -4").unwrap_err(),
            GraphError::Config(ConfigError::InvalidDivider(-4))
        );
        assert_eq!(
            parse_dividers("   ").unwrap_err(),
            GraphError::Config(ConfigError::NoDividers)
        );
    }

    #[test]
    fn lenient_applies_defaults() {
        let input = GvInput::new("A B", "lots", "2 x 0");
        let params = GvParams::from_input_lenient(&input, 7, 1);
        assert_eq!(params, GvParams::new("AB", 7, vec![2, 1, 1]));

        let params = GvParams::from_input_lenient(&GvInput::new("A", "4", ""), 7, 1);
        assert_eq!(params.dividers, vec![1]);
        assert_eq!(params.size, 4);

        let params = GvParams::from_input_lenient(&GvInput::new("A", "5000000000", "2"), 7, 1);
        assert_eq!(params.size, 7);
    }
}
