/*!
 * Job Field Validation
 * Range and uniqueness checks applied while loading a job list
 */

use crate::core::errors::ParseError;
use crate::core::types::Tick;
use std::collections::HashSet;

/// Parse an integer field, reporting the offending token on failure
pub(super) fn parse_int(line: usize, field: &str, value: &str) -> Result<i64, ParseError> {
    value.parse::<i64>().map_err(|_| ParseError::InvalidInteger {
        line,
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Arrival time must be non-negative
pub(super) fn arrival(line: usize, value: i64) -> Result<Tick, ParseError> {
    Tick::try_from(value).map_err(|_| out_of_range(line, "arrival", value))
}

/// Burst and block interval must be strictly positive
pub(super) fn positive(line: usize, field: &str, value: i64) -> Result<Tick, ParseError> {
    if value <= 0 {
        return Err(out_of_range(line, field, value));
    }
    Ok(value as Tick)
}

fn out_of_range(line: usize, field: &str, value: i64) -> ParseError {
    ParseError::OutOfRange {
        line,
        field: field.to_string(),
        value,
    }
}

/// Tracks names already seen in a job list
#[derive(Debug, Default)]
pub(super) struct NameRegistry {
    seen: HashSet<String>,
}

impl NameRegistry {
    pub fn claim(&mut self, line: usize, name: &str) -> Result<(), ParseError> {
        if !self.seen.insert(name.to_string()) {
            return Err(ParseError::DuplicateName {
                line,
                name: name.to_string(),
            });
        }
        Ok(())
    }
}
