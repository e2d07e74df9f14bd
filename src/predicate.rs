use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::value::Value;

/// Named tests that can be chosen from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Predicate {
    /// Keep elements that are truthy on their own.
    #[default]
    Truthy,
    Even,
    Odd,
}

impl Predicate {
    pub fn test(&self, value: &Value) -> Result<bool> {
        match self {
            Predicate::Truthy => Ok(value.is_truthy()),
            Predicate::Even => is_even(value, *self),
            Predicate::Odd => Ok(!is_even(value, *self)?),
        }
    }
}

fn is_even(value: &Value, predicate: Predicate) -> Result<bool> {
    match value {
        Value::Int(x) => Ok(x % 2 == 0),
        Value::Bool(x) => Ok(!*x),
        // whole floats may lie outside the i64 range
        Value::Float(x) if x.is_finite() && x.fract() == 0.0 => Ok(x % 2.0 == 0.0),
        _ => Err(anyhow!(
            "predicate {} expects an integral number, got {:?}",
            predicate,
            value
        )),
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Truthy => write!(f, "truthy"),
            Predicate::Even => write!(f, "even"),
            Predicate::Odd => write!(f, "odd"),
        }
    }
}

impl FromStr for Predicate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "truthy" => Ok(Predicate::Truthy),
            "even" => Ok(Predicate::Even),
            "odd" => Ok(Predicate::Odd),
            other => Err(anyhow!(
                "unknown predicate {:?}, expected one of: truthy, even, odd",
                other
            )),
        }
    }
}
