use std::fmt;
use std::str::FromStr;

use anyhow::Result;

/// A dynamically typed element, so a single sequence can mix numbers, text
/// and the empty marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    None,
    Text(String),
}

impl Value {
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(x) => *x,
            Value::Int(x) => *x != 0,
            Value::Float(x) => *x != 0.0,
            Value::None => false,
            Value::Text(x) => !x.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(x) => write!(f, "{}", x),
            Value::Float(x) => write!(f, "{}", x),
            Value::None => write!(f, "None"),
            Value::Text(x) => write!(f, "{}", x),
        }
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Int(x)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(x: bool) -> Self {
        Value::Bool(x)
    }
}

impl From<&str> for Value {
    fn from(x: &str) -> Self {
        Value::Text(x.to_owned())
    }
}

impl FromStr for Value {
    type Err = anyhow::Error;

    /// Reads a literal as typed on the command line. Anything that is not a
    /// keyword or a number is taken as text, with one layer of matching
    /// quotes removed.
    fn from_str(s: &str) -> Result<Self> {
        let value = match s {
            "None" => Value::None,
            "True" => Value::Bool(true),
            "False" => Value::Bool(false),
            _ => {
                if let Ok(x) = s.parse::<i64>() {
                    Value::Int(x)
                } else if let Ok(x) = s.parse::<f64>() {
                    Value::Float(x)
                } else {
                    Value::Text(unquote(s).to_owned())
                }
            }
        };
        Ok(value)
    }
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_table() {
        assert!(Value::Int(1).is_truthy());
        assert!(Value::Int(-7).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(Value::Float(0.5).is_truthy());
        assert!(!Value::Float(0.0).is_truthy());
        assert!(!Value::Float(-0.0).is_truthy());
        assert!(Value::Float(f64::NAN).is_truthy());
        assert!(!Value::None.is_truthy());
        assert!(Value::Text("fkj".into()).is_truthy());
        assert!(Value::Text(" ".into()).is_truthy());
        assert!(!Value::Text(String::new()).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
    }

    #[test]
    fn display() {
        assert_eq!(Value::Int(33).to_string(), "33");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::None.to_string(), "None");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Text("fkj".into()).to_string(), "fkj");
    }

    #[test]
    fn parse_literals() {
        assert_eq!("42".parse::<Value>().unwrap(), Value::Int(42));
        assert_eq!("-3".parse::<Value>().unwrap(), Value::Int(-3));
        assert_eq!("2.5".parse::<Value>().unwrap(), Value::Float(2.5));
        assert_eq!("None".parse::<Value>().unwrap(), Value::None);
        assert_eq!("False".parse::<Value>().unwrap(), Value::Bool(false));
        assert_eq!("fkj".parse::<Value>().unwrap(), Value::Text("fkj".into()));
        assert_eq!(r#""0""#.parse::<Value>().unwrap(), Value::Text("0".into()));
        assert_eq!("''".parse::<Value>().unwrap(), Value::Text(String::new()));
        assert_eq!("".parse::<Value>().unwrap(), Value::Text(String::new()));
        assert_eq!("'".parse::<Value>().unwrap(), Value::Text("'".into()));
    }
}
