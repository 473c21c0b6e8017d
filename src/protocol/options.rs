//! Session options, settable through `setoption` and from the command line.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("unknown option: {0}")]
    Unknown(String),
    #[error("option {0} requires a value")]
    MissingValue(String),
    #[error("invalid value for option {name}: {value}")]
    InvalidValue { name: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Reset to the initial position once `condition` reports checkmate or stalemate
    pub auto_reset: bool,

    /// Echo every applied move as an info line
    pub debug: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            auto_reset: true,
            debug: false,
        }
    }
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option by name (case-insensitive).
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        let slot = if name.eq_ignore_ascii_case("AutoReset") {
            &mut self.auto_reset
        } else if name.eq_ignore_ascii_case("Debug") {
            &mut self.debug
        } else {
            return Err(OptionError::Unknown(name.to_string()));
        };

        let v_str = value.ok_or_else(|| OptionError::MissingValue(name.to_string()))?;
        *slot = parse_check(v_str).ok_or_else(|| OptionError::InvalidValue {
            name: name.to_string(),
            value: v_str.to_string(),
        })?;
        Ok(())
    }

    /// Option declarations with their current values, one line each.
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("option name AutoReset type check value {}", self.auto_reset),
            format!("option name Debug type check value {}", self.debug),
        ]
    }
}

fn parse_check(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Some(true),
        "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
