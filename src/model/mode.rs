use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which entity domain is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Bus,
    Rail,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Bus, Mode::Rail];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Bus => "bus",
            Mode::Rail => "rail",
        }
    }

    /// Title used for panel headings
    pub fn heading(self) -> &'static str {
        match self {
            Mode::Bus => "ROUTES",
            Mode::Rail => "RAIL LINES",
        }
    }

    pub fn other(self) -> Mode {
        match self {
            Mode::Bus => Mode::Rail,
            Mode::Rail => Mode::Bus,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bus" => Ok(Mode::Bus),
            "rail" => Ok(Mode::Rail),
            other => Err(format!("unknown mode '{}' (expected bus or rail)", other)),
        }
    }
}

/// A pair of values, one per mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerMode<T> {
    pub bus: T,
    pub rail: T,
}

impl<T> PerMode<T> {
    pub fn new(bus: T, rail: T) -> Self {
        PerMode { bus, rail }
    }

    pub fn get(&self, mode: Mode) -> &T {
        match mode {
            Mode::Bus => &self.bus,
            Mode::Rail => &self.rail,
        }
    }

    pub fn get_mut(&mut self, mode: Mode) -> &mut T {
        match mode {
            Mode::Bus => &mut self.bus,
            Mode::Rail => &mut self.rail,
        }
    }
}
