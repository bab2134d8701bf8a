use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Manual,
    #[default]
    Auto,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Manual => Mode::Auto,
            Mode::Auto => Mode::Manual,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Manual => "manual",
            Mode::Auto => "auto",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("manual") {
            Ok(Mode::Manual)
        } else if s.eq_ignore_ascii_case("auto") {
            Ok(Mode::Auto)
        } else {
            Err(())
        }
    }
}

/// Body of `/api/mode` in both directions.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ModeFlag {
    pub mode: Mode,
}
