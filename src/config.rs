//! # Module: `config`
//!
//! The game variants the crate knows how to set up. A [`Variant`] names a board shape,
//! a capture mode and an opening position; everything rule related is derived from it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::notation::{DRAUGHTS_START, LASCA_START};
use crate::board::{CaptureMode, Checkerboard};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 7x7 board, captured pieces are stacked under the capturer
    #[default]
    Lasca,
    /// 8x8 board, captured pieces are removed
    Draughts,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Lasca, Variant::Draughts];

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Lasca => "lasca",
            Variant::Draughts => "draughts",
        }
    }

    /// The board this variant is played on
    pub fn geometry(self) -> Checkerboard {
        match self {
            Variant::Lasca => Checkerboard::new(7, 7, CaptureMode::Stack),
            Variant::Draughts => Checkerboard::new(8, 8, CaptureMode::Remove),
        }
    }

    /// Opening position in board notation
    pub const fn opening(self) -> &'static str {
        match self {
            Variant::Lasca => LASCA_START,
            Variant::Draughts => DRAUGHTS_START,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown variant: '{0}', expected 'lasca' or 'draughts'")]
pub struct VariantParseError(pub String);

impl FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lasca" => Ok(Variant::Lasca),
            "draughts" | "checkers" => Ok(Variant::Draughts),
            _ => Err(VariantParseError(s.to_string())),
        }
    }
}
