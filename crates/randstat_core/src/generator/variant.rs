//! Generator variant selector.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseVariantError;

/// Update rule used by a [`Generator`](super::Generator).
///
/// # Parsing
///
/// Accepts the kebab-case name, a short alias, or the menu number used by
/// the command line front end:
///
/// | Input                                  | Variant              |
/// |----------------------------------------|----------------------|
/// | `xorshift`, `xor-shift`, `1`           | `XorShift`           |
/// | `lcg`, `linear-congruential`, `2`      | `LinearCongruential` |
///
/// # Examples
///
/// ```rust
/// use randstat_core::generator::Variant;
///
/// assert_eq!("xor-shift".parse::<Variant>().unwrap(), Variant::XorShift);
/// assert_eq!("2".parse::<Variant>().unwrap(), Variant::LinearCongruential);
/// assert_eq!(Variant::LinearCongruential.to_string(), "linear-congruential");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Variant {
    /// Xor-shift steps on a 64-bit register.
    XorShift,
    /// Linear congruential step on a 32-bit register.
    LinearCongruential,
}

impl Variant {
    /// All variants, in menu order.
    pub const ALL: [Variant; 2] = [Variant::XorShift, Variant::LinearCongruential];

    /// Kebab-case name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::XorShift => "xor-shift",
            Variant::LinearCongruential => "linear-congruential",
        }
    }

    /// Human-readable label for menus and report headers.
    pub fn label(&self) -> &'static str {
        match self {
            Variant::XorShift => "XOR-shift",
            Variant::LinearCongruential => "Linear congruential",
        }
    }

    /// One-based position in the interactive menu.
    pub fn menu_number(&self) -> u8 {
        match self {
            Variant::XorShift => 1,
            Variant::LinearCongruential => 2,
        }
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xorshift" | "xor-shift" | "1" => Ok(Variant::XorShift),
            "lcg" | "linear-congruential" | "2" => Ok(Variant::LinearCongruential),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
