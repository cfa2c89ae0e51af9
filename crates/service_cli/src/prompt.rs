//! Interactive generator selection
//!
//! Used by `randstat run` when no variant comes from flags, environment or
//! config file.

use std::io::{BufRead, Write};

use randstat_core::Variant;

use crate::{CliError, Result};

/// Print the generator menu and read the user's choice
pub fn prompt_variant<R, W>(input: &mut R, output: &mut W) -> Result<Variant>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Choose a generator:\n")?;
    for variant in Variant::ALL {
        writeln!(output, "{}. {}", variant.menu_number(), variant.label())?;
    }
    writeln!(output)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::invalid_argument("no generator choice given"));
    }

    line.trim().parse::<Variant>().map_err(|_| {
        CliError::invalid_argument(format!(
            "Unknown generator choice: {}. Supported: 1, 2",
            line.trim()
        ))
    })
}
