//! Operator confirmation before mutating anything
//!
//! The candidate list is printed first; unless auto-confirm is set, a single
//! line of input decides. Exactly a case-insensitive "y" proceeds - anything
//! else, including an empty line, refuses. There is no retry loop.
//!
//! The input source is injectable so tests can script answers instead of
//! reading the console.

use std::io::{self, BufRead, Write};

/// Source of a single line of operator input
pub trait LineReader {
    /// Read one line, without the trailing newline
    fn read_line(&mut self) -> io::Result<String>;
}

/// Production reader over stdin
pub struct StdinReader;

impl LineReader for StdinReader {
    fn read_line(&mut self) -> io::Result<String> {
        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Print the candidate list and ask whether to proceed
///
/// With `assume_yes` set no input is read at all and the answer is yes,
/// whatever the list contains.
pub fn confirm_upgrade(
    packages: &[String],
    eager_warning: bool,
    assume_yes: bool,
    reader: &mut dyn LineReader,
) -> io::Result<bool> {
    println!("The following packages are found to be outdated:");
    for package in packages {
        println!("\t{}", package);
    }
    println!();

    if eager_warning {
        println!("WARNING: Eager flag supplied. Additional packages beyond these will be upgraded");
    }

    if assume_yes {
        return Ok(true);
    }

    print!("Proceed (Y/n)? ");
    io::stdout().flush()?;

    let answer = reader.read_line()?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
