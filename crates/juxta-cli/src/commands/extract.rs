//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::output::Formatter;
use juxta_extractor::extract;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Execute the extract command.
pub async fn execute_extract(args: ExtractArgs, formatter: &Formatter) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let parsed = extract(&text);
    println!("{}", formatter.format_extracted(parsed.as_ref())?);
    Ok(())
}

/// Read response text from a file, or stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
