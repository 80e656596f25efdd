//! Cities command implementation.

use crate::cli::CitiesArgs;
use crate::error::Result;
use crate::output::Formatter;
use juxta_client::matching_cities;

/// Execute the cities command.
pub async fn execute_cities(args: CitiesArgs, formatter: &Formatter) -> Result<()> {
    let cities = matching_cities(args.filter.as_deref().unwrap_or_default());
    println!("{}", formatter.format_cities(&cities)?);
    Ok(())
}
