//! Output formatting for CLI results

use serde::Serialize;

use crate::error::Result;

pub mod json;

/// Print `data` wrapped in the JSON envelope to stdout
pub fn print_json<T: Serialize + ?Sized>(data: &T, subject: &str) -> Result<()> {
    let output = json::format_json(data, subject)?;
    println!("{}", output);
    Ok(())
}
