use crate::routes::RouteTable;
use anyhow::{anyhow, Result};
use std::fmt::Write;

#[derive(Debug)]
pub struct Args {
    pub path: Option<String>,
}

/// Render the route table, or the resolution of a single location.
/// # Errors
/// Returns an error if the location matches no route.
pub fn execute(args: &Args) -> Result<String> {
    let table = RouteTable::app();

    let Some(location) = args.path.as_deref() else {
        let mut output = String::new();
        for route in table.routes() {
            writeln!(output, "{route}")?;
        }
        return Ok(output.trim_end().to_string());
    };

    let resolution = table
        .resolve(location)
        .ok_or_else(|| anyhow!("no route matches {location}"))?;

    let mut output = format!("{location} -> {}", resolution.route.path);
    if let Some(name) = resolution.route.name {
        write!(output, " ({name})")?;
    }
    write!(output, " renders {}", resolution.view)?;
    if !resolution.redirected_from.is_empty() {
        write!(
            output,
            ", redirected from {}",
            resolution.redirected_from.join(" -> ")
        )?;
    }

    Ok(output)
}
