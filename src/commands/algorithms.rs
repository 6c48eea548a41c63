//! `graphtrace algorithms` command - list supported identifiers

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphtrace_core::error::Result;
use graphtrace_core::Algorithm;

/// Execute the algorithms command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = Algorithm::ALL
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "id": a.as_str(),
                        "summary": a.summary(),
                        "usesStart": a.uses_start(),
                        "requiresEnd": a.requires_end(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for algorithm in Algorithm::ALL {
                println!("{:<15} {}", algorithm.as_str(), algorithm.summary());
            }
        }
        OutputFormat::Records => {
            println!(
                "H graphtrace=1 records=1 mode=algorithms count={}",
                Algorithm::ALL.len()
            );
            for algorithm in Algorithm::ALL {
                println!(
                    "A {} uses_start={} requires_end={}",
                    algorithm,
                    algorithm.uses_start(),
                    algorithm.requires_end()
                );
            }
        }
    }
    Ok(())
}
