// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CLIArg, CLICommand, OutputFormat};
use crate::{AccessPolicy, AccessResult, BoundedAccessor, IntoOffsetRange};
use miette::IntoDiagnostic;
use serde::Serialize;

/// Runs the parsed command and returns what should be printed to stdout.
///
/// # Errors
///
/// The [`AccessError`](crate::AccessError) from the underlying access, or a failure to
/// produce JSON output. `main` reports either one as a [`miette`] diagnostic.
pub fn run_command(cli_arg: &CLIArg) -> miette::Result<String> {
    let policy = cli_arg.global_options.policy;
    let output = cli_arg.global_options.output;

    let result = match &cli_arg.command {
        CLICommand::Range { start, end, items } => {
            let requested = (*start..*end).to_offset_range(items.len());
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Slicing",
                range = %requested,
                length = items.len(),
                policy = %policy
            );
            items.slice_with_policy(requested, policy)?
        }
        CLICommand::Index { index, items } => {
            tracing::debug!(
                message = "Indexing",
                index = *index,
                length = items.len(),
                policy = %policy
            );
            items.element_with_policy(*index, policy)?
        }
    };

    tracing::debug!(message = "Access succeeded", absent = result.is_absent());

    format_access_result(result, policy, output)
}

/// JSON shape: `{"policy": .., "outcome": .., "value": ..}`, `value` is left out when
/// the outcome is `absent`.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    policy: AccessPolicy,
    #[serde(flatten)]
    result: AccessResult<'a, String>,
}

/// # Errors
///
/// If the JSON serialization fails.
pub fn format_access_result(
    result: AccessResult<'_, String>,
    policy: AccessPolicy,
    output: OutputFormat,
) -> miette::Result<String> {
    match output {
        OutputFormat::Text => Ok(match result {
            AccessResult::Subsequence(items) => format!("[{}]", items.join(", ")),
            AccessResult::Element(item) => item.clone(),
            AccessResult::Absent => "absent".to_string(),
        }),
        OutputFormat::Json => {
            let report = JsonReport { policy, result };
            serde_json::to_string(&report).into_diagnostic()
        }
    }
}
