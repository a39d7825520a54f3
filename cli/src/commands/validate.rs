//! Validate command implementation - check sequence files before aligning

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use refalign_core::alphabet::validate;
use refalign_core::io::{read_queries, read_reference};
use refalign_core::SequenceRole;

use crate::error::{CliError, CliResult};

/// Every validation failure in `queries`, in order
pub fn invalid_queries(queries: &[String]) -> Vec<String> {
    queries
        .iter()
        .enumerate()
        .filter_map(|(i, query)| validate(query, SequenceRole::Query(i)).err())
        .map(|err| err.to_string())
        .collect()
}

fn check_reference(path: &Path) -> CliResult<Vec<String>> {
    let reference = read_reference(path)?;
    match validate(&reference, SequenceRole::Reference) {
        Ok(()) => {
            log::info!("Reference {}: {} bases, valid", path.display(), reference.len());
            Ok(Vec::new())
        }
        Err(err) => Ok(vec![err.to_string()]),
    }
}

fn check_queries(path: &Path) -> CliResult<Vec<String>> {
    let queries = read_queries(path)?;
    let problems = invalid_queries(&queries);
    log::info!(
        "Queries {}: {} sequences, {} invalid",
        path.display(),
        queries.len(),
        problems.len()
    );
    Ok(problems)
}

pub fn execute(reference: Option<PathBuf>, qry: Option<PathBuf>) -> Result<()> {
    if reference.is_none() && qry.is_none() {
        return Err(CliError::validation("nothing to validate, pass --ref and/or --qry").into());
    }

    let mut problems = Vec::new();
    if let Some(path) = &reference {
        problems.extend(check_reference(path).context("Failed to read reference")?);
    }
    if let Some(path) = &qry {
        problems.extend(check_queries(path).context("Failed to read queries")?);
    }

    if problems.is_empty() {
        log::info!("All sequences are valid");
        return Ok(());
    }

    for problem in &problems {
        log::error!("{}", problem);
    }
    Err(CliError::validation(format!("{} invalid sequence(s)", problems.len())).into())
}
