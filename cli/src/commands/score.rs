//! Score command implementation - compare two sequences position by position

use anyhow::{Context, Result};
use refalign_core::alphabet::normalize;
use refalign_core::{ScorerFactory, ScorerKind};

use crate::config::Config;
use crate::error::CliError;

pub fn execute(config: &Config, reference: String, query: String, scorer: Option<ScorerKind>) -> Result<()> {
    let kind = scorer.unwrap_or(config.align.scorer);
    let scorer = ScorerFactory::create(kind);

    let reference = normalize(&reference);
    let query = normalize(&query);

    let score = scorer
        .score(reference.as_bytes(), query.as_bytes())
        .map_err(CliError::from)
        .with_context(|| format!("Failed to score {} against {}", query, reference))?;

    log::debug!("Scored with the {} scorer", scorer.name());
    println!("{}", score);
    Ok(())
}
