//! Align command implementation - place every query on the reference

use anyhow::{Context, Result};
use std::path::PathBuf;

use refalign_core::io::{write_report, ReportFormat, ReportTarget};
use refalign_core::{AlignRequest, AlignmentSession, ScorerFactory, ScorerKind};

use crate::config::Config;
use crate::error::CliError;

/// Turn the reference/query flags into an explicit request.
///
/// Inline values win over files for the reference; an empty `--query` list
/// means "not given" so that a missing batch is reported as such.
pub fn build_request(
    reference: Option<PathBuf>,
    ref_seq: Option<String>,
    qry: Option<PathBuf>,
    query: Vec<String>,
) -> AlignRequest {
    let mut request = AlignRequest::new();

    request = match (ref_seq, reference) {
        (Some(sequence), _) => request.with_reference(sequence),
        (None, Some(path)) => request.with_reference_file(path),
        (None, None) => request,
    };

    if !query.is_empty() {
        request = request.with_queries(query);
    } else if let Some(path) = qry {
        request = request.with_query_file(path);
    }

    request
}

/// Output precedence: --no-report, then --out, then the configured file,
/// then stdout when the configuration allows it
pub fn report_target(config: &Config, out: Option<PathBuf>, no_report: bool) -> ReportTarget {
    if no_report {
        return ReportTarget::None;
    }
    ReportTarget::from_options(out.or_else(|| config.align.output.clone()), config.general.report_stdout)
}

#[allow(clippy::too_many_arguments)]
pub fn execute(
    config: &Config,
    reference: Option<PathBuf>,
    ref_seq: Option<String>,
    qry: Option<PathBuf>,
    query: Vec<String>,
    scorer: Option<ScorerKind>,
    out: Option<PathBuf>,
    format: Option<ReportFormat>,
    no_report: bool,
) -> Result<()> {
    let kind = scorer.unwrap_or(config.align.scorer);
    let format = format.unwrap_or(config.align.format);
    let target = report_target(config, out, no_report);

    log::info!("Starting alignment with the {} scorer", kind);

    let request = build_request(reference, ref_seq, qry, query);
    let scorer = ScorerFactory::create(kind);

    let mut session = AlignmentSession::new();
    let results = session
        .align_all(request, scorer.as_ref())
        .map_err(CliError::from)
        .context("Alignment failed")?;

    let reference = session.reference().unwrap_or_default();
    let results = write_report(results, reference, &target, format)
        .map_err(CliError::from)
        .context("Failed to write alignment report")?;

    log::info!("Aligned {} queries", results.len());
    Ok(())
}
