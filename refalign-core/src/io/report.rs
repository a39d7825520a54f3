//! Rendering of alignment batches
//!
//! Text reports print the reference once, then one block per alignment.
//! JSON reports wrap the same data in a single pretty-printed object.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AlignError, Result};
use crate::types::AlignmentResult;

/// Where a report goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportTarget {
    /// Emit nothing
    #[default]
    None,
    Stdout,
    File(PathBuf),
}

impl ReportTarget {
    /// `Some(path)` writes to a file, `None` falls back to stdout when requested
    pub fn from_options(path: Option<PathBuf>, stdout: bool) -> Self {
        match path {
            Some(path) => ReportTarget::File(path),
            None if stdout => ReportTarget::Stdout,
            None => ReportTarget::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    reference: &'a str,
    alignments: &'a [AlignmentResult],
}

/// Render `results` to `writer` in the plain-text block layout
pub fn render_text<W: Write>(mut writer: W, reference: &str, results: &[AlignmentResult]) -> std::io::Result<()> {
    writeln!(writer, "Reference sequence : {}", reference)?;
    writeln!(writer)?;

    for result in results {
        writeln!(writer, "Portion of the reference sequence : {}", result.matched_segment)?;
        writeln!(writer, "Sequence queried : {}", result.query)?;
        writeln!(
            writer,
            "Position for the best alignment in the reference sequence : {}",
            result.position
        )?;
        writeln!(writer, "best scoring obtained : {}", result.score)?;
        writeln!(writer)?;
        writeln!(writer)?;
    }

    writer.flush()
}

/// Render `results` to `writer` as one pretty-printed JSON object
pub fn render_json<W: Write>(mut writer: W, reference: &str, results: &[AlignmentResult]) -> Result<()> {
    let report = JsonReport {
        reference,
        alignments: results,
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writeln!(writer).map_err(|e| AlignError::Report(e.to_string()))?;
    writer.flush().map_err(|e| AlignError::Report(e.to_string()))
}

fn render<W: Write>(writer: W, reference: &str, results: &[AlignmentResult], format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => {
            render_text(writer, reference, results).map_err(|e| AlignError::Report(e.to_string()))
        }
        ReportFormat::Json => render_json(writer, reference, results),
    }
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| AlignError::from_io(path, e))
}

/// Emit a report and hand the results back unchanged.
///
/// [`ReportTarget::None`] writes nothing, so callers can thread results
/// through this function regardless of where output is configured to go.
pub fn write_report(
    results: Vec<AlignmentResult>,
    reference: &str,
    target: &ReportTarget,
    format: ReportFormat,
) -> Result<Vec<AlignmentResult>> {
    match target {
        ReportTarget::None => {}
        ReportTarget::Stdout => {
            let stdout = std::io::stdout();
            render(stdout.lock(), reference, &results, format)?;
        }
        ReportTarget::File(path) => {
            log::info!("Writing {} alignments to {}", results.len(), path.display());
            render(create_file(path)?, reference, &results, format)?;
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<AlignmentResult> {
        vec![
            AlignmentResult::new("ACGT".into(), "ACG".into(), 0, 3),
            AlignmentResult::new("TGCA".into(), "GC".into(), 1, 2),
        ]
    }

    #[test]
    fn test_text_layout() {
        let mut out = Vec::new();
        render_text(&mut out, "ACGTACGT", &sample()[..1]).unwrap();

        let expected = "Reference sequence : ACGTACGT\n\n\
                        Portion of the reference sequence : ACGT\n\
                        Sequence queried : ACG\n\
                        Position for the best alignment in the reference sequence : 0\n\
                        best scoring obtained : 3\n\n\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_text_layout_multiple_blocks() {
        let mut out = Vec::new();
        render_text(&mut out, "ACGTACGT", &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("Reference sequence :").count(), 1);
        assert_eq!(text.matches("Sequence queried :").count(), 2);
        assert!(text.contains("best scoring obtained : 3\n\n\nPortion of the reference sequence : TGCA\n"));
    }

    #[test]
    fn test_json_layout() {
        let mut out = Vec::new();
        render_json(&mut out, "ACGTACGT", &sample()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["reference"], "ACGTACGT");
        assert_eq!(value["alignments"][1]["matched_segment"], "TGCA");
        assert_eq!(value["alignments"][1]["position"], 1);
        assert_eq!(value["alignments"][0]["score"], 3);
    }

    #[test]
    fn test_no_target_passes_results_through() {
        let results = write_report(sample(), "ACGTACGT", &ReportTarget::None, ReportFormat::Text).unwrap();
        assert_eq!(results, sample());
    }

    #[test]
    fn test_file_target() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let target = ReportTarget::File(file.path().to_path_buf());

        let results = write_report(sample(), "ACGTACGT", &target, ReportFormat::Text).unwrap();
        assert_eq!(results.len(), 2);

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("Reference sequence : ACGTACGT\n\n"));
        assert!(content.contains("Position for the best alignment in the reference sequence : 1"));
    }

    #[test]
    fn test_target_from_options() {
        assert_eq!(ReportTarget::from_options(None, false), ReportTarget::None);
        assert_eq!(ReportTarget::from_options(None, true), ReportTarget::Stdout);
        assert_eq!(
            ReportTarget::from_options(Some("out.txt".into()), true),
            ReportTarget::File("out.txt".into())
        );
    }
}
