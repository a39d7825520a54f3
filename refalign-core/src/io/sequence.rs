//! Plain-text sequence loaders
//!
//! Reference files are line-wrapped: every line is trimmed, uppercased and
//! concatenated. Query files hold one sequence per line. Paths ending in
//! `.gz` are decompressed on the fly.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::alphabet::normalize;
use crate::error::{AlignError, Result};

/// Open `path` for line-based reading, decompressing `.gz` files
pub fn open_text<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AlignError::from_io(path, e))?;

    if path.to_string_lossy().ends_with(".gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Load a reference sequence, joining every line of the file
pub fn read_reference<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let reader = open_text(path)?;
    let reference = parse_reference(reader).map_err(|e| AlignError::from_io(path, e))?;

    log::debug!("Read {} reference bases from {}", reference.len(), path.display());
    Ok(reference)
}

/// Load a query batch, one sequence per line, in file order
pub fn read_queries<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let reader = open_text(path)?;
    let queries = parse_queries(reader).map_err(|e| AlignError::from_io(path, e))?;

    log::debug!("Read {} queries from {}", queries.len(), path.display());
    Ok(queries)
}

/// Concatenate trimmed, uppercased lines. An empty input yields an empty string.
pub fn parse_reference<R: BufRead>(reader: R) -> std::io::Result<String> {
    let mut reference = String::new();
    for line in reader.lines() {
        reference.push_str(&normalize(line?.trim()));
    }
    Ok(reference)
}

/// One trimmed, uppercased sequence per line. An empty input yields no queries.
///
/// Blank lines are kept as empty sequences so that validation reports them
/// with their position instead of silently shifting later queries.
pub fn parse_queries<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut queries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let query = normalize(line?.trim());
        if query.is_empty() {
            log::warn!("Query line {} is blank", index + 1);
        }
        queries.push(query);
    }
    Ok(queries)
}
