//! Fixed-width ticket type file.
//!
//! One record per line; lines starting with `/` are comments. Each record
//! carries its ticket type code in columns `1..4` and the two-letter code
//! it is issued under in columns `99..101`.

use std::collections::HashMap;
use std::ops::Range;
use std::path::Path;

use tracing::{debug, info};

use super::ReferenceError;
use crate::domain::{Ltot, TicketTypeCode};

const TICKET_CODE: Range<usize> = 1..4;
const CAPRI_CODE: Range<usize> = 99..101;
const COMMENT: char = '/';

/// Parse ticket type records into an LTOT → ticket type codes map.
///
/// Codes keep file order and duplicates. Records whose codes are not
/// well-formed are skipped; records too short to hold both codes fail the
/// whole file.
///
/// The file is expected to be ASCII: columns are byte offsets, and a record
/// with non-ASCII text before or inside either code column is malformed.
pub fn parse_capri(
    contents: &str,
    path: &Path,
) -> Result<HashMap<Ltot, Vec<TicketTypeCode>>, ReferenceError> {
    let mut map: HashMap<Ltot, Vec<TicketTypeCode>> = HashMap::new();

    for (i, line) in contents.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.starts_with(COMMENT) || line.trim().is_empty() {
            continue;
        }

        let malformed = |reason: String| ReferenceError::Malformed {
            path: path.to_path_buf(),
            line: i + 1,
            reason,
        };

        if line.len() < CAPRI_CODE.end {
            return Err(malformed(format!(
                "line is {} characters, expected at least {}",
                line.len(),
                CAPRI_CODE.end
            )));
        }

        let (Some(ticket), Some(capri)) = (line.get(TICKET_CODE), line.get(CAPRI_CODE)) else {
            return Err(malformed("line is not plain ASCII".to_string()));
        };

        match (TicketTypeCode::parse(ticket), Ltot::parse(capri)) {
            (Ok(ticket), Ok(capri)) => map.entry(capri).or_default().push(ticket),
            (ticket, capri) => {
                debug!(
                    line = i + 1,
                    ticket = ?ticket.err(),
                    capri = ?capri.err(),
                    "skipping ticket type record"
                );
            }
        }
    }

    Ok(map)
}

/// Read and parse a ticket type file.
pub fn load_capri(path: &Path) -> Result<HashMap<Ltot, Vec<TicketTypeCode>>, ReferenceError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let map = parse_capri(&contents, path)?;
    info!(
        path = %path.display(),
        codes = map.len(),
        "loaded ticket type file"
    );
    Ok(map)
}
