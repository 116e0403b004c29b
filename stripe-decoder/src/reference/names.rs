//! Ticket type names from the XML ticket type document.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::ReferenceError;
use crate::domain::TicketTypeCode;

/// Root element of the ticket type document.
#[derive(Debug, Deserialize)]
struct TicketTypeDescriptionList {
    #[serde(rename = "TicketTypeDescription", default)]
    entries: Vec<TicketTypeDescription>,
}

/// Minimal view of one ticket type entry - we only need the code and name.
#[derive(Debug, Deserialize)]
struct TicketTypeDescription {
    #[serde(rename = "TicketTypeIdentifier")]
    code: String,
    #[serde(rename = "Name")]
    name: String,
}

/// Parse the ticket type document into a code → name map.
///
/// When a code appears more than once, the last entry wins.
pub fn parse_names(
    contents: &str,
    path: &Path,
) -> Result<HashMap<TicketTypeCode, String>, ReferenceError> {
    let list: TicketTypeDescriptionList =
        quick_xml::de::from_str(contents).map_err(|e| ReferenceError::Xml {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut map = HashMap::with_capacity(list.entries.len());
    for entry in list.entries {
        match TicketTypeCode::parse(entry.code.trim()) {
            Ok(code) => {
                map.insert(code, entry.name.trim().to_string());
            }
            Err(e) => debug!(code = %entry.code, error = %e, "skipping ticket type entry"),
        }
    }

    Ok(map)
}

/// Read and parse the ticket type document.
pub fn load_names(path: &Path) -> Result<HashMap<TicketTypeCode, String>, ReferenceError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let map = parse_names(&contents, path)?;
    info!(path = %path.display(), names = map.len(), "loaded ticket type names");
    Ok(map)
}
