//! Immutable ticket type lookup.

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::warn;

use super::{ReferenceError, ReferencePaths, load_capri, load_names};
use crate::domain::{Ltot, TicketTypeCode};

/// Shown in place of a ticket type name missing from the reference data.
pub const UNKNOWN_TICKET_TYPE: &str = "unknown ticket type";

/// Read-only ticket type lookups, built once and shared by every decode.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    ticket_types: HashMap<Ltot, Vec<TicketTypeCode>>,
    names: HashMap<TicketTypeCode, String>,
}

/// A ticket type code with its name, if the reference data has one.
///
/// Serializes a missing name as the unknown-ticket-type placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTicketType {
    pub code: TicketTypeCode,
    #[serde(serialize_with = "name_or_unknown")]
    pub name: Option<String>,
}

fn name_or_unknown<S: Serializer>(
    name: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(name.as_deref().unwrap_or(UNKNOWN_TICKET_TYPE))
}

impl ResolvedTicketType {
    /// The name, or the unknown-ticket-type placeholder.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_TICKET_TYPE)
    }
}

impl fmt::Display for ResolvedTicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.display_name())
    }
}

impl ReferenceIndex {
    pub fn new(
        ticket_types: HashMap<Ltot, Vec<TicketTypeCode>>,
        names: HashMap<TicketTypeCode, String>,
    ) -> Self {
        Self {
            ticket_types,
            names,
        }
    }

    /// Create an empty index, for decoding without reference data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load both reference files.
    pub fn load(paths: &ReferencePaths) -> Result<Self, ReferenceError> {
        let ticket_types = load_capri(&paths.capri)?;
        let names = load_names(&paths.names)?;
        Ok(Self::new(ticket_types, names))
    }

    /// Ticket type codes issued under `ltot`, in reference file order.
    ///
    /// An LTOT with no entry yields an empty slice.
    pub fn ticket_types(&self, ltot: &Ltot) -> &[TicketTypeCode] {
        self.ticket_types
            .get(ltot)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Look up a ticket type name by code.
    pub fn name(&self, code: &TicketTypeCode) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Resolve `ltot` to its ticket types and their names.
    ///
    /// Codes missing from the name table resolve with no name rather than
    /// failing, since reference data may lag the stripe format.
    pub fn resolve(&self, ltot: &Ltot) -> Vec<ResolvedTicketType> {
        self.ticket_types(ltot)
            .iter()
            .map(|&code| {
                let name = self.name(&code).map(str::to_string);
                if name.is_none() {
                    warn!(%ltot, %code, "ticket type has no name in reference data");
                }
                ResolvedTicketType { code, name }
            })
            .collect()
    }

    /// Number of LTOT codes with ticket types.
    pub fn len(&self) -> usize {
        self.ticket_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticket_types.is_empty()
    }

    /// Number of named ticket types.
    pub fn name_count(&self) -> usize {
        self.names.len()
    }
}
