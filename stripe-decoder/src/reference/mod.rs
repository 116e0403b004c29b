//! Ticket-type reference data.
//!
//! Provides LTOT → ticket type codes and ticket type code → name lookups,
//! loaded once at startup from a fixed-width ticket-type file and an XML
//! ticket-type document.

mod capri;
mod error;
mod index;
mod names;
mod paths;

pub use capri::{load_capri, parse_capri};
pub use error::ReferenceError;
pub use index::{ReferenceIndex, ResolvedTicketType, UNKNOWN_TICKET_TYPE};
pub use names::{load_names, parse_names};
pub use paths::ReferencePaths;
