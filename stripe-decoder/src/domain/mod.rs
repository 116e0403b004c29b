//! Domain types for decoded ticket stripes.
//!
//! This module contains the value types that decoded stripe fields are
//! converted into. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod alphabet;
mod error;
mod location;
mod ltot;
mod ticket_type;
mod validity;

pub use alphabet::{Alphabet, LETTERS, LOCATION_PREFIXES};
pub use error::DomainError;
pub use location::LocationCode;
pub use ltot::{InvalidLtot, Ltot};
pub use ticket_type::{InvalidTicketType, TicketTypeCode};
pub use validity::{FORMAT_EPOCH, MAX_VALIDITY_DAYS, expiry_date};
