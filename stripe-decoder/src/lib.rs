//! Rail ticket magnetic stripe decoder.
//!
//! Decodes the 19-byte RSPS3000 record read from a ticket's magnetic
//! stripe into its location codes, LTOT code, validity date and raw
//! status fields, and resolves the LTOT to ticket types using reference
//! data.

use std::io::Write;

use tracing::debug;

pub mod config;
pub mod domain;
mod error;
pub mod reference;
pub mod report;
pub mod stripe;


pub use config::{DecoderConfig, ReferenceSource};
pub use error::Error;
pub use report::{OutputFormat, TicketReport};

/// Decode every record in `args` and write one report per record to `out`.
///
/// Reference data is loaded and every argument is validated and decoded
/// before anything is written, so a failure produces no output.
pub fn run<S: AsRef<str>>(
    config: &DecoderConfig,
    args: &[S],
    out: &mut impl Write,
) -> Result<(), Error> {
    if args.is_empty() {
        return Err(Error::NoRecords);
    }

    let reference = config.reference.load()?;
    debug!(
        ltot_codes = reference.len(),
        names = reference.name_count(),
        "reference data ready"
    );

    let reports = decode_all(args, &reference)?;
    for report in &reports {
        report.write_to(&mut *out, config.format)?;
    }
    out.flush()?;

    Ok(())
}

/// Parse and decode every record, failing on the first bad one.
pub fn decode_all<S: AsRef<str>>(
    args: &[S],
    reference: &reference::ReferenceIndex,
) -> Result<Vec<TicketReport>, Error> {
    let records = stripe::parse_records(args)?;

    records
        .into_iter()
        .map(|record| -> Result<TicketReport, Error> {
            let ticket = stripe::decode_ticket(&record)?;
            debug!(%record, origin = %ticket.origin, ltot = %ticket.ltot, "decoded record");
            Ok(TicketReport::new(record, ticket, reference))
        })
        .collect()
}
