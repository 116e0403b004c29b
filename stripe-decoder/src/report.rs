//! Rendering decoded tickets.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::reference::{ReferenceIndex, ResolvedTicketType};
use crate::stripe::{DecodedTicket, RawRecord};

/// How decoded tickets are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One labelled line per field
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// A decoded record together with its resolved ticket types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketReport {
    pub record: RawRecord,
    #[serde(flatten)]
    pub ticket: DecodedTicket,
    pub ticket_types: Vec<ResolvedTicketType>,
}

impl TicketReport {
    pub fn new(record: RawRecord, ticket: DecodedTicket, reference: &ReferenceIndex) -> Self {
        let ticket_types = reference.resolve(&ticket.ltot);
        Self {
            record,
            ticket,
            ticket_types,
        }
    }

    /// Write this report in `format`, ending with a newline.
    pub fn write_to(&self, out: &mut impl Write, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Text => write!(out, "{self}"),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)
            }
        }
    }
}

impl fmt::Display for TicketReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.ticket;
        writeln!(f, "Record {}", self.record)?;
        writeln!(f, "  Origin:        {}", t.origin)?;
        writeln!(f, "  Destination:   {}", t.destination)?;
        writeln!(f, "  Route:         {}", t.route)?;
        writeln!(f, "  LTOT:          {}", t.ltot)?;
        writeln!(f, "  Status:        {}", t.status)?;
        writeln!(f, "  Ticket class:  {}", t.ticket_class)?;
        writeln!(f, "  Date mode:     {}", t.date_mode)?;
        writeln!(f, "  Ownership:     {}", t.ownership)?;
        writeln!(
            f,
            "  Valid until:   {} ({} days)",
            t.valid_until, t.validity_days
        )?;

        if self.ticket_types.is_empty() {
            return writeln!(f, "  Ticket types:  (none)");
        }
        writeln!(f, "  Ticket types:")?;
        for ticket_type in &self.ticket_types {
            writeln!(f, "    {}  {}", ticket_type.code, ticket_type.display_name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Ltot, TicketTypeCode};
    use crate::stripe::decode_ticket;
    use std::collections::HashMap;

    const GOLDEN: &str = "41AA1120D7004198C80008000180044026AB20";

    fn report(reference: &ReferenceIndex) -> TicketReport {
        let record = RawRecord::from_hex(GOLDEN).unwrap();
        let ticket = decode_ticket(&record).unwrap();
        TicketReport::new(record, ticket, reference)
    }

    fn reference() -> ReferenceIndex {
        let sds = TicketTypeCode::parse("SDS").unwrap();
        let abc = TicketTypeCode::parse("ABC").unwrap();
        let ticket_types = HashMap::from([(Ltot::parse("AE").unwrap(), vec![sds, abc])]);
        let names = HashMap::from([(sds, "Anytime Day Single".to_string())]);
        ReferenceIndex::new(ticket_types, names)
    }

    #[test]
    fn text_without_ticket_types() {
        let text = report(&ReferenceIndex::empty()).to_string();
        let expected = "\
Record 41AA1120D7004198C80008000180044026AB20
  Origin:        G298
  Destination:   O513
  Route:         470
  LTOT:          AE
  Status:        8
  Ticket class:  0
  Date mode:     33
  Ownership:     3
  Valid until:   1997-04-17 (106 days)
  Ticket types:  (none)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn text_with_ticket_types() {
        let text = report(&reference()).to_string();
        assert!(text.ends_with(
            "  Ticket types:\n    SDS  Anytime Day Single\n    ABC  unknown ticket type\n"
        ));
    }

    #[test]
    fn json_output() {
        let mut out = Vec::new();
        report(&reference())
            .write_to(&mut out, OutputFormat::Json)
            .unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["record"], GOLDEN);
        assert_eq!(value["origin"], "G298");
        assert_eq!(value["destination"], "O513");
        assert_eq!(value["ltot"], "AE");
        assert_eq!(value["valid_until"], "1997-04-17");
        assert_eq!(value["ticket_types"][0]["code"], "SDS");
        assert_eq!(value["ticket_types"][0]["name"], "Anytime Day Single");
        assert_eq!(value["ticket_types"][1]["name"], "unknown ticket type");
    }

    #[test]
    fn text_write_to_matches_display() {
        let report = report(&ReferenceIndex::empty());
        let mut out = Vec::new();
        report.write_to(&mut out, OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), report.to_string());
    }
}
