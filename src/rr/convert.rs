//! Conversion of hickory wire records into normalized [`Record`]s.

use hickory_proto::rr::{DNSClass, RData, rdata::TXT};
use tracing::{debug, trace};

use super::{Record, WireRecord, name::lower_fqdn, to_lower_fqdn};
use crate::error::ConvertError;

/// Convert a wire record into a normalized [`Record`].
///
/// SOA, NS, CNAME, A, AAAA and TXT records are converted directly from their record data.
/// Every other type goes through [`convert_generic`] on the record's zone-file text, with
/// the owner name written in ASCII so it matches the direct conversions.
///
/// That text always carries the name, TTL, class and type, so a wire record never fails to
/// convert. `None` is only possible through [`convert_generic`] on hand-written text.
pub fn convert(record: &WireRecord) -> Option<Record> {
    Record::try_from(record).ok()
}

impl TryFrom<&WireRecord> for Record {
    type Error = ConvertError;

    fn try_from(record: &WireRecord) -> Result<Self, Self::Error> {
        let (rtype, value) = match record.data() {
            RData::SOA(soa) => ("SOA", lower_fqdn(soa.mname())),
            RData::NS(ns) => ("NS", lower_fqdn(&ns.0)),
            RData::CNAME(cname) => ("CNAME", lower_fqdn(&cname.0)),
            RData::A(a) => ("A", a.0.to_string()),
            RData::AAAA(aaaa) => ("AAAA", aaaa.0.to_string()),
            RData::TXT(txt) => ("TXT", join_segments(txt)),
            _ => {
                debug!(rtype = %record.record_type(), "no direct conversion, using record text");
                return convert_generic(&zone_text(record));
            }
        };

        trace!(name = %record.name(), rtype, "converted record");
        Ok(Record::new(
            lower_fqdn(record.name()),
            rtype,
            value,
            class_mnemonic(record.dns_class()),
            record.ttl(),
        ))
    }
}

/// Recover a record from its zone-file text, `<name> <ttl> <class> <type> <data...>`.
///
/// The first field becomes the normalized name, the fourth the type, and the remaining
/// fields are joined with tabs as the value. Class and TTL are left empty and zero.
/// Text with fewer than four fields is rejected.
pub fn convert_generic(text: &str) -> Result<Record, ConvertError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ConvertError::Unrepresentable {
            fields: fields.len(),
            text: text.to_owned(),
        });
    }

    Ok(Record::new(
        to_lower_fqdn(fields[0]),
        fields[3],
        fields[4..].join("\t"),
        "",
        0,
    ))
}

/// Zone-file text for a record, like hickory's `Display` but with the owner in ASCII.
fn zone_text(record: &WireRecord) -> String {
    format!(
        "{name} {ttl} {class} {ty} {rdata}",
        name = record.name().to_ascii(),
        ttl = record.ttl(),
        class = record.dns_class(),
        ty = record.record_type(),
        rdata = record.data(),
    )
}

fn join_segments(txt: &TXT) -> String {
    txt.txt_data()
        .iter()
        .map(|segment| String::from_utf8_lossy(segment))
        .collect::<Vec<_>>()
        .join("\t")
}

fn class_mnemonic(class: DNSClass) -> &'static str {
    match class {
        DNSClass::OPT(_) | DNSClass::Unknown(_) => "",
        class => class.into(),
    }
}
