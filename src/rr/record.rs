use std::fmt;

use serde::{Deserialize, Serialize};

/// A DNS resource record flattened to text.
///
/// Domain names in `name` (and in `value`, for record types whose payload is a name) are
/// lowercase and fully qualified, so records can be compared without re-parsing.
/// `Record::default()` is the empty record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(rename = "type")]
    rtype: String,
    value: String,
    class: String,
    ttl: u32,
}

impl Record {
    /// Assemble a record from already-normalized parts.
    pub fn new(
        name: impl Into<String>,
        rtype: impl Into<String>,
        value: impl Into<String>,
        class: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Record {
            name: name.into(),
            rtype: rtype.into(),
            value: value.into(),
            class: class.into(),
            ttl,
        }
    }

    /// Owner name of the record
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record type tag, e.g. `"A"` or `"CNAME"`
    pub fn record_type(&self) -> &str {
        &self.rtype
    }

    /// Record payload rendered as text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Class mnemonic, empty when unknown
    pub fn dns_class(&self) -> &str {
        &self.class
    }

    /// Time to live in seconds, zero when unknown
    pub fn ttl(&self) -> u32 {
        self.ttl
    }
}

/// Renders the record as a single tab-separated, zone-file like line:
///
/// ```text
/// <name>  <ttl>  <class>  <type>  <value>
/// ```
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{name}\t{ttl}\t{class}\t{ty}\t{value}",
            name = self.name,
            ttl = self.ttl,
            class = self.class,
            ty = self.rtype,
            value = self.value,
        )
    }
}
