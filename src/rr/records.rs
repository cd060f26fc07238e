use hickory_proto::op::Message;
use tracing::debug;

use super::{Record, WireRecord};

/// A list of normalized records, in the order they were converted.
pub type Records = Vec<Record>;

/// Convert a sequence of wire records, in order.
///
/// Records that fail [`Record::try_from`] are skipped. Hickory always renders a record with
/// its name, TTL, class and type, so in practice every wire record is kept.
pub fn convert_all<'a, I>(records: I) -> Records
where
    I: IntoIterator<Item = &'a WireRecord>,
{
    records
        .into_iter()
        .filter_map(|record| match Record::try_from(record) {
            Ok(record) => Some(record),
            Err(error) => {
                debug!(%error, "skipping record");
                None
            }
        })
        .collect()
}

/// Convert the answer, authority and additional sections of a message, in that order.
pub fn from_message(message: &Message) -> Records {
    convert_all(
        message
            .answers()
            .iter()
            .chain(message.name_servers())
            .chain(message.additionals()),
    )
}
