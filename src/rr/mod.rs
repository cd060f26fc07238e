//! Normalized Resource Record Definitions

mod convert;
mod name;
mod record;
mod records;

pub use self::convert::{convert, convert_generic};
pub use self::name::to_lower_fqdn;
pub use self::record::Record;
pub use self::records::{Records, convert_all, from_message};

/// Wire-format record as produced by hickory-dns.
pub use hickory_proto::rr::Record as WireRecord;

/// ICANN specifies that DNS servers should return the special value 127.0.53.53
/// for A record queries of TLDs that have recently entered the root zone and
/// have a high likelihood of colliding with private DNS names.
///
/// The address is a notice to network administrators to adjust their DNS
/// configuration. Records carrying it are converted like any other A record;
/// recognizing the notice is up to the caller.
///
/// <https://www.icann.org/resources/pages/name-collision-2013-12-06-en#127.0.53.53>
pub const NAME_COLLISION: &str = "127.0.53.53";
