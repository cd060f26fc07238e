//! Flat, display-friendly DNS resource records
//!
//! `dnsr-rr` takes resource records parsed by [`hickory_proto`] and normalizes them into a
//! single [`Record`] shape: lowercase fully-qualified names, a short type tag, the payload
//! rendered as text, and the class and TTL from the record header.

pub mod error;
pub mod rr;

pub use self::error::ConvertError;
pub use self::rr::{NAME_COLLISION, Record, Records, convert, convert_all, from_message};
