#![allow(unused)]

use std::sync::Once;

use hickory_proto::op::Message;
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable as _;

/// Registers a global default tracing subscriber when called for the first time. This is intended
/// for use in tests.
pub fn subscribe() {
    static INSTALL_TRACING_SUBSCRIBER: Once = Once::new();
    INSTALL_TRACING_SUBSCRIBER.call_once(|| {
        let subscriber = tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber).unwrap();
    });
}

pub fn name(name: &str) -> Name {
    Name::from_ascii(name).expect("valid test name")
}

pub fn record(owner: &str, ttl: u32, rdata: RData) -> Record {
    Record::from_rdata(name(owner), ttl, rdata)
}

/// Encode and decode a message, so records arrive the way a parser produces them.
pub fn over_the_wire(message: &Message) -> Message {
    let bytes = message.to_bytes().expect("encode message");
    Message::from_vec(&bytes).expect("decode message")
}
