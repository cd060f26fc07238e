#![cfg(feature = "cli")]

use std::{
    io::{self, Read as _, Write as _},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::arg;
use dnsr_rr::rr;
use hickory_proto::{ProtoError, op::Message};
use tracing::trace;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum DumpError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("dns protocol error: {0}")]
    Protocol(#[from] ProtoError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cmd = clap::Command::new("dnsr-rr")
        .about("Print the normalized records of a binary DNS message")
        .arg(arg!(--json "Print one JSON object per record"))
        .arg(
            arg!([FILE] "DNS message in wire format, read from stdin when omitted")
                .value_parser(clap::value_parser!(PathBuf)),
        );

    let args = cmd.get_matches();
    let path = args.get_one::<PathBuf>("FILE").map(PathBuf::as_path);

    match dump(path, args.get_flag("json")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn read_message(path: Option<&Path>) -> Result<Message, DumpError> {
    let buf = match path {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    trace!(bytes = buf.len(), "read message");

    Ok(Message::from_vec(&buf)?)
}

fn dump(path: Option<&Path>, json: bool) -> Result<(), DumpError> {
    let message = read_message(path)?;
    let records = rr::from_message(&message);
    trace!(count = records.len(), "converted records");

    let mut out = io::stdout().lock();
    for record in &records {
        if json {
            serde_json::to_writer(&mut out, record)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{record}")?;
        }
    }
    out.flush()?;

    Ok(())
}
