// SPDX-License-Identifier: MIT OR Apache-2.0
//! Log output emitted while building, encoding and loading catalogs.

use std::sync::{Arc, Mutex};

use uerr_codes::GrpcCode;
use uerr_core::{Constructor, Status};

// ---------------------------------------------------------------------------
// Shared log-capture infrastructure
// ---------------------------------------------------------------------------

/// Thread-safe buffer that captures tracing output.
#[derive(Clone, Default)]
struct LogBuf(Arc<Mutex<Vec<u8>>>);

impl LogBuf {
    fn contents(&self) -> String {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf).to_string()
    }

    fn contains(&self, needle: &str) -> bool {
        self.contents().contains(needle)
    }
}

impl std::io::Write for LogBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuf {
    type Writer = LogBuf;
    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn setup_tracing() -> (LogBuf, tracing::subscriber::DefaultGuard) {
    let buf = LogBuf::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buf.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_target(true)
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buf, guard)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn build_logs_at_debug() {
    let (buf, _guard) = setup_tracing();
    let _ = Constructor::new(99i64, Status::Fatal)
        .with_field("a", "b")
        .build();
    assert!(buf.contains("built error constructor"), "{}", buf.contents());
    assert!(buf.contains("DEBUG"));
    assert!(buf.contains("uerr_core"));
    assert!(buf.contains("kind=fields"));
}

#[test]
fn encode_logs_at_trace() {
    let (buf, _guard) = setup_tracing();
    let err = Constructor::new(5i64, Status::Error)
        .with_grpc(GrpcCode::NOT_FOUND)
        .build()
        .grpc();
    uerr_format::to_json(&err).unwrap();
    assert!(buf.contains("encoded error view"), "{}", buf.contents());
    assert!(buf.contains("format=json"));
}

#[test]
fn catalog_warnings_are_logged() {
    let (buf, _guard) = setup_tracing();
    let config = uerr_catalog::parse_toml("[errors.silent]\nid = 1\nhttp = 999").unwrap();
    let catalog = uerr_catalog::Catalog::from_config(config).unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(buf.contains("WARN"));
    assert!(buf.contains("http code 999 has no known name"), "{}", buf.contents());
    assert!(buf.contains("loaded error catalog"));
}
