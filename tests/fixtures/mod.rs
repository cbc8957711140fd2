//! Test fixtures for route-sketch.
//!
//! Provides:
//! - Real central London locations (from OpenStreetMap)
//! - A deterministic id source
//! - Optional tracing output (`RUST_LOG=route_sketch=trace`)

#![allow(dead_code)]

pub mod london_locations;

pub use london_locations::*;

use route_sketch::traits::LineIdSource;

/// Hands out `route-1`, `route-2`, ... so assertions can name routes.
#[derive(Debug, Default)]
pub struct CountingIds {
    issued: u32,
}

impl LineIdSource for CountingIds {
    fn next_id(&mut self) -> String {
        self.issued += 1;
        format!("route-{}", self.issued)
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
