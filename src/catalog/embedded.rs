//! Embedded algorithm catalog
//!
//! Catalog compiled into the binary at build time.

// Include generated catalog from build script
include!(concat!(env!("OUT_DIR"), "/algorithms.rs"));
