//! Embedded word catalog
//!
//! Catalog compiled into the binary at build time.

// Include generated catalog from build script
include!(concat!(env!("OUT_DIR"), "/catalog.rs"));
