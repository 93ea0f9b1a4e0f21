//! # Asset-Genesis Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Seeded request generators
//! └── integration/      # End-to-end pipeline properties
//!     ├── determinism.rs
//!     ├── failures.rs
//!     └── wire_format.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p genesis-tests
//! cargo bench -p genesis-tests
//! ```

pub mod fixtures;
pub mod integration;
