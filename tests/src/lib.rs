//! # Event Facade Test Suite
//!
//! Unified test crate for flows that cross crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs           # Native callback → facade → listeners
//!     └── peer_connection.rs # Peer-connection facade end to end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ef-tests
//! cargo test -p ef-tests integration::flows
//! ```

#![allow(dead_code)]

pub mod integration;
