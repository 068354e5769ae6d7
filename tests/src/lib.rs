//! # Netif Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Dispatch throughput (criterion)
//! └── src/integration/  # Driver → bus → controller → bus flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p netif-tests
//! cargo bench -p netif-tests
//! ```

pub mod integration;
