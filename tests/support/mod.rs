// tests/support/mod.rs
// Shared support code for the integration test binaries. Some symbols are
// unused in individual test crates; allow those warnings at the module level
// to keep CI output clean.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
