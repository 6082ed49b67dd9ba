//! Test doubles shared by unit tests (in `src/`) and integration tests (in
//! `tests/`). Compiled for `cfg(test)` and the `test-support` feature.

mod clinic;
mod clock;

pub use clinic::{DEFAULT_TEST_PASSWORD, InMemoryClinic};
pub use clock::FixedClock;
