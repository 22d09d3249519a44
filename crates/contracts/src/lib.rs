//! Wire contracts shared by the admin front-end.
//!
//! Everything in here is plain Rust with no browser dependency, so the
//! decision logic (base URL resolution, request building, error
//! classification, form validation) is unit-tested natively.

pub mod domain;
pub mod shared;
