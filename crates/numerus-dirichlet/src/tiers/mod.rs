//! The three tiers of Dirichlet operations.
//!
//! | Tier | Result must be | Cost |
//! |------|----------------|------|
//! | [`general`] | anything | `O(n log n)` |
//! | [`multiplicative`] | multiplicative | `O(n log log n)` |
//! | [`completely`] | completely multiplicative | `O(n)` |
//!
//! The precondition is on the result, not the operands: `mu * sigma_0 = 1`
//! may use the fastest tier although neither operand qualifies.
//!
//! Every routine fills a table `h` indexed by `0..n` (`h[0]` is set to
//! zero) from functions `f`, `g` evaluated on `1..n`. The table must not
//! alias the storage the functions read from; the borrow checker rejects
//! closures over `h` itself.

pub mod completely;
pub mod general;
pub mod multiplicative;
