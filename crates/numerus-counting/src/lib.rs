//! # numerus-counting
//!
//! Classical counting sequences over any numerus ring.
//!
//! This crate provides:
//! - Factorials
//! - Stirling numbers of both kinds as tables, rows, columns and single terms
//! - Partition numbers by Euler's pentagonal recurrence
//!
//! Every function takes the ring identity `id` so that runtime moduli and
//! arbitrary precision types work the same way as machine integers.
//! Columns and rows built from power series divide by small integers, so
//! they need a ring where `1..=n` are invertible.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod factorial;
pub mod partitions;
pub mod stirling;

#[cfg(test)]
mod proptests;

pub use factorial::factorial;
pub use partitions::partitions_p;
pub use stirling::{
    stirling_s1, stirling_s1_column, stirling_s1_row, stirling_s1_table, stirling_s2,
    stirling_s2_column, stirling_s2_row, stirling_s2_table,
};
