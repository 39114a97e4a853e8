//! Contains implementations of the `Board` trait.

/// A `Board` implementation for Connect Four.
pub mod connect_four;
