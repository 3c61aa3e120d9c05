//! Turtle documents shared by the validator tests.

pub mod fixtures;
