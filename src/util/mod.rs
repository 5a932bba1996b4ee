//! Small standalone helpers.

pub mod jwt;
