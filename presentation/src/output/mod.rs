//! Output formatting

pub mod transcript;
