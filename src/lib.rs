#![doc = include_str!("../README.md")]
//! ## Feature flags
#![doc = document_features::document_features!()]
#![deny(unsafe_code)]
#![deny(clippy::all)]

use thiserror::Error;

pub mod edit;
pub mod nnc;

pub use edit::EditNnc;
pub use nnc::{Nnc, NncData};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Connection index {index} out of range ({len} connections)")]
    IndexOutOfRange { index: usize, len: usize },
}
