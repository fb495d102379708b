//! Output generators. Each one is a pure, deterministic function of an [`IdTable`].
//!
//! [`IdTable`]: crate::model::IdTable

pub mod header;
pub mod json;
pub mod rust;
