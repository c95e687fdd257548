//! Unified error model for the compliance engine.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EnergyError {
    /// Product type outside 1..=4 in a profile document.
    #[error("unrecognized product type {0}")]
    UnknownProductType(u32),

    /// Computer type outside 1..=3 for a product type 1 profile.
    #[error("unrecognized computer type {0}")]
    UnknownComputerType(u32),

    /// A category label that the rule set does not define for this device,
    /// e.g. category D for a notebook.
    #[error("category {category} is not defined for {device}")]
    InvalidCategory {
        category: &'static str,
        device: &'static str,
    },

    /// A profile document lacks a field required by its product type.
    #[error("profile is missing required field \"{0}\"")]
    MissingField(&'static str),

    #[error("failed to parse profile document: {0}")]
    Document(String),
}
