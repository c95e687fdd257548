//! EU ErP compliance rule sets.
//!
//! Lot 3 covers computers and has two dated revisions with separate
//! allowance tables; Lot 26 is the networked-standby regulation, a flat
//! two-ceiling gate. Both evaluate the same device profile the Energy Star
//! calculators do.

pub mod lot26;
pub mod lot3;

pub use lot26::ErpLot26;
pub use lot3::{special_case, special_case_warning, ErpLot3, RuleSet, StandbyFailure};
