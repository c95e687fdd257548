//! Energy Core: Device Profile, Comparator, and Shared Types
//!
//! The data model every rule set evaluates against. A [`DeviceProfile`] is
//! built once per run (from a persisted [`ProfileDocument`] or directly in
//! tests), is read-only thereafter, and carries only the fields that apply
//! to its product type.

pub mod category;
pub mod comparator;
pub mod document;
pub mod error;
pub mod profile;

pub use category::{Category, FrameBufferWidth, GpuBracket, Qualification};
pub use comparator::{compare, Comparison, Verdict};
pub use document::ProfileDocument;
pub use error::EnergyError;
pub use profile::{
    ComputerProfile, ComputerType, DeviceProfile, Display, Ethernet, Graphics, PowerDraw,
    ServerProfile, Storage, ThinClientProfile, WorkstationProfile,
};

/// Hours per year; TEC formulas scale mode weights by this over 1000.
pub const HOURS_PER_YEAR: f64 = 8760.0;
