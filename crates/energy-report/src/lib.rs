//! Rule-set orchestration and report assembly.
//!
//! `evaluate` runs every rule set that applies to a device profile and
//! collects the outcomes into a [`Report`], a flat list of headings, notes,
//! and metric checks that renders to the console format.

pub mod orchestrator;
pub mod report;

pub use orchestrator::evaluate;
pub use report::{MetricCheck, Report, ReportItem};
