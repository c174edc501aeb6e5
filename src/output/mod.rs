//! Report assembly and rendering

pub mod report;

pub use report::RankReport;
