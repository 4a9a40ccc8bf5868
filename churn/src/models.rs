// src/models.rs
mod file_change;
mod ranked_report;
mod scan_result;

pub use file_change::FileChange;
pub use ranked_report::RankedReport;
pub use scan_result::ScanResult;
