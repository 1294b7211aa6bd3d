//! Rendering collaborators: console report and CSV export
//!
//! Rendering consumes the report/record types produced by the aggregation
//! core; it owns presentation only, never aggregation logic.

pub mod console;
pub mod csv_export;

pub use console::print_report;
pub use csv_export::{write_rows, write_rows_to_path};
