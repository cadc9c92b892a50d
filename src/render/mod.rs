//! Rendering module for turning analysis results into text.

mod json;
mod page;
mod report;
mod result;
mod table;

pub use json::{to_json, JsonFormat};
pub use page::render_page;
pub use report::{to_report, to_report_with_stats, ReportRenderer};
pub use result::{RenderResult, ReportStats};
pub use table::render_table;
