// Live preview, form-rule validation and completeness scoring.
// Nothing here gates rendering: preview renders partial data as-is.

pub mod completeness;
pub mod handlers;
pub mod validation;

pub use completeness::compute_completeness_report;
pub use validation::missing_download_fields;
