//! CLI command handlers. Each command is in its own file for clarity.

mod check;
mod inject;
mod scan;
mod userscript;

pub use check::run_check;
pub use inject::run_inject;
pub use scan::run_scan;
pub use userscript::run_userscript;
