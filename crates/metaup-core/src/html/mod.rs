//! Raw-text HTML scanning: head-section location and meta-tag counting.
//!
//! The documents this tool rewrites are server-rendered pages, so a bounded
//! scanner over the raw text is enough. Tag names compare case-insensitively,
//! comments and script/style raw text are skipped, and nothing outside the
//! head section is interpreted or modified.

mod meta;
mod scan;

pub use meta::count_meta_http_equiv;
pub use scan::{head_close_offset, head_span, HeadSpan};
