//! CLI command handlers. Each writes its report to the given writer.

mod check;
mod lookup;

pub use check::run_check;
pub use lookup::{run_ext, run_extensions, run_file, run_url};
