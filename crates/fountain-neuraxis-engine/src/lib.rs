pub mod io;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, LogSink};
pub use parsing::{parse, parse_with_sink};
