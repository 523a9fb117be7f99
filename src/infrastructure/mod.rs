// Infrastructure implementations for safety-check.

pub mod checkers;
pub mod exporters;
pub mod process;

pub use checkers::{DynamicRunner, StaticAnalyzer, DEFAULT_ANALYZER, DEFAULT_INTERPRETER};
pub use exporters::{JsonExporter, TextExporter};
pub use process::SystemLauncher;
