use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

use crate::application::SafetyCheckUsecase;
use crate::infrastructure::{
    DynamicRunner, JsonExporter, StaticAnalyzer, SystemLauncher, TextExporter, DEFAULT_ANALYZER,
    DEFAULT_INTERPRETER,
};
use crate::ports::ReportExporter;

pub const USAGE: &str = "Usage: safety-check <file_path>";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "safety-check", author, version, about)]
pub struct Cli {
    /// file to check (exactly one)
    pub file_path: Vec<PathBuf>,

    /// static-analysis command, run as `<analyzer> <file_path>`
    #[arg(long, default_value = DEFAULT_ANALYZER)]
    pub analyzer: String,

    /// interpreter used for the dynamic check, run as `<interpreter> <file_path>`
    #[arg(long, default_value = DEFAULT_INTERPRETER)]
    pub interpreter: String,

    /// output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Enable debug output (stderr)
    #[arg(long, short = 'D')]
    pub debug: bool,
}

/// Parse `args` (program name first) and run both checks, writing the report to `out`.
///
/// Bad invocations print the usage line and return `Ok`, as do failed checks;
/// only write errors on `out` are reported as `Err`.
pub fn run<I, T>(args: I, out: &mut dyn Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", err.render()).context("Failed to write help")?;
            return Ok(());
        }
        Err(_) => return print_usage(out),
    };

    let [target] = cli.file_path.as_slice() else {
        return print_usage(out);
    };

    if cli.debug {
        eprintln!("[DEBUG] Config: {:?}", cli);
    }

    let launcher = SystemLauncher::new(cli.debug);
    let static_analyzer = StaticAnalyzer::new(&launcher, cli.analyzer.as_str());
    let dynamic_runner = DynamicRunner::new(&launcher, cli.interpreter.as_str());
    let usecase = SafetyCheckUsecase {
        static_analyzer: &static_analyzer,
        dynamic_runner: &dynamic_runner,
    };

    let mut exporter: Box<dyn ReportExporter + '_> = match cli.format {
        Format::Text => Box::new(TextExporter::new(&mut *out)),
        Format::Json => Box::new(JsonExporter::new(&mut *out)),
    };
    usecase.run(target, exporter.as_mut())
}

fn print_usage(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", USAGE).context("Failed to write usage")
}
