use std::io;

fn main() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    safety_check::cli::run(std::env::args_os(), &mut out)
}
