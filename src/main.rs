mod cli;
mod config;

use fix_exceptions_common::{error::Result, fix_file};

fn main() -> Result<()> {
    // stdout carries only the usage or status line
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let path = match cli::file_path(std::env::args().skip(1)) {
        Ok(path) => path,
        Err(usage) => {
            println!("{usage}");
            std::process::exit(1);
        }
    };

    let config = config::load();

    match fix_file(&path, &config) {
        Ok(outcome) => println!("{}", outcome.status_line(&path)),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to fix file");
            return Err(e);
        }
    }

    Ok(())
}
