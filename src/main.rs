//! tapp_pack - packages a built web application into a `.tapp` archive.
//!
//! Runs the optional install + build, resolves the manifest and writes the
//! archive. Any failure prints one tagged diagnostic line and exits non-zero.

use std::process;
use tapp_pack::cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} ERROR: {}", cli::TAG, e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
