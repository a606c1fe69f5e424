use std::ffi::OsString;
use std::io;

use cubemap_rotate::action::cli::process_args;
use cubemap_rotate::utils::utils::setup_logging;

fn main() -> io::Result<()> {
    setup_logging()?;
    let args: Vec<OsString> = std::env::args_os().collect();
    let directory = process_args(args)?;
    log::info!("Run finished, directory: {}", directory);
    Ok(())
}
