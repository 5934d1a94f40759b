#![forbid(unsafe_code)]

//! Binary entrypoint for the `condbuild` banner.

use std::process;

fn main() {
    let exit_code = condbuild_cli::run();
    if exit_code != 0 {
        process::exit(exit_code);
    }
}
