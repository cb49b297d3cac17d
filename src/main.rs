//! `foldscope [OPTIONS.toml]`: open the folding viewer, optionally with an
//! options preset.

use std::path::Path;
use std::process::ExitCode;

use foldscope::{Options, Viewer};

fn main() -> ExitCode {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Options::default(),
    };

    match Viewer::builder().with_options(options).build().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
