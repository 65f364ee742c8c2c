// Entry point: program main
// Handles --help, --filter and runs the interactive picker.

use std::env;
use std::process;
use tagsel::config::{Invocation, help_text, parse_args};
use tagsel::error::TagselError;
use tagsel::ui::run::{Outcome, format_output};

async fn real_main(args: Vec<String>) -> Result<i32, TagselError> {
    let cfg = match parse_args(&args)? {
        Invocation::Help => {
            println!("{}", help_text());
            return Ok(0);
        }
        Invocation::Run(cfg) => cfg,
    };
    tagsel::logging::init(cfg.log_file.as_deref(), cfg.log_level)?;

    match tagsel::ui::run(&cfg).await? {
        Outcome::Done(items) => {
            let out = format_output(&items, cfg.json)
                .map_err(|e| TagselError::Program(format!("failed to encode output: {e}")))?;
            if !out.is_empty() {
                println!("{out}");
            }
            Ok(0)
        }
        Outcome::Cancelled => Ok(1),
    }
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    match real_main(args).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            log::error!("{e}");
            eprintln!("tagsel: {e}");
            process::exit(2);
        }
    }
}
