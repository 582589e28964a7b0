//! The `check` command: diagnose the environment without building
//! anything.
//!
//! Reports whether the template parses, the state of the output directory,
//! and whether the configured compiler resolves on the search path. A
//! missing compiler is informational, not a failure; a bad template is.

use crate::cli::CheckArgs;
use crate::compiler::{self, CompilerProbe};
use crate::config::Config;
use crate::error::Result;
use crate::render::Template;
use std::path::PathBuf;

pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let template_path = args
        .template
        .unwrap_or_else(|| PathBuf::from(&config.template));
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    println!("Checking resumake environment:");

    match Template::load(&template_path) {
        Ok(_) => println!("  template:   ok ({})", template_path.display()),
        Err(err) => {
            println!("  template:   FAILED");
            return Err(err);
        }
    }

    if output_dir.is_dir() {
        println!("  output dir: exists ({})", output_dir.display());
    } else {
        println!(
            "  output dir: will be created on first build ({})",
            output_dir.display()
        );
    }

    match compiler::probe(&config.compiler_command)? {
        CompilerProbe::Disabled => {
            println!("  compiler:   disabled (compiler_command is empty)");
        }
        CompilerProbe::Missing { program } => {
            println!(
                "  compiler:   '{}' not found (PDF compilation will be skipped)",
                program
            );
        }
        CompilerProbe::Found { program, path } => {
            println!("  compiler:   '{}' found at {}", program, path.display());
        }
    }

    Ok(())
}
