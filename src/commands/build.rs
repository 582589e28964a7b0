//! The `build` command: collect a resume interactively, render it against
//! the template, write the document, and optionally compile it to PDF.
//!
//! Ordering is strict: collection precedes rendering, rendering precedes
//! the optional compile, and compilation only runs with explicit consent
//! (a flag or the interactive prompt) when the compiler binary resolves.

use crate::cli::BuildArgs;
use crate::collect::{self, Collector};
use crate::compiler::{self, CompileStatus};
use crate::config::Config;
use crate::error::Result;
use crate::events::{Event, EventAction, append_event, DEFAULT_LOG_DIR};
use crate::fs::atomic_write_file;
use crate::render::Template;
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub fn cmd_build(args: BuildArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let template_path = args
        .template
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.template));
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    // Parse the template before any prompting so a bad template never
    // wastes a full interactive session.
    let template = Template::load(&template_path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut collector = Collector::new(stdin.lock(), stdout.lock())?;

    let resume = collect::collect(&mut collector)?;
    let base_name = read_output_name(&mut collector)?;

    let rendered = template.render(&resume)?;
    let output_path = output_dir.join(format!("{}.{}", base_name, config.extension));
    atomic_write_file(&output_path, &rendered)?;

    log_event(
        Event::new(EventAction::Render)
            .with_artifact(output_path.display().to_string())
            .with_details(json!({
                "template": template_path.display().to_string(),
                "education_entries": resume.education.len(),
                "experience_entries": resume.experience.len(),
                "project_entries": resume.projects.len(),
                "achievement_entries": resume.achievements.len(),
            })),
    );

    collector.say(&format!(
        "\n'{}' generated successfully.",
        output_path.display()
    ))?;

    let should_compile = if args.compile {
        true
    } else if args.no_compile {
        false
    } else {
        wants_compile(&mut collector)?
    };

    if !should_compile {
        collector.say(&format!(
            "PDF compilation skipped. You can compile '{}' later.",
            output_path.display()
        ))?;
        return Ok(());
    }

    match compiler::compile(&config.compiler_command, &output_dir, &output_path) {
        Ok(CompileStatus::Compiled) => {
            log_event(
                Event::new(EventAction::Compile)
                    .with_artifact(output_path.display().to_string())
                    .with_details(json!({"status": "ok"})),
            );
            collector.say(&format!(
                "'{}.pdf' generated successfully in {}/",
                base_name,
                output_dir.display()
            ))?;
            Ok(())
        }
        Ok(CompileStatus::Skipped) => {
            log_event(
                Event::new(EventAction::Compile)
                    .with_artifact(output_path.display().to_string())
                    .with_details(json!({"status": "skipped"})),
            );
            let notice = if config.compiler_command.trim().is_empty() {
                format!(
                    "No compiler configured. '{}' is ready to compile later.",
                    output_path.display()
                )
            } else {
                format!(
                    "'{}' not found on your system. PDF compilation skipped; '{}' is ready to compile later.",
                    config.compiler_command,
                    output_path.display()
                )
            };
            collector.say(&notice)?;
            Ok(())
        }
        Err(err) => {
            log_event(
                Event::new(EventAction::Compile)
                    .with_artifact(output_path.display().to_string())
                    .with_details(json!({"status": "failed"})),
            );
            Err(err)
        }
    }
}

/// Prompt for the output file base name. Re-prompts while the name is
/// empty or contains a path separator.
fn read_output_name<R: BufRead, W: Write>(collector: &mut Collector<R, W>) -> Result<String> {
    loop {
        let name = collector.read_line("Enter the output file name (without extension): ")?;
        if name.is_empty() {
            collector.say("The file name must not be empty.")?;
        } else if name.contains('/') || name.contains('\\') {
            collector.say("The file name must not contain path separators.")?;
        } else {
            return Ok(name);
        }
    }
}

/// Ask for consent to compile. Anything other than `y`/`yes` is a no.
fn wants_compile<R: BufRead, W: Write>(collector: &mut Collector<R, W>) -> Result<bool> {
    let answer = collector.read_line("Compile to PDF now? (y/n) ")?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Best-effort event logging: warn on failure, never fail the command.
fn log_event(event: Event) {
    if let Err(e) = append_event(Path::new(DEFAULT_LOG_DIR), &event) {
        eprintln!("Warning: failed to log {} event: {}", event.action, e);
    }
}
