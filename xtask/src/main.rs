//! xtask - Build tasks for yank-system-ops
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};

use yank_system_ops::cli::{CopyFilesCli, ExtractArchiveCli, PasteFilesCli};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for yank-system-ops")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // If no specific format is specified, generate all
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// The three executables' command definitions.
fn commands() -> [Command; 3] {
    [
        CopyFilesCli::command(),
        PasteFilesCli::command(),
        ExtractArchiveCli::command(),
    ]
}

/// Generate one man page per executable using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    use clap_mangen::Man;

    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    for cmd in commands() {
        let name = cmd.get_name().to_string();
        let mut buffer = Vec::new();
        Man::new(cmd).render(&mut buffer)?;
        fs::write(man_dir.join(format!("{}.1", name)), buffer)?;
        println!("Generated: {}/{}.1", man_dir.display(), name);
    }

    Ok(())
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let mut markdown = String::new();
    markdown.push_str("# Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");

    for cmd in commands() {
        let name = cmd.get_name();
        markdown.push_str(&format!("## {}\n\n", name));

        if let Some(about) = cmd.get_about() {
            markdown.push_str(&format!("{}\n\n", about));
        }

        let args: Vec<_> = cmd
            .get_arguments()
            .filter(|a| {
                let id = a.get_id().as_str();
                id != "help" && id != "version"
            })
            .collect();

        let positional: Vec<_> = args.iter().filter(|a| a.is_positional()).collect();
        if !positional.is_empty() {
            markdown.push_str("### Arguments\n\n");
            for arg in positional {
                let value = arg
                    .get_value_names()
                    .and_then(|names| names.first())
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| arg.get_id().as_str().to_uppercase());
                markdown.push_str(&format!("- `<{}>`: ", value));
                if let Some(help) = arg.get_help() {
                    markdown.push_str(&format!("{}", help));
                }
                markdown.push('\n');
            }
            markdown.push('\n');
        }

        let options: Vec<_> = args.iter().filter(|a| !a.is_positional()).collect();
        if !options.is_empty() {
            markdown.push_str("### Options\n\n");
            for arg in options {
                let long = arg.get_long().map(|l| format!("--{}", l));
                let short = arg.get_short().map(|s| format!("-{}", s));
                let flag = match (long, short) {
                    (Some(l), Some(s)) => format!("{}, {}", s, l),
                    (Some(l), None) => l,
                    (None, Some(s)) => s,
                    _ => continue,
                };
                markdown.push_str(&format!("- `{}`: ", flag));
                if let Some(help) = arg.get_help() {
                    markdown.push_str(&format!("{}", help));
                }
                markdown.push('\n');
            }
            markdown.push('\n');
        }

        if let Some(long_about) = cmd.get_long_about() {
            markdown.push_str("### Description\n\n");
            markdown.push_str("```\n");
            markdown.push_str(&format!("{}\n", long_about));
            markdown.push_str("```\n\n");
        }

        markdown.push_str("---\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
