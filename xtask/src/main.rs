use std::fs;

use anyhow::Context;
use clap::{ArgGroup, Parser, Subcommand};
use tree_sitter_lint_plugin_ava::{instantiate, run_for_slice, ConfigBuilder, FileRunResult};

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Lint(LintArgs),
}

#[derive(clap::Args)]
#[clap(group(
    ArgGroup::new("source")
        .multiple(false)
        .required(true)
        .args(&["source_text", "path"])
))]
struct LintArgs {
    source_text: Option<String>,
    #[arg(long)]
    path: Option<String>,
    /// Print the source with every fix applied.
    #[arg(long)]
    fix: bool,
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Lint(args) => lint(args),
    }
}

fn lint(args: LintArgs) -> anyhow::Result<()> {
    let (source_text, path) = match (args.source_text, args.path) {
        (Some(source_text), None) => (source_text, "tmp.js".to_owned()),
        (None, Some(path)) => (
            fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?,
            path,
        ),
        _ => unreachable!(),
    };

    let config = ConfigBuilder::default().fix(args.fix).build()?;
    let result = run_for_slice(&source_text, &path, &instantiate(), &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    print_result(&path, &result);
    Ok(())
}

fn print_result(path: &str, result: &FileRunResult) {
    if let Some(fixed_source) = result.fixed_source.as_ref() {
        print!("{fixed_source}");
        return;
    }
    for violation in &result.violations {
        println!(
            "{path}:{}:{}: {} ({}){}",
            violation.line,
            violation.column,
            violation.message,
            violation.rule_name,
            if violation.fix.is_some() {
                " [fixable]"
            } else {
                ""
            },
        );
    }
}
