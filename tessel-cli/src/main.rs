//! Tessel CLI
//!
//! Parses an HTML fragment and prints the resulting content tree.

mod hook;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use tessel_dom::{Compact, HtmlTags, Node, RenderOptions, format_tree, render};
use tessel_html::{ParseOptions, parse_fragment_with};

/// Tessel: strict HTML fragment parser
#[derive(Parser, Debug)]
#[command(name = "tessel")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the content tree of a file
    tessel fragment.html

    # Parse inline HTML
    tessel --html '<p class="x">a &amp; b</p>'

    # Recognize {{...}} placeholders and print constructor notation
    tessel --placeholders --code --html '<div {{attrs}}>{{name}}</div>'
"#)]
struct Cli {
    /// Path to an HTML fragment
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse HTML string directly instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Print the tree as JSON
    #[arg(long, conflicts_with = "code")]
    json: bool,

    /// Print the tree in constructor notation
    #[arg(long)]
    code: bool,

    /// Recognize {{...}} placeholders
    #[arg(short, long)]
    placeholders: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = load_source(cli)?;

    let mut options = ParseOptions::default();
    if cli.placeholders {
        options = options.with_special_hook(hook::mustache);
    }
    let content = parse_fragment_with(source.as_str(), options, &HtmlTags)
        .context("failed to parse fragment")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else if cli.code {
        println!("{}", render::to_code(&content, &RenderOptions::default())?);
    } else {
        print_summary(&content);
    }
    Ok(())
}

/// Load the fragment from CLI arguments
fn load_source(cli: &Cli) -> Result<String> {
    if let Some(ref html) = cli.html {
        Ok(html.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    } else {
        anyhow::bail!("expected a file path or --html")
    }
}

/// Print the content tree with a one-line header
fn print_summary(content: &Compact<Node>) {
    let shape = match content {
        Compact::Absent => "empty",
        Compact::Single(_) => "single node",
        Compact::Many(_) => "node list",
    };
    println!("{} ({shape})", "=== Content ===".bold());
    print!("{}", format_tree(content));
}
