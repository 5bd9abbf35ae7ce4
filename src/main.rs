use anyhow::Result;
use clap::Parser;
use colored::*;
use repo_readme::{config, generate, HeaderStyle, Profile};
use std::fs;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "repo-readme", version, about = "Generate a README from a GitHub repository")]
struct Cli {
    /// Repository URL, e.g. https://github.com/owner/repo
    url: String,

    /// Header style: classic, modern or compact
    #[arg(long)]
    style: Option<HeaderStyle>,

    /// Where to write the document (defaults to the configured file name)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the document instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Print the analysed profile as JSON
    #[arg(long)]
    json: bool,

    /// Path to a config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => {
            let path = config::get_config_path()?;
            if config::Config::ensure_exists(&path)? {
                eprintln!("Created default config file at {:?}", path);
            }
            path
        }
    };
    let config = config::Config::load_or_default(&config_path)?;
    let style = cli.style.unwrap_or(config.output.header_style);

    let (profile, document) = generate(&cli.url, &config, style).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else if !cli.stdout {
        print_summary(&profile, style);
    }

    if cli.stdout {
        print!("{}", document.content);
        return Ok(());
    }

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.file_name));
    fs::write(&output, &document.content)?;
    eprintln!(
        "{} {} ({})",
        "Wrote".green().bold(),
        output.display(),
        document.content_type()
    );

    Ok(())
}

fn print_summary(profile: &Profile, style: HeaderStyle) {
    let caps = &profile.narrative.capabilities;
    let flag = |on: bool| if on { "yes".green() } else { "no".dimmed() };

    println!("{}", profile.name.to_uppercase().green().bold());
    println!("{}", profile.narrative.purpose.italic());
    println!();
    println!("{:<16}{}", "Type:", profile.project_type.blue());
    println!(
        "{:<16}{} ({}, {} languages)",
        "Language:",
        profile.language.name.blue(),
        profile.language_percentage,
        profile.language.count
    );
    println!("{:<16}{}", "Frameworks:", profile.frameworks.join(", "));
    println!(
        "{:<16}{}",
        "Managers:",
        profile
            .package_managers
            .iter()
            .map(|m| m.name().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("{:<16}{}", "Entry point:", profile.entry_point);
    println!("{:<16}{}", "Header style:", style.label());
    println!();
    println!(
        "API: {}  Database: {}  Auth: {}  Tests: {}  Container: {}  Deploy-ready: {}  Full-stack: {}",
        flag(caps.has_api),
        flag(caps.has_database),
        flag(caps.has_auth),
        flag(caps.has_tests),
        flag(caps.has_container),
        flag(caps.deployment_ready),
        flag(caps.is_full_stack)
    );
}
