use clap::{Parser, Subcommand};
use scholar_site::{config, content, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scholar-site")]
#[command(about = "Static site generator for academic homepages")]
#[command(long_about = "\
Static site generator for academic homepages

One site.toml describes people, publications, teaching and project pages.
The generator writes a home page and one page per project.

Content structure:

  content/
  ├── config.toml     # Generation settings (optional)
  └── site.toml       # People, publications, courses, music, projects

Output structure:

  dist/
  ├── index.html                  # Home page
  └── project/<id>/index.html     # One per [[projects]] entry

Stylesheets are referenced, not generated: deploy the assets directory
named in config.toml next to index.html.

Run 'scholar-site gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the home page and all project pages
    Build,
    /// Validate content and config without writing anything
    Check,
    /// Print the resolved content model as JSON
    Manifest,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Loading {}", cli.source.display());
            let site = content::load_site(&cli.source)?;

            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&site, &cli.output, &site_config)?;
            output::print_generate_output(&report);
            if !report.is_success() {
                return Err(generate::GenerateError::PagesFailed(report.failures.len()).into());
            }
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            config::load_config(&cli.source)?;
            let site = content::load_site(&cli.source)?;
            output::print_check_output(&site);
            println!("==> Content is valid");
        }
        Command::Manifest => {
            let site = content::load_site(&cli.source)?;
            println!("{}", serde_json::to_string_pretty(&site)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
