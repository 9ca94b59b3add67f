use clap::{Parser, Subcommand};
use reelsite::{config, generate, output, scan, templates};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reelsite")]
#[command(about = "Static site generator for video and animation libraries")]
#[command(long_about = "\
Static site generator for video and animation libraries

Each configured category maps to a directory of videos. A category holds
either video files directly or one level of subfolders with videos.

Project structure:

  project/
  ├── config.toml                    # Site config (optional)
  ├── assets/videos/
  │   ├── constitutive-models/       # Category with direct videos
  │   │   └── mohr_coulomb.mp4
  │   └── plaxis/                    # Category with subfolders
  │       └── Tunnel Excavation/
  │           └── stage1.mp4
  └── docs/
      ├── _template_top.html         # Header fragment (required)
      └── _template_bottom.html      # Footer fragment (required)

Generated pages:
  docs/index.html, docs/plaxis.html, docs/plaxis/tunnel-excavation.html

Recognized video extensions: mp4 webm mov m4v gif

Run 'reelsite gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Project root holding config.toml, assets/videos/ and the output directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate all pages (default)
    Build,
    /// Validate config and content, print the category inventory
    Check,
    /// Print the scan manifest as JSON
    Scan,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let site_config = config::load_config(&cli.root)?;
            let output_dir = cli.root.join(&site_config.output_dir);

            println!("{}", output::format_build_start(&site_config.base_url));
            let manifest = scan::scan(&cli.root, &site_config)?;
            output::print_notices(&manifest.notices);
            let templates = templates::Templates::load(&output_dir)?;
            let pages = generate::generate(&manifest, &site_config, &templates, &output_dir)?;
            output::print_generate_output(&pages, &site_config.output_dir);
        }
        Command::Check => {
            let site_config = config::load_config(&cli.root)?;
            println!("==> Checking {}", cli.root.display());
            let manifest = scan::scan(&cli.root, &site_config)?;
            templates::Templates::load(&cli.root.join(&site_config.output_dir))?;
            output::print_scan_output(&manifest);
            output::print_notices(&manifest.notices);
            println!("==> Content is valid");
        }
        Command::Scan => {
            let site_config = config::load_config(&cli.root)?;
            let manifest = scan::scan(&cli.root, &site_config)?;
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
