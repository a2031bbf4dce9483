use clap::{Parser, Subcommand};
use std::path::PathBuf;
use theme_gallery::highlight::{Highlighter, SyntectHighlighter};
use theme_gallery::{config, generate, output};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Called once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "theme-gallery")]
#[command(about = "Static HTML gallery of syntax highlighting themes")]
#[command(long_about = "\
Static HTML gallery of syntax highlighting themes

Renders one sample snippet in every configured theme and writes:

  <output>/
  ├── <theme>.html     # One page per theme, with Prev/Next/Up/All buttons
  ├── index.html       # Links to every theme page, in gallery order
  └── all.html         # Every theme on a single page, styles inlined

Without a config file the built-in theme list and Go sample are used.
Run 'theme-gallery gen-config' to generate a documented gallery.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Output directory
    #[arg(long, default_value = ".", global = true)]
    output: PathBuf,

    /// Config file (optional; stock defaults apply when it does not exist)
    #[arg(long, default_value = "gallery.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate every page (the default)
    Build,
    /// Validate the config and highlight every theme without writing files
    Check,
    /// List the configured themes in gallery order
    List {
        /// List every theme the highlighter knows instead
        #[arg(long)]
        available: bool,
    },
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let config = config::load_config(&cli.config)?;
            let highlighter = SyntectHighlighter::new(&config.sample.language);
            let today = chrono::Utc::now().date_naive();
            let report = generate::generate(&config, &highlighter, &cli.output, today)?;
            output::print_generate_output(&report);
        }
        Command::Check => {
            let config = config::load_config(&cli.config)?;
            let highlighter = SyntectHighlighter::new(&config.sample.language);
            println!(
                "==> Checking {} themes ({} sample)",
                config.themes.len(),
                highlighter.language()
            );
            for theme in &config.themes {
                highlighter.render_fragment(&config.sample.code, theme, false)?;
            }
            output::print_lines(&output::format_theme_list(&config.themes));
            println!("==> Config is valid");
        }
        Command::List { available } => {
            let config = config::load_config(&cli.config)?;
            let lines = if available {
                output::format_available_themes(
                    &SyntectHighlighter::available_themes(),
                    &config.themes,
                )
            } else {
                output::format_theme_list(&config.themes)
            };
            output::print_lines(&lines);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
