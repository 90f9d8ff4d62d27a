use anyhow::Context;
use clap::{Parser, Subcommand};
use og_card::rasterize::ChromeRasterizer;
use og_card::{config, output, pipeline};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "og-card")]
#[command(about = "Render social-sharing preview images for blog posts")]
#[command(long_about = "\
Render social-sharing preview images for blog posts

For every markdown post with a title, og-card fills an HTML template with
the post's frontmatter (plus word count and read time scraped from the
built site) and captures it with a headless browser as a 1200x630 PNG.

Expected blog layout (all paths configurable):

  content/posts/              # Markdown posts with frontmatter
  ├── _index.md               # Section index - always skipped
  ├── sample.md               # title / date / tags frontmatter
  └── 2024/deep-dive.md       # Nested posts are found too
  public/
  └── sample/index.html       # Built page - '742 words • 4 mins' scraped
  og-card-template.html       # Template with {title} {date} {tags}
                              # {word_count} {read_time} placeholders
  static/images/
  └── Sample-Post.png         # One card per post, named from the title

A post without a title is skipped; a missing built page renders with
zeroed stats; a browser failure abandons that card and the batch moves
on. Run 'og-card gen-config' for a documented og-card.toml.")]
#[command(version)]
struct Cli {
    /// Posts directory (overrides config)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Directory for finished cards (overrides config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Work directory for the temp HTML and browser screenshot
    #[arg(long, default_value = ".og-card-temp", global = true)]
    temp_dir: PathBuf,

    /// Config file
    #[arg(long, default_value = "og-card.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a card for every titled post
    Build,
    /// Report what a build would do without rendering anything
    Check {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock og-card.toml with all options documented
    GenConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let cfg = load_config(&cli)?;
            let rasterizer = ChromeRasterizer::new(cfg.browser.clone(), &cli.temp_dir);
            let reports = pipeline::build(&cfg, &cli.temp_dir, &rasterizer)
                .with_context(|| format!("building cards from {}", cfg.posts_dir.display()))?;
            output::print_build_report(&reports);
        }
        Command::Check { json } => {
            let cfg = load_config(&cli)?;
            let reports = pipeline::check(&cfg)
                .with_context(|| format!("checking posts in {}", cfg.posts_dir.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                output::print_check_report(&reports);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config file and fold in CLI overrides.
fn load_config(cli: &Cli) -> anyhow::Result<config::CardConfig> {
    let mut cfg = config::load_config(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(source) = &cli.source {
        cfg.posts_dir = source.clone();
    }
    if let Some(output) = &cli.output {
        cfg.output_dir = output.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}
