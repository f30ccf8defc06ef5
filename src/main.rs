//! worldsheet CLI - Build themed worldbuilding sites from a JSON site file

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use worldsheet::{
    appearance::{ButtonStyle, CardStyle, ContainerStyle, NavigationStyle, OverviewStyle},
    filter::{MatchMode, WorldFilter},
    height,
    page::{self, SiteFile},
    palette::{ColorScheme, FontChoice},
    stylesheet, validation,
    variant::Variant,
    world,
};

/// worldsheet: themed stylesheets and pages for worldbuilding sites
#[derive(Parser, Debug)]
#[command(name = "worldsheet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write index.html and style.css for a site
    Build(BuildArgs),

    /// Print or write the stylesheet only
    Stylesheet(StylesheetArgs),

    /// Print the world section HTML fragment
    World(SiteArgs),

    /// List world items matching a filter
    Filter(FilterArgs),

    /// Show the minimum container height estimate
    Height(SiteArgs),

    /// List every style registry and its variants
    Styles,

    /// Write a sample site file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
struct SiteArgs {
    /// Path to the site JSON file
    #[arg(short, long, default_value = "site.json", env = "WORLDSHEET_SITE")]
    site: PathBuf,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Output directory
    #[arg(short, long, default_value = "public")]
    out_dir: PathBuf,

    /// Leave the build time out of the page footer
    #[arg(long, default_value = "false")]
    no_timestamp: bool,
}

#[derive(Parser, Debug)]
struct StylesheetArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FilterArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Case-insensitive search term
    #[arg(long, default_value = "")]
    search: String,

    /// Exact status to match
    #[arg(long, default_value = "")]
    status: String,

    /// Tag to select (repeatable)
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// How selected tags combine (any, all)
    #[arg(long, default_value = "any")]
    mode: String,
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Where to write the sample site file
    #[arg(short, long, default_value = "site.json")]
    output: PathBuf,

    /// Overwrite an existing file
    #[arg(long, default_value = "false")]
    force: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::Build(args) => build_command(args),
        Commands::Stylesheet(args) => stylesheet_command(args),
        Commands::World(args) => world_command(args),
        Commands::Filter(args) => filter_command(args),
        Commands::Height(args) => height_command(args),
        Commands::Styles => styles_command(),
        Commands::Init(args) => init_command(args),
    }
}

/// Load and validate a site file
fn load_site(args: &SiteArgs) -> Result<SiteFile> {
    debug!("Loading site file {:?}", args.site);
    let site = SiteFile::load_from_file(&args.site)
        .with_context(|| format!("Failed to load site file: {:?}", args.site))?;

    validation::validate_appearance(&site.appearance)
        .with_context(|| format!("Invalid appearance in {:?}", args.site))?;
    validation::validate_tuning(&site.tuning)
        .with_context(|| format!("Invalid height tuning in {:?}", args.site))?;

    Ok(site)
}

fn build_command(args: BuildArgs) -> Result<()> {
    info!("Building site");
    let site = load_site(&args.site)?;

    let generated_at = if args.no_timestamp { None } else { Some(Utc::now()) };
    let index = page::write_site(&site, &args.out_dir, generated_at)
        .with_context(|| format!("Failed to write site to {:?}", args.out_dir))?;

    info!("Site generated at {:?}", index);
    Ok(())
}

fn stylesheet_command(args: StylesheetArgs) -> Result<()> {
    let site = load_site(&args.site)?;
    let css = stylesheet::render_stylesheet(&site.appearance, &site.overview, &site.tuning)
        .context("Failed to render stylesheet")?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, css)
                .with_context(|| format!("Failed to write stylesheet: {:?}", path))?;
            info!("Stylesheet written to {:?}", path);
        }
        None => print!("{}", css),
    }

    Ok(())
}

fn world_command(args: SiteArgs) -> Result<()> {
    let site = load_site(&args)?;
    let html = world::render_world_section(&site.world, &site.appearance)
        .context("Failed to render world section")?;

    if html.is_empty() {
        warn!("World section is disabled in the appearance settings");
    }
    print!("{}", html);
    Ok(())
}

fn filter_command(args: FilterArgs) -> Result<()> {
    let site = load_site(&args.site)?;
    let mode: MatchMode = args
        .mode
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid filter configuration: {}", e))?;

    let filter = args
        .tags
        .iter()
        .fold(WorldFilter::new(), |filter, tag| filter.select_tag(tag))
        .with_search(args.search)
        .with_status(args.status)
        .with_mode(mode);

    let matches = filter.apply(&site.world);
    info!("{} of {} world items match", matches.len(), site.world.len());

    for item in matches {
        let tags: Vec<String> = item
            .visible_tags()
            .iter()
            .map(|tag| tag.label().to_string())
            .collect();
        let status = if item.status.is_empty() { "-" } else { item.status.as_str() };

        if tags.is_empty() {
            println!("{} ({}, {})", item.name, item.category, status);
        } else {
            println!("{} ({}, {}) [{}]", item.name, item.category, status, tags.join(", "));
        }
    }

    Ok(())
}

fn height_command(args: SiteArgs) -> Result<()> {
    let site = load_site(&args)?;
    let breakdown = height::estimate(&site.appearance, &site.overview, &site.tuning);

    println!("base:        {:>5}px ({})", breakdown.base, site.appearance.overview_style);
    println!("title:       {:>5}px", breakdown.title);
    println!("links:       {:>5}px", breakdown.links);
    println!("text:        {:>5}px", breakdown.text);
    println!("image:       {:>5}px", breakdown.image);
    println!("content:     {:>5}px", breakdown.content());
    println!(
        "navigation:  {:>5}px ({})",
        breakdown.navigation, site.appearance.navigation_style
    );
    println!("floor:       {:>5}px", breakdown.floor);
    println!("min-height:  {:>5}px", breakdown.total());

    Ok(())
}

fn print_registry<V: Variant + std::fmt::Display>() {
    let names: Vec<String> = V::ALL
        .iter()
        .map(|variant| {
            if variant.is_default() {
                format!("{}*", variant)
            } else {
                variant.to_string()
            }
        })
        .collect();
    println!("{:<18} {}", V::KIND, names.join(", "));
}

fn styles_command() -> Result<()> {
    print_registry::<NavigationStyle>();
    print_registry::<ContainerStyle>();
    print_registry::<ButtonStyle>();
    print_registry::<CardStyle>();
    print_registry::<OverviewStyle>();
    print_registry::<ColorScheme>();
    print_registry::<FontChoice>();
    println!("\n* default, used for unknown names");
    Ok(())
}

fn init_command(args: InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{:?} already exists, use --force to overwrite it",
            args.output
        );
    }

    SiteFile::sample()
        .save_to_file(&args.output)
        .with_context(|| format!("Failed to write sample site: {:?}", args.output))?;

    info!("Sample site written to {:?}", args.output);
    Ok(())
}
