use anyhow::{bail, Context, Result};
use camino::Utf8Path;
use clap::{Parser, Subcommand, ValueEnum};
use cookbook_catalog::render::{render_detail, render_page, render_recipe_list, render_tips};
use cookbook_catalog::{
    filter_recipes, Catalog, CatalogView, DifficultyFilter, FilterCriteria, TimeFilter,
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;

use command::{Command, HELP, HELP_HINT};

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(about = "Browse the recipe catalog in the terminal", long_about = None)]
struct Cli {
    /// Catalog file or directory (defaults to the built-in catalog)
    #[arg(long, global = true, env = "COOKBOOK_CATALOG")]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes matching the filters
    List {
        /// Text to look for in titles and ingredients
        #[arg(long)]
        search: Option<String>,
        /// Maximum cooking time: all, 15, 30 or 60
        #[arg(long, default_value = "all")]
        time: TimeFilter,
        /// Difficulty: all, easy, medium or hard
        #[arg(long, default_value = "all")]
        difficulty: DifficultyFilter,
    },
    /// Show one recipe with ingredients and steps
    Show {
        /// Recipe id
        id: u32,
    },
    /// Show the cooking tips
    Tips,
    /// Render the whole page with no filters applied
    Page,
    /// Print the loaded catalog
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Yaml)]
        format: ExportFormat,
    },
    /// Interactive session reading commands from stdin
    Browse,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cookbook_catalog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::List {
            search,
            time,
            difficulty,
        } => {
            let criteria = FilterCriteria::new(search.unwrap_or_default(), time, difficulty);
            print!("{}", render_recipe_list(&filter_recipes(catalog.recipes(), &criteria)));
        }
        Commands::Show { id } => match catalog.get(id) {
            Some(recipe) => print!("{}", render_detail(recipe)),
            None => bail!("Recipe not found: {id}"),
        },
        Commands::Tips => print!("{}", render_tips(catalog.tips())),
        Commands::Page => print!("{}", render_page(&CatalogView::new(catalog))),
        Commands::Export { format } => {
            let output = match format {
                ExportFormat::Yaml => catalog.to_yaml()?,
                ExportFormat::Json => catalog.to_json()?,
            };
            println!("{}", output.trim_end());
        }
        Commands::Browse => {
            let mut view = CatalogView::new(catalog);
            browse(&mut view, io::stdin().lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    match path {
        Some(path) => {
            tracing::debug!(path, "loading catalog");
            Catalog::load(Utf8Path::new(path))
                .with_context(|| format!("Failed to load catalog from {path}"))
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Runs a browse session: renders the page, then applies one command per
/// input line and renders again after every accepted one.
fn browse<R: BufRead, W: Write>(view: &mut CatalogView, input: R, mut out: W) -> Result<()> {
    write!(out, "{}", render_page(view))?;
    writeln!(out, "{HELP_HINT}")?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        match command::parse(&line?) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(out, "{HELP}")?,
            Ok(Some(Command::Apply(event))) => {
                view.dispatch(event);
                write!(out, "{}", render_page(view))?;
            }
            Err(e) => writeln!(out, "{e}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
