use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::BrightCyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::BrightMagenta.on_default())
}

#[derive(Debug, Parser)]
#[command(name = "pantone")]
#[command(bin_name = "pantone")]
#[command(version)]
#[command(about = "A local catalog of named colors, recipes and customers")]
#[command(styles = cli_styles())]
pub struct Cli {
    #[arg(
        short = 'd',
        long,
        env = "PANTONE_DB_PATH",
        help = "Path to the catalog database (defaults to the config db_path)."
    )]
    pub db: Option<String>,

    #[arg(
        short = 'c',
        long,
        env = "PANTONE_CONFIG",
        help = "Path to a TOML config file (defaults to .pantone/config.toml when present)."
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        help = "Use a throwaway in-memory catalog; nothing is written to disk."
    )]
    pub ephemeral: bool,

    #[arg(short = 'v', long, help = "Log debug output to stderr.")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "List colors, optionally filtered by search text and category.")]
    Ls(ListArgs),
    #[command(about = "Show one color with its similar colors.")]
    Show(ShowArgs),
    #[command(about = "Add a new color to the catalog.")]
    New(NewArgs),
    #[command(about = "Edit category, recipe, customers or stock of a color.")]
    Edit(EditArgs),
    #[command(about = "Delete a color by id.")]
    Rm(RemoveArgs),
    #[command(about = "List or create categories.")]
    Category(CategoryArgs),
}

#[derive(Debug, Args)]
#[command(about = "List colors.")]
pub struct ListArgs {
    #[arg(help = "Case-insensitive text matched against color names and ids.")]
    pub query: Option<String>,

    #[arg(short = 'k', long, help = "Only show colors in this exact category.")]
    pub category: Option<String>,

    #[arg(long, help = "Print JSON output.")]
    pub json: bool,
}

#[derive(Debug, Args)]
#[command(about = "Show one color.")]
pub struct ShowArgs {
    #[arg(help = "Color id.")]
    pub id: String,

    #[arg(long, help = "Print JSON output.")]
    pub json: bool,
}

#[derive(Debug, Args)]
#[command(about = "Add a new color.")]
pub struct NewArgs {
    #[arg(help = "Color name.")]
    pub name: String,

    #[arg(help = "Hex code: '#' followed by 3 or 6 hex digits.")]
    pub hex: String,

    #[arg(
        short = 'k',
        long,
        help = "Category label (defaults to the first category)."
    )]
    pub category: Option<String>,

    #[arg(long, help = "Print JSON output.")]
    pub json: bool,
}

#[derive(Debug, Args)]
#[command(about = "Edit a color. Omitted fields keep their current values.")]
pub struct EditArgs {
    #[arg(help = "Color id.")]
    pub id: String,

    #[arg(short = 'k', long, help = "Move the color to this category.")]
    pub category: Option<String>,

    #[arg(short = 'r', long, help = "Production recipe text (empty clears it).")]
    pub recipe: Option<String>,

    #[arg(
        short = 'u',
        long,
        help = "Comma-separated customer list; blanks are dropped."
    )]
    pub customers: Option<String>,

    #[arg(
        short = 's',
        long = "in-stock",
        value_name = "BOOL",
        help = "Stock status: true or false."
    )]
    pub in_stock: Option<bool>,

    #[arg(long, help = "Print JSON output.")]
    pub json: bool,
}

#[derive(Debug, Args)]
#[command(about = "Delete a color.")]
pub struct RemoveArgs {
    #[arg(help = "Color id.")]
    pub id: String,
}

#[derive(Debug, Args)]
#[command(
    about = "Category commands.",
    long_about = "List categories in display order, or create a new one."
)]
pub struct CategoryArgs {
    #[command(subcommand)]
    pub command: CategorySubcommands,
}

#[derive(Debug, Subcommand)]
pub enum CategorySubcommands {
    #[command(about = "List categories.")]
    Ls(CategoryListArgs),
    #[command(about = "Create a category; labels must be unique.")]
    New(CategoryNewArgs),
}

#[derive(Debug, Args)]
pub struct CategoryListArgs {
    #[arg(long, help = "Print JSON output.")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CategoryNewArgs {
    #[arg(help = "Category label.")]
    pub label: String,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
