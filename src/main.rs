mod app;
mod cli;
mod color_id;
mod config;
mod db;
mod domain;
mod lifecycle;
mod logging;
mod query;
mod repository;
mod state;
mod store;
mod ui;

#[cfg(test)]
mod main_tests;

use app::{App, AppError};
use store::RecordStore;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn print_json(value: &impl serde::Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("json serialization should work")
    );
}

fn run() -> Result<(), AppError> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    let config = config::CatalogConfig::load(cli.config.as_deref())?;
    logging::init(config.log_level, cli.verbose);

    if cli.ephemeral {
        let mut app = App::open_ephemeral();
        return dispatch(&mut app, cli.command);
    }

    let db_path = cli.db.clone().unwrap_or(config.db_path);
    let mut app = App::open(&db_path)?;
    dispatch(&mut app, cli.command)
}

fn dispatch<S: RecordStore>(app: &mut App<S>, command: cli::Commands) -> Result<(), AppError> {
    use cli::{CategorySubcommands, Commands};

    match command {
        Commands::Ls(args) => {
            match args.category.as_deref() {
                Some(category) => app.toggle_category(category),
                None => app.clear_category(),
            }
            app.set_search_term(args.query.as_deref().unwrap_or(""));
            let colors = app.visible_colors();
            if args.json {
                print_json(&colors);
            } else {
                ui::print_color_list(&colors, &app.state().filter);
            }
        }
        Commands::Show(args) => {
            let details = app.open_details(&args.id)?;
            if args.json {
                print_json(&details);
            } else {
                ui::print_color_details(&details);
            }
        }
        Commands::New(args) => {
            let created = app.add_color(&args.name, &args.hex, args.category.as_deref())?;
            if args.json {
                print_json(&created);
            } else {
                println!(
                    "created {} {} ({})",
                    created.id, created.name, created.category
                );
            }
        }
        Commands::Edit(args) => {
            let form = app.open_editor(&args.id)?;
            let patch = edit_patch(form, &args);
            let updated = app.edit_color(&args.id, patch)?;
            if args.json {
                print_json(&updated);
            } else {
                println!("updated {} {}", updated.id, updated.name);
            }
        }
        Commands::Rm(args) => {
            let removed = app.delete_color(&args.id)?;
            println!(
                "deleted {} {} ({} color(s) left)",
                removed.id,
                removed.name,
                app.colors().len()
            );
        }
        Commands::Category(args) => match args.command {
            CategorySubcommands::Ls(list_args) => {
                if list_args.json {
                    print_json(&app.categories());
                } else {
                    ui::print_categories(app.categories());
                }
            }
            CategorySubcommands::New(new_args) => {
                app.add_category(&new_args.label)?;
                println!("created category {}", new_args.label);
            }
        },
    }

    Ok(())
}

/// Overlays the flags given on the command line onto the prefilled edit form.
fn edit_patch(form: lifecycle::ColorPatch, args: &cli::EditArgs) -> lifecycle::ColorPatch {
    lifecycle::ColorPatch {
        category: args.category.clone().unwrap_or(form.category),
        recipe: match args.recipe.as_deref() {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(raw.to_string()),
            None => form.recipe,
        },
        customers: args
            .customers
            .as_deref()
            .map(lifecycle::parse_customers)
            .unwrap_or(form.customers),
        in_stock: args.in_stock.unwrap_or(form.in_stock),
    }
}
