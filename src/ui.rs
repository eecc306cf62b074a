use std::io::{self, IsTerminal};

use crate::app::ColorDetails;
use crate::domain::color::{hex_to_rgb, ColorEntry};
use crate::query::CatalogFilter;

pub fn print_color_list(colors: &[ColorEntry], filter: &CatalogFilter) {
    let palette = Palette::auto();
    println!("{}", palette.heading("Colors"));
    if let Some(summary) = filter.summary() {
        println!("{}", palette.dim(&format!("filters: {summary}")));
    }

    if colors.is_empty() {
        println!("{}", palette.dim("no colors matched"));
        return;
    }

    for color in colors {
        println!("{}", format_color_row(color, &palette));
    }
    println!("{}", palette.dim(&format!("{} color(s)", colors.len())));
}

pub fn print_color_details(details: &ColorDetails) {
    let palette = Palette::auto();
    let color = &details.color;
    println!("{}", format_color_row(color, &palette));
    println!("  {} {}", palette.dim("hex:"), color.hex);
    println!("  {} {}", palette.dim("category:"), color.category);
    if let Some(recipe) = color.recipe.as_deref().filter(|value| !value.is_empty()) {
        println!("  {} {}", palette.dim("recipe:"), recipe);
    }
    if !color.customers().is_empty() {
        println!("  {} {}", palette.dim("customers:"), color.customers_line());
    }

    println!();
    println!("{}", palette.heading("Similar colors"));
    if details.similar.is_empty() {
        println!("{}", palette.dim("none in this category"));
    }
    for similar in &details.similar {
        println!("{}", format_color_row(similar, &palette));
    }
}

pub fn print_categories(categories: &[String]) {
    let palette = Palette::auto();
    println!("{}", palette.heading("Categories"));
    if categories.is_empty() {
        println!("{}", palette.dim("no categories"));
        return;
    }
    for category in categories {
        println!("  {}", palette.category(category));
    }
}

pub fn format_color_row(color: &ColorEntry, palette: &Palette) -> String {
    let mut line = format!(
        "{} {} {} {}",
        palette.swatch(&color.hex),
        palette.id(&color.id),
        color.name,
        palette.category(&color.category)
    );
    line.push(' ');
    line.push_str(&palette.stock(color.in_stock));
    line
}

pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn auto() -> Self {
        let enabled = std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal();
        Self { enabled }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint("1;36", text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint("2", text)
    }

    pub fn id(&self, text: &str) -> String {
        self.paint("1;94", text)
    }

    fn category(&self, text: &str) -> String {
        self.paint("35", &format!("({text})"))
    }

    fn stock(&self, in_stock: bool) -> String {
        if in_stock {
            self.paint("32", "[IN STOCK]")
        } else {
            self.paint("31", "[OUT OF STOCK]")
        }
    }

    /// Truecolor block for the hex code; plain output shows the code instead.
    fn swatch(&self, hex: &str) -> String {
        match hex_to_rgb(hex) {
            Some((r, g, b)) if self.enabled => format!("\x1b[48;2;{r};{g};{b}m    \x1b[0m"),
            _ => format!("{hex:<7}"),
        }
    }
}
