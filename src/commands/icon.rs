//! Icon command implementation

use ratatui::style::Color;

use crate::cli::IconArgs;
use crate::view::icons::{self, FileIcon};

/// Run the icon command
pub fn run(args: IconArgs) {
    for name in &args.names {
        println!("{}", describe(name, icons::resolve(name)));
    }
}

/// One output line: `name  glyph category  color`.
pub fn describe(name: &str, icon: FileIcon) -> String {
    format!(
        "{}  {} {}  {}",
        name,
        icon.category.glyph(),
        icon.category.label(),
        color_hex(icon.color)
    )
}

fn color_hex(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        other => format!("{:?}", other),
    }
}
