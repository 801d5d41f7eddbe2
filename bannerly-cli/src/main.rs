//! Bannerly CLI — render text as multi-line ASCII-art banners.

mod color;

use anyhow::{anyhow, bail, Result};
use clap::Parser;

use bannerly::catalog::FontCatalog;
use bannerly::render::Renderer;

use crate::color::Color;

/// Caller-enforced cap on input length, keeping output well inside the
/// published render limits for every built-in font.
const MAX_TEXT_LENGTH: usize = 40;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let catalog = FontCatalog::builtin();

    if cli.list_fonts {
        for font in catalog.fonts() {
            println!("{} ({} lines)", font.name(), font.height());
        }
        return Ok(());
    }

    let text = cli.text.join(" ");
    if text.trim().is_empty() {
        bail!("No text provided.");
    }
    let length = text.chars().count();
    if length > MAX_TEXT_LENGTH {
        bail!("Text too long ({length} chars > {MAX_TEXT_LENGTH} char limit). Try shorter input.");
    }

    let font = match &cli.font {
        Some(name) => catalog.get(name).ok_or_else(|| {
            let available: Vec<&str> = catalog.fonts().map(|font| font.name()).collect();
            anyhow!(
                "Font '{name}' not found. Available fonts: {}.",
                available.join(", ")
            )
        })?,
        None => catalog.default_font(),
    };
    log::debug!("rendering {length} characters with font {}", font.name());

    let result = Renderer::new(font).strict(cli.strict).render(&text);
    if !result.success() {
        bail!(
            "{}",
            result
                .warnings()
                .first()
                .map_or("Rendering failed.", String::as_str)
        );
    }

    if let Some(advice) = cli.color.and_then(Color::accessibility_advice) {
        eprintln!("{advice}");
    }
    for line in result.lines() {
        match cli.color {
            Some(color) => println!("{}{line}{}", color.code(), color::RESET),
            None => println!("{line}"),
        }
    }
    for warning in result.warnings() {
        eprintln!("Warning: {warning}");
    }
    Ok(())
}

/// Render text as a multi-line ASCII-art banner.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Text to render; multiple arguments are joined with single spaces
    text: Vec<String>,

    /// Font to use (see --list-fonts)
    #[arg(short, long)]
    font: Option<String>,

    /// Fail instead of substituting the placeholder for unsupported characters
    #[arg(long)]
    strict: bool,

    /// List available fonts and exit
    #[arg(long)]
    list_fonts: bool,

    /// Render the banner in a terminal color
    #[arg(long, value_enum)]
    color: Option<Color>,
}
