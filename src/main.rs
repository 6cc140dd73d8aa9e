use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use log::warn;

use gallerist::config::GalleryConfig;
use gallerist::controller::{CatalogController, ClickOutcome, LinkClick};
use gallerist::loader::load_gallery;
use gallerist::location::Location;
use gallerist::render::{catalog_view, nav_html};
use gallerist::source::open_gallery;
use gallerist::viewport::ViewerSize;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Html,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse a categorized example gallery", long_about = None)]
struct Cli {
    /// Gallery directory or .zip archive containing files.json and tags.json
    #[arg(value_name = "GALLERY")]
    gallery: Utf8PathBuf,

    /// Directory holding the manifest inside a .zip gallery, e.g. "three.js/examples"
    #[arg(long, value_name = "DIR")]
    zip_prefix: Option<String>,

    /// Page URL to start from, e.g. "/examples/index.html?q=gltf#webgl_animation"
    #[arg(long, default_value = "index.html")]
    url: String,

    /// Select an entry as if clicked (repeatable, applied in order)
    #[arg(long = "select", value_name = "FILE")]
    select: Vec<String>,

    /// Type into the search box (repeatable, applied after selections)
    #[arg(long = "filter", value_name = "TEXT")]
    filter: Vec<String>,

    /// Clear the search box at the end
    #[arg(long)]
    exit_search: bool,

    /// User agent used for the viewer size workaround
    #[arg(long)]
    user_agent: Option<String>,

    /// Viewer size passed to the workaround, as WIDTHxHEIGHT
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    viewer_size: ViewerSize,

    /// JSON config overriding file names and link templates
    #[arg(long, value_name = "FILE")]
    config: Option<Utf8PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn parse_size(s: &str) -> Result<ViewerSize, String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let width = w.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let height = h.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok(ViewerSize { width, height })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(p) => GalleryConfig::from_file(p)?,
        None => GalleryConfig::default(),
    };
    let mut source = open_gallery(&cli.gallery, cli.zip_prefix.as_deref())?;
    let data = load_gallery(source.as_mut(), &config)
        .with_context(|| format!("Failed to load gallery {}", cli.gallery))?;

    let mut catalog = CatalogController::init(
        &data.manifest,
        data.tags,
        Location::parse(&cli.url),
        config.links.clone(),
    );

    if let Some(ua) = &cli.user_agent {
        catalog.adjust_viewport(ua, cli.viewer_size);
    }
    for file in &cli.select {
        match catalog.click_entry(file, LinkClick::primary()) {
            ClickOutcome::Selected => {}
            ClickOutcome::External { href } => warn!("{file} would open externally at {href}"),
            ClickOutcome::Unknown => warn!("no entry named {file:?}"),
        }
    }
    for text in &cli.filter {
        catalog.focus_search();
        // Pattern errors are logged by the controller; the list keeps its last state.
        let _ = catalog.set_filter_input(text);
        catalog.blur_search();
    }
    if cli.exit_search {
        catalog.exit_search();
    }

    match cli.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&catalog_view(&catalog))?;
            println!("{}", json);
        }
        Format::Html => print!("{}", nav_html(&catalog)),
    }
    Ok(())
}
