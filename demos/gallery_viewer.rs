//! Browse a gallery directory using egui (requires `--features egui`).
//!
//! Usage:
//!   cargo run --features egui --example gallery_viewer -- <gallery-dir> -u "index.html?q=gltf#webgl_animation"

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use eframe::egui;

use gallerist::config::GalleryConfig;
use gallerist::controller::CatalogController;
use gallerist::egui_app::GalleryApp;
use gallerist::loader::load_gallery;
use gallerist::location::Location;
use gallerist::source::FsSource;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse an example gallery using egui", long_about = None)]
struct Args {
    /// Gallery directory containing files.json and tags.json
    #[arg(value_name = "GALLERY_DIR")]
    dir: Utf8PathBuf,

    /// Start URL carrying the filter query and selected example
    #[arg(short = 'u', long = "url", default_value = "index.html")]
    url: String,

    /// JSON config overriding file names and link templates
    #[arg(long)]
    config: Option<Utf8PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = match &args.config {
        Some(p) => GalleryConfig::from_file(p)?,
        None => GalleryConfig::default(),
    };

    let mut source = FsSource::new(args.dir.clone());
    let data = load_gallery(&mut source, &config)
        .with_context(|| format!("Failed to load gallery {}", args.dir))?;
    let catalog = CatalogController::init(
        &data.manifest,
        data.tags,
        Location::parse(&args.url),
        config.links,
    );
    let root = args
        .dir
        .canonicalize_utf8()
        .with_context(|| format!("Resolve {}", args.dir))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "gallerist",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(GalleryApp::new(catalog, root)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
