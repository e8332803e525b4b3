extern crate log;
pub mod map;
pub mod page;
pub mod popup;
pub mod wells;
use crate::map::layer::POPUP_MAX_WIDTH;
use crate::map::render_wells;
use crate::map::view::{InitialView, MapView, TileSource};
use crate::page::leaflet::MapPage;
use crate::popup::labels::{LabelCatalog, LabelEntry};
use anyhow::anyhow;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use std::{fs::read_to_string, path::Path};

/// Render well records as markers on a Leaflet map page.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input config file.
    #[arg(short, long)]
    config_filepath: String,
}

#[derive(Deserialize, Debug)]
struct Config {
    /// HTTP(S) URL of the wells FeatureCollection, or a local GeoJSON file path.
    endpoint: String,
    output_filepath: PathBuf,
    #[serde(default)]
    initial_view: InitialView,
    #[serde(default)]
    tile_source: TileSource,
    /// Replaces the built-in well label catalog when present.
    labels: Option<Vec<LabelEntry>>,
    #[serde(default = "default_popup_max_width")]
    popup_max_width: u32,
}

fn default_popup_max_width() -> u32 {
    POPUP_MAX_WIDTH
}

impl Config {
    fn label_catalog(&self) -> anyhow::Result<LabelCatalog> {
        match &self.labels {
            Some(entries) => LabelCatalog::from_entries(entries),
            None => Ok(LabelCatalog::default()),
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::try_parse()?;
    if !Path::new(&args.config_filepath).exists() {
        return Err(anyhow!("Config file {} not found", &args.config_filepath));
    }
    log::info!("Reading config from {}", &args.config_filepath);
    let config_contents = read_to_string(args.config_filepath)?;
    let config: Config = serde_yaml::from_str(&config_contents)?;
    run(&config)
}

/// Load the wells and write the map page. If loading fails, the initial markerless page is written
/// with the failure message and the error is returned.
fn run(config: &Config) -> anyhow::Result<()> {
    let catalog = config.label_catalog()?;
    if catalog.is_empty() {
        log::warn!("Label catalog is empty, popups will only show raw attribute keys");
    } else {
        log::info!("Using {} attribute labels", catalog.len());
    }

    let mut view = MapView::new(&config.initial_view);
    let collection = match wells::download::load(&config.endpoint) {
        Ok(collection) => collection,
        Err(err) => {
            log::error!("Failed to load wells: {}", err);
            MapPage::failed(
                &view,
                &config.tile_source,
                format!("Failed to load wells: {}", err),
            )
            .write(&config.output_filepath)?;
            return Err(err.into());
        }
    };
    log::info!("Read {} features", collection.features().len());

    let rendered = render_wells(&collection, &catalog, config.popup_max_width, &mut view);

    log::info!("Writing map page to {:?}", &config.output_filepath);
    MapPage {
        view: &view,
        tiles: &config.tile_source,
        markers: &rendered.markers,
        count: Some(rendered.count),
        failure: None,
    }
    .write(&config.output_filepath)?;
    Ok(())
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
