use anyhow::{Context, Result};
use clap::Parser;
use kitdivide::{
    category::CategoryIndex,
    cli::{Cli, OutputFormat},
    config::{FileConfig, Settings},
    divide_parts,
    inventory::{self, InventoryPage, SetInfo},
    report,
    weight::WeightCache,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Load every input, divide the parts and render the report
fn run(settings: &Settings) -> Result<String> {
    let categories = CategoryIndex::from_file(&settings.categories)?;
    info!(categories = categories.len(), "Loaded categories");

    let mut weights = WeightCache::load(&settings.weight_cache)?;
    if !settings.weights.is_empty() {
        for (id, grams) in &settings.weights {
            weights.insert(id.as_str(), *grams);
        }
        weights.save()?;
        info!(added = settings.weights.len(), entries = weights.len(), "Updated weight cache");
    }

    let set = match &settings.set_info {
        Some(path) => SetInfo::from_file(path)?,
        None => SetInfo::bare(settings.set_num.as_str()),
    };

    let pages = settings
        .parts_files
        .iter()
        .map(InventoryPage::from_file)
        .collect::<Result<Vec<_>>>()?;
    if pages.iter().any(|p| p.next.is_some()) {
        info!("Inventory reports further pages; only the given files are used");
    }

    let parts = inventory::build_parts(&pages, &categories, &mut weights)
        .with_context(|| format!("Failed to resolve parts for set {}", settings.set_num))?;
    let mut parts = inventory::dedup_parts(parts);
    inventory::sort_by_weight(&mut parts);
    info!(parts = parts.len(), "Resolved inventory");

    let division = divide_parts(&parts, &categories, settings.divisions)?;

    let output = match settings.format {
        OutputFormat::Text => report::render_text(&set, &division),
        OutputFormat::Json => report::JsonDivision::new(&set, &division)
            .to_json()
            .context("Failed to serialize division")?,
    };
    Ok(output)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&args, file_config);

    let output = run(&settings)?;
    print!("{}", output);
    if settings.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
