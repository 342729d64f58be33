use crate::cli::commands::*;
use crate::cli::output::*;
use crate::data;
use crate::io::catalog_io::load_catalogs;
use crate::io::config_io::load_config;
use crate::logging::{self, LogTarget};
use crate::model::AppConfig;
use crate::ops::{filter, kpi};
use crate::store::SelectionStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let (config, source) = load_config(cli.config.as_deref())?;
    let _log_guard = logging::init(&config.log, LogTarget::Cli);
    tracing::debug!(?source, "loaded config");

    let command = match cli.command {
        Some(cmd) => cmd,
        None => return Err("no subcommand given".into()),
    };

    let catalogs = load_catalogs(&config.catalog)?;
    let store = SelectionStore::new(catalogs);

    match command {
        Commands::Search(args) => cmd_search(&store, &config, args, json),
        Commands::Catalog(args) => cmd_catalog(&store, args, json),
        Commands::Kpi(args) => cmd_kpi(store, args, json),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_search(
    store: &SelectionStore,
    config: &AppConfig,
    args: SearchArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = store.catalog(args.mode);
    let limit = args.limit.unwrap_or(config.picker.max_results);
    let hits = filter::search_capped(catalog, &args.query, limit);
    tracing::debug!(query = %args.query, mode = %args.mode, hits = hits.len(), "search");

    if json {
        let out = EntityListJson {
            mode: args.mode,
            total: catalog.len(),
            entities: hits,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if hits.is_empty() {
        println!("No matches");
    } else {
        for line in format_entity_lines(&hits) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_catalog(
    store: &SelectionStore,
    args: CatalogArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = store.catalog(args.mode);
    let entities: Vec<_> = catalog.iter().collect();

    if json {
        let out = EntityListJson {
            mode: args.mode,
            total: catalog.len(),
            entities,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for line in format_entity_lines(&entities) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_kpi(
    mut store: SelectionStore,
    args: KpiArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = args.mode;
    let ids: Vec<String> = args
        .select
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();
    for id in &ids {
        if !store.catalog(mode).contains(id) {
            tracing::warn!(%id, %mode, "selected id is not in the catalog");
        }
    }
    store.set_selection(mode, ids);

    let visible = store.visible_entity_ids(mode);
    let fleet = data::vehicles::vehicles();
    let summary = kpi::summarize(&kpi::visible_vehicles(&fleet, mode, &visible));

    if json {
        let out = KpiJson {
            mode,
            visible: visible.into_iter().collect(),
            kpi: summary,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for line in format_kpi(mode, visible.len(), &summary) {
            println!("{}", line);
        }
    }
    Ok(())
}
