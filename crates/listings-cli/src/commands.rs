use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use listings_artifact::LocalArtifactStore;
use listings_clean::{CleanRequest, CleanSummary, run_cleaning};
use listings_cli::config::{Config, ValidateFlags};
use listings_cli::pipeline::{ValidationRun, run_validation};
use listings_model::ListingColumn;

use crate::cli::{CleanArgs, ValidateArgs};
use crate::summary::apply_table_style;

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Column", "Kind", "Nullable"]);
    apply_table_style(&mut table);
    for column in ListingColumn::ALL {
        table.add_row(vec![
            column.position().to_string(),
            column.name().to_string(),
            column.kind().label().to_string(),
            if column.nullable() { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_clean(args: &CleanArgs, config: &Config, store_root: &Path) -> Result<CleanSummary> {
    let price = config
        .clean_price(args.min_price, args.max_price)
        .context("resolve price bounds")?;
    let store = LocalArtifactStore::new(store_root);
    let work_dir = args.work_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&work_dir)
        .with_context(|| format!("create work dir {}", work_dir.display()))?;

    let request = CleanRequest {
        input_artifact: args.input_artifact.clone(),
        output_artifact: args.output_artifact.clone(),
        output_type: args.output_type.clone(),
        output_description: args.output_description.clone(),
        price,
    };
    run_cleaning(&store, &request, &work_dir)
        .with_context(|| format!("clean {}", args.input_artifact))
}

pub fn run_validate(
    args: &ValidateArgs,
    config: &Config,
    store_root: &Path,
) -> Result<ValidationRun> {
    let params = config
        .validation_params(&ValidateFlags {
            min_price: args.min_price,
            max_price: args.max_price,
            kl_threshold: args.kl_threshold,
        })
        .context("resolve validation parameters")?;
    let store = LocalArtifactStore::new(store_root);
    run_validation(
        &store,
        &args.csv,
        args.reference.as_deref(),
        &params,
        args.report_json.clone(),
    )
}
