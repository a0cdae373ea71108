use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info_span, trace};

use census_cli::config::{Overrides, Settings, load_config};
use census_cli::logging::redact_value;
use census_cli::render::{census_table, explain_table, summary_line, variants_table};
use census_core::CensusBoard;

use crate::cli::{ArrangeArgs, ExplainArgs, OutputArg};

pub fn run_variants() -> Result<i32> {
    println!("{}", variants_table());
    Ok(0)
}

pub fn run_arrange(args: &ArrangeArgs, config_path: Option<&Path>) -> Result<i32> {
    let config = load_config(config_path)?;
    let settings = Settings::resolve(
        &config,
        &Overrides {
            variant: args.variant.variant,
            sort: args.sort.clone(),
            toggles: args.toggle.clone(),
            partition_below: args.partition_below,
        },
    )?;
    let span = info_span!("arrange", variant = %settings.variant);
    let _guard = span.enter();

    let text = read_input(args.input.as_deref())?;
    let board = CensusBoard::with_profile(settings.variant, settings.profile)
        .context("compile parser profile")?
        .with_partition_below(settings.partition_below);
    let view = board.build(&text, settings.keys);

    for row in &view.rows {
        trace!(
            name = redact_value(&row.record.raw_name),
            patient_number = redact_value(&row.record.patient_number),
            room = %row.record.room,
            length_of_stay = row.record.length_of_stay.days(),
            marked = row.marked,
            "row"
        );
    }

    match args.output {
        OutputArg::Table => {
            println!("{}", census_table(&view));
            println!("{}", summary_line(&view));
        }
        OutputArg::Json => {
            let json = serde_json::to_string_pretty(&view).context("serialize census view")?;
            println!("{json}");
        }
    }
    Ok(0)
}

pub fn run_explain(args: &ExplainArgs, config_path: Option<&Path>) -> Result<i32> {
    let config = load_config(config_path)?;
    let settings = Settings::resolve(
        &config,
        &Overrides {
            variant: args.variant.variant,
            ..Overrides::default()
        },
    )?;
    let board = CensusBoard::with_profile(settings.variant, settings.profile)
        .context("compile parser profile")?;
    let result = board.parser().inspect(&args.line);
    println!("{}", explain_table(&result));
    Ok(if result.is_ok() { 0 } else { 1 })
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("read census text {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("read census text from stdin")?;
            Ok(text)
        }
    }
}
