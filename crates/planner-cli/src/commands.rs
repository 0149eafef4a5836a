//! Subcommand handlers
//!
//! Each handler writes to the supplied writer so output can be captured in
//! tests. JSON mode prints one pretty-printed document per invocation.

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use planner_catalog::Catalog;
use planner_core::{format, Planner, PlannerConfig, RiskMeter};
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;

fn write_json<T: serde::Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn selected_ids(args: &ArgMatches) -> Vec<String> {
    args.get_many::<String>("select")
        .map(|ids| ids.filter(|id| !id.is_empty()).cloned().collect())
        .unwrap_or_default()
}

fn load_config(matches: &ArgMatches) -> Result<PlannerConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(PlannerConfig::default()),
    }
}

/// Run the parsed command line
///
/// # Errors
/// Fails on an unreadable catalog, an unknown preset id, or a write error on
/// `out`. The config file is only read by `plan`, `recommend` and `meter`.
pub fn run(matches: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let loaded;
    let catalog: &Catalog = match matches.get_one::<PathBuf>("catalog") {
        Some(path) => {
            loaded = Catalog::load(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?;
            &loaded
        }
        None => Catalog::builtin(),
    };
    let json = matches.get_flag("json");

    match matches.subcommand() {
        Some(("scenarios", _)) => scenarios(catalog, json, out),
        Some(("presets", _)) => presets(catalog, json, out),
        Some(("plan", args)) => plan(catalog, load_config(matches)?, args, json, out),
        Some(("recommend", args)) => {
            recommend(catalog, load_config(matches)?, args, json, out)
        }
        Some(("meter", args)) => {
            let risk = args
                .get_one::<i64>("risk")
                .copied()
                .context("missing risk value")?;
            meter(risk, load_config(matches)?, json, out)
        }
        Some(("schema", _)) => write_json(out, &Catalog::json_schema()),
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("no command given"),
    }
}

fn scenarios(catalog: &Catalog, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        return write_json(out, &catalog.to_document().scenarios);
    }
    for s in catalog.scenarios() {
        writeln!(
            out,
            "{} {} {}  {}  {}",
            s.icon,
            s.id.as_str(),
            format::badge(s),
            format::cost_range(s.cost_range),
            s.name
        )?;
    }
    Ok(())
}

fn presets(catalog: &Catalog, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        return write_json(out, &catalog.to_document().presets);
    }
    for p in catalog.presets() {
        let ids: Vec<&str> = p.scenario_ids().collect();
        writeln!(out, "{} {} {}: {}", p.icon, p.id, p.name, ids.join(", "))?;
    }
    Ok(())
}

fn plan(
    catalog: &Catalog,
    config: PlannerConfig,
    args: &ArgMatches,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let mut planner = Planner::with_config(catalog, config);
    if let Some(preset) = args.get_one::<String>("preset") {
        planner.load_preset(preset)?;
    }
    for id in selected_ids(args) {
        if !catalog.contains(&id) {
            tracing::info!(scenario = %id, "selected id is not in the catalog and will be ignored");
        }
        planner.add(&id);
    }

    let summary = planner.summary();
    if json {
        write_json(out, &summary)
    } else {
        write!(out, "{summary}")?;
        Ok(())
    }
}

fn recommend(
    catalog: &Catalog,
    config: PlannerConfig,
    args: &ArgMatches,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let mut planner = Planner::with_config(catalog, config);
    for id in selected_ids(args) {
        planner.add(&id);
    }
    let recommendations = planner.recommendations();

    if json {
        return write_json(out, &recommendations);
    }
    if recommendations.is_empty() {
        writeln!(out, "No further recommendations.")?;
    }
    let explain = args.get_flag("explain");
    for rec in &recommendations {
        let name = catalog.get(rec.id.as_str()).map_or("", |s| s.name.as_str());
        if explain {
            writeln!(out, "- {} ({}) [{}]", rec.id, name, rec.rule)?;
        } else {
            writeln!(out, "- {} ({})", rec.id, name)?;
        }
    }
    Ok(())
}

fn meter(risk: i64, config: PlannerConfig, json: bool, out: &mut dyn Write) -> Result<()> {
    let reading = RiskMeter::read(risk, config.gauge);
    if json {
        return write_json(
            out,
            &json!({
                "risk": reading.risk,
                "band": reading.band,
                "label": reading.band.label(),
                "color": reading.band.color(),
                "glyph": reading.band.glyph(),
                "gauge": reading.gauge,
            }),
        );
    }
    writeln!(
        out,
        "{} {} ({}), gauge {:+.1}°",
        reading.band.glyph(),
        reading.band.label(),
        format::signed_percent(reading.risk),
        reading.gauge.angle_degrees
    )?;
    Ok(())
}
