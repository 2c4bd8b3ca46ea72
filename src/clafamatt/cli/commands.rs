//! Dispatch: parse arguments, set up logging and configuration, run the
//! requested scenario and hand its result to the renderer.

use super::render::{print_family, print_json, print_synopsis, FamilyReport, SynopsisLine};
use super::scenario::{Family, Synopsis};
use super::setup::{Cli, Commands};
use clafamatt::api::Families;
use clafamatt::config::FamiliesConfig;
use clafamatt::error::Result;
use clafamatt::host::graph::ScopeGraph;
use clap::{CommandFactory, Parser};
use std::collections::BTreeMap;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    config: FamiliesConfig,
    json: bool,
}

impl AppContext {
    fn families(&self) -> Result<Families<ScopeGraph>> {
        Families::from_config(&self.config)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let ctx = init_context(&cli)?;
    match command {
        Commands::Synopsis => handle_synopsis(&ctx),
        Commands::Family { attr } => handle_family(&ctx, attr),
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut config = FamiliesConfig::load(cli.config.as_deref())?;
    if let Some(strategy) = cli.linearization {
        config = config.with_linearization(strategy.into());
    }
    debug!(?config, "configuration loaded");

    Ok(AppContext {
        config,
        json: cli.json,
    })
}

fn handle_synopsis(ctx: &AppContext) -> Result<()> {
    let mut synopsis = Synopsis::build(ctx.families()?)?;
    let steps = std::mem::take(&mut synopsis.steps);

    let mut lines = Vec::with_capacity(steps.len());
    for step in &steps {
        let expression = synopsis.expression(step)?;
        let line = match synopsis.run(step) {
            Ok(result) => SynopsisLine {
                expression,
                result,
                error: None,
            },
            Err(e) => SynopsisLine {
                expression,
                result: None,
                error: Some(e.to_string()),
            },
        };
        lines.push(line);
    }

    if ctx.json {
        print_json(&lines)
    } else {
        print_synopsis(&lines);
        Ok(())
    }
}

fn handle_family(ctx: &AppContext, attribute: &str) -> Result<()> {
    let family = Family::build(ctx.families()?, attribute)?;
    let families = &family.families;
    let namespace = families.default_namespace();
    let scope = family.singleton;

    let ancestors = families.ancestors_with(scope, attribute, namespace)?;
    let values = families.values_for(scope, attribute, namespace)?;
    let mut properties = BTreeMap::new();
    for (ancestor, value) in families.properties_for(scope, attribute, namespace)? {
        properties.insert(families.scope_name(ancestor)?.to_string(), value);
    }

    let report = FamilyReport {
        attribute: attribute.to_string(),
        scope: families.scope_name(scope)?.to_string(),
        namespace: namespace.to_string(),
        linearization: ctx.config.linearization.to_string(),
        ancestors: ancestors
            .iter()
            .map(|a| families.scope_name(*a).map(str::to_string))
            .collect::<Result<_>>()?,
        values,
        properties,
    };

    if ctx.json {
        print_json(&report)
    } else {
        print_family(&report);
        Ok(())
    }
}
