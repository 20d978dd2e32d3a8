//! Run logic for hoproute
use std::io::{self, Write};
use std::time::Instant;

use clap::CommandFactory;

use crate::cli::Cli;
use crate::commands::{output, prompt};
use hoproute_core::config::RouterConfig;
use hoproute_core::bail_usage;
use hoproute_core::error::Result;
use hoproute_core::format::OutputFormat;
use hoproute_core::graph::{load_graph, parse_source_vertex};
use hoproute_core::routing::compute_routes;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(path) = cli.data_path() else {
        let usage = Cli::command().render_usage();
        bail_usage!(format!(
            "no data file given\n\n{}\n\nFor more information, try '--help'.",
            usage
        ));
    };

    let config = RouterConfig::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.output.format);
    tracing::info!(path = %path.display(), format = %format, "data file");

    let graph = load_graph(path)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_graph");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if format == OutputFormat::Human && !cli.quiet {
        output::write_graph_dumps(&mut out, &graph, &config)?;
    }

    let source = match cli.source {
        Some(source) => parse_source_vertex(&source.to_string(), graph.vertex_count())?,
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            if format == OutputFormat::Json {
                // keep stdout a single JSON document
                prompt::prompt_source(&mut input, &mut io::stderr(), graph.vertex_count())?
            } else {
                let source = prompt::prompt_source(&mut input, &mut out, graph.vertex_count())?;
                writeln!(out)?;
                source
            }
        }
    };

    let routes = compute_routes(&graph, source)?;
    tracing::debug!(elapsed = ?start.elapsed(), "compute_routes");
    let table = routes.routing_table();

    match format {
        OutputFormat::Human => output::write_human(&mut out, &table, &config)?,
        OutputFormat::Json => output::write_json(&mut out, &graph, &table, routes.stats)?,
    }
    out.flush()?;

    tracing::debug!(
        elapsed = ?start.elapsed(),
        reachable = table.reachable_count(),
        "done"
    );
    Ok(())
}
