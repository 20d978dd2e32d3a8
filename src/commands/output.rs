use std::io::Write;

use serde::Serialize;

use hoproute_core::config::RouterConfig;
use hoproute_core::error::Result;
use hoproute_core::graph::{render_adjacency_matrix, render_edge_table, GraphStore, Vertex};
use hoproute_core::routing::{ComputationStats, RouteEntry, RoutingTable};

/// JSON document for one run
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub source: Vertex,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub routes: &'a [RouteEntry],
    pub stats: ComputationStats,
}

/// Adjacency matrix and edge table, as enabled in the config
pub fn write_graph_dumps<W: Write>(
    out: &mut W,
    graph: &GraphStore,
    config: &RouterConfig,
) -> Result<()> {
    if config.output.show_matrix {
        write!(
            out,
            "{}",
            render_adjacency_matrix(graph, &config.display.missing_edge)
        )?;
    }
    if config.output.show_edge_table {
        write!(out, "{}", render_edge_table(graph))?;
    }
    Ok(())
}

pub fn write_human<W: Write>(
    out: &mut W,
    table: &RoutingTable,
    config: &RouterConfig,
) -> Result<()> {
    write!(out, "{}", table.display(&config.display.unreachable))?;
    Ok(())
}

pub fn write_json<W: Write>(
    out: &mut W,
    graph: &GraphStore,
    table: &RoutingTable,
    stats: ComputationStats,
) -> Result<()> {
    let report = RunReport {
        source: table.source,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        routes: &table.routes,
        stats,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoproute_core::graph::Edge;
    use hoproute_core::routing::compute_routes;

    fn graph() -> GraphStore {
        GraphStore::new(3, vec![Edge::new(0, 1, 1.0)]).unwrap()
    }

    #[test]
    fn test_json_report_shape() {
        let g = graph();
        let run = compute_routes(&g, 0).unwrap();
        let mut buf = Vec::new();
        write_json(&mut buf, &g, &run.routing_table(), run.stats).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["source"], 0);
        assert_eq!(value["vertex_count"], 3);
        assert_eq!(value["edge_count"], 1);
        assert_eq!(value["routes"][1]["first_hop"], 1);
        assert!(value["routes"][2]["first_hop"].is_null());
        assert_eq!(value["stats"]["finalized"], 2);
    }

    #[test]
    fn test_dumps_respect_config() {
        let mut config = RouterConfig::default();
        config.output.show_matrix = false;
        let mut buf = Vec::new();
        write_graph_dumps(&mut buf, &graph(), &config).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("Adjacency Matrix"));
        assert!(text.contains("Edge Table:"));
    }
}
