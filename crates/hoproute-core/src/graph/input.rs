//! Edge-list file loading
//!
//! Format: a header `mVertices nEdges` followed by `nEdges` records of
//! `from to weight`. Tokens are whitespace separated; line breaks carry no
//! meaning, so a record may span lines.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use crate::bail_input;
use crate::error::{Result, RouteError};
use crate::graph::store::{GraphStore, MAX_VERTICES};
use crate::graph::types::{Edge, Vertex};
use crate::trace_time;

/// Header and records of an edge-list file, before graph validation
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGraph {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
}

impl ParsedGraph {
    pub fn into_store(self) -> Result<GraphStore> {
        GraphStore::new(self.vertex_count, self.edges)
    }
}

fn next_number<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: impl Fn() -> String,
) -> Result<T> {
    match tokens.next() {
        Some(token) => token
            .parse()
            .map_err(|_| RouteError::malformed(format!("{}: cannot parse {:?}", what(), token))),
        None => bail_input!("{}: unexpected end of input", what()),
    }
}

/// Parse edge-list text into a header and its declared records
pub fn parse_edge_list(text: &str) -> Result<ParsedGraph> {
    let mut tokens = text.split_whitespace();

    let vertex_count: usize = next_number(&mut tokens, || "vertex count".to_string())?;
    if vertex_count > MAX_VERTICES {
        bail_input!(
            "vertex count {} exceeds the supported maximum of {}",
            vertex_count,
            MAX_VERTICES
        );
    }
    let edge_count: usize = next_number(&mut tokens, || "edge count".to_string())?;
    tracing::debug!(m_vertices = vertex_count, n_edges = edge_count, "header");

    let mut edges = Vec::with_capacity(edge_count.min(1 << 16));
    for index in 0..edge_count {
        let from: Vertex = next_number(&mut tokens, || format!("edge {} source", index))?;
        let to: Vertex = next_number(&mut tokens, || format!("edge {} destination", index))?;
        let weight: f64 = next_number(&mut tokens, || format!("edge {} weight", index))?;
        tracing::trace!(a = from, b = to, c = weight, "edge_record");
        edges.push(Edge::new(from, to, weight));
    }

    let leftover = tokens.count();
    if leftover > 0 {
        tracing::warn!(
            tokens = leftover,
            declared_edges = edge_count,
            "ignoring trailing data after declared edges"
        );
    }

    Ok(ParsedGraph {
        vertex_count,
        edges,
    })
}

/// Read, parse and validate the edge-list file at `path`
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<GraphStore> {
    let start = Instant::now();
    let text = fs::read_to_string(path).map_err(|e| RouteError::read_file(path, e))?;
    let graph = parse_edge_list(&text)?.into_store()?;
    tracing::debug!(records = graph.edge_count(), "edge list loaded");
    trace_time!(start, "load_graph");
    Ok(graph)
}

/// Parse the interactive source-vertex reply
pub fn parse_source_vertex(text: &str, vertex_count: usize) -> Result<Vertex> {
    let trimmed = text.trim();
    match trimmed.parse::<Vertex>() {
        Ok(vertex) if vertex < vertex_count => Ok(vertex),
        _ => Err(RouteError::invalid_source(trimmed, vertex_count)),
    }
}
