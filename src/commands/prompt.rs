use std::io::{BufRead, Write};

use hoproute_core::error::Result;
use hoproute_core::graph::{parse_source_vertex, Vertex};

pub const SOURCE_PROMPT: &str = "Enter integer identifier of single source node: ";

/// Ask for the source vertex and read one line of reply
pub fn prompt_source<R: BufRead, W: Write>(
    input: &mut R,
    prompt_out: &mut W,
    vertex_count: usize,
) -> Result<Vertex> {
    write!(prompt_out, "{}", SOURCE_PROMPT)?;
    prompt_out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let source = parse_source_vertex(&line, vertex_count)?;
    tracing::debug!(source, "source vertex selected");
    Ok(source)
}
