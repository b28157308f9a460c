//! hMetis `.hgr` reader and writer.
//!
//! # Supported format
//! ```text
//! <#hyperedges> <#vertices>[ <flag>]
//! [<weight> ]<v1> <v2> ... <vk>      -- repeated #hyperedges times
//! <weight>                           -- repeated #vertices times if flag is 10 or 11
//! ```
//! - `flag` is absent/0 (unweighted), 1 (hyperedge weights), 10 (vertex
//!   weights) or 11 (both).
//! - Vertex ids are 1-based; fields are separated by runs of whitespace.
//! - Lines starting with `%` are comments and may appear anywhere.
//!
//! # Limitations
//! - Content after the declared lines is ignored.
//! - Weights are read as `i32` and not range-checked.

use crate::hypergraph::format::HmetisFormat;
use crate::hypergraph::{Hypergraph, HypergraphBuilder, UnweightedHyperedge};
use crate::hypergraph_error::HypergraphError;
use crate::io::{HypergraphReader, HypergraphWriter};
use std::io::{Read, Write};
use std::str::FromStr;

/// hMetis reader.
#[derive(Debug, Default, Clone)]
pub struct HmetisReader;

/// Line cursor that skips comments and remembers physical line numbers.
struct DataLines<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> DataLines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
        }
    }

    /// Next non-comment line with its 1-based number.
    fn next_line(&mut self, expected: &'static str) -> Result<(usize, &'a str), HypergraphError> {
        loop {
            let Some(raw) = self.lines.next() else {
                return Err(HypergraphError::PrematureEndOfInput {
                    line: self.line + 1,
                    expected,
                });
            };
            self.line += 1;
            if !raw.trim_start().starts_with('%') {
                return Ok((self.line, raw));
            }
        }
    }
}

fn parse_token<T: FromStr>(line: usize, token: &str, what: &str) -> Result<T, HypergraphError> {
    token.parse::<T>().map_err(|_| HypergraphError::MalformedInput {
        line,
        reason: format!("invalid {what}: {token:?}"),
    })
}

/// Parsed header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    hyperedges: usize,
    vertices: usize,
    flag: u32,
}

impl Header {
    fn parse(line: usize, text: &str) -> Result<Self, HypergraphError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if !(2..=3).contains(&tokens.len()) {
            return Err(HypergraphError::MalformedInput {
                line,
                reason: format!(
                    "header must hold 2 or 3 integers, found {} fields",
                    tokens.len()
                ),
            });
        }
        let hyperedges = parse_token(line, tokens[0], "hyperedge count")?;
        let vertices = parse_token(line, tokens[1], "vertex count")?;
        let flag = match tokens.get(2) {
            Some(raw) => parse_token(line, raw, "format flag")?,
            None => HmetisFormat::Unweighted.identifier(),
        };
        if !HmetisFormat::is_known_flag(flag) {
            return Err(HypergraphError::MalformedInput {
                line,
                reason: format!("unsupported format flag {flag} (expected 0, 1, 10 or 11)"),
            });
        }
        Ok(Self {
            hyperedges,
            vertices,
            flag,
        })
    }

    fn weights_on_hyperedges(&self) -> bool {
        HmetisFormat::WeightOnHyperedges.is_encoded_in(self.flag)
    }

    fn weights_on_vertices(&self) -> bool {
        HmetisFormat::WeightOnVertices.is_encoded_in(self.flag)
    }
}

impl HmetisReader {
    /// Parse hMetis text held in memory.
    pub fn read_str(&self, text: &str) -> Result<Hypergraph, HypergraphError> {
        let mut lines = DataLines::new(text);
        let (line, header_text) = lines.next_line("hMetis header")?;
        let header = Header::parse(line, header_text)?;
        let mut builder = HypergraphBuilder::known_size(header.vertices, header.hyperedges);

        for _ in 0..header.hyperedges {
            let (line, text) = lines.next_line("hyperedge line")?;
            Self::read_hyperedge(&mut builder, &header, line, text)?;
        }

        if header.weights_on_vertices() {
            for vertex in 1..=header.vertices {
                let (line, text) = lines.next_line("vertex weight line")?;
                let weight = Self::read_vertex_weight(line, text)?;
                let vertex = u32::try_from(vertex).map_err(|_| HypergraphError::MalformedInput {
                    line,
                    reason: format!("vertex {vertex} exceeds the supported id range"),
                })?;
                builder
                    .with_vertex_weight(vertex, weight)
                    .map_err(|e| e.at_line(line))?;
            }
        }

        let hypergraph = builder.build()?;
        log::debug!(
            "parsed hMetis hypergraph: {} hyperedges, {} vertices, flag {}",
            header.hyperedges,
            header.vertices,
            header.flag
        );
        Ok(hypergraph)
    }

    fn read_hyperedge(
        builder: &mut HypergraphBuilder,
        header: &Header,
        line: usize,
        text: &str,
    ) -> Result<(), HypergraphError> {
        let mut tokens = text.split_whitespace();
        let weight = if header.weights_on_hyperedges() {
            let raw = tokens.next().ok_or_else(|| HypergraphError::MalformedInput {
                line,
                reason: "missing hyperedge weight".into(),
            })?;
            Some(parse_token::<i32>(line, raw, "hyperedge weight")?)
        } else {
            None
        };
        let vertices = tokens
            .map(|raw| parse_token::<u32>(line, raw, "vertex id"))
            .collect::<Result<Vec<_>, _>>()?;
        let hyperedge = UnweightedHyperedge::joining(vertices);
        let added = match weight {
            Some(weight) => builder.with_hyperedge(hyperedge.with_weight(weight)),
            None => builder.with_hyperedge(hyperedge),
        };
        added.map(|_| ()).map_err(|e| e.at_line(line))
    }

    fn read_vertex_weight(line: usize, text: &str) -> Result<i32, HypergraphError> {
        let mut tokens = text.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(raw), None) => parse_token(line, raw, "vertex weight"),
            (None, _) => Err(HypergraphError::MalformedInput {
                line,
                reason: "missing vertex weight".into(),
            }),
            (Some(_), Some(_)) => Err(HypergraphError::MalformedInput {
                line,
                reason: "vertex weight line must hold a single integer".into(),
            }),
        }
    }
}

impl HypergraphReader for HmetisReader {
    fn read<R: Read>(&self, mut reader: R) -> Result<Hypergraph, HypergraphError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        self.read_str(&contents)
    }
}

/// hMetis writer; the output is the `Display` form of the hypergraph.
#[derive(Debug, Default, Clone)]
pub struct HmetisWriter;

impl HypergraphWriter for HmetisWriter {
    fn write<W: Write>(
        &self,
        mut writer: W,
        hypergraph: &Hypergraph,
    ) -> Result<(), HypergraphError> {
        write!(writer, "{hypergraph}")?;
        Ok(())
    }
}
