//! Hypergraph I/O helpers.
//!
//! This module provides trait-based readers and writers for loading and
//! saving [`Hypergraph`]s. The only format shipped is hMetis
//! ([`hmetis::HmetisReader`] / [`hmetis::HmetisWriter`]).

pub mod hmetis;

use crate::hypergraph::Hypergraph;
use crate::hypergraph_error::HypergraphError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Trait for readers that produce a hypergraph from a byte stream.
pub trait HypergraphReader {
    /// Parse a hypergraph from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<Hypergraph, HypergraphError>;

    /// Parse the hypergraph stored in the file at `path`.
    fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Hypergraph, HypergraphError> {
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }
}

/// Trait for writers that serialize a hypergraph to a byte stream.
pub trait HypergraphWriter {
    /// Write a hypergraph to a writer.
    fn write<W: Write>(&self, writer: W, hypergraph: &Hypergraph) -> Result<(), HypergraphError>;

    /// Write a hypergraph to the file at `path`, replacing its contents.
    fn write_path<P: AsRef<Path>>(
        &self,
        path: P,
        hypergraph: &Hypergraph,
    ) -> Result<(), HypergraphError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(&mut writer, hypergraph)?;
        writer.flush()?;
        Ok(())
    }
}
