//! Reads graph documents into stores.

use std::io::Read;
use std::path::Path;

use crate::graph::GraphStore;
use crate::types::GraphResult;

use super::GraphDocument;

/// Reader for JSON graph documents.
pub struct GraphReader;

impl GraphReader {
    /// Read a document file into a store.
    pub fn read_from_file(path: &Path) -> GraphResult<Box<dyn GraphStore>> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Read from any reader into a store.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<Box<dyn GraphStore>> {
        let document: GraphDocument = serde_json::from_reader(reader)?;
        log::debug!(
            "read {} document: {} vertices, {} edges",
            document.storage,
            document.vertices.len(),
            document.edges.len()
        );
        document.into_store()
    }

    /// Parse a document held in memory.
    pub fn from_str(text: &str) -> GraphResult<Box<dyn GraphStore>> {
        let document: GraphDocument = serde_json::from_str(text)?;
        document.into_store()
    }
}
