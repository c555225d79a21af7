//! Writes stores as graph documents.

use std::io::Write;
use std::path::Path;

use crate::graph::GraphStore;
use crate::types::GraphResult;

use super::GraphDocument;

/// Writer for JSON graph documents.
pub struct GraphWriter {
    pretty: bool,
}

impl GraphWriter {
    /// Create a writer. `pretty` selects indented output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Write a store to a document file, replacing any existing file.
    pub fn write_to_file<G: GraphStore + ?Sized>(&self, graph: &G, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a store to any writer.
    pub fn write_to<G: GraphStore + ?Sized>(
        &self,
        graph: &G,
        writer: &mut impl Write,
    ) -> GraphResult<()> {
        let document = GraphDocument::from_store(graph);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &document)?;
        } else {
            serde_json::to_writer(&mut *writer, &document)?;
        }
        writeln!(writer)?;
        log::debug!(
            "wrote {} document: {} vertices, {} edges",
            document.storage,
            document.vertices.len(),
            document.edges.len()
        );
        Ok(())
    }

    /// Render a store as a document string.
    pub fn to_string<G: GraphStore + ?Sized>(&self, graph: &G) -> GraphResult<String> {
        let document = GraphDocument::from_store(graph);
        let text = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(text)
    }
}

impl Default for GraphWriter {
    fn default() -> Self {
        Self::new(true)
    }
}
