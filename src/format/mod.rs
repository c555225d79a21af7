//! JSON graph documents: load and save stores.

pub mod document;
pub mod reader;
pub mod writer;

pub use document::GraphDocument;
pub use reader::GraphReader;
pub use writer::GraphWriter;
