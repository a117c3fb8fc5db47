// Adapters layer: concrete implementations of the domain ports.

pub mod graph;

pub use graph::{GraphReelUploader, GraphSettings};
