//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und den Snapshot, den `app` baut und der Host konsumiert.

pub mod options;
mod snapshot;

pub use options::VizOptions;
pub use snapshot::{EdgeView, FlowView, NodeView, VizSnapshot};
