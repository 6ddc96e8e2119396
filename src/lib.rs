//! Agent Network Visualization Engine.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod persistence;
pub mod shared;

pub use app::{
    Clock, LogNavigator, ManualClock, Navigator, SystemClock, VizCommand, VizController,
    VizIntent, VizSession, VizState,
};
pub use core::{
    compute_layout, default_catalog, ActivityEntry, AgentGraph, AgentNode, CanvasBounds,
    LayoutConfig, LayoutMode, NodePositions, NodeStatus,
};
pub use persistence::{FileStore, KeyValueStore, LayoutPersistence, MemoryStore};
pub use shared::{VizOptions, VizSnapshot};
