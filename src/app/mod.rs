//! Application-Layer: Sitzung, Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod drag;
pub mod events;
pub mod flow;
pub mod handlers;
mod intent_mapping;
pub mod scheduler;
pub mod session;
/// Zustand der Visualisierung
///
/// Positionen, Status, Datenflüsse, Drag und Selektion einer Sitzung.
pub mod state;
pub mod view_model;

pub use command_log::CommandLog;
pub use controller::VizController;
pub use drag::{DragController, DragRelease, DragState};
pub use events::{VizCommand, VizIntent};
pub use flow::{FlowAnimator, FlowEvent, FLOW_LABELS};
pub use scheduler::{Clock, ManualClock, Scheduler, SystemClock, TimerHandle, TimerKind};
pub use session::{LogNavigator, Navigator, VizSession};
pub use state::VizState;
pub use view_model::build as build_snapshot;
