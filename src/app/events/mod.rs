//! VizIntent- und VizCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::VizCommand;
pub use intent::VizIntent;
