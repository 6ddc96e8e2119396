//! Handler für den Aktivitäts-Feed.

use crate::app::VizState;
use crate::core::{activity, ActivityEntry};

/// Übernimmt den Aktivitäts-Feed (neueste zuerst, gekürzt).
pub fn set_activity_feed(state: &mut VizState, entries: Vec<ActivityEntry>) {
    state.activity = activity::recent_first(entries, state.options.activity_limit);
}
