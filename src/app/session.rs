//! Lebenszyklus einer Visualisierungs-Sitzung.
//!
//! Die Sitzung besitzt State, Controller, Timer und die injizierten
//! Kollaborateure (Uhr, Navigation). Nach `teardown` feuert kein Timer mehr und
//! kein Intent verändert den State.

use super::scheduler::{Clock, Scheduler, TimerKind};
use super::{VizCommand, VizController, VizIntent, VizState};
use crate::core::AgentGraph;
use crate::persistence::LayoutPersistence;
use crate::shared::{VizOptions, VizSnapshot};
use std::time::Duration;

/// Externes Navigationsziel für Doppelklicks. Die Route wird nicht geprüft.
pub trait Navigator {
    fn navigate(&mut self, route: &str);
}

/// Navigator, der Ziele nur protokolliert
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&mut self, route: &str) {
        log::info!("Navigation angefordert: {}", route);
    }
}

/// Eine laufende Visualisierung mit Timern
pub struct VizSession {
    state: VizState,
    controller: VizController,
    scheduler: Scheduler,
    clock: Box<dyn Clock>,
    navigator: Box<dyn Navigator>,
    torn_down: bool,
}

impl VizSession {
    /// Startet eine Sitzung: gespeichertes Layout anwenden (Fallback circular)
    /// und beide Animations-Timer registrieren.
    pub fn new(
        options: VizOptions,
        graph: AgentGraph,
        persistence: LayoutPersistence,
        clock: impl Clock + 'static,
        navigator: impl Navigator + 'static,
    ) -> Self {
        let coarse = options.coarse_interval();
        let fine = options.fine_interval();
        let mut state = VizState::new(options, graph, persistence);
        let mut controller = VizController::new();

        let mode = state.persistence.load_mode().unwrap_or_default();
        if let Err(e) = controller.handle_command(&mut state, VizCommand::ApplyLayout { mode }) {
            log::warn!("Gespeichertes Layout konnte nicht angewendet werden: {:#}", e);
        }

        let now = clock.now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule_repeating(TimerKind::CoarseTick, coarse, now);
        scheduler.schedule_repeating(TimerKind::FineTick, fine, now);

        log::info!(
            "Sitzung gestartet: {} Agenten, Layout '{}'",
            state.node_count(),
            state.layout_mode
        );

        Self {
            state,
            controller,
            scheduler,
            clock: Box::new(clock),
            navigator: Box::new(navigator),
            torn_down: false,
        }
    }

    /// Leitet eine Host-Eingabe an den Controller weiter.
    ///
    /// Fehler werden protokolliert, der In-Memory-Zustand bleibt erhalten.
    pub fn handle_intent(&mut self, intent: VizIntent) {
        if self.torn_down {
            log::debug!("Intent nach Teardown ignoriert: {:?}", intent);
            return;
        }
        if let Err(e) = self.controller.handle_intent(&mut self.state, intent) {
            log::warn!("Intent fehlgeschlagen: {:#}", e);
        }
        self.flush_navigation();
    }

    /// Feuert alle fälligen Timer als Tick-Intents. Liefert die Anzahl der Ticks.
    pub fn pump(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        let fired = self.scheduler.due(self.clock.now());
        for kind in &fired {
            let intent = match kind {
                TimerKind::CoarseTick => VizIntent::CoarseTickElapsed,
                TimerKind::FineTick => VizIntent::FineTickElapsed,
            };
            self.handle_intent(intent);
        }
        fired.len()
    }

    /// Beendet die Sitzung: Timer stoppen, Datenflüsse verwerfen, Drag abbrechen.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.scheduler.cancel_all();
        self.state.drag.cancel();
        self.state.flows.clear();
        self.state.pending_navigation.clear();
        self.torn_down = true;
        log::info!("Sitzung beendet");
    }

    /// `true` nach `teardown`.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Anzahl laufender Timer.
    pub fn active_timer_count(&self) -> usize {
        self.scheduler.active_count()
    }

    /// Zeit bis zum nächsten fälligen Timer (`None` ohne Timer).
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.scheduler
            .next_due()
            .map(|due| due.saturating_sub(self.clock.now()))
    }

    /// Aktuelle Sitzungszeit laut Uhr.
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Baut den Snapshot für den aktuellen Frame.
    pub fn snapshot(&self) -> VizSnapshot {
        self.controller.build_snapshot(&self.state)
    }

    /// Read-only Zugriff auf den State.
    pub fn state(&self) -> &VizState {
        &self.state
    }

    fn flush_navigation(&mut self) {
        for route in self.state.pending_navigation.drain(..) {
            self.navigator.navigate(&route);
        }
    }
}

impl Drop for VizSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for VizSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VizSession")
            .field("state", &self.state)
            .field("timers", &self.scheduler.active_count())
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}
