//! Injizierbare Uhr und wiederkehrende Timer.
//!
//! Der Scheduler ruft nichts selbst auf: `due(now)` liefert die fälligen Timer,
//! der Besitzer übersetzt sie in Tick-Intents.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Zeitquelle relativ zum Sitzungsstart
pub trait Clock {
    /// Verstrichene Zeit seit Erzeugung der Uhr.
    fn now(&self) -> Duration;
}

/// Monotone Systemuhr
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Manuell gestellte Uhr für Tests. Klone teilen dieselbe Zeit.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stellt die Uhr um `delta` vor.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Setzt die Uhr auf einen absoluten Zeitpunkt.
    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Art eines Animations-Timers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Status würfeln + Datenfluss erzeugen
    CoarseTick,
    /// Fortschritt der Datenflüsse
    FineTick,
}

/// Handle eines registrierten Timers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct RepeatingTimer {
    handle: TimerHandle,
    kind: TimerKind,
    interval: Duration,
    next_due: Duration,
}

/// Wiederkehrende Timer auf virtueller Zeit
#[derive(Debug, Default)]
pub struct Scheduler {
    timers: Vec<RepeatingTimer>,
    next_handle: u64,
}

impl Scheduler {
    /// Maximale Anzahl nachgeholter Auslösungen pro Timer und Aufruf
    pub const MAX_CATCH_UP: usize = 100;
    const MIN_INTERVAL: Duration = Duration::from_millis(1);

    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Timer, erste Auslösung bei `now + interval`.
    pub fn schedule_repeating(
        &mut self,
        kind: TimerKind,
        interval: Duration,
        now: Duration,
    ) -> TimerHandle {
        let interval = interval.max(Self::MIN_INTERVAL);
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timers.push(RepeatingTimer {
            handle,
            kind,
            interval,
            next_due: now + interval,
        });
        log::debug!("Timer {:?} alle {:?} registriert", kind, interval);
        handle
    }

    /// Entfernt einen Timer. Liefert `false` für unbekannte Handles.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.handle != handle);
        self.timers.len() != before
    }

    /// Entfernt alle Timer.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Anzahl registrierter Timer.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Frühester Fälligkeitszeitpunkt.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|timer| timer.next_due).min()
    }

    /// Sammelt alle bis `now` fälligen Auslösungen in zeitlicher Reihenfolge.
    ///
    /// Gleichzeitige Auslösungen folgen der Registrierungsreihenfolge. Ein Timer,
    /// der mehr als `MAX_CATCH_UP` Auslösungen verpasst hat, wird auf `now`
    /// neu synchronisiert.
    pub fn due(&mut self, now: Duration) -> Vec<TimerKind> {
        let mut fired: Vec<(Duration, TimerHandle, TimerKind)> = Vec::new();

        for timer in &mut self.timers {
            let mut count = 0;
            while timer.next_due <= now && count < Self::MAX_CATCH_UP {
                fired.push((timer.next_due, timer.handle, timer.kind));
                timer.next_due += timer.interval;
                count += 1;
            }
            if timer.next_due <= now {
                log::warn!(
                    "Timer {:?} hängt hinterher, überspringe verpasste Ticks",
                    timer.kind
                );
                timer.next_due = now + timer.interval;
            }
        }

        fired.sort_by_key(|(at, handle, _)| (*at, *handle));
        fired.into_iter().map(|(_, _, kind)| kind).collect()
    }
}
