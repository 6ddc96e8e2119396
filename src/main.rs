//! Agent Network Visualization (headless Demo).
//!
//! Startet eine Sitzung mit dem Standard-Katalog, lässt die Animation laufen
//! und protokolliert den Zustand. Laufzeit in Sekunden als optionales Argument.
//!
//! Das gespeicherte Layout wird nur gelesen: die Demo wechselt die Layouts in
//! einer Kopie im Arbeitsspeicher und überschreibt nichts auf der Platte.

use agent_network_viz::persistence::{LAYOUT_MODE_KEY, LAYOUT_POSITIONS_KEY};
use agent_network_viz::{
    default_catalog, FileStore, KeyValueStore, LayoutMode, LayoutPersistence, LogNavigator,
    MemoryStore, SystemClock, VizIntent, VizOptions, VizSession, VizSnapshot,
};
use std::time::Duration;

const DEFAULT_RUN_SECS: u64 = 10;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Agent Network Visualization v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let run_secs = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("Ungültige Laufzeit '{}': {}", arg, e))?,
        None => DEFAULT_RUN_SECS,
    };

    // Optionen aus TOML laden (oder Standardwerte)
    let options = VizOptions::load_from_file(&VizOptions::config_path());
    let coarse_interval = options.coarse_interval();
    let store = demo_store(&FileStore::new(
        VizOptions::binary_dir().join("agent_network_layout"),
    ));

    let mut session = VizSession::new(
        options,
        default_catalog(),
        LayoutPersistence::new(store),
        SystemClock::new(),
        LogNavigator,
    );
    log_snapshot(&session.snapshot());

    let run_for = Duration::from_secs(run_secs);
    let mut layouts = LayoutMode::ALL
        .into_iter()
        .filter(|mode| *mode != LayoutMode::Custom)
        .cycle();
    let mut coarse_ticks_seen = 0u128;

    while session.now() < run_for {
        let wait = session
            .time_until_next_tick()
            .unwrap_or(Duration::from_millis(50));
        std::thread::sleep(wait);
        session.pump();

        // Nach jedem groben Tick Zustand protokollieren, alle drei Ticks Layout wechseln
        let coarse_ticks = session.now().as_millis() / coarse_interval.as_millis().max(1);
        if coarse_ticks != coarse_ticks_seen {
            coarse_ticks_seen = coarse_ticks;
            if coarse_ticks % 3 == 0 {
                if let Some(mode) = layouts.next() {
                    session.handle_intent(VizIntent::LayoutModeRequested { mode });
                }
            }
            log_snapshot(&session.snapshot());
        }
    }

    session.teardown();
    Ok(())
}

/// Kopiert das gespeicherte Layout in einen flüchtigen Speicher.
fn demo_store(saved: &impl KeyValueStore) -> MemoryStore {
    MemoryStore::with_entries(
        [LAYOUT_MODE_KEY, LAYOUT_POSITIONS_KEY]
            .into_iter()
            .filter_map(|key| saved.get(key).map(|value| (key, value))),
    )
}

fn log_snapshot(snapshot: &VizSnapshot) {
    log::info!(
        "Layout '{}': {} Nodes, {} Kanten, {} Datenflüsse",
        snapshot.layout_mode,
        snapshot.nodes.len(),
        snapshot.edges.len(),
        snapshot.flows.len()
    );
    for node in &snapshot.nodes {
        log::debug!(
            "  {:<12} ({:>6.1}, {:>6.1}) {}",
            node.id,
            node.position.x,
            node.position.y,
            node.status.as_str()
        );
    }
}
