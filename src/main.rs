use std::collections::HashMap;

use env_logger::Env;
use log::error;

use flyover::controls::SimulatedStick;
use flyover::sim::VirtualScheduler;
use flyover::telemetry::{TelemetryDisplay, TelemetryField};
use flyover::views::{SceneSurface, ViewKind};
use flyover::{FlightSession, SessionConfig, ViewSet};

const RATE_HZ: f64 = 60.0;
const DURATION_S: f64 = 10.0;

/// Keeps every view set it was given.
#[derive(Default)]
struct RecordingScene {
    history: Vec<ViewSet>,
}

impl SceneSurface for RecordingScene {
    fn is_loaded(&self) -> bool {
        true
    }

    fn apply(&mut self, views: &ViewSet) {
        self.history.push(*views);
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Latest text per readout.
#[derive(Default)]
struct Readouts(HashMap<TelemetryField, String>);

impl TelemetryDisplay for Readouts {
    fn show(&mut self, field: TelemetryField, text: &str) {
        self.0.insert(field, text.to_owned());
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match SessionConfig::load(&path) {
            Ok(c) => c,
            Err(e) => {
                error!("Cannot load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SessionConfig::default(),
    };

    // -----------------------------------------------------------------------
    // Run: simulated stick, 60 Hz virtual clock
    // -----------------------------------------------------------------------
    let mut session = match FlightSession::new(&config, RecordingScene::default(), Readouts::default()) {
        Ok(s) => s,
        Err(e) => {
            error!("Cannot start session: {}", e);
            std::process::exit(1);
        }
    };
    let mut scheduler = VirtualScheduler::at_rate(RATE_HZ, DURATION_S);
    let mut stick = SimulatedStick::default();
    let stats = session.run(&mut scheduler, &mut stick);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  FLYOVER — {:.0} s at {:.0} Hz", DURATION_S, RATE_HZ);
    println!("====================================================================");
    println!();
    println!("  Telemetry");
    println!("  ──────────────────────────────────────────────────────────────────");
    for field in TelemetryField::ALL {
        let text = session.display().0.get(&field).map_or("-", String::as_str);
        println!("  {:<10} {}", field, text);
    }
    println!();

    let history = &session.scene().history;
    if let Some(last) = history.last() {
        println!("  Views");
        println!("  ──────────────────────────────────────────────────────────────────");
        println!(
            "  Top       center=({:.1}, {:.1}, {:.0})  rotation={:.1}°",
            last.top.center.x, last.top.center.y, last.top.center.z, last.top.rotation
        );
        for kind in ViewKind::ALL {
            let v = last.perspective(kind);
            println!("  {:<9} heading={:>7.1}°  tilt={:.0}°", kind.label(), v.heading, v.tilt);
        }
        println!();
    }

    println!("  Track");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {:>6}  {:>12}  {:>12}  {:>8}  {:>7}", "frame", "x (m)", "y (m)", "alt (m)", "hdg");
    println!("  {}", "─".repeat(54));
    let sample_interval = (history.len() / 20).max(1);
    for (i, v) in history.iter().enumerate() {
        if i % sample_interval != 0 && i != history.len() - 1 {
            continue;
        }
        println!(
            "  {:>6}  {:>12.1}  {:>12.1}  {:>8.0}  {:>7.1}",
            i, v.top.center.x, v.top.center.y, v.top.center.z, v.forward.heading
        );
    }

    println!();
    println!(
        "  Frames: {} ({} advanced), rejected inputs: {}",
        stats.frames,
        stats.advanced,
        stats.rejected.len()
    );
    println!("====================================================================");
    println!();
}
