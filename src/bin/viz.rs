use std::collections::{HashMap, VecDeque};

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use env_logger::Env;

use flyover::telemetry::{TelemetryDisplay, TelemetryField};
use flyover::views::{SceneSurface, ViewKind};
use flyover::{FlightSession, SessionConfig, TickOutcome, ViewSet};

const MAX_TRACK_POINTS: usize = 5_000;
const ARROW_LEN_M: f64 = 500.0;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = std::env::args()
        .nth(1)
        .and_then(|path| match SessionConfig::load(&path) {
            Ok(c) => Some(c),
            Err(e) => {
                log::error!("Cannot load {}: {}, using defaults", path, e);
                None
            }
        })
        .unwrap_or_default();

    let app = match FlyoverViz::new(&config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Cannot start session: {}", e);
            std::process::exit(1);
        }
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Flyover", options, Box::new(|_| Ok(Box::new(app))))
}

/// Latest views, as the egui panels will draw them.
#[derive(Default)]
struct LiveScene {
    latest: Option<ViewSet>,
}

impl SceneSurface for LiveScene {
    fn is_loaded(&self) -> bool {
        true
    }

    fn apply(&mut self, views: &ViewSet) {
        self.latest = Some(*views);
    }

    fn name(&self) -> &str {
        "egui"
    }
}

#[derive(Default)]
struct Dials(HashMap<TelemetryField, String>);

impl TelemetryDisplay for Dials {
    fn show(&mut self, field: TelemetryField, text: &str) {
        self.0.insert(field, text.to_owned());
    }
}

struct FlyoverViz {
    session: FlightSession<LiveScene, Dials>,
    origin: [f64; 2],
    track: VecDeque<[f64; 2]>,
    throttle: f64,
    stick_x: f64,
    altitude: f64,
    last_error: Option<String>,
}

impl FlyoverViz {
    fn new(config: &SessionConfig) -> flyover::Result<Self> {
        Ok(Self {
            session: FlightSession::new(config, LiveScene::default(), Dials::default())?,
            origin: config.start_position,
            track: VecDeque::with_capacity(MAX_TRACK_POINTS),
            throttle: 0.0,
            stick_x: 0.0,
            altitude: config.altitude,
            last_error: None,
        })
    }

    fn record(&mut self, views: &ViewSet) {
        if self.track.len() >= MAX_TRACK_POINTS {
            self.track.pop_front();
        }
        self.track.push_back([
            views.top.center.x - self.origin[0],
            views.top.center.y - self.origin[1],
        ]);
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Controls");
        let throttle = ui.add(egui::Slider::new(&mut self.throttle, 0.0..=1.0).text("Throttle"));
        if throttle.changed() {
            let r = self.session.set_throttle(self.throttle).map(drop);
            self.note(r);
        }
        let stick = ui.add(egui::Slider::new(&mut self.stick_x, -1.0..=1.0).text("Stick X"));
        if stick.changed() {
            let r = self.session.set_heading(self.stick_x).map(drop);
            self.note(r);
        }
        let alt = ui.add(egui::Slider::new(&mut self.altitude, 0.0..=20_000.0).text("Altitude (m)"));
        if alt.changed() {
            let r = self.session.set_altitude(self.altitude).map(drop);
            self.note(r);
        }
        if let Some(err) = &self.last_error {
            ui.colored_label(egui::Color32::RED, err);
        }
    }

    fn note(&mut self, result: flyover::Result<()>) {
        self.last_error = result.err().map(|e| e.to_string());
    }
}

impl eframe::App for FlyoverViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time) * 1000.0;
        if let TickOutcome::Advanced(frame) = self.session.tick(now) {
            self.record(&frame.views);
        }

        egui::TopBottomPanel::top("dials").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for field in TelemetryField::ALL {
                    let text = self.session.display().0.get(&field).map_or("-", String::as_str);
                    ui.label(format!("{field}: {text}"));
                    ui.separator();
                }
            });
        });

        egui::SidePanel::left("controls").show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let views = self.session.scene().latest;

            // Top-down track with a heading arrow at the aircraft
            ui.label("Top view (m from start)");
            let track: PlotPoints = self.track.iter().copied().collect();
            let arrow = self.track.back().zip(views).map(|(p, v)| {
                let h = v.forward.heading.to_radians();
                let tip = [p[0] + ARROW_LEN_M * h.sin(), p[1] + ARROW_LEN_M * h.cos()];
                Line::new("Heading", PlotPoints::from(vec![*p, tip]))
            });
            Plot::new("top")
                .height(available.y * 0.6)
                .data_aspect(1.0)
                .x_axis_label("East (m)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Track", track));
                    if let Some(arrow) = arrow {
                        plot_ui.line(arrow);
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let Some(v) = views else {
                    ui.label("Waiting for first frame");
                    return;
                };
                ui.vertical(|ui| {
                    ui.strong("Top");
                    ui.label(format!("rotation {:.1}°", v.top.rotation));
                    ui.label(format!("altitude {:.0} m", v.top.center.z));
                });
                for kind in ViewKind::ALL {
                    let cam = v.perspective(kind);
                    ui.separator();
                    ui.vertical(|ui| {
                        ui.strong(kind.label());
                        ui.label(format!("heading {:.1}°", cam.heading));
                        ui.label(format!("tilt {:.0}°", cam.tilt));
                    });
                }
            });
        });

        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flyover::FlightState;

    #[test]
    fn track_keeps_the_most_recent_points() {
        let mut app = FlyoverViz::new(&SessionConfig::default()).unwrap();
        let mut state = FlightState::default();
        for i in 0..MAX_TRACK_POINTS + 10 {
            state.position.x = app.origin[0] + i as f64;
            app.record(&flyover::synchronize(&state));
        }
        assert_eq!(app.track.len(), MAX_TRACK_POINTS);
        assert_eq!(app.track.front().map(|p| p[0]), Some(10.0));
        assert_eq!(app.track.back().map(|p| p[0]), Some((MAX_TRACK_POINTS + 9) as f64));
    }
}
