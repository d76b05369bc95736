use flyover::controls::{ControlEvent, ControlSource, HeadingMode, ThrottleMode};
use flyover::sim::VirtualScheduler;
use flyover::{FlightSession, SessionConfig};

/// Flies a box pattern: full speed, then a 90° right turn every `leg_ms`.
struct BoxPattern {
    leg_ms: f64,
    speed: f64,
    legs_flown: u32,
}

impl ControlSource for BoxPattern {
    fn poll(&mut self, now_ms: f64) -> Vec<ControlEvent> {
        let leg = (now_ms / self.leg_ms) as u32;
        if now_ms == 0.0 {
            return vec![ControlEvent::Throttle(self.speed), ControlEvent::Heading(0.0)];
        }
        if leg > self.legs_flown {
            self.legs_flown = leg;
            return vec![ControlEvent::Heading(f64::from(leg % 4) * 90.0)];
        }
        Vec::new()
    }

    fn name(&self) -> &str {
        "BoxPattern"
    }
}

fn main() -> flyover::Result<()> {
    let config = SessionConfig {
        start_position: [0.0, 0.0],
        throttle: ThrottleMode::Direct,
        heading_mode: HeadingMode::Absolute,
        ..SessionConfig::default()
    };

    let mut session = FlightSession::new(&config, AlwaysLoaded, ())?;
    let mut source = BoxPattern { leg_ms: 5_000.0, speed: 120.0, legs_flown: 0 };
    let mut scheduler = VirtualScheduler::at_rate(60.0, 20.0);

    println!("Flying with {} source...", source.name());
    let stats = session.run(&mut scheduler, &mut source);

    let s = session.state();
    println!("Frames: {} ({} advanced)", stats.frames, stats.advanced);
    println!("Final position: ({:.1}, {:.1}) m", s.position.x, s.position.y);
    println!("Distance from start: {:.1} m", s.position.norm());
    println!("Heading: {:.0}°", s.heading_normalized());
    Ok(())
}

struct AlwaysLoaded;

impl flyover::views::SceneSurface for AlwaysLoaded {
    fn is_loaded(&self) -> bool {
        true
    }

    fn apply(&mut self, _views: &flyover::ViewSet) {}
}
