//! Rotary Knob demo
//!
//! Replays a scripted interaction through the controller and prints the
//! resulting values and path descriptions.

#[cfg(not(target_arch = "wasm32"))]
mod replay {
    use anyhow::{Context, Result};
    use serde::Deserialize;

    use rotary_knob::geometry::{ArcPath, SpiralEndpoint, SpiralPath};
    use rotary_knob::{Knob, KnobConfig, KnobEvent};

    /// One scripted input
    #[derive(Debug, Clone, Copy, Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum ScriptEvent {
        Start(f64),
        Move(f64),
        End,
        Cancel,
        Step(i8),
        SetValue(f64),
    }

    #[derive(Debug, Deserialize)]
    struct Script {
        #[serde(default)]
        config: KnobConfig,
        events: Vec<ScriptEvent>,
    }

    const DEMO_SCRIPT: &str = r#"{
        "config": { "min": 0, "max": 10, "angle_offset": 220, "angle_range": 280,
                    "steps": 11, "tracking": false, "size": 100 },
        "events": [
            { "set_value": 4 },
            { "step": 1 },
            { "start": 250 },
            { "move": 300 },
            { "move": 20 },
            "end",
            { "start": 100 },
            { "move": 140 },
            "cancel"
        ]
    }"#;

    fn load_script() -> Result<Script> {
        let json = match std::env::args().nth(1) {
            Some(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("reading script {}", path))?,
            None => {
                log::info!("No script given, running built-in demo");
                DEMO_SCRIPT.to_string()
            }
        };
        serde_json::from_str(&json).context("parsing script")
    }

    pub fn run() -> Result<()> {
        let script = load_script()?;
        let mut knob = Knob::new(script.config, Vec::<KnobEvent>::new())
            .inspect_err(|e| log::warn!("Rejected knob configuration: {}", e))?;

        for event in &script.events {
            let fired = knob.listener().len();
            match *event {
                ScriptEvent::Start(angle) => knob.start(angle),
                ScriptEvent::Move(angle) => knob.move_to(angle),
                ScriptEvent::End => knob.end(),
                ScriptEvent::Cancel => knob.cancel(),
                ScriptEvent::Step(direction) => knob.step(direction),
                ScriptEvent::SetValue(value) => knob.set_value(value),
            }
            let state = knob.snapshot();
            println!(
                "{:<24} phase={:?} value={:?} percentage={:?} callbacks={:?}",
                format!("{:?}", event),
                state.phase,
                state.value,
                state.percentage,
                &knob.listener()[fired..]
            );
        }

        let ctx = knob.render_context();
        let radius = ctx.radius;
        match ArcPath::from_context(&ctx, None, None, radius * 0.2, radius) {
            Some(arc) => println!("value arc: {}", arc.path()),
            None => println!("value arc: (none)"),
        }

        if ctx.multi_rotation {
            let spiral = SpiralPath {
                from: SpiralEndpoint::new(0.0, radius * 0.5),
                to: SpiralEndpoint {
                    percentage: ctx.percentage,
                    radius: Some(radius),
                },
                arc_width: radius * 0.1,
                angle_offset: ctx.angle_offset,
                angle_range: ctx.angle_range,
                center: ctx.center,
            };
            println!("spiral: {}", spiral.path());
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Rotary Knob (native) starting...");
    replay::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser embeddings use platform::web::WebKnob instead
}
