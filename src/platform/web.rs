//! Browser bridge
//!
//! Exposes a knob to JavaScript. The page owns DOM event capture and calls
//! `start`/`move_to`/`end`/`cancel`/`step`; callbacks are plain JS functions.

use std::sync::Once;

use glam::DVec2;
use wasm_bindgen::prelude::*;

use crate::config::KnobConfig;
use crate::geometry::{ArcPath, SpiralEndpoint, SpiralPath};
use crate::interaction::{Knob, KnobListener};
use crate::pointer_angle;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"rotary-knob: logger already set".into());
        }
    });
}

/// Listener that forwards to optional JS functions
#[derive(Debug, Default)]
struct JsCallbacks {
    on_start: Option<js_sys::Function>,
    on_interactive_change: Option<js_sys::Function>,
    on_change: Option<js_sys::Function>,
    on_end: Option<js_sys::Function>,
}

fn call0(f: &Option<js_sys::Function>) {
    if let Some(f) = f {
        if let Err(e) = f.call0(&JsValue::NULL) {
            log::warn!("Knob callback threw: {:?}", e);
        }
    }
}

fn call1(f: &Option<js_sys::Function>, value: f64) {
    if let Some(f) = f {
        if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from_f64(value)) {
            log::warn!("Knob callback threw: {:?}", e);
        }
    }
}

impl KnobListener for JsCallbacks {
    fn on_start(&mut self) {
        call0(&self.on_start);
    }

    fn on_interactive_change(&mut self, value: f64) {
        call1(&self.on_interactive_change, value);
    }

    fn on_change(&mut self, value: f64) {
        call1(&self.on_change, value);
    }

    fn on_end(&mut self) {
        call0(&self.on_end);
    }
}

/// A knob driven from JavaScript
#[wasm_bindgen]
pub struct WebKnob {
    knob: Knob<JsCallbacks>,
}

#[wasm_bindgen]
impl WebKnob {
    /// Create from a JSON configuration string
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WebKnob, JsValue> {
        init_logging();
        let config =
            KnobConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let knob = Knob::new(config, JsCallbacks::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WebKnob { knob })
    }

    pub fn set_on_start(&mut self, f: Option<js_sys::Function>) {
        self.knob.listener_mut().on_start = f;
    }

    pub fn set_on_interactive_change(&mut self, f: Option<js_sys::Function>) {
        self.knob.listener_mut().on_interactive_change = f;
    }

    pub fn set_on_change(&mut self, f: Option<js_sys::Function>) {
        self.knob.listener_mut().on_change = f;
    }

    pub fn set_on_end(&mut self, f: Option<js_sys::Function>) {
        self.knob.listener_mut().on_end = f;
    }

    /// Knob angle of a client-space pointer position over `element`
    pub fn pointer_angle(element: &web_sys::Element, client_x: f64, client_y: f64) -> f64 {
        let rect = element.get_bounding_client_rect();
        let center = DVec2::new(
            rect.left() + rect.width() / 2.0,
            rect.top() + rect.height() / 2.0,
        );
        pointer_angle(center, DVec2::new(client_x, client_y))
    }

    pub fn start(&mut self, angle: f64) {
        self.knob.start(angle);
    }

    pub fn move_to(&mut self, angle: f64) {
        self.knob.move_to(angle);
    }

    pub fn end(&mut self) {
        self.knob.end();
    }

    pub fn cancel(&mut self) {
        self.knob.cancel();
    }

    pub fn step(&mut self, direction: i8) {
        self.knob.step(direction);
    }

    pub fn set_value(&mut self, value: f64) {
        self.knob.set_value(value);
    }

    pub fn value(&self) -> Option<f64> {
        self.knob.value()
    }

    pub fn percentage(&self) -> Option<f64> {
        self.knob.percentage()
    }

    pub fn is_active(&self) -> bool {
        self.knob.snapshot().is_active()
    }

    /// Value arc from 0% to the current percentage
    pub fn value_arc(&self, arc_width: f64, outer_radius: f64) -> String {
        ArcPath::from_context(&self.knob.render_context(), None, None, arc_width, outer_radius)
            .map(|arc| arc.path().into_string())
            .unwrap_or_default()
    }

    /// Arc between explicit or current-relative bounds
    pub fn range_arc(
        &self,
        from: Option<f64>,
        to: Option<f64>,
        arc_width: f64,
        outer_radius: f64,
    ) -> String {
        ArcPath::from_context(&self.knob.render_context(), from, to, arc_width, outer_radius)
            .map(|arc| arc.path().into_string())
            .unwrap_or_default()
    }

    /// Spiral from 0% at `radius_from` to the current percentage at `radius_to`
    pub fn winding_spiral(&self, radius_from: f64, radius_to: f64, arc_width: f64) -> String {
        let ctx = self.knob.render_context();
        SpiralPath {
            from: SpiralEndpoint {
                percentage: Some(0.0),
                radius: Some(radius_from),
            },
            to: SpiralEndpoint {
                percentage: ctx.percentage,
                radius: Some(radius_to),
            },
            arc_width,
            angle_offset: ctx.angle_offset,
            angle_range: ctx.angle_range,
            center: ctx.center,
        }
        .path()
        .into_string()
    }
}
