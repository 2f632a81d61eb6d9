//! Knob controller
//!
//! Sequences start/move/end/cancel/step events into state changes and
//! callbacks. Each transition runs to completion before the next event.

use super::resolver::{Position, PositionInput, calculate_position_from_mouse_angle};
use super::snap::snap_position;
use super::state::{InteractionState, KnobListener, KnobPhase};
use super::value::{clamp_value, get_percentage_from_value, get_value_from_percentage};
use crate::config::KnobConfig;
use crate::error::ConfigError;
use crate::geometry::RenderContext;

/// One knob: configuration, authoritative state, and its listener
#[derive(Debug)]
pub struct Knob<L: KnobListener = ()> {
    config: KnobConfig,
    state: InteractionState,
    listener: L,
}

impl<L: KnobListener> Knob<L> {
    /// Validate `config` and seed state from `initial_value`
    pub fn new(config: KnobConfig, listener: L) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut state = InteractionState::default();
        if let Some(value) = config.initial_value {
            state.value = Some(value);
            state.percentage = Some(get_percentage_from_value(config.min, config.max, value));
        }

        log::info!(
            "Knob created: [{}, {}], multi_rotation={}, steps={:?}, tracking={}",
            config.min,
            config.max,
            config.multi_rotation,
            config.steps,
            config.tracking
        );

        Ok(Self {
            config,
            state,
            listener,
        })
    }

    pub fn config(&self) -> &KnobConfig {
        &self.config
    }

    /// Read-only view of the current state
    pub fn snapshot(&self) -> &InteractionState {
        &self.state
    }

    pub fn phase(&self) -> KnobPhase {
        self.state.phase
    }

    pub fn value(&self) -> Option<f64> {
        self.state.value
    }

    pub fn percentage(&self) -> Option<f64> {
        self.state.percentage
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Geometry inputs for the current state
    pub fn render_context(&self) -> RenderContext {
        RenderContext::from_config(&self.config, &self.state)
    }

    /// Overwrite the value from outside (controlled use)
    ///
    /// Ignored while an interaction is active. No callbacks fire.
    pub fn set_value(&mut self, value: f64) {
        if self.state.is_active() {
            log::trace!("Ignoring external value {} during interaction", value);
            return;
        }
        let value = clamp_value(self.config.min, self.config.max, value);
        self.state.value = Some(value);
        self.state.percentage = Some(get_percentage_from_value(
            self.config.min,
            self.config.max,
            value,
        ));
    }

    /// Pointer down at `angle` degrees
    pub fn start(&mut self, angle: f64) {
        if self.state.is_active() {
            log::debug!("start ignored: interaction already active");
            return;
        }

        let position = self.snapped(calculate_position_from_mouse_angle(
            &self.position_input(angle, None, None),
        ));
        let value = self.value_at(position.percentage);

        self.state.phase = KnobPhase::Active;
        self.state.mouse_angle = Some(position.mouse_angle);
        self.state.percentage = Some(position.percentage);
        self.state.value = Some(value);
        self.state.start_value = Some(value);
        self.state.start_percentage = Some(position.percentage);
        log::debug!("start at {:.2}° -> value {}", angle, value);

        self.listener.on_start();
        self.notify(value, self.config.tracking);
    }

    /// Pointer moved to `angle` degrees
    pub fn move_to(&mut self, angle: f64) {
        if !self.state.is_active() {
            return;
        }

        let position = self.snapped(calculate_position_from_mouse_angle(&self.position_input(
            angle,
            self.state.mouse_angle,
            self.state.percentage,
        )));
        if !position.updated {
            return;
        }

        let value = self.value_at(position.percentage);
        self.state.mouse_angle = Some(position.mouse_angle);
        self.state.percentage = Some(position.percentage);
        self.state.value = Some(value);
        log::debug!("move to {:.2}° -> value {}", angle, value);

        self.notify(value, self.config.tracking);
    }

    /// Pointer released; commits the value when not tracking
    pub fn end(&mut self) {
        if !self.state.is_active() {
            return;
        }

        if !self.config.tracking {
            if let Some(value) = self.state.value {
                self.listener.on_change(value);
            }
        }
        self.state.finish();
        log::debug!("end with value {:?}", self.state.value);

        self.listener.on_end();
    }

    /// Abort the interaction and restore the value from start
    pub fn cancel(&mut self) {
        if !self.state.is_active() {
            return;
        }

        self.state.value = self.state.start_value;
        self.state.percentage = self.state.start_percentage;
        if self.config.tracking {
            if let Some(value) = self.state.start_value {
                self.listener.on_change(value);
            }
        }
        self.state.finish();
        log::debug!("cancel, restored value {:?}", self.state.value);

        self.listener.on_end();
    }

    /// Nudge the value by one unit (keyboard/wheel); always commits
    pub fn step(&mut self, direction: i8) {
        if self.state.is_active() {
            log::debug!("step ignored: interaction active");
            return;
        }

        let (min, max) = (self.config.min, self.config.max);
        let current = self.state.value.unwrap_or(min);
        let value = clamp_value(min, max, current + f64::from(direction.signum()));

        self.state.value = Some(value);
        self.state.percentage = Some(get_percentage_from_value(min, max, value));
        log::debug!("step {:+} -> value {}", direction.signum(), value);

        self.notify(value, true);
    }

    fn position_input(
        &self,
        mouse_angle: f64,
        previous_mouse_angle: Option<f64>,
        previous_percentage: Option<f64>,
    ) -> PositionInput {
        PositionInput {
            mouse_angle,
            previous_mouse_angle,
            previous_percentage,
            angle_offset: self.config.angle_offset,
            angle_range: self.config.angle_range,
            multi_rotation: self.config.multi_rotation,
        }
    }

    fn snapped(&self, position: Position) -> Position {
        snap_position(position, self.config.steps, self.config.angle_range)
    }

    fn value_at(&self, percentage: f64) -> f64 {
        get_value_from_percentage(self.config.min, self.config.max, percentage)
    }

    fn notify(&mut self, value: f64, commit: bool) {
        self.listener.on_interactive_change(value);
        if commit {
            self.listener.on_change(value);
        }
    }
}
