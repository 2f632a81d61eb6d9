//! Interaction core
//!
//! Converts pointer angles and discrete steps into knob values. Everything
//! here is synchronous and owns no I/O:
//! - One controller per widget, never shared
//! - Transitions run to completion before the next event
//! - Callbacks fire inline, in a fixed order

pub mod controller;
pub mod resolver;
pub mod snap;
pub mod state;
pub mod value;

pub use controller::Knob;
pub use resolver::{
    Position, PositionInput, calculate_percentage_from_mouse_angle,
    calculate_position_from_mouse_angle,
};
pub use snap::{snap, snap_intervals, snap_position};
pub use state::{Callbacks, InteractionState, KnobEvent, KnobListener, KnobPhase};
pub use value::{clamp_value, get_percentage_from_value, get_value_from_percentage};
