//! Runtime module - headless hosting of the panel manager
//!
//! - `script` - timed event files (key presses, clicks, scripted calls)
//! - `simulation` - fixed-rate driver that feeds a script to a manager

pub mod script;
pub mod simulation;

pub use script::{Scheduled, Script, ScriptAction, ScriptEvent};
pub use simulation::{SimEvent, Simulation};
