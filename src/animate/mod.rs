//! Animation drivers for the layouts
//!
//! The layout and transform modules are pure geometry. Everything that
//! changes over time lives here:
//! - `easing` / `transition`: blend two layout states
//! - `sweep`: stepped oscillators and focal-index advancers
//! - `scheduler`: the injected periodic-callback seam

pub mod easing;
pub mod scheduler;
pub mod sweep;
pub mod transition;

pub use easing::Easing;
pub use scheduler::{ManualScheduler, Scheduler, Task, TaskHandle};
pub use sweep::{AngleStepper, AutoAdvance, PingPong};
pub use transition::{Lerp, Transition};
