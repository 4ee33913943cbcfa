pub mod calculator;
mod clock;
mod display;
mod driver;
mod surface;

pub use calculator::{compute_remaining, evaluate, select_next_milestone};
pub use clock::{Clock, SystemClock};
pub use display::{
    heading_for, CountdownDisplay, EVENT_START_HEADING, FALLBACK_EVENT_START_DATE, GENERIC_HEADING,
};
pub use driver::{CountdownDriver, CountdownSession};
pub use surface::{DisplaySurface, FrameFormat, TerminalSurface};
