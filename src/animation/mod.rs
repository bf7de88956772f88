pub mod journey;

pub use journey::{heading_degrees, Journey, JourneyEngine, JourneyUpdate};
