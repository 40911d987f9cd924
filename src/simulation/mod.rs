pub mod tick;

pub use tick::{Outcome, Simulation, SimulationEvent, TickInput, TickReport};
