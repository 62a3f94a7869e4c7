#![no_std]

pub mod bounds;
pub mod buffer;
pub mod color;
pub mod command;
pub mod effect;
pub mod element;
mod filter;
pub mod frame_scheduler;
pub mod math8;
pub mod params;
pub mod random;
pub mod renderer;
pub mod state;
pub mod strip;

pub use bounds::GroupRange;
pub use buffer::{Frame, StripMode};
pub use command::{Command, CommandChannel, CommandReceiver, CommandSender};
pub use effect::{EFFECTS, EffectDescriptor, EffectId, EffectMemory};
pub use element::{Element, ElementState};
pub use frame_scheduler::FrameScheduler;
pub use params::EffectParameters;
pub use random::{RandomSource, RngSource};
pub use renderer::{Renderer, RendererConfig};
pub use state::AnimationState;
pub use strip::{Strip, StripError};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract display output
///
/// Implement this trait to push element states to real hardware. The
/// renderer writes every element of the active group after each frame, then
/// calls [`DisplaySink::show`] once.
pub trait DisplaySink {
    /// Write the state of the element at an absolute strip index
    fn write(&mut self, index: usize, state: ElementState);

    /// Latch a completed frame
    fn show(&mut self) {}
}
