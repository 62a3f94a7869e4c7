//! Queued control commands
//!
//! Commands mirror the renderer's control API so that other tasks or
//! interrupt handlers can request changes without owning the renderer. The
//! queue is a bounded `heapless::Deque` guarded by `critical-section`; the
//! render loop drains it between ticks with
//! [`CommandReceiver::apply_pending`].

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::Rgb;
use crate::effect::EffectId;
use crate::params::EffectParameters;
use crate::random::RandomSource;
use crate::renderer::Renderer;

/// Control commands that can be queued for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select an effect, keeping the parameters
    SetEffect(EffectId),
    /// Select an effect with a full parameter set
    SetEffectWithParams(EffectId, EffectParameters),
    /// Select an effect with a new speed
    SetEffectWithSpeed(EffectId, u16),
    /// Select an effect with a new speed and primary color
    SetEffectWithColor(EffectId, u16, Rgb),
    SetBrightness(u8),
    SetColor(Rgb),
    /// Set the time between frames in milliseconds
    SetInterval(u16),
    SetGroup { start: usize, end: usize },
    ResetGroup,
    /// Turn the whole strip off
    Clear,
}

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub Command);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded command queue, safe to share with interrupt handlers
pub struct CommandChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    /// Queue a command
    ///
    /// Returns `Err(TrySendError(command))` if the channel is full.
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    /// Take the oldest queued command
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError> {
        self.channel.try_send(command)
    }

    /// Queue an effect change by name, unknown names select no effect
    pub fn try_send_effect_name(&self, name: &str) -> Result<(), TrySendError> {
        self.try_send(Command::SetEffect(EffectId::from_name(name)))
    }
}

/// Receiving half of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Apply every queued command to the renderer in order
    ///
    /// Returns the number of commands applied.
    pub fn apply_pending<R: RandomSource, const N: usize>(
        &self,
        renderer: &mut Renderer<R, N>,
    ) -> usize {
        let mut applied = 0;
        while let Ok(command) = self.try_receive() {
            renderer.apply(command);
            applied += 1;
        }
        applied
    }
}
