//! Strip aggregate: element buffer, active group and persistent effect memory

use core::fmt;
use core::iter::repeat_n;

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::GroupRange;
use crate::buffer::{ElementBuffer, Frame, StripMode};
use crate::color::Rgb;
use crate::effect::EffectMemory;
use crate::element::ElementState;

/// Error returned when a strip cannot be created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// A strip needs at least one element
    Empty,
    /// More elements requested than the strip can hold
    CapacityExceeded { requested: usize, capacity: usize },
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "strip must have at least one element"),
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "strip of {requested} elements exceeds capacity of {capacity}"
            ),
        }
    }
}

impl core::error::Error for StripError {}

/// Strip of addressable elements
///
/// N is the maximum number of elements; the actual count is fixed at
/// construction, as is the [`StripMode`].
#[derive(Debug, Clone)]
pub struct Strip<const N: usize> {
    buffer: ElementBuffer<N>,
    group: GroupRange,
    /// Fire heat per group element, group-relative
    heat: Vec<u8, N>,
}

impl<const N: usize> Strip<N> {
    /// Create a dark strip of `count` elements
    pub fn new(mode: StripMode, count: usize) -> Result<Self, StripError> {
        if count == 0 {
            return Err(StripError::Empty);
        }
        if count > N {
            return Err(StripError::CapacityExceeded {
                requested: count,
                capacity: N,
            });
        }

        Ok(Self {
            buffer: ElementBuffer::new(mode, count),
            group: GroupRange::full(count),
            heat: Vec::new(),
        })
    }

    pub const fn mode(&self) -> StripMode {
        self.buffer.mode()
    }

    /// Number of elements in the strip
    pub fn element_count(&self) -> usize {
        self.buffer.len()
    }

    /// Currently active group
    pub const fn group(&self) -> GroupRange {
        self.group
    }

    /// Narrow effects to `[start, end]`, clamped into the strip
    ///
    /// Returns the range that was actually applied. Changing the range
    /// drops the fire heat map.
    pub fn set_group(&mut self, start: usize, end: usize) -> GroupRange {
        let group = GroupRange::clamped(start, end, self.element_count());
        self.apply_group(group);
        group
    }

    /// Extend the group back to the whole strip
    pub fn reset_group(&mut self) {
        self.apply_group(GroupRange::full(self.element_count()));
    }

    fn apply_group(&mut self, group: GroupRange) {
        if group == self.group {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[Strip.set_group] group changed to {}..={}",
            group.start(),
            group.end()
        );
        self.group = group;
        self.heat.clear();
    }

    /// Read one element
    pub fn element(&self, index: usize) -> Option<ElementState> {
        self.buffer.get(index)
    }

    /// Overwrite one element, bypassing the effect pipeline
    ///
    /// Writes with an out-of-range index, or with a state that does not
    /// match the strip mode, are ignored.
    pub fn set_element(&mut self, index: usize, state: ElementState) {
        self.buffer.set(index, state);
    }

    /// Switch one element of a binary strip on or off
    pub fn set_switch(&mut self, index: usize, on: bool) {
        self.set_element(index, ElementState::Switch(on));
    }

    /// Set the color of one element of a color strip
    pub fn set_color(&mut self, index: usize, color: Rgb) {
        self.set_element(index, ElementState::Color(color));
    }

    /// Turn every element off, ignoring the group
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// All switch states, if this is a binary strip
    pub fn switches(&self) -> Option<&[bool]> {
        match &self.buffer {
            ElementBuffer::Binary(states) => Some(states),
            ElementBuffer::Color(_) => None,
        }
    }

    /// All colors, if this is a color strip
    pub fn colors(&self) -> Option<&[Rgb]> {
        match &self.buffer {
            ElementBuffer::Color(colors) => Some(colors),
            ElementBuffer::Binary(_) => None,
        }
    }

    /// Elements of the active group with their absolute index
    pub fn group_elements(&self) -> impl Iterator<Item = (usize, ElementState)> + '_ {
        let group = self.group;
        (group.start()..=group.end())
            .filter_map(move |index| self.element(index).map(|state| (index, state)))
    }

    /// Fire heat map; empty until fire renders on the current group of a
    /// color strip
    pub fn heat(&self) -> &[u8] {
        &self.heat
    }

    /// Borrow the group view together with the memory `memory` asks for
    pub(crate) fn render_target(&mut self, memory: EffectMemory) -> (Frame<'_>, &mut [u8]) {
        let len = self.group.len();
        let uses_heat = memory == EffectMemory::Heat && self.mode() == StripMode::Color;
        let heat: &mut [u8] = if uses_heat {
            if self.heat.len() != len {
                #[cfg(feature = "esp32-log")]
                println!("[Strip.render_target] resizing heat map to {}", len);
                self.heat.clear();
                self.heat.extend(repeat_n(0, len));
            }
            &mut self.heat
        } else {
            &mut []
        };
        (self.buffer.frame(self.group), heat)
    }
}
