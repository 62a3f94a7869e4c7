use core::iter::repeat_n;

use heapless::Vec;

use crate::bounds::{GroupRange, bounded};
use crate::color::{BLACK, Rgb};
use crate::element::ElementState;

/// Representation of every element in a strip, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripMode {
    /// Simple on/off elements
    Binary,
    /// Full color elements
    Color,
}

/// Per-element visual state
///
/// N is the maximum number of elements the buffer can hold
#[derive(Debug, Clone)]
pub(crate) enum ElementBuffer<const N: usize> {
    Binary(Vec<bool, N>),
    Color(Vec<Rgb, N>),
}

impl<const N: usize> ElementBuffer<N> {
    /// Create a dark buffer; `count` must not exceed `N`
    pub(crate) fn new(mode: StripMode, count: usize) -> Self {
        match mode {
            StripMode::Binary => Self::Binary(repeat_n(false, count).collect()),
            StripMode::Color => Self::Color(repeat_n(BLACK, count).collect()),
        }
    }

    pub(crate) const fn mode(&self) -> StripMode {
        match self {
            Self::Binary(_) => StripMode::Binary,
            Self::Color(_) => StripMode::Color,
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Binary(states) => states.len(),
            Self::Color(colors) => colors.len(),
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<ElementState> {
        match self {
            Self::Binary(states) => states.get(index).copied().map(ElementState::Switch),
            Self::Color(colors) => colors.get(index).copied().map(ElementState::Color),
        }
    }

    /// Write one element
    ///
    /// Out-of-range indices and states that do not match the buffer
    /// representation are ignored.
    pub(crate) fn set(&mut self, index: usize, state: ElementState) {
        match (self, state) {
            (Self::Binary(states), ElementState::Switch(on)) => {
                if let Some(slot) = states.get_mut(index) {
                    *slot = on;
                }
            }
            (Self::Color(colors), ElementState::Color(color)) => {
                if let Some(slot) = colors.get_mut(index) {
                    *slot = color;
                }
            }
            _ => {}
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            Self::Binary(states) => states.fill(false),
            Self::Color(colors) => colors.fill(BLACK),
        }
    }

    pub(crate) fn frame(&mut self, range: GroupRange) -> Frame<'_> {
        match self {
            Self::Binary(states) => Frame::Binary(bounded(states, range)),
            Self::Color(colors) => Frame::Color(bounded(colors, range)),
        }
    }
}

/// Mutable view of the elements inside the active group
///
/// Index 0 of the view is the first element of the group.
#[derive(Debug)]
pub enum Frame<'a> {
    Binary(&'a mut [bool]),
    Color(&'a mut [Rgb]),
}

impl Frame<'_> {
    /// Number of elements in the view
    pub fn len(&self) -> usize {
        match self {
            Self::Binary(states) => states.len(),
            Self::Color(colors) => colors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn mode(&self) -> StripMode {
        match self {
            Self::Binary(_) => StripMode::Binary,
            Self::Color(_) => StripMode::Color,
        }
    }
}
