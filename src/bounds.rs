/// Inclusive range of element indices that effects are scoped to
///
/// A range is always non-empty and always lies inside the strip it was
/// built for: `start <= end <= count - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRange {
    start: usize,
    end: usize,
}

impl GroupRange {
    /// Range covering a whole strip of `count` elements, `count > 0`
    pub(crate) const fn full(count: usize) -> Self {
        Self {
            start: 0,
            end: count.saturating_sub(1),
        }
    }

    /// Build a range clamped into a strip of `count` elements, `count > 0`
    ///
    /// Both bounds are clamped into `[0, count - 1]`. If `start` ends up
    /// past `end`, `end` is raised to `start`.
    pub(crate) fn clamped(start: usize, end: usize, count: usize) -> Self {
        let last = count.saturating_sub(1);
        let start = start.min(last);
        let end = end.clamp(start, last);
        Self { start, end }
    }

    /// First index of the range
    pub const fn start(self) -> usize {
        self.start
    }

    /// Last index of the range (inclusive)
    pub const fn end(self) -> usize {
        self.end
    }

    /// Get the number of elements within the range
    pub const fn len(self) -> usize {
        self.end - self.start + 1
    }

    /// Always false, a group holds at least one element
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Check if an absolute index lies within the range
    pub const fn contains(self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}

/// Get a slice of the elements within the range
pub(crate) fn bounded<T>(items: &mut [T], range: GroupRange) -> &mut [T] {
    &mut items[range.start..=range.end]
}
