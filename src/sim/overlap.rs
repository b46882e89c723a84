//! Horizontal interval arithmetic for overlap trimming

/// A half-open horizontal interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Span covered by something at `x` with the given `width`
    pub fn from_extent(x: f32, width: f32) -> Self {
        Self::new(x, x + width)
    }

    pub fn width(&self) -> f32 {
        self.end - self.start
    }
}

/// Signed overlap width: `min(end1, end2) - max(start1, start2)`
///
/// Negative when the spans are apart, zero when they only touch.
#[inline]
pub fn overlap_width(a: Span, b: Span) -> f32 {
    a.end.min(b.end) - a.start.max(b.start)
}

/// Intersection of two spans, or `None` unless it has positive width
///
/// Spans that merely touch count as a miss.
pub fn overlap(a: Span, b: Span) -> Option<Span> {
    let width = overlap_width(a, b);
    if width <= 0.0 {
        return None;
    }
    Some(Span::new(a.start.max(b.start), a.end.min(b.end)))
}
