/// Which code points a span consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanCondition {
    /// Run of code points not in the set.
    NotContained,
    /// Run of code points in the set.
    Contained,
    /// Same as `Contained`. Only differs for sets with strings.
    Simple,
}

impl SpanCondition {
    /// Membership value a code point must have to continue the span.
    #[inline(always)]
    pub fn wants(&self) -> bool {
        !matches!(self, SpanCondition::NotContained)
    }
}

/// Result of a forward span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Exclusive end of the span, in code units.
    pub end: usize,
    /// Number of code points in the span. A surrogate pair counts once.
    pub code_points: usize,
}
