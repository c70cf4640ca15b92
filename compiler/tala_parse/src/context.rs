//! Parse context flags for context-sensitive parsing.

/// Context flags, combined with bitwise OR.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u16);

impl ParseContext {
    pub const NONE: Self = Self(0);

    /// Parsing the right-hand side of a `where` binding. Statement-level
    /// constructs (`let`, `for`, blocks, conditional blocks) are rejected,
    /// including inside nested lambdas.
    pub const IN_WHERE_BINDING: Self = Self(1 << 0);

    /// Parsing the statements of a `{ ... }` block; `}` ends the list and is
    /// a recovery point.
    pub const IN_BLOCK: Self = Self(1 << 1);

    #[inline]
    pub const fn new() -> Self {
        Self::NONE
    }

    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    #[inline]
    pub const fn in_where_binding(self) -> bool {
        self.has(Self::IN_WHERE_BINDING)
    }

    #[inline]
    pub const fn in_block(self) -> bool {
        self.has(Self::IN_BLOCK)
    }
}
