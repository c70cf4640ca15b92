//! Binding targets for `where` clauses, `let` and `for`.

use crate::{Name, Span, Spanned};

/// `&?ident` or `&?[pattern, ...]`.
///
/// `by_ref` records a leading `&` so the checker can reject it with a
/// precise location; it has no runtime meaning.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum BindingPattern {
    Name {
        name: Name,
        span: Span,
        by_ref: bool,
    },
    Destructure {
        elements: Vec<BindingPattern>,
        span: Span,
        by_ref: bool,
    },
}

impl BindingPattern {
    #[inline]
    pub fn by_ref(&self) -> bool {
        match self {
            BindingPattern::Name { by_ref, .. } | BindingPattern::Destructure { by_ref, .. } => {
                *by_ref
            }
        }
    }

    /// Names introduced by this pattern, left to right, with their spans.
    pub fn names(&self) -> Vec<(Name, Span)> {
        let mut out = Vec::new();
        self.collect_names(&mut out);
        out
    }

    fn collect_names(&self, out: &mut Vec<(Name, Span)>) {
        match self {
            BindingPattern::Name { name, span, .. } => out.push((*name, *span)),
            BindingPattern::Destructure { elements, .. } => {
                for element in elements {
                    element.collect_names(out);
                }
            }
        }
    }

    /// Spans of every sub-pattern carrying a `&` marker, outermost first.
    pub fn ref_markers(&self) -> Vec<Span> {
        let mut out = Vec::new();
        self.collect_ref_markers(&mut out);
        out
    }

    fn collect_ref_markers(&self, out: &mut Vec<Span>) {
        if self.by_ref() {
            out.push(self.span());
        }
        if let BindingPattern::Destructure { elements, .. } = self {
            for element in elements {
                element.collect_ref_markers(out);
            }
        }
    }
}

impl Spanned for BindingPattern {
    fn span(&self) -> Span {
        match self {
            BindingPattern::Name { span, .. } | BindingPattern::Destructure { span, .. } => *span,
        }
    }
}
