//! Destructuring a value into the current scope.

use tala_ir::BindingPattern;

use crate::errors::{self, EvalResult};
use crate::{Interpreter, Value};

impl Interpreter<'_> {
    /// Bind `value` to `pattern` in the innermost scope.
    ///
    /// A destructuring pattern takes the leading elements of a list or tuple
    /// positionally; extra elements are ignored, missing ones are an error.
    pub(crate) fn bind_pattern(&mut self, pattern: &BindingPattern, value: Value) -> EvalResult<()> {
        match pattern {
            BindingPattern::Name { name, span, .. } => self.define(*name, value, *span),
            BindingPattern::Destructure { elements, span, .. } => {
                let Some(items) = value.as_sequence() else {
                    return Err(errors::expected_sequence(value.type_name(), *span));
                };
                if items.len() < elements.len() {
                    return Err(errors::pattern_too_long(elements.len(), items.len(), *span));
                }
                for (element, item) in elements.iter().zip(items) {
                    self.bind_pattern(element, item.clone())?;
                }
                Ok(())
            }
        }
    }
}
