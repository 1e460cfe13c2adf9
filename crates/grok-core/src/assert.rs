//! Never-reach assertions.

use serde::Serialize;

use crate::error::NeverReachAssertionError;

/// Assert that this line is never reached.
///
/// Panics with a [`NeverReachAssertionError`] message mentioning `value`,
/// JSON encoded. Use it in match arms that the caller's invariants rule out.
///
/// ```rust,should_panic
/// grok_core::never(&"impossible");
/// ```
#[track_caller]
pub fn never<T: Serialize + ?Sized>(value: &T) -> ! {
    panic!("{}", NeverReachAssertionError::with_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "A never reach assertion was executed with given value: 42")]
    fn test_never_panics_with_value() {
        never(&42);
    }

    #[test]
    #[should_panic(expected = r#"with given value: ["a","b"]"#)]
    fn test_never_encodes_sequences() {
        never(&["a", "b"]);
    }
}
