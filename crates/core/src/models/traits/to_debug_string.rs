/// Renders any `Debug` value, used to keep SDK errors as `underlying` strings
/// without leaking their types into [`crate::prelude::Error`]:
/// ```ignore
/// .map_err(|e| Error::Submission { underlying: e.to_debug_string() })
/// ```
pub trait ToDebugString {
    fn to_debug_string(&self) -> String;
}

impl<T: core::fmt::Debug> ToDebugString for T {
    fn to_debug_string(&self) -> String {
        format!("{self:?}")
    }
}
