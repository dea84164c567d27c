use std::error::Error;

/// Unwrapping for the panicking conveniences built on fallible set operations, such as
/// [`Clone`] and the set operators.
pub(crate) trait ResultExtension<T> {
    /// Returns the contained value, or panics with the error's own message rather than its
    /// [`Debug`](std::fmt::Debug) form.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    fn throw(self) -> T {
        self.unwrap_or_else(|error| panic!("{error}"))
    }
}
