pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch. Used
    /// where the state of the list already guarantees that a link or slot is present.
    ///
    /// No panics annotation is used, because calling this asserts that None is impossible.
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("set links are inconsistent with its length"),
        }
    }
}
