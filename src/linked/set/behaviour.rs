use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

/// The equality predicate of a set. Two elements for which it returns `true` are considered the
/// same member.
pub struct Matcher<T>(Rc<dyn Fn(&T, &T) -> bool>);

impl<T> Matcher<T> {
    pub fn new(matches: impl Fn(&T, &T) -> bool + 'static) -> Matcher<T> {
        Matcher(Rc::new(matches))
    }

    pub fn matches(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<T: PartialEq + 'static> Matcher<T> {
    /// A matcher using [`PartialEq`].
    pub fn eq() -> Matcher<T> {
        Matcher::new(|a: &T, b: &T| a == b)
    }
}

/// Renders one element of a set.
pub struct Printer<T>(Rc<dyn Fn(&T, &mut Formatter<'_>) -> fmt::Result>);

impl<T> Printer<T> {
    pub fn new(print: impl Fn(&T, &mut Formatter<'_>) -> fmt::Result + 'static) -> Printer<T> {
        Printer(Rc::new(print))
    }

    pub fn print(&self, value: &T, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(value, f)
    }
}

impl<T: Display + 'static> Printer<T> {
    pub fn display() -> Printer<T> {
        Printer::new(|value: &T, f: &mut Formatter<'_>| write!(f, "{value}"))
    }
}

impl<T: Debug + 'static> Printer<T> {
    pub fn debug() -> Printer<T> {
        Printer::new(|value: &T, f: &mut Formatter<'_>| write!(f, "{value:?}"))
    }
}

/// Releases an element once its set is done with it, either on removal or when the set is torn
/// down. The value is dropped afterwards as usual.
pub struct Destroyer<T>(Rc<dyn Fn(T)>);

impl<T> Destroyer<T> {
    pub fn new(destroy: impl Fn(T) + 'static) -> Destroyer<T> {
        Destroyer(Rc::new(destroy))
    }

    pub fn destroy(&self, value: T) {
        (self.0)(value)
    }
}

// Manual impls, so that cloning a behaviour never requires `T: Clone`.
impl<T> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        Matcher(Rc::clone(&self.0))
    }
}

impl<T> Clone for Printer<T> {
    fn clone(&self) -> Self {
        Printer(Rc::clone(&self.0))
    }
}

impl<T> Clone for Destroyer<T> {
    fn clone(&self) -> Self {
        Destroyer(Rc::clone(&self.0))
    }
}

/// Which behaviours a set currently has.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub matches: bool,
    pub prints: bool,
    pub destroys: bool,
}

/// The behaviour triple a [`LinkedSet`](super::LinkedSet) is configured with. Every behaviour is
/// optional, but most operations need at least a [`Matcher`].
///
/// # Example
/// ```
/// use linked_set::linked::set::{Behaviours, Destroyer, LinkedSet, Matcher};
///
/// let behaviours = Behaviours::new()
///     .with_matcher(Matcher::new(|a: &i32, b: &i32| a == b))
///     .with_destroyer(Destroyer::new(|value: i32| drop(value)));
/// let set = LinkedSet::new(behaviours);
/// assert!(set.capabilities().matches);
/// assert!(!set.capabilities().prints);
/// ```
pub struct Behaviours<T> {
    pub matcher: Option<Matcher<T>>,
    pub printer: Option<Printer<T>>,
    pub destroyer: Option<Destroyer<T>>,
}

impl<T> Behaviours<T> {
    pub const fn new() -> Behaviours<T> {
        Behaviours {
            matcher: None,
            printer: None,
            destroyer: None,
        }
    }

    pub fn with_matcher(mut self, matcher: Matcher<T>) -> Behaviours<T> {
        self.matcher = Some(matcher);
        self
    }

    pub fn with_printer(mut self, printer: Printer<T>) -> Behaviours<T> {
        self.printer = Some(printer);
        self
    }

    pub fn with_destroyer(mut self, destroyer: Destroyer<T>) -> Behaviours<T> {
        self.destroyer = Some(destroyer);
        self
    }

    pub const fn capabilities(&self) -> Capabilities {
        Capabilities {
            matches: self.matcher.is_some(),
            prints: self.printer.is_some(),
            destroys: self.destroyer.is_some(),
        }
    }
}

impl<T: PartialEq + Display + 'static> Behaviours<T> {
    /// [`PartialEq`] for matching and [`Display`] for printing, without a destroy behaviour.
    pub fn standard() -> Behaviours<T> {
        Behaviours::new()
            .with_matcher(Matcher::eq())
            .with_printer(Printer::display())
    }
}

impl<T> Clone for Behaviours<T> {
    fn clone(&self) -> Self {
        Behaviours {
            matcher: self.matcher.clone(),
            printer: self.printer.clone(),
            destroyer: self.destroyer.clone(),
        }
    }
}

impl<T> Default for Behaviours<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for Behaviours<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Behaviours")
            .field(&self.capabilities())
            .finish()
    }
}
