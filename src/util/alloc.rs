use std::cell::Cell;
use std::rc::Rc;

/// A shared counter for observing how many elements a set hands to its destroy behaviour, or how
/// many values are dropped.
#[derive(Debug, Clone, Default)]
pub struct Counter(Rc<Cell<usize>>);

impl Counter {
    pub fn new() -> Counter {
        Counter::default()
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }

    pub fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A value that bumps its [`Counter`] when dropped. Equality only considers `id`.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    pub id: u32,
    pub counter: Counter,
}

impl CountedDrop {
    pub fn new(id: u32, counter: &Counter) -> CountedDrop {
        CountedDrop {
            id,
            counter: counter.clone(),
        }
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.counter.bump();
    }
}
