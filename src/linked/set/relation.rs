use super::LinkedSet;

impl<T> LinkedSet<T> {
    /// Returns true if every element of `self` is a member of `other`. (`self ⊆ other`)
    ///
    /// Membership is decided by the matcher of `other`. Without one, this returns false.
    pub fn is_subset(&self, other: &LinkedSet<T>) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.contained_in(other, "is_subset")
    }

    /// Returns true if every element of `other` is a member of `self`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &LinkedSet<T>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` have the same length and every element of `self` is a
    /// member of `other`.
    ///
    /// Containment is only checked in one direction. Because neither set can hold two matching
    /// elements, equal lengths plus one-way containment means the sets contain the same elements,
    /// as long as both use compatible matchers.
    pub fn is_equal(&self, other: &LinkedSet<T>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.contained_in(other, "is_equal")
    }

    fn contained_in(&self, other: &LinkedSet<T>, operation: &'static str) -> bool {
        let Ok(matcher) = other.require_matcher(operation) else {
            return false;
        };
        self.iter().all(|value| other.find_with(matcher, value).is_some())
    }
}
