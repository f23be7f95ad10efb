/// Borrowed table of class names indexed by class id.
///
/// Detections produced against a table borrow their `class_name` from it, so
/// the table must outlive every [`Detection`](super::Detection) built from it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelTable<'a> {
    names: &'a [&'a str],
}

impl<'a> LabelTable<'a> {
    /// Wrap a slice of names, indexed by class id.
    pub const fn new(names: &'a [&'a str]) -> Self {
        Self { names }
    }

    /// Look up the name for a class id; negative or out-of-range ids have none.
    pub fn name(&self, id: i32) -> Option<&'a str> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| self.names.get(idx).copied())
    }

    /// Number of known classes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the table holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the names in class-id order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.names.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 3] = ["person", "car", "cat"];

    #[test]
    fn test_lookup() {
        let table = LabelTable::new(&NAMES);
        assert_eq!(table.len(), 3);
        assert_eq!(table.name(2), Some("cat"));
        assert_eq!(table.name(3), None);
        assert_eq!(table.name(-1), None);
        assert_eq!(table.iter().last(), Some("cat"));
    }

    #[test]
    fn test_default_is_empty() {
        let table = LabelTable::default();
        assert!(table.is_empty());
        assert_eq!(table.name(0), None);
    }
}
