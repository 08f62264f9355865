use std::collections::HashSet;

/// Placeholder names for unnamed parameters.
///
/// Owned by a single input-list build; the counter never outlives it.
/// Names declared elsewhere in the same list are never handed out.
#[derive(Debug)]
pub struct NameAllocator<'a> {
    prefix: &'a str,
    counter: usize,
    declared: HashSet<&'a str>,
}

impl<'a> NameAllocator<'a> {
    pub fn new(prefix: &'a str) -> Self {
        Self {
            prefix,
            counter: 0,
            declared: HashSet::new(),
        }
    }

    /// Allocator that skips every name in `declared`
    pub fn with_declared<I>(prefix: &'a str, declared: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            prefix,
            counter: 0,
            declared: declared.into_iter().filter(|n| !n.is_empty()).collect(),
        }
    }

    /// Keep a non-empty name, otherwise hand out the next free `prefix{counter}`
    pub fn allocate(&mut self, existing: &str) -> String {
        if !existing.is_empty() {
            return existing.to_string();
        }
        loop {
            let name = format!("{}{}", self.prefix, self.counter);
            self.counter += 1;
            if !self.declared.contains(name.as_str()) {
                return name;
            }
        }
    }

    /// Zero the counter; declared names stay reserved
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}
