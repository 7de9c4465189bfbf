use std::fmt::{Display, Write};

/// Running common prefix of every sequence passed to [`CommonPrefix::apply`].
///
/// Starts unset. The first sequence is taken as-is; each later one can only
/// shorten the prefix. An empty sequence pins it to empty for good.
#[derive(Debug, Clone)]
pub struct CommonPrefix<T> {
    components: Option<Vec<T>>,
}

impl<T: PartialEq> CommonPrefix<T> {
    pub fn new() -> Self {
        Self { components: None }
    }

    pub fn apply(&mut self, components: Vec<T>) {
        let Some(prefix) = self.components.as_mut() else {
            self.components = Some(components);
            return;
        };
        let n = match_length(prefix, &components);
        if n != prefix.len() {
            prefix.truncate(n);
        }
    }

    /// Current prefix; empty when nothing has been applied yet.
    pub fn components(&self) -> &[T] {
        self.components.as_deref().unwrap_or(&[])
    }

    pub fn is_set(&self) -> bool {
        self.components.is_some()
    }
}

impl<T: PartialEq> Default for CommonPrefix<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Length of the leading run on which `a` and `b` agree.
pub fn match_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

pub fn join<T: Display>(components: &[T], delimiter: char) -> String {
    let mut out = String::new();
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        let _ = write!(out, "{c}");
    }
    out
}
