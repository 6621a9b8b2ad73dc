//! Mutable string holder that reads back uppercased.

/// Stores a string and hands it out uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueHolder {
    value: String,
}

impl ValueHolder {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The stored value, uppercased.
    pub fn value(&self) -> String {
        crate::text::example_function(&self.value)
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// The stored value as it was set.
    pub fn raw(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_uppercased() {
        let holder = ValueHolder::new("hello");
        assert_eq!(holder.value(), "HELLO");
        assert_eq!(holder.raw(), "hello");
    }

    #[test]
    fn set_value_replaces_stored_value() {
        let mut holder = ValueHolder::new("first");
        holder.set_value("second");
        assert_eq!(holder.value(), "SECOND");
        assert_eq!(holder.raw(), "second");
    }
}
