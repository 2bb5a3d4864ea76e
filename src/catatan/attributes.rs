use std::collections::BTreeMap;

/// String attributes of a component, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Sets (`Some`) or removes (`None`) an attribute, returning the previous value.
    pub fn set(&mut self, name: &str, value: Option<&str>) -> Option<String> {
        match value {
            Some(v) => self.values.insert(name.to_string(), v.to_string()),
            None => self.values.remove(name),
        }
    }

    /// Parses a positive integer attribute, falling back when missing or malformed.
    pub fn positive_int(&self, name: &str, fallback: usize) -> usize {
        parse_positive(self.get(name), fallback)
    }
}

pub fn parse_positive(value: Option<&str>, fallback: usize) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_returns_previous_value() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.set("filter", Some("active")), None);
        assert_eq!(
            attrs.set("filter", Some("archived")),
            Some("active".to_string())
        );
        assert_eq!(attrs.set("filter", None), Some("archived".to_string()));
        assert!(!attrs.has("filter"));
    }

    #[test]
    fn positive_int_falls_back() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.positive_int("max", 50), 50);
        attrs.set("max", Some("abc"));
        assert_eq!(attrs.positive_int("max", 50), 50);
        attrs.set("max", Some("0"));
        assert_eq!(attrs.positive_int("max", 50), 50);
        attrs.set("max", Some(" 20 "));
        assert_eq!(attrs.positive_int("max", 50), 20);
    }
}
