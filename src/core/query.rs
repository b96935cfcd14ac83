use std::fmt::Display;

/// Ordered query-string pairs, built before the request is sent.
///
/// Only keys that actually have a value are recorded, so absent filters never
/// reach the wire. Repeated keys are kept in insertion order, which is how
/// multi-valued parameters are sent (`categoryIds=1&categoryIds=2`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Like `with_opt`, but an empty string counts as absent too.
    pub fn with_non_empty(self, key: &str, value: Option<&str>) -> Self {
        self.with_opt(key, value.filter(|v| !v.is_empty()))
    }

    pub fn with_each<I>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for value in values {
            self = self.with(key, value);
        }
        self
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &QueryParams) -> Vec<&str> {
        params.as_pairs().iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_absent_and_empty_values_are_dropped() {
        let params = QueryParams::new()
            .with_non_empty("brand", Some("Nike"))
            .with_non_empty("category", None)
            .with_non_empty("color", Some(""))
            .with_opt::<u32>("brandId", None)
            .with("page", 0);

        assert_eq!(keys(&params), vec!["brand", "page"]);
        assert_eq!(params.as_pairs()[0].1, "Nike");
        assert_eq!(params.as_pairs()[1].1, "0");
    }

    #[test]
    fn test_repeated_keys_keep_order() {
        let params = QueryParams::new().with_each("categoryIds", [3, 1, 2]).with("limit", 4);

        let values: Vec<&str> = params.as_pairs().iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(keys(&params), vec!["categoryIds", "categoryIds", "categoryIds", "limit"]);
        assert_eq!(values, vec!["3", "1", "2", "4"]);
    }

    #[test]
    fn test_empty_sequence_adds_nothing() {
        let params = QueryParams::new().with_each("categoryIds", Vec::<u32>::new());
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }
}
