use std::collections::BTreeMap;

/// URL builder for a single IEX Cloud resource.
///
/// The resource path is appended to the base URL verbatim; symbols are not
/// validated or escaped. Query values are percent-encoded and keys are
/// emitted in sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
    path: String,
    query: BTreeMap<&'static str, String>,
}

impl Endpoint {
    pub fn new(base_url: &str, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.to_owned(),
            path: path.into(),
            query: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Appends a `/segment` to the resource path.
    pub fn segment(mut self, segment: &str) -> Self {
        self.path.push('/');
        self.path.push_str(segment);
        self
    }

    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.insert(name, value.into());
        self
    }

    /// Adds `name=true` when set; a false flag is never sent.
    pub fn flag(self, name: &'static str, enabled: bool) -> Self {
        if enabled {
            self.param(name, "true")
        } else {
            self
        }
    }

    /// Adds a numeric parameter unless it is unset or zero.
    pub fn number(self, name: &'static str, value: Option<u32>) -> Self {
        match value {
            Some(value) if value > 0 => self.param(name, value.to_string()),
            _ => self,
        }
    }

    /// Adds a text parameter unless it is unset or empty.
    pub fn text(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.param(name, value),
            _ => self,
        }
    }

    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn build(&self) -> String {
        let mut url = format!("{}{}", self.base_url, self.path);
        let query = self.query_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}
