/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_http::query::fmt_string;

/// Ordered query parameters.
///
/// Parameters keep the order in which they were first inserted. Inserting a name that is already
/// present replaces its value in place, so every name appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        QueryParams::default()
    }

    /// Sets `name` to `value`, returning the previous value if `name` was already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.params.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.params.iter().position(|(k, _)| k == name)?;
        Some(self.params.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Renders the parameters as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        let mut out = String::new();
        for (idx, (k, v)) in self.params.iter().enumerate() {
            if idx > 0 {
                out.push('&');
            }
            out.push_str(&fmt_string(k));
            out.push('=');
            out.push_str(&fmt_string(v));
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::QueryParams;

    #[test]
    fn insert_replaces_in_place() {
        let mut params = QueryParams::new();
        assert_eq!(params.insert("Action", "RunInstances"), None);
        assert_eq!(params.insert("DryRun", "false"), None);
        assert_eq!(params.insert("ImageId", "ami-1"), None);
        assert_eq!(params.insert("DryRun", "true"), Some("false".to_owned()));
        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            vec![
                ("Action", "RunInstances"),
                ("DryRun", "true"),
                ("ImageId", "ami-1")
            ]
        );
    }

    #[test]
    fn form_body_is_encoded() {
        let mut params = QueryParams::new();
        params.insert("Filter.1.Name", "tag:Name");
        params.insert("Filter.1.Value.1", "web server");
        assert_eq!(
            params.to_form_body(),
            "Filter.1.Name=tag%3AName&Filter.1.Value.1=web%20server"
        );
    }

    #[test]
    fn remove() {
        let mut params = QueryParams::new();
        params.insert("A", "1");
        params.insert("B", "2");
        assert_eq!(params.remove("A"), Some("1".to_owned()));
        assert_eq!(params.remove("A"), None);
        assert_eq!(params.len(), 1);
        assert!(params.contains("B"));
    }
}
