use crate::{BeegenError, Result};
use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::path::Path;

/// Flat parameter mapping with stable iteration order. Writing an existing
/// key overwrites its value in place, new keys append at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, String)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse an inline `key1=value1,key2=value2` list. A literal `;` inside a
    /// value decodes to `,`, so comma-containing values survive the
    /// comma-delimited syntax.
    pub fn from_inline(inline: &str) -> Result<Self> {
        let mut params = Self::new();
        for pair in inline.split(',') {
            let segments: Vec<&str> = pair.split('=').collect();
            if segments.len() < 2 {
                return Err(BeegenError::InvalidValue(
                    "--parameters option, use --parameters key1=value1,key2=value2,..."
                        .to_string(),
                ));
            }
            params.insert(segments[0], segments[1].replace(';', ","));
        }
        Ok(params)
    }

    /// Load a parameter set from a YAML file, keeping document order.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Re-encode as a single `--parameters key1=value1,...` CLI option, or an
    /// empty string when the set is empty. A literal `,` inside a value is
    /// escaped to `;`, the inverse of the inline decoding. A value holding
    /// both commas and semicolons cannot be told apart after escaping.
    pub fn to_cli_option(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let pairs: Vec<String> = self
            .entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v.replace(',', ";")))
            .collect();
        format!("--parameters {}", pairs.join(","))
    }
}

impl<'de> Deserialize<'de> for ParameterSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ParameterSetVisitor;

        impl<'de> Visitor<'de> for ParameterSetVisitor {
            type Value = ParameterSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a flat mapping of parameter names to scalar values")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut params = ParameterSet::new();
                while let Some((key, value)) = map.next_entry::<String, serde_yaml::Value>()? {
                    let value = scalar_to_string(&value).ok_or_else(|| {
                        de::Error::custom(format!(
                            "parameter '{}' must be a scalar value",
                            key
                        ))
                    })?;
                    params.insert(key, value);
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(ParameterSetVisitor)
    }
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Null => Some(String::new()),
        _ => None,
    }
}
