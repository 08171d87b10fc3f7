//! Jar manifest reader

use indexmap::IndexMap;

use crate::meta::error::MetaError;

/// Main section of a jar manifest (`META-INF/MANIFEST.MF`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    main_attributes: IndexMap<String, String>,
}

impl Manifest {
    /// Parse manifest content
    ///
    /// Only the main section (everything before the first blank line) is kept.
    /// `location` is used for error messages.
    pub fn parse(bytes: &[u8], location: &str) -> Result<Self, MetaError> {
        let invalid = |message: String| MetaError::Manifest {
            location: location.to_string(),
            message,
        };

        let text = std::str::from_utf8(bytes).map_err(|e| invalid(e.to_string()))?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let text = text.replace("\r\n", "\n");

        let mut main_attributes: IndexMap<String, String> = IndexMap::new();
        let mut last_name: Option<String> = None;

        for line in text.split(['\n', '\r']) {
            if line.is_empty() {
                break;
            }

            if let Some(continuation) = line.strip_prefix(' ') {
                let value = last_name
                    .as_ref()
                    .and_then(|name| main_attributes.get_mut(name))
                    .ok_or_else(|| invalid("continuation line without header".to_string()))?;
                value.push_str(continuation);
                continue;
            }

            let (name, value) = line
                .split_once(": ")
                .ok_or_else(|| invalid(format!("invalid header field: {}", line)))?;
            if !is_valid_name(name) {
                return Err(invalid(format!("invalid header field name: {}", name)));
            }

            // Names are case-insensitive; a repeated name replaces the earlier value
            if let Some(existing) = main_attributes
                .keys()
                .find(|key| key.eq_ignore_ascii_case(name))
                .cloned()
            {
                main_attributes.shift_remove(&existing);
            }
            main_attributes.insert(name.to_string(), value.to_string());
            last_name = Some(name.to_string());
        }

        Ok(Self { main_attributes })
    }

    /// Look up a main attribute, ignoring ASCII case in the name
    pub fn main_attribute(&self, name: &str) -> Option<&str> {
        self.main_attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 70
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
