//! Front-matter transforms
//!
//! Each transform mutates the mapping in place and is idempotent, so running
//! the tool twice over the same tree leaves the second run without changes.

use serde_yaml::{Mapping, Value};
use std::fmt;

/// Key holding the grouped SEO properties
pub const METADATA_KEY: &str = "metadata";

/// Key holding the page image path
pub const IMAGE_KEY: &str = "image";

/// Top-level keys moved under [`METADATA_KEY`]
pub const METADATA_GROUP: [&str; 4] = ["seodescription", "pagetitle", "noindexpage", "canonical"];

/// What the transforms changed in one mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes {
    /// Keys removed because their value was null
    pub removed_nulls: Vec<String>,
    /// Keys moved under `metadata`
    pub grouped: Vec<String>,
    /// Whether `image` was made root-relative
    pub image_rooted: bool,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        self.removed_nulls.is_empty() && self.grouped.is_empty() && !self.image_rooted
    }
}

impl fmt::Display for Changes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("reformatted");
        }

        let mut parts = Vec::new();
        if !self.removed_nulls.is_empty() {
            parts.push(format!(
                "removed null properties: {}",
                self.removed_nulls.join(", ")
            ));
        }
        if !self.grouped.is_empty() {
            parts.push(format!(
                "moved under {}: {}",
                METADATA_KEY,
                self.grouped.join(", ")
            ));
        }
        if self.image_rooted {
            parts.push(format!("made {} path root-relative", IMAGE_KEY));
        }
        f.write_str(&parts.join("; "))
    }
}

/// Apply all transforms in order: drop nulls, group metadata, fix image path
pub fn apply(front_matter: &mut Mapping) -> Changes {
    Changes {
        removed_nulls: drop_nulls(front_matter),
        grouped: group_metadata(front_matter),
        image_rooted: fix_image_path(front_matter),
    }
}

/// Remove every top-level key whose value is null, returning the removed keys
pub fn drop_nulls(front_matter: &mut Mapping) -> Vec<String> {
    let removed: Vec<String> = front_matter
        .iter()
        .filter(|(_, value)| value.is_null())
        .map(|(key, _)| key_name(key))
        .collect();

    if !removed.is_empty() {
        front_matter.retain(|_, value| !value.is_null());
        for key in &removed {
            tracing::info!("Nullable property: {}", key);
        }
    }

    removed
}

/// Move the SEO keys into a nested `metadata` mapping
///
/// An existing `metadata` key always wins and nothing is merged into it. No
/// `metadata` key is created when none of the grouped keys are present.
/// Returns the keys that were moved, in their original order.
pub fn group_metadata(front_matter: &mut Mapping) -> Vec<String> {
    if front_matter.contains_key(METADATA_KEY) {
        return Vec::new();
    }

    let mut metadata = Mapping::new();
    for (key, value) in front_matter.iter() {
        if is_metadata_key(key) {
            metadata.insert(key.clone(), value.clone());
        }
    }

    if metadata.is_empty() {
        return Vec::new();
    }

    let grouped = metadata.keys().map(key_name).collect();
    front_matter.retain(|key, _| !is_metadata_key(key));
    front_matter.insert(
        Value::String(METADATA_KEY.to_string()),
        Value::Mapping(metadata),
    );

    grouped
}

/// Prefix a relative `image` path with `/`, returning whether it changed
pub fn fix_image_path(front_matter: &mut Mapping) -> bool {
    match front_matter.get_mut(IMAGE_KEY) {
        Some(Value::String(path)) if !path.starts_with('/') => {
            path.insert(0, '/');
            true
        }
        Some(Value::String(_)) | None => false,
        Some(other) => {
            tracing::debug!("Leaving non-string {} value as is: {:?}", IMAGE_KEY, other);
            false
        }
    }
}

fn is_metadata_key(key: &Value) -> bool {
    matches!(key.as_str(), Some(name) if METADATA_GROUP.contains(&name))
}

fn key_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "~".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}
