pub mod job;
pub mod student;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts `null` or a missing field as an empty string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `null`, a missing field, or a whitespace-only string as `None`.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

/// Skill lists coming from the document store are loosely typed.
///
/// `null` becomes an empty list. Inside an array, string entries are kept and
/// anything else (numbers, objects, nulls) is skipped. A value that is not an
/// array at all is rejected.
pub(crate) fn lenient_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let total = raw.len();

    let skills: Vec<String> = raw
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect();

    if skills.len() < total {
        tracing::debug!(
            dropped = total - skills.len(),
            "Skipped non-string entries in skills list"
        );
    }

    Ok(skills)
}
