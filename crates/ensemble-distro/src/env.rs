//! `${env.NAME}` reference resolution for manifest values.
//!
//! Generated manifests never contain secrets; they contain references in the
//! form `${env.NAME}` or `${env.NAME:default}`, resolved at load time
//! against whatever lookup the caller supplies (usually the process
//! environment).  A reference without a default whose variable is unset is a
//! hard error — a server silently starting with an empty API key is much
//! harder to debug than one refusing to start.

use crate::error::DistroError;

const OPEN: &str = "${env.";

/// Build a reference string for embedding in a manifest.
///
/// ```rust
/// use ensemble_distro::env::env_ref;
///
/// assert_eq!(env_ref("SAMBANOVA_API_KEY", None), "${env.SAMBANOVA_API_KEY}");
/// assert_eq!(env_ref("PORT", Some("5001")), "${env.PORT:5001}");
/// ```
pub fn env_ref(name: &str, default: Option<&str>) -> String {
    match default {
        Some(default) => format!("${{env.{name}:{default}}}"),
        None => format!("${{env.{name}}}"),
    }
}

/// Replace every `${env.…}` reference in `input`.
///
/// Text outside references is copied verbatim, so references may sit in the
/// middle of a longer value (`"https://${env.HOST}/v1"`).
pub fn resolve_str(
    input: &str,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<String, DistroError> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];
        let Some(end) = after.find('}') else {
            return Err(DistroError::MalformedEnvRef {
                raw: input.to_owned(),
            });
        };

        let inner = &after[..end];
        let (name, default) = match inner.split_once(':') {
            Some((name, default)) => (name, Some(default)),
            None => (inner, None),
        };
        if name.is_empty() {
            return Err(DistroError::MalformedEnvRef {
                raw: input.to_owned(),
            });
        }

        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => match default {
                Some(default) => out.push_str(default),
                None => {
                    return Err(DistroError::UnresolvedEnv {
                        name: name.to_owned(),
                    });
                }
            },
        }

        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Recursively resolve references in every string of a JSON tree.
///
/// Non-string leaves are left untouched.
pub fn resolve_json(
    value: &mut serde_json::Value,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<(), DistroError> {
    match value {
        serde_json::Value::String(text) => {
            if text.contains(OPEN) {
                *text = resolve_str(text, lookup)?;
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                resolve_json(item, lookup)?;
            }
        }
        serde_json::Value::Object(map) => {
            for (_key, item) in map.iter_mut() {
                resolve_json(item, lookup)?;
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "SAMBANOVA_API_KEY" => Some("sk-test".to_owned()),
            _ => None,
        }
    }

    #[test]
    fn plain_reference_resolves() {
        let resolved = resolve_str("${env.SAMBANOVA_API_KEY}", &lookup).unwrap();
        assert_eq!(resolved, "sk-test");
    }

    #[test]
    fn reference_inside_longer_value() {
        let resolved = resolve_str("Bearer ${env.SAMBANOVA_API_KEY}!", &lookup).unwrap();
        assert_eq!(resolved, "Bearer sk-test!");
    }

    #[test]
    fn default_applies_when_unset() {
        assert_eq!(resolve_str("${env.PORT:5001}", &lookup).unwrap(), "5001");
        // Set variables win over defaults.
        assert_eq!(
            resolve_str("${env.SAMBANOVA_API_KEY:fallback}", &lookup).unwrap(),
            "sk-test"
        );
        // An empty default is legal and resolves to the empty string.
        assert_eq!(resolve_str("${env.MISSING:}", &lookup).unwrap(), "");
    }

    #[test]
    fn unset_without_default_is_an_error() {
        let err = resolve_str("${env.MISSING}", &lookup).unwrap_err();
        assert!(matches!(err, DistroError::UnresolvedEnv { name } if name == "MISSING"));
    }

    #[test]
    fn unterminated_reference_is_malformed() {
        let err = resolve_str("${env.MISSING", &lookup).unwrap_err();
        assert!(matches!(err, DistroError::MalformedEnvRef { .. }));
    }

    #[test]
    fn json_tree_resolution_touches_only_strings() {
        let mut value = serde_json::json!({
            "url": "https://api.sambanova.ai/v1",
            "api_key": "${env.SAMBANOVA_API_KEY}",
            "retries": 3,
            "tags": ["${env.PORT:5001}"]
        });

        resolve_json(&mut value, &lookup).unwrap();

        assert_eq!(value["api_key"], "sk-test");
        assert_eq!(value["retries"], 3);
        assert_eq!(value["tags"][0], "5001");
    }

    #[test]
    fn env_ref_round_trips_through_resolve() {
        let reference = env_ref("SAMBANOVA_API_KEY", None);
        assert_eq!(resolve_str(&reference, &lookup).unwrap(), "sk-test");
    }
}
