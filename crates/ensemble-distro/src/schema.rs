//! JSON Schema generation for the manifest types.
//!
//! Distribution manifests are edited by hand, so the schemas produced here
//! are meant for editor tooling and CI checks (`run.yaml` linting) rather
//! than for runtime validation. The JSON is produced with [`schemars`].

use schemars::{r#gen::SchemaSettings, JsonSchema, SchemaGenerator};
use serde_json::Value;

/// Generate a JSON Schema for the given manifest type `T` **inline**,
/// i.e. without `$ref` pointers to external definitions.
///
/// Inline schemas keep the output self-contained, which is what most
/// YAML-aware editors expect when a schema is attached to a single file.
///
/// # Panics
///
/// Panics only if the resulting root schema cannot be serialized into
/// valid JSON, which should never happen as long as [`schemars`] works
/// correctly.
///
/// # Example
///
/// ```
/// use ensemble_distro::config::RunConfig;
/// use ensemble_distro::schema::config_json_schema;
///
/// let schema = config_json_schema::<RunConfig>();
/// assert_eq!(schema["title"], "RunConfig");
/// ```
pub fn config_json_schema<T>() -> Value
where
    T: JsonSchema + 'static,
{
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    serde_json::to_value(root).expect("generated schema should be serialisable")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildConfig, RunConfig};

    #[test]
    fn run_config_schema_is_inline() {
        let schema = config_json_schema::<RunConfig>();
        assert_eq!(schema["title"], "RunConfig");
        // Inline subschemas leave no definitions table behind.
        assert!(schema.get("definitions").is_none());
        assert!(schema["properties"].get("providers").is_some());
    }

    #[test]
    fn build_config_schema_lists_image_type() {
        let schema = config_json_schema::<BuildConfig>();
        assert!(schema["properties"].get("image_type").is_some());
    }
}
