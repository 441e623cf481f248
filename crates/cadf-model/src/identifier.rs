// identifier.rs — Namespaced CADF identifiers.

use uuid::Uuid;

/// Generate a CADF identifier of the form `namespace:<uuid-v4>`, e.g.
/// `maestro2:67c96e9b-...`. Used for event and resource ids.
pub fn generate(namespace: &str) -> String {
    format!("{namespace}:{}", Uuid::new_v4())
}
