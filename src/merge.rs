use crate::{Mapping, Value};

/// Recursively merge `overlay` into `base`.
///
/// * Mappings on both sides merge per key.
/// * Anything else from the overlay replaces the base value.
pub(crate) fn merge(base: &mut Mapping, overlay: Mapping) {
    for (key, value) in overlay {
        let Value::Mapping(incoming) = value else {
            base.insert(key, value);
            continue;
        };

        if let Some(Value::Mapping(existing)) = base.get_mut(&key) {
            merge(existing, incoming);
            continue;
        }

        base.insert(key, incoming);
    }
}
