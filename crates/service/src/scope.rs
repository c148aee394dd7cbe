/// Reserved prefix marking product-scoped keys.
pub const PRODUCT_KEY_PREFIX: &str = "zapato:";

/// Which store an operation targets, decided from the key's lexical shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyScope {
    /// Key under the product prefix; `id` is the key with the prefix
    /// stripped (the documented convention is `key = "zapato:" + id`).
    Product { id: String },
    /// Every other key, including the empty string.
    Config,
}

/// Pure, stateless, total over all string inputs.
pub fn classify(key: &str) -> KeyScope {
    match key.strip_prefix(PRODUCT_KEY_PREFIX) {
        Some(id) => KeyScope::Product { id: id.to_string() },
        None => KeyScope::Config,
    }
}
