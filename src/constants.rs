/// Sort key accepted by product listings (alphabetical by name)
pub const SORT_BY_NAME: &str = "name";

/// Legacy spelling of the name sort key, still sent by older clients
pub const SORT_BY_NAME_LEGACY: &str = "nome";

/// Currency prefix used when rendering prices
pub const CURRENCY_PREFIX: &str = "R$";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message when signup data is incomplete
pub const ERR_MISSING_USER_FIELDS: &str = "Email, password and role are required";

/// Error message for an unknown role value
pub const ERR_INVALID_ROLE: &str = "Role must be either 'manager' or 'customer'";

/// Error message for a product form that fails presence checks
pub const ERR_INVALID_PRODUCT_FORM: &str =
    "Fill in every field correctly (price must be greater than zero)";

/// Error message when no identifier is left above the stored maximum
pub const ERR_IDS_EXHAUSTED: &str = "No identifiers left above the stored maximum";

/// Error message for a failed login
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid email or password";
