//! Serde helper functions for skip_serializing_if

/// Skip serializing if Option is None
pub fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Skip serializing if value is zero
pub fn is_zero_i32(value: &i32) -> bool {
    *value == 0
}
