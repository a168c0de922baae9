use uuid::Uuid;

use crate::server::error::{internal::InternalError, shape::CastError, AppError};

/// Parses a u32 value from a stored String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u32`
///
/// # Returns
/// - `Ok(u32)` - Successfully parsed String to `u32`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse the string as a u32
pub fn parse_u32_from_string(value: &str) -> Result<u32, AppError> {
    let result = value
        .parse::<u32>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}

/// Parses a client supplied document identifier
///
/// # Arguments
/// - `path` - Name of the parameter the value came from, reported back on failure
/// - `value` - The raw identifier
///
/// # Returns
/// - `Ok(Uuid)` - Identifier is well formed
/// - `Err(AppError::CastErr(_))` - Identifier is not a UUID
pub fn parse_object_id(path: &str, value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|_| CastError::new(path, value, "Uuid").into())
}
