use crate::error::AppError;

/// Reject files strictly larger than `limit` bytes.
pub fn check_size(size: u64, limit: u64) -> Result<(), AppError> {
    if size > limit {
        return Err(AppError::file_too_large(size, limit));
    }
    Ok(())
}
