//! Result type alias for setup-vars

use super::errors::SetupVarsError;

/// Result type alias for setup-vars operations
///
/// # Examples
///
/// ```
/// use setup_vars::domain::result::Result;
/// use setup_vars::domain::errors::SetupVarsError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SetupVarsError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SetupVarsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
