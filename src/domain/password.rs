use validator::ValidationError;

const MIN_LENGTH: usize = 5;
const MAX_LENGTH: usize = 10;
const SPECIAL_CHARS: &str = "@$!%*?&";

/// Account password format: 5-10 characters drawn from letters, digits and
/// `@$!%*?&`, with at least one lowercase, one uppercase, one digit and one
/// special character.
pub fn validate_password_format(password: &str) -> Result<(), ValidationError> {
    if password.len() < MIN_LENGTH || password.len() > MAX_LENGTH {
        let mut error = ValidationError::new("password_length");
        error.message = Some(
            format!("Password must be between {} and {} characters long", MIN_LENGTH, MAX_LENGTH).into()
        );
        return Err(error);
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));
    let allowed_only = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || SPECIAL_CHARS.contains(c));

    if !(has_lower && has_upper && has_digit && has_special && allowed_only) {
        let mut error = ValidationError::new("password_format");
        error.message = Some(
            "Invalid password format. Include uppercase, lowercase, numbers, and special characters".into()
        );
        return Err(error);
    }

    Ok(())
}
