/// Strips formatting from a phone number and folds the `+66` country prefix
/// back to the leading zero form used everywhere in the admin.
pub fn normalize_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if let Some(rest) = digits.strip_prefix("66") {
        if rest.len() == 8 || rest.len() == 9 {
            return format!("0{rest}");
        }
    }
    digits
}

/// A phone is acceptable when it normalizes to 9 or 10 digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let normalized = normalize_phone(phone);
    normalized.len() == 9 || normalized.len() == 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_formatting() {
        assert_eq!(normalize_phone("081-234-5678"), "0812345678");
        assert_eq!(normalize_phone("02 123 4567"), "021234567");
    }

    #[test]
    fn test_normalize_country_prefix() {
        assert_eq!(normalize_phone("+66 81 234 5678"), "0812345678");
        assert_eq!(normalize_phone("+6621234567"), "021234567");
    }

    #[test]
    fn test_valid_lengths() {
        assert!(is_valid_phone("0812345678"));
        assert!(is_valid_phone("021234567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("081234567890"));
    }
}
