use model::{bilingual::Bilingual, phone::is_valid_phone};
use url::Url;

/// Field-level validation error, rendered inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Plain text field that must be non-empty.
    RequiredText,
    /// Bilingual field; at minimum the Thai variant must be filled.
    RequiredTh,
    /// Must parse as an absolute http(s) URL when non-empty.
    AbsoluteUrl,
    /// Must normalize to 9 or 10 digits.
    Phone,
    /// Basic shape check when non-empty.
    Email,
    /// At least 8 characters when non-empty.
    Password,
}

#[derive(Debug)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Pair(&'a Bilingual),
}

/// Validation rule table shared by every form: one row per field, consumed
/// by gym, trainer and admin-user flows alike so the per-field checks cannot
/// drift apart.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<(&'static str, Constraint)>,
}

impl RuleSet {
    pub fn new() -> Self {
        RuleSet::default()
    }

    pub fn rule(mut self, field: &'static str, constraint: Constraint) -> Self {
        self.rules.push((field, constraint));
        self
    }

    /// Runs every rule against the values produced by `lookup`. The lookup
    /// is keyed by field name; forms supply a match over their own fields.
    pub fn validate<'a>(
        &self,
        lookup: impl Fn(&'static str) -> FieldValue<'a>,
    ) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        for (field, constraint) in &self.rules {
            if let Some(message) = check(*constraint, &lookup(field)) {
                errors.push(FieldError { field, message });
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check(constraint: Constraint, value: &FieldValue<'_>) -> Option<&'static str> {
    let text = match value {
        FieldValue::Text(text) => *text,
        FieldValue::Pair(pair) => {
            return match constraint {
                Constraint::RequiredTh if !pair.has_th() => Some("required"),
                _ => None,
            }
        }
    };
    match constraint {
        Constraint::RequiredText if text.trim().is_empty() => Some("required"),
        Constraint::RequiredTh if text.trim().is_empty() => Some("required"),
        Constraint::AbsoluteUrl if !text.is_empty() && !is_absolute_url(text) => {
            Some("must be an absolute URL")
        }
        Constraint::Phone if !is_valid_phone(text) => Some("must be 9 or 10 digits"),
        Constraint::Email if !text.is_empty() && !is_basic_email(text) => Some("invalid email"),
        Constraint::Password if !text.is_empty() && text.chars().count() < 8 => {
            Some("must be at least 8 characters")
        }
        _ => None,
    }
}

fn is_absolute_url(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

fn is_basic_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !text.contains(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_th() {
        let rules = RuleSet::new().rule("name", Constraint::RequiredTh);
        let empty = Bilingual::new("", "English only");
        let err = rules.validate(|_| FieldValue::Pair(&empty)).unwrap_err();
        assert_eq!(err[0].field, "name");

        let filled = Bilingual::th_only("ยิมมวยไทย");
        assert!(rules.validate(|_| FieldValue::Pair(&filled)).is_ok());
    }

    #[test]
    fn test_url_only_when_present() {
        let rules = RuleSet::new().rule("website", Constraint::AbsoluteUrl);
        assert!(rules.validate(|_| FieldValue::Text("")).is_ok());
        assert!(rules
            .validate(|_| FieldValue::Text("https://example.com/gym"))
            .is_ok());
        assert!(rules.validate(|_| FieldValue::Text("example.com")).is_err());
        assert!(rules
            .validate(|_| FieldValue::Text("ftp://example.com"))
            .is_err());
    }

    #[test]
    fn test_phone_rule() {
        let rules = RuleSet::new().rule("phone", Constraint::Phone);
        assert!(rules
            .validate(|_| FieldValue::Text("+66 81 234 5678"))
            .is_ok());
        assert!(rules.validate(|_| FieldValue::Text("")).is_err());
        assert!(rules.validate(|_| FieldValue::Text("123")).is_err());
    }

    #[test]
    fn test_email_rule() {
        let rules = RuleSet::new().rule("email", Constraint::Email);
        assert!(rules.validate(|_| FieldValue::Text("")).is_ok());
        assert!(rules
            .validate(|_| FieldValue::Text("gym@example.com"))
            .is_ok());
        assert!(rules.validate(|_| FieldValue::Text("not-an-email")).is_err());
        assert!(rules.validate(|_| FieldValue::Text("a@b")).is_err());
    }

    #[test]
    fn test_errors_collected_per_field() {
        let name = Bilingual::default();
        let rules = RuleSet::new()
            .rule("name", Constraint::RequiredTh)
            .rule("phone", Constraint::Phone)
            .rule("email", Constraint::Email);
        let errors = rules
            .validate(|field| match field {
                "name" => FieldValue::Pair(&name),
                _ => FieldValue::Text(""),
            })
            .unwrap_err();
        // email is optional-empty, the other two fail
        assert_eq!(errors.len(), 2);
    }
}
