//! Form field validation.
//!
//! Only fields marked required are checked. A blank value always reports
//! [`FieldError::MissingValue`]; the email and phone shape checks run on the
//! raw (untrimmed) value only when something was entered.

use thiserror::Error;

/// Kind of form control, as given by its `type` attribute or tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

impl FieldKind {
    /// Maps an input `type` attribute (or a tag name for select/textarea).
    pub fn from_type_attr(ty: &str) -> Self {
        match ty.trim().to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            "select" | "select-one" | "select-multiple" => FieldKind::Select,
            "textarea" => FieldKind::TextArea,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    MissingValue,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// A snapshot of one control at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInput<'a> {
    pub name: &'a str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: &'a str,
}

impl<'a> FieldInput<'a> {
    pub fn required(name: &'a str, kind: FieldKind, value: &'a str) -> Self {
        Self {
            name,
            kind,
            required: true,
            value,
        }
    }

    pub fn optional(name: &'a str, kind: FieldKind, value: &'a str) -> Self {
        Self {
            name,
            kind,
            required: false,
            value,
        }
    }
}

pub fn validate_field(field: &FieldInput<'_>) -> Result<(), FieldError> {
    if !field.required {
        return Ok(());
    }
    if field.value.trim_matches(is_form_space).is_empty() {
        return Err(FieldError::MissingValue);
    }
    match field.kind {
        FieldKind::Email if !is_valid_email(field.value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(field.value) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}

/// Failures of one validation pass, keyed by field position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<(usize, FieldError)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[(usize, FieldError)] {
        &self.errors
    }

    pub fn error_for(&self, index: usize) -> Option<FieldError> {
        self.errors
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, e)| *e)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks every field; never stops at the first failure.
pub fn validate_form(fields: &[FieldInput<'_>]) -> ValidationReport {
    let errors = fields
        .iter()
        .enumerate()
        .filter_map(|(idx, f)| validate_field(f).err().map(|e| (idx, e)))
        .collect();
    ValidationReport { errors }
}

/// Where a form shows its per-field error messages.
pub trait ErrorMarkers {
    /// Removes the message and error state from field `index`, if any.
    fn clear(&self, index: usize);
    fn show(&self, index: usize, error: FieldError);
}

/// Clears every field's marker, then validates and marks each failing field.
/// Resubmitting never stacks a second message under a field.
pub fn check_form<M: ErrorMarkers>(fields: &[FieldInput<'_>], markers: &M) -> ValidationReport {
    for idx in 0..fields.len() {
        markers.clear(idx);
    }
    let report = validate_form(fields);
    for &(idx, error) in report.errors() {
        markers.show(idx, error);
    }
    report
}

/// `local@domain.tld` shape: no whitespace, exactly one `@` with a non-empty
/// local part, and a dot inside the domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_form_space) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// At least ten characters drawn from digits, whitespace, `-`, `+`, `(` and `)`.
/// Formatting characters count toward the minimum.
pub fn is_valid_phone(phone: &str) -> bool {
    let mut count = 0usize;
    for c in phone.chars() {
        let allowed =
            c.is_ascii_digit() || is_form_space(c) || matches!(c, '-' | '+' | '(' | ')');
        if !allowed {
            return false;
        }
        count += 1;
    }
    count >= 10
}

/// The whitespace set browsers use for `\s` and `String.prototype.trim`:
/// Unicode `White_Space` without U+0085, plus the BOM.
fn is_form_space(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Appends a message per `show` the way the page does, so stale
    /// messages pile up unless they are cleared.
    struct PageMarkers {
        messages: RefCell<Vec<Vec<FieldError>>>,
    }

    impl PageMarkers {
        fn new(fields: usize) -> Self {
            Self {
                messages: RefCell::new(vec![Vec::new(); fields]),
            }
        }
    }

    impl ErrorMarkers for PageMarkers {
        fn clear(&self, index: usize) {
            self.messages.borrow_mut()[index].clear();
        }

        fn show(&self, index: usize, error: FieldError) {
            self.messages.borrow_mut()[index].push(error);
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.in"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("123-456-7890"));
        assert!(is_valid_phone("+91 (22) 1234"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("12345abcde"));
        // Formatting characters count toward the ten.
        assert!(is_valid_phone("1 2 3 4 5 "));
    }

    #[test]
    fn whitespace_follows_browser_rules() {
        assert!(!is_valid_email("a\u{feff}b@c.co"));
        assert!(is_valid_email("a\u{85}b@c.co"));
        assert!(is_valid_phone("12345\u{feff}67890"));
        assert!(!is_valid_phone("12345\u{85}67890"));

        let bom = FieldInput::required("name", FieldKind::Text, "\u{feff} \u{3000}");
        assert_eq!(validate_field(&bom), Err(FieldError::MissingValue));
        let nel = FieldInput::required("name", FieldKind::Text, "\u{85}");
        assert_eq!(validate_field(&nel), Ok(()));
    }

    #[test]
    fn blank_required_field_reports_missing_value_only() {
        let f = FieldInput::required("email", FieldKind::Email, "   ");
        assert_eq!(validate_field(&f), Err(FieldError::MissingValue));
    }

    #[test]
    fn optional_fields_are_not_checked() {
        let f = FieldInput::optional("email", FieldKind::Email, "nope");
        assert_eq!(validate_field(&f), Ok(()));
    }

    #[test]
    fn report_has_one_error_per_failing_field() {
        let fields = [
            FieldInput::required("name", FieldKind::Text, ""),
            FieldInput::required("email", FieldKind::Email, "a@b.co"),
            FieldInput::required("phone", FieldKind::Tel, "12345"),
            FieldInput::required("message", FieldKind::TextArea, "\t"),
        ];
        let report = validate_form(&fields);
        assert!(!report.is_valid());
        assert_eq!(
            report.errors(),
            &[
                (0, FieldError::MissingValue),
                (2, FieldError::InvalidPhone),
                (3, FieldError::MissingValue)
            ]
        );
        assert_eq!(report.error_for(1), None);
    }

    #[test]
    fn one_empty_required_field_blocks_submission() {
        let fields = [
            FieldInput::required("name", FieldKind::Text, ""),
            FieldInput::required("email", FieldKind::Email, "a@b.co"),
        ];
        let report = validate_form(&fields);
        assert_eq!(report.len(), 1);
        assert_eq!(report.error_for(0), Some(FieldError::MissingValue));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(FieldError::MissingValue.to_string(), "This field is required");
        assert_eq!(FieldError::InvalidEmail.to_string(), "Please enter a valid email");
        assert_eq!(
            FieldError::InvalidPhone.to_string(),
            "Please enter a valid phone number"
        );
    }

    #[test]
    fn kind_from_type_attr() {
        assert_eq!(FieldKind::from_type_attr("EMAIL"), FieldKind::Email);
        assert_eq!(FieldKind::from_type_attr("tel"), FieldKind::Tel);
        assert_eq!(FieldKind::from_type_attr("select-one"), FieldKind::Select);
        assert_eq!(FieldKind::from_type_attr("date"), FieldKind::Text);
    }

    #[test]
    fn resubmitting_keeps_one_message_per_field() {
        let fields = [
            FieldInput::required("name", FieldKind::Text, ""),
            FieldInput::required("email", FieldKind::Email, "nope"),
            FieldInput::required("phone", FieldKind::Tel, "123-456-7890"),
        ];
        let markers = PageMarkers::new(fields.len());
        check_form(&fields, &markers);
        let report = check_form(&fields, &markers);
        assert_eq!(report.len(), 2);
        assert_eq!(
            *markers.messages.borrow(),
            vec![
                vec![FieldError::MissingValue],
                vec![FieldError::InvalidEmail],
                vec![],
            ]
        );

        let fixed = [
            FieldInput::required("name", FieldKind::Text, "Asha"),
            FieldInput::required("email", FieldKind::Email, "nope"),
            FieldInput::required("phone", FieldKind::Tel, "123-456-7890"),
        ];
        check_form(&fixed, &markers);
        assert_eq!(
            *markers.messages.borrow(),
            vec![vec![], vec![FieldError::InvalidEmail], vec![]]
        );
    }
}
