//! Declarative validation for form fields.
//!
//! One framework serves both the generic submit-time pass and the live
//! per-field pass: field descriptions go in, a report of per-field errors
//! comes out. All conditions are policy branches, never fatal.

use serde::{Deserialize, Serialize};

/// Hard ceiling on uploaded file size.
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Validation result for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Validation passed.
    Valid,
    /// Validation failed with an error message.
    Invalid(String),
}

impl ValidationResult {
    /// Check if validation passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Get the error message if invalid.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Invalid(msg) => Some(msg),
            Self::Valid => None,
        }
    }
}

/// The control type a field was rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Plain text input
    Text,
    /// Email input
    Email,
    /// Telephone input
    Tel,
    /// File input
    File,
    /// Select control
    Select,
    /// Multi-line text area
    TextArea,
}

/// Metadata for a chosen file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// File name as reported by the browser.
    pub name: String,
    /// MIME type, possibly empty.
    pub mime: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

impl FileMeta {
    /// Lower-cased extension including the leading dot, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.rsplit_once('.')?;
        if ext.is_empty() {
            None
        } else {
            Some(format!(".{}", ext.to_lowercase()))
        }
    }
}

/// A field's current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text-like value (inputs, text areas, selects).
    Text(String),
    /// File input value; `None` when no file is chosen.
    File(Option<FileMeta>),
}

impl FieldValue {
    /// Whether the value counts as empty for the required check.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::File(file) => file.is_none(),
        }
    }
}

/// A form field as seen by the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name (markup `name` attribute).
    pub name: String,
    /// Control type.
    pub kind: FieldKind,
    /// Whether the markup carries `required`.
    pub required: bool,
    /// File `accept` filter, comma-separated, if declared.
    pub accept: Option<String>,
    /// Current value.
    pub value: FieldValue,
}

impl Field {
    /// Create a text-valued field.
    #[must_use]
    pub fn text(name: &str, kind: FieldKind, required: bool, value: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required,
            accept: None,
            value: FieldValue::Text(value.to_string()),
        }
    }

    /// Create a file field.
    #[must_use]
    pub fn file(name: &str, required: bool, accept: Option<&str>, file: Option<FileMeta>) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::File,
            required,
            accept: accept.map(ToString::to_string),
            value: FieldValue::File(file),
        }
    }
}

/// A validator that can check a single field.
pub trait Validator {
    /// Validate the given field.
    fn validate(&self, field: &Field) -> ValidationResult;

    /// Name of this validator.
    fn name(&self) -> &str;
}

/// Required field validator.
#[derive(Debug, Clone)]
pub struct Required {
    message: String,
}

impl Required {
    /// Create a required validator with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: "This field is required".to_string(),
        }
    }

    /// Create with a custom message.
    #[must_use]
    pub fn with_message(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for Required {
    fn validate(&self, field: &Field) -> ValidationResult {
        if field.value.is_empty() {
            ValidationResult::Invalid(self.message.clone())
        } else {
            ValidationResult::Valid
        }
    }

    fn name(&self) -> &str {
        "required"
    }
}

/// Permissive email-shape validator: something, an `@`, something, a dot,
/// something, with no whitespace or extra `@`s.
#[derive(Debug, Clone, Default)]
pub struct EmailShape;

impl EmailShape {
    fn is_email_shaped(value: &str) -> bool {
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');
        let Some((host, tld)) = domain.rsplit_once('.') else {
            return false;
        };
        clean(local) && clean(host) && clean(tld)
    }
}

impl Validator for EmailShape {
    fn validate(&self, field: &Field) -> ValidationResult {
        let FieldValue::Text(value) = &field.value else {
            return ValidationResult::Valid;
        };
        if Self::is_email_shaped(value) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid("Please enter a valid email address".to_string())
        }
    }

    fn name(&self) -> &str {
        "email"
    }
}

/// Phone-shape validator: optional leading `+`, then 8 to 20 characters of
/// digits, spaces, dashes, and parentheses.
#[derive(Debug, Clone, Default)]
pub struct PhoneShape;

impl PhoneShape {
    fn is_phone_shaped(value: &str) -> bool {
        let rest = value.strip_prefix('+').unwrap_or(value);
        let count = rest.chars().count();
        (8..=20).contains(&count)
            && rest
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
    }
}

impl Validator for PhoneShape {
    fn validate(&self, field: &Field) -> ValidationResult {
        let FieldValue::Text(value) = &field.value else {
            return ValidationResult::Valid;
        };
        if Self::is_phone_shaped(value) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid("Please enter a valid phone number".to_string())
        }
    }

    fn name(&self) -> &str {
        "tel"
    }
}

/// File validator: presence, accept-filter match, and size ceiling.
#[derive(Debug, Clone)]
pub struct FileRules {
    max_size_bytes: u64,
}

impl FileRules {
    /// Create with the standard 5 MiB ceiling.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_size_bytes: MAX_FILE_SIZE_BYTES,
        }
    }

    /// Whether a file matches one entry of an accept filter. Entries may be
    /// an exact MIME type, an extension (`.pdf`), or a wildcard subtype
    /// (`image/*`).
    fn matches_accept_entry(entry: &str, file: &FileMeta) -> bool {
        let entry = entry.trim();
        if entry.is_empty() {
            return false;
        }
        if let Some(base) = entry.strip_suffix("/*") {
            return file.mime.starts_with(base);
        }
        if entry == file.mime {
            return true;
        }
        let subtype_as_ext = file.mime.rsplit('/').next().map(|s| format!(".{s}"));
        file.extension().as_deref() == Some(&entry.to_lowercase())
            || subtype_as_ext.as_deref() == Some(entry)
    }

    fn check(&self, field: &Field, file: &FileMeta) -> ValidationResult {
        if let Some(accept) = &field.accept {
            let accepted = accept
                .split(',')
                .any(|entry| Self::matches_accept_entry(entry, file));
            if !accepted {
                return ValidationResult::Invalid("Please select a valid file type".to_string());
            }
        }
        if file.size_bytes > self.max_size_bytes {
            return ValidationResult::Invalid("File size must be less than 5MB".to_string());
        }
        ValidationResult::Valid
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for FileRules {
    fn validate(&self, field: &Field) -> ValidationResult {
        match &field.value {
            FieldValue::File(Some(file)) => self.check(field, file),
            FieldValue::File(None) => {
                if field.required {
                    ValidationResult::Invalid("Please select a file".to_string())
                } else {
                    ValidationResult::Valid
                }
            }
            FieldValue::Text(_) => ValidationResult::Valid,
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// One failing field in a [`FormReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name.
    pub name: String,
    /// Error message to render next to the field.
    pub message: String,
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormReport {
    /// Per-field errors, at most one per field.
    pub errors: Vec<FieldError>,
}

impl FormReport {
    /// Whether the form passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error message for a field, if it failed.
    #[must_use]
    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.errors
            .iter()
            .find_map(|e| (e.name == name).then_some(e.message.as_str()))
    }
}

/// Validate a single field through the full rule set. Optional empty fields
/// always pass; the first failing rule wins.
#[must_use]
pub fn validate_field(field: &Field) -> ValidationResult {
    if !field.required && field.value.is_empty() {
        return ValidationResult::Valid;
    }
    if field.required {
        let result = Required::new().validate(field);
        if !result.is_valid() {
            return result;
        }
    }
    match field.kind {
        FieldKind::Email => EmailShape.validate(field),
        FieldKind::Tel => PhoneShape.validate(field),
        FieldKind::File => FileRules::new().validate(field),
        FieldKind::Text | FieldKind::Select | FieldKind::TextArea => ValidationResult::Valid,
    }
}

/// Validate every field of a form, producing at most one error per field.
#[must_use]
pub fn validate_form(fields: &[Field]) -> FormReport {
    let errors = fields
        .iter()
        .filter_map(|field| {
            validate_field(field).error().map(|message| FieldError {
                name: field.name.clone(),
                message: message.to_string(),
            })
        })
        .collect();
    FormReport { errors }
}
