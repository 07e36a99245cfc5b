/// Validation errors raised while accepting a submission or patch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("name is required")]
    MissingName,
    #[error("a valid email address is required (found '{0}')")]
    InvalidEmail(String),
}

pub(crate) fn require_name(raw: &str) -> Result<String, IntakeViolation> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(IntakeViolation::MissingName);
    }
    Ok(name.to_string())
}

pub(crate) fn require_email(raw: &str) -> Result<String, IntakeViolation> {
    let email = raw.trim().to_ascii_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if valid {
        Ok(email)
    } else {
        Err(IntakeViolation::InvalidEmail(raw.trim().to_string()))
    }
}

/// Blank optional text is stored as absent.
pub(crate) fn tidy_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Trims entries, drops blanks and case-insensitive duplicates, keeps first-seen order.
pub(crate) fn tidy_list(entries: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty() && seen.insert(entry.to_ascii_lowercase()))
        .collect()
}

/// Trims entries and drops blanks but keeps repeats: the list length is the service count
/// used for pricing.
pub(crate) fn tidy_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}
