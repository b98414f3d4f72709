//! Synchronous form checks run before anything is sent to the auth provider.

use std::collections::BTreeMap;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    AcceptTerms,
    /// Not tied to an input; shown as a banner above the form.
    General,
}

/// Per-field error messages. Empty means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, msg: impl Into<String>) {
        self.0.insert(field, msg.into());
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn single(field: Field, msg: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(field, msg);
        errors
    }

    #[cfg(test)]
    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }
}

/// `\S+@\S+\.\S+`: something, an at sign, something, a dot, something.
pub fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return email
            .split_whitespace()
            .any(looks_like_email);
    }
    // Any '@' may serve as the separator, as long as a dot with text on both
    // sides follows it.
    email
        .match_indices('@')
        .filter(|(i, _)| *i > 0)
        .any(|(i, _)| {
            let rest = &email[i + 1..];
            rest.match_indices('.')
                .any(|(d, _)| d > 0 && d + 1 < rest.len())
        })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl RegistrationForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Nome é obrigatório");
        }

        if self.email.trim().is_empty() {
            errors.insert(Field::Email, "Email é obrigatório");
        } else if !looks_like_email(&self.email) {
            errors.insert(Field::Email, "Email inválido");
        }

        if self.password.is_empty() {
            errors.insert(Field::Password, "Senha é obrigatória");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(Field::Password, "Senha deve ter pelo menos 6 caracteres");
        }

        if self.password != self.confirm_password {
            errors.insert(Field::ConfirmPassword, "Senhas não coincidem");
        }

        if !self.accept_terms {
            errors.insert(Field::AcceptTerms, "Você deve aceitar os termos de uso");
        }

        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, "Email é obrigatório");
        } else if !looks_like_email(&self.email) {
            errors.insert(Field::Email, "Email inválido");
        }
        if self.password.is_empty() {
            errors.insert(Field::Password, "Senha é obrigatória");
        }
        errors
    }
}

/// Checks for the account page's change-password form. Returns the first
/// problem only, since the page shows a single error line.
pub fn validate_password_change(new_password: &str, confirmation: &str) -> Result<(), &'static str> {
    if new_password != confirmation {
        return Err("As senhas não coincidem");
    }
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err("A nova senha deve ter pelo menos 6 caracteres");
    }
    Ok(())
}
