//! Sign-in role picker.
//!
//! Lecturers and students land on different pages after signing in, so a
//! role must be picked before the credentials form can be submitted.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

/// Shown when the form is submitted without a role.
pub const ROLE_REQUIRED_MESSAGE: &str = "Please choose your role (Lecture or Student)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SigninRole {
    Lecturer,
    Student,
}

impl SigninRole {
    /// Route the role lands on after a successful sign-in.
    pub fn landing_route(self) -> &'static str {
        match self {
            Self::Lecturer => "/schedule",
            Self::Student => "/",
        }
    }
}

/// Mutually exclusive role choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RolePicker {
    selected: Option<SigninRole>,
}

impl RolePicker {
    pub fn selected(&self) -> Option<SigninRole> {
        self.selected
    }

    pub fn pick(&mut self, role: SigninRole) {
        self.selected = Some(role);
    }

    pub fn is_picked(&self, role: SigninRole) -> bool {
        self.selected == Some(role)
    }

    /// Landing route for the picked role.
    ///
    /// # Errors
    ///
    /// Returns [`ROLE_REQUIRED_MESSAGE`] when no role is picked.
    pub fn submit_target(&self) -> Result<&'static str, &'static str> {
        self.selected
            .map(SigninRole::landing_route)
            .ok_or(ROLE_REQUIRED_MESSAGE)
    }
}

/// Trim both credentials and require them to be non-empty.
///
/// # Errors
///
/// Returns a user-facing message when either field is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}
