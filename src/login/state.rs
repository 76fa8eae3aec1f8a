//! View state for the login flow.
//!
//! One tagged enum instead of a set of boolean flags: exactly one sub-mode
//! is active at a time, and the compiler enforces it. "Account with the
//! two-factor form open while the reset form is also open" is simply not a
//! value of this type.

use serde::{Deserialize, Serialize};

/// Top-level login mode, selected by the user via a mode switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginMode {
    /// Identifier + password.
    Account,
    /// Sign-in link delivered out of band.
    Passwordless,
}

/// Sub-mode of [`LoginMode::Account`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountStage {
    /// The credentials form.
    #[default]
    Normal,
    /// Credentials accepted; awaiting a 6-character code.
    TwoFactor,
    /// The password-reset form.
    ForgotPassword,
}

/// Sub-mode of [`LoginMode::Passwordless`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PasswordlessStage {
    /// The identifier form.
    #[default]
    Normal,
    /// A sign-in link has been sent; the form is replaced by a notice.
    LinkSent,
}

/// The complete view state: top-level mode crossed with its sub-mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewState {
    Account(AccountStage),
    Passwordless(PasswordlessStage),
}

impl Default for ViewState {
    /// The initial state: the credentials form.
    fn default() -> Self {
        ViewState::Account(AccountStage::Normal)
    }
}

impl ViewState {
    /// The top-level mode this state belongs to.
    pub fn mode(self) -> LoginMode {
        match self {
            ViewState::Account(_) => LoginMode::Account,
            ViewState::Passwordless(_) => LoginMode::Passwordless,
        }
    }

    /// The entry state of a mode — every mode switch lands here.
    pub fn initial(mode: LoginMode) -> Self {
        match mode {
            LoginMode::Account => ViewState::Account(AccountStage::Normal),
            LoginMode::Passwordless => ViewState::Passwordless(PasswordlessStage::Normal),
        }
    }
}
