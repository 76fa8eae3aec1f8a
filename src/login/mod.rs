//! The login view's state machine.
//!
//! [`LoginFlow`] owns the view state and drives every transition in
//! response to form submissions and navigation. Outcomes that leave the
//! component — a successful sign-in, a dispatched link — are reported
//! through the [`LoginEvents`] trait, so the flow knows nothing about how
//! the host application reacts (routing, toasts, session storage).
//!
//! # States
//!
//! ```text
//!                    switch_mode
//!   Account/Normal ◀───────────▶ Passwordless/Normal
//!     │   │  ▲                        │
//!     │   │  │ cancel                 │ submit_passwordless
//!     │   ▼  │                        ▼
//!     │  Account/TwoFactor       Passwordless/LinkSent
//!     │      │ submit_two_factor ──▶ on_login_success
//!     ▼
//!   Account/ForgotPassword ── submit_reset ──▶ back to Account/Normal
//! ```
//!
//! Submissions are validated first ([`validate`]); a failing form returns
//! its field errors and leaves the state untouched.
//!
//! There is no backend in this component: the caller supplies a
//! [`MockAccount`] standing in for the account record a real directory
//! would return.

pub mod state;
pub mod validate;

pub use state::{AccountStage, LoginMode, PasswordlessStage, ViewState};
pub use validate::{FieldError, MIN_PASSWORD_LEN, TWO_FACTOR_CODE_LEN};

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Display data handed to the host on successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

/// The account record standing in for a backend directory lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockAccount {
    pub name: String,
    pub email: String,
    /// When set, valid credentials lead to the two-factor form instead of
    /// completing the sign-in directly.
    pub two_factor_enabled: bool,
}

impl MockAccount {
    fn profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Outcomes that leave the login component.
///
/// All methods have default no-op implementations so hosts only override
/// what they care about. `Send + Sync` so a flow can live behind an
/// `Arc`/`Mutex` in a multi-threaded UI shell.
pub trait LoginEvents: Send + Sync {
    /// Authentication completed; a parent collaborator takes over.
    fn on_login_success(&self, profile: &Profile) {
        let _ = profile;
    }

    /// A password-reset link was dispatched for `identifier`.
    /// Hosts typically show a notification here.
    fn on_reset_link_sent(&self, identifier: &str) {
        let _ = identifier;
    }

    /// A passwordless sign-in link was dispatched for `identifier`.
    fn on_login_link_sent(&self, identifier: &str) {
        let _ = identifier;
    }
}

/// A no-op implementation for hosts that don't need the events.
pub struct NoopLoginEvents;

impl LoginEvents for NoopLoginEvents {}

/// The login view's state machine.
pub struct LoginFlow {
    state: ViewState,
    account: MockAccount,
    events: Arc<dyn LoginEvents>,
}

impl LoginFlow {
    /// Create a flow in the initial state (`Account/Normal`).
    pub fn new(account: MockAccount, events: Arc<dyn LoginEvents>) -> Self {
        Self {
            state: ViewState::default(),
            account,
            events,
        }
    }

    /// The current view state. The UI renders exactly one form from this.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Switch the top-level mode. Always resets the sub-mode to `Normal`,
    /// abandoning any two-factor or reset form in progress.
    pub fn switch_mode(&mut self, mode: LoginMode) {
        self.transition(ViewState::initial(mode));
    }

    /// Submit the credentials form (`Account/Normal`).
    ///
    /// On valid input: accounts with two-factor enabled move to the code
    /// form; all others complete immediately via
    /// [`LoginEvents::on_login_success`].
    pub fn submit_credentials(
        &mut self,
        identifier: &str,
        password: &str,
    ) -> Result<(), Vec<FieldError>> {
        if self.state != ViewState::Account(AccountStage::Normal) {
            return Ok(());
        }
        validate::validate_credentials(identifier, password)?;

        if self.account.two_factor_enabled {
            self.transition(ViewState::Account(AccountStage::TwoFactor));
        } else {
            self.events.on_login_success(&self.account.profile());
        }
        Ok(())
    }

    /// Submit the two-factor form (`Account/TwoFactor`).
    ///
    /// The code is checked on format alone (exactly six characters); this
    /// slice has no backend to verify it against.
    pub fn submit_two_factor(&mut self, code: &str) -> Result<(), Vec<FieldError>> {
        if self.state != ViewState::Account(AccountStage::TwoFactor) {
            return Ok(());
        }
        validate::validate_two_factor(code)?;

        self.events.on_login_success(&self.account.profile());
        Ok(())
    }

    /// Open the password-reset form (`Account/Normal` → `ForgotPassword`).
    pub fn request_reset(&mut self) {
        if self.state == ViewState::Account(AccountStage::Normal) {
            self.transition(ViewState::Account(AccountStage::ForgotPassword));
        }
    }

    /// Submit the reset form (`Account/ForgotPassword`).
    ///
    /// On valid input, fires [`LoginEvents::on_reset_link_sent`] and returns
    /// to the credentials form.
    pub fn submit_reset(&mut self, identifier: &str) -> Result<(), Vec<FieldError>> {
        if self.state != ViewState::Account(AccountStage::ForgotPassword) {
            return Ok(());
        }
        validate::validate_identifier(identifier)?;

        self.events.on_reset_link_sent(identifier);
        self.transition(ViewState::Account(AccountStage::Normal));
        Ok(())
    }

    /// Abandon the two-factor or reset form and return to the credentials
    /// form. A no-op anywhere else.
    pub fn cancel(&mut self) {
        match self.state {
            ViewState::Account(AccountStage::TwoFactor)
            | ViewState::Account(AccountStage::ForgotPassword) => {
                self.transition(ViewState::Account(AccountStage::Normal));
            }
            _ => {}
        }
    }

    /// Submit the passwordless form (`Passwordless/Normal`).
    ///
    /// On valid input, fires [`LoginEvents::on_login_link_sent`] and shows
    /// the link-sent notice.
    pub fn submit_passwordless(&mut self, identifier: &str) -> Result<(), Vec<FieldError>> {
        if self.state != ViewState::Passwordless(PasswordlessStage::Normal) {
            return Ok(());
        }
        validate::validate_identifier(identifier)?;

        self.events.on_login_link_sent(identifier);
        self.transition(ViewState::Passwordless(PasswordlessStage::LinkSent));
        Ok(())
    }

    fn transition(&mut self, next: ViewState) {
        if self.state != next {
            debug!("login view: {:?} → {:?}", self.state, next);
            self.state = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn account(two_factor: bool) -> MockAccount {
        MockAccount {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            two_factor_enabled: two_factor,
        }
    }

    #[derive(Default)]
    struct Recorder {
        logins: Mutex<Vec<Profile>>,
        resets: Mutex<Vec<String>>,
        links: Mutex<Vec<String>>,
    }

    impl LoginEvents for Recorder {
        fn on_login_success(&self, profile: &Profile) {
            self.logins.lock().unwrap().push(profile.clone());
        }
        fn on_reset_link_sent(&self, identifier: &str) {
            self.resets.lock().unwrap().push(identifier.to_string());
        }
        fn on_login_link_sent(&self, identifier: &str) {
            self.links.lock().unwrap().push(identifier.to_string());
        }
    }

    #[test]
    fn plain_account_logs_in_directly() {
        let rec = Arc::new(Recorder::default());
        let mut flow = LoginFlow::new(account(false), Arc::clone(&rec) as Arc<dyn LoginEvents>);

        flow.submit_credentials("ada@example.com", "secret1").unwrap();

        assert_eq!(flow.state(), ViewState::Account(AccountStage::Normal));
        let logins = rec.logins.lock().unwrap();
        assert_eq!(logins.len(), 1);
        assert_eq!(logins[0].name, "Ada Lovelace");
    }

    #[test]
    fn two_factor_account_moves_to_code_form() {
        let rec = Arc::new(Recorder::default());
        let mut flow = LoginFlow::new(account(true), Arc::clone(&rec) as Arc<dyn LoginEvents>);

        flow.submit_credentials("ada@example.com", "secret1").unwrap();

        assert_eq!(flow.state(), ViewState::Account(AccountStage::TwoFactor));
        assert!(rec.logins.lock().unwrap().is_empty());

        flow.submit_two_factor("123456").unwrap();
        assert_eq!(rec.logins.lock().unwrap().len(), 1);
    }

    #[test]
    fn invalid_credentials_leave_state_untouched() {
        let rec = Arc::new(Recorder::default());
        let mut flow = LoginFlow::new(account(true), Arc::clone(&rec) as Arc<dyn LoginEvents>);

        let errors = flow.submit_credentials("", "short").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(flow.state(), ViewState::Account(AccountStage::Normal));
        assert!(rec.logins.lock().unwrap().is_empty());
    }

    #[test]
    fn bad_code_keeps_two_factor_form_open() {
        let rec = Arc::new(Recorder::default());
        let mut flow = LoginFlow::new(account(true), Arc::clone(&rec) as Arc<dyn LoginEvents>);
        flow.submit_credentials("ada", "secret1").unwrap();

        assert!(flow.submit_two_factor("123").is_err());
        assert_eq!(flow.state(), ViewState::Account(AccountStage::TwoFactor));
        assert!(rec.logins.lock().unwrap().is_empty());
    }

    #[test]
    fn cancel_returns_to_credentials_form() {
        let mut flow = LoginFlow::new(account(true), Arc::new(NoopLoginEvents));
        flow.submit_credentials("ada", "secret1").unwrap();
        assert_eq!(flow.state(), ViewState::Account(AccountStage::TwoFactor));

        flow.cancel();
        assert_eq!(flow.state(), ViewState::Account(AccountStage::Normal));
    }

    #[test]
    fn reset_round_trip() {
        let rec = Arc::new(Recorder::default());
        let mut flow = LoginFlow::new(account(false), Arc::clone(&rec) as Arc<dyn LoginEvents>);

        flow.request_reset();
        assert_eq!(flow.state(), ViewState::Account(AccountStage::ForgotPassword));

        flow.submit_reset("ada@example.com").unwrap();
        assert_eq!(flow.state(), ViewState::Account(AccountStage::Normal));
        assert_eq!(*rec.resets.lock().unwrap(), vec!["ada@example.com"]);
    }

    #[test]
    fn switch_mode_resets_sub_mode() {
        let mut flow = LoginFlow::new(account(true), Arc::new(NoopLoginEvents));
        flow.submit_credentials("ada", "secret1").unwrap();
        assert_eq!(flow.state(), ViewState::Account(AccountStage::TwoFactor));

        flow.switch_mode(LoginMode::Passwordless);
        assert_eq!(
            flow.state(),
            ViewState::Passwordless(PasswordlessStage::Normal)
        );

        flow.switch_mode(LoginMode::Account);
        assert_eq!(flow.state(), ViewState::Account(AccountStage::Normal));
    }

    #[test]
    fn passwordless_link_sent() {
        let rec = Arc::new(Recorder::default());
        let mut flow = LoginFlow::new(account(false), Arc::clone(&rec) as Arc<dyn LoginEvents>);

        flow.switch_mode(LoginMode::Passwordless);
        flow.submit_passwordless("ada@example.com").unwrap();

        assert_eq!(
            flow.state(),
            ViewState::Passwordless(PasswordlessStage::LinkSent)
        );
        assert_eq!(*rec.links.lock().unwrap(), vec!["ada@example.com"]);
    }

    #[test]
    fn submits_in_foreign_states_are_no_ops() {
        let rec = Arc::new(Recorder::default());
        let mut flow = LoginFlow::new(account(false), Arc::clone(&rec) as Arc<dyn LoginEvents>);

        // The two-factor form is not open; nothing may happen.
        flow.submit_two_factor("123456").unwrap();
        assert!(rec.logins.lock().unwrap().is_empty());
        assert_eq!(flow.state(), ViewState::Account(AccountStage::Normal));

        // Neither is the reset form.
        flow.submit_reset("ada@example.com").unwrap();
        assert!(rec.resets.lock().unwrap().is_empty());
    }
}
