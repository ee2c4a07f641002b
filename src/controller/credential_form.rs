use crate::auth::{Authenticator, Credentials};
use crate::controller::{Navigator, Notifier, Severity};
use crate::domain::{LoginForm, Role};
use crate::error::LoginError;
use crate::telemetry;
use secrecy::Secret;
use std::cell::{Cell, RefCell};

pub const LOGIN_SUCCEEDED: &str = "Login successful!";

/// What a call to [`CredentialFormController::submit`] ended with.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Another submission was still in flight; nothing was dispatched.
    Busy,
    /// Authenticated and sent to the role's dashboard.
    LoggedIn(Role),
    /// The user has been told why; the form is left as it was.
    Rejected(LoginError),
}

/// Clears the in-progress flag however `submit` returns.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn begin(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Owns the login form and turns a submission into a notification and,
/// on success, a navigation to the role's dashboard.
///
/// The state is single-threaded on purpose: one controller per form, and at
/// most one authentication outstanding per controller. Errors never escape
/// `submit`, they end up in front of the user through the [`Notifier`].
pub struct CredentialFormController<A, N, F> {
    authenticator: A,
    navigator: N,
    notifier: F,
    form: RefCell<LoginForm>,
    in_flight: Cell<bool>,
}

impl<A, N, F> CredentialFormController<A, N, F>
where
    A: Authenticator,
    N: Navigator,
    F: Notifier,
{
    pub fn new(authenticator: A, navigator: N, notifier: F) -> Self {
        Self {
            authenticator,
            navigator,
            notifier,
            form: RefCell::new(LoginForm::default()),
            in_flight: Cell::new(false),
        }
    }

    /// Replace the whole form, e.g. with the fields of a posted request.
    pub fn with_form(mut self, form: LoginForm) -> Self {
        *self.form.get_mut() = form;
        self
    }

    pub fn set_username(&self, username: impl Into<String>) {
        self.form.borrow_mut().username = username.into();
    }

    pub fn set_password(&self, password: Secret<String>) {
        self.form.borrow_mut().password = password;
    }

    /// Set the raw selector value.
    pub fn set_role_value(&self, value: impl Into<String>) {
        self.form.borrow_mut().role = value.into();
    }

    pub fn username(&self) -> String {
        self.form.borrow().username.clone()
    }

    pub fn role_value(&self) -> String {
        self.form.borrow().role.clone()
    }

    /// While `true` the submit control stays disabled.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn notifier(&self) -> &F {
        &self.notifier
    }

    #[tracing::instrument(
        name = "Submit login form",
        skip(self),
        fields(username = tracing::field::Empty, role = tracing::field::Empty)
    )]
    pub async fn submit(&self) -> SubmitOutcome {
        if self.is_submitting() {
            tracing::debug!("A login attempt is already in flight, ignoring submit");
            return SubmitOutcome::Busy;
        }

        let credentials = match Credentials::try_from(&*self.form.borrow()) {
            Ok(credentials) => credentials,
            Err(error) => return self.reject(error),
        };
        telemetry::record_field("username", &credentials.username);
        telemetry::record_field("role", &credentials.role);

        let Some(_in_flight) = InFlight::begin(&self.in_flight) else {
            return SubmitOutcome::Busy;
        };

        match self.authenticator.authenticate(&credentials).await {
            Ok(true) => {
                tracing::info!("Login succeeded");
                self.notifier.notify(Severity::Success, LOGIN_SUCCEEDED);
                self.navigator.navigate(credentials.role.dashboard_path());
                SubmitOutcome::LoggedIn(credentials.role)
            }
            Ok(false) => self.reject(LoginError::InvalidCredentials),
            Err(error) => self.reject(LoginError::AuthFailure(error)),
        }
    }

    fn reject(&self, error: LoginError) -> SubmitOutcome {
        match &error {
            LoginError::Validation => tracing::info!("Login form is incomplete"),
            LoginError::InvalidCredentials => tracing::warn!("Login rejected"),
            LoginError::AuthFailure(e) => {
                tracing::error!(error.cause_chain = ?e, "Authenticator failed")
            }
            // The selector cannot produce this, something upstream is broken.
            LoginError::UnmappedRole(role) => {
                tracing::error!(role = %role, "Role is outside the selector")
            }
        }
        self.notifier.notify(Severity::Error, &error.to_string());
        SubmitOutcome::Rejected(error)
    }
}
