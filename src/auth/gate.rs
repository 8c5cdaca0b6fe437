use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Password => "Password",
            FormField::ConfirmPassword => "Confirm password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, FormField::Password | FormField::ConfirmPassword)
    }
}

const LOGIN_FIELDS: &[FormField] = &[FormField::Email, FormField::Password];
const REGISTER_FIELDS: &[FormField] = &[
    FormField::Name,
    FormField::Email,
    FormField::Password,
    FormField::ConfirmPassword,
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Placeholder gate: any submission signs the user in. Field contents are
/// only ever displayed, never checked.
#[derive(Debug, Clone, Default)]
pub struct AuthGate {
    state: AuthState,
    mode: FormMode,
    pub login: LoginForm,
    pub register: RegisterForm,
}

impl AuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            FormMode::Login => FormMode::Register,
            FormMode::Register => FormMode::Login,
        };
    }

    pub fn fields(&self) -> &'static [FormField] {
        match self.mode {
            FormMode::Login => LOGIN_FIELDS,
            FormMode::Register => REGISTER_FIELDS,
        }
    }

    /// Value of `field` in the form for the current mode.
    pub fn field(&self, field: FormField) -> &str {
        match (self.mode, field) {
            (FormMode::Login, FormField::Email) => &self.login.email,
            (FormMode::Login, FormField::Password) => &self.login.password,
            (FormMode::Login, _) => "",
            (FormMode::Register, FormField::Name) => &self.register.name,
            (FormMode::Register, FormField::Email) => &self.register.email,
            (FormMode::Register, FormField::Password) => &self.register.password,
            (FormMode::Register, FormField::ConfirmPassword) => &self.register.confirm_password,
        }
    }

    /// `None` when the current form has no such field.
    pub fn field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match (self.mode, field) {
            (FormMode::Login, FormField::Email) => Some(&mut self.login.email),
            (FormMode::Login, FormField::Password) => Some(&mut self.login.password),
            (FormMode::Login, _) => None,
            (FormMode::Register, FormField::Name) => Some(&mut self.register.name),
            (FormMode::Register, FormField::Email) => Some(&mut self.register.email),
            (FormMode::Register, FormField::Password) => Some(&mut self.register.password),
            (FormMode::Register, FormField::ConfirmPassword) => {
                Some(&mut self.register.confirm_password)
            }
        }
    }

    pub fn submit_login(&mut self) {
        info!("login submitted, signing in");
        self.state = AuthState::Authenticated;
    }

    pub fn submit_register(&mut self) {
        info!("registration submitted, signing in");
        self.state = AuthState::Authenticated;
    }

    /// Submits whichever form is showing.
    pub fn submit(&mut self) {
        match self.mode {
            FormMode::Login => self.submit_login(),
            FormMode::Register => self.submit_register(),
        }
    }

    pub fn logout(&mut self) {
        info!("signed out");
        self.state = AuthState::Unauthenticated;
    }

    /// Name for the dashboard banner: registration name, else login email.
    pub fn greeting_name(&self) -> &str {
        if self.register.name.is_empty() {
            &self.login.email
        } else {
            &self.register.name
        }
    }
}
