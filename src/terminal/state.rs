use ratatui::widgets::ListState;

use crate::app::{App, AppResult};
use crate::auth::gate::FormField;
use crate::domain::email::EmailId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Auth,
    Dashboard,
    /// Email list of one mailbox, drawn over the dashboard.
    Mailbox,
    /// One email, drawn over the mailbox view.
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Search,
}

/// What the terminal is showing and where the cursor is. Selections are
/// plain positions into what was last drawn; they are turned into mailbox
/// addresses and email ids against the current data whenever a key acts on
/// them.
#[derive(Debug, Default)]
pub struct ViewState {
    pub screen: Screen,
    pub focus: Focus,
    pub auth_field: usize,

    pub mailbox_list: ListState,
    pub email_list: ListState,

    pub opened_mailbox: Option<String>,
    pub opened_email: Option<EmailId>,
    pub body_scroll: u16,

    /// One-line feedback shown under the footer.
    pub status: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the screen consistent with the auth gate.
    pub fn sync_screen(&mut self, app: &App) {
        let signed_in = app.auth.is_authenticated();
        match (self.screen, signed_in) {
            (Screen::Auth, true) => {
                self.screen = Screen::Dashboard;
                if self.mailbox_list.selected().is_none() {
                    self.mailbox_list.select(Some(0));
                }
            }
            (Screen::Auth, false) => {}
            (_, false) => {
                self.screen = Screen::Auth;
                self.focus = Focus::List;
                self.auth_field = 0;
                self.opened_mailbox = None;
                self.opened_email = None;
            }
            _ => {}
        }
    }

    pub fn auth_field(&self, app: &App) -> FormField {
        let fields = app.auth.fields();
        fields[self.auth_field.min(fields.len() - 1)]
    }

    pub fn move_auth_field(&mut self, app: &App, delta: i32) {
        let len = app.auth.fields().len() as i32;
        let cur = (self.auth_field as i32).min(len - 1);
        self.auth_field = (cur + delta).rem_euclid(len) as usize;
    }

    pub fn selected_mailbox(&self, app: &App) -> Option<String> {
        let idx = self.mailbox_list.selected()?;
        let boxes = app.mailboxes().ok()?;
        boxes.get(idx).map(|m| m.address.clone())
    }

    /// Id of the highlighted email in the opened mailbox, looked up in the
    /// list as it is filtered right now.
    pub fn selected_email(&self, app: &App) -> Option<EmailId> {
        let idx = self.email_list.selected()?;
        let address = self.opened_mailbox.as_deref()?;
        let visible = app.visible_emails(address).ok()?;
        visible.get(idx).map(|e| e.id)
    }

    /// The email a star/archive/read/delete key applies to on this screen.
    pub fn target_email(&self, app: &App) -> Option<(String, EmailId)> {
        let address = self.opened_mailbox.clone()?;
        let id = match self.screen {
            Screen::Email => self.opened_email?,
            Screen::Mailbox => self.selected_email(app)?,
            _ => return None,
        };
        Some((address, id))
    }

    pub fn move_mailbox_selection(&mut self, app: &App, delta: i32) {
        let len = app.mailboxes().map(|m| m.len()).unwrap_or(0);
        move_selection(&mut self.mailbox_list, len, delta);
    }

    pub fn move_email_selection(&mut self, app: &App, delta: i32) {
        let len = self.visible_len(app);
        move_selection(&mut self.email_list, len, delta);
    }

    fn visible_len(&self, app: &App) -> usize {
        self.opened_mailbox
            .as_deref()
            .and_then(|a| app.visible_emails(a).ok())
            .map(|v| v.len())
            .unwrap_or(0)
    }

    /// Pulls the email selection back inside the list after it shrank.
    pub fn clamp_email_selection(&mut self, app: &App) {
        let len = self.visible_len(app);
        if len == 0 {
            self.email_list.select(None);
        } else {
            let cur = self.email_list.selected().unwrap_or(0);
            self.email_list.select(Some(cur.min(len - 1)));
        }
    }

    pub fn open_selected_mailbox(&mut self, app: &App) {
        let Some(address) = self.selected_mailbox(app) else {
            return;
        };
        self.opened_mailbox = Some(address);
        self.screen = Screen::Mailbox;
        self.focus = Focus::List;
        self.email_list.select(Some(0));
        self.clamp_email_selection(app);
    }

    pub fn open_selected_email(&mut self, app: &App) {
        let Some(id) = self.selected_email(app) else {
            return;
        };
        self.opened_email = Some(id);
        self.screen = Screen::Email;
        self.body_scroll = 0;
    }

    /// Goes back one level. Returns false when already at the top.
    pub fn close(&mut self) -> bool {
        match self.screen {
            Screen::Email => {
                self.screen = Screen::Mailbox;
                self.opened_email = None;
                self.body_scroll = 0;
                true
            }
            Screen::Mailbox => {
                self.screen = Screen::Dashboard;
                self.focus = Focus::List;
                self.opened_mailbox = None;
                true
            }
            Screen::Dashboard | Screen::Auth => false,
        }
    }

    pub fn scroll_body(&mut self, delta: i32) {
        if delta < 0 {
            self.body_scroll = self.body_scroll.saturating_sub((-delta) as u16);
        } else {
            self.body_scroll = self.body_scroll.saturating_add(delta as u16);
        }
    }

    /// Records the outcome of a command for the status line.
    pub fn report(&mut self, result: AppResult<()>, ok: impl Into<String>) {
        self.status = Some(match result {
            Ok(()) => ok.into(),
            Err(e) => format!("Error: {e}"),
        });
    }
}

fn move_selection(list: &mut ListState, len: usize, delta: i32) {
    if len == 0 {
        list.select(None);
        return;
    }
    let cur = list.selected().unwrap_or(0) as i32;
    let next = (cur + delta).clamp(0, len as i32 - 1) as usize;
    list.select(Some(next));
}
