use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::terminal::state::{Focus, Screen, ViewState};

/// Applies one key press. Returns true when the user asked to quit.
pub fn handle_key(key: KeyEvent, state: &mut ViewState, app: &mut App) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    state.sync_screen(app);
    let quit = match state.screen {
        Screen::Auth => handle_auth_keys(key, state, app),
        Screen::Mailbox if state.focus == Focus::Search => {
            handle_search_keys(key, state, app);
            false
        }
        Screen::Dashboard | Screen::Mailbox | Screen::Email => {
            handle_dashboard_keys(key, state, app)
        }
    };
    state.sync_screen(app);
    quit
}

fn handle_auth_keys(key: KeyEvent, state: &mut ViewState, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Enter => app.auth.submit(),
        KeyCode::Tab | KeyCode::Down => state.move_auth_field(app, 1),
        KeyCode::BackTab | KeyCode::Up => state.move_auth_field(app, -1),
        KeyCode::F(2) => {
            app.auth.toggle_mode();
            state.auth_field = 0;
        }
        KeyCode::Backspace => {
            let field = state.auth_field(app);
            if let Some(value) = app.auth.field_mut(field) {
                value.pop();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let field = state.auth_field(app);
            if let Some(value) = app.auth.field_mut(field) {
                value.push(c);
            }
        }
        _ => {}
    }
    false
}

fn handle_search_keys(key: KeyEvent, state: &mut ViewState, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => state.focus = Focus::List,
        KeyCode::Backspace => {
            app.search_term_mut().pop();
        }
        KeyCode::Char(c) => app.search_term_mut().push(c),
        _ => {}
    }
    state.email_list.select(Some(0));
    state.clamp_email_selection(app);
}

fn handle_dashboard_keys(key: KeyEvent, state: &mut ViewState, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            if !state.close() {
                return true;
            }
        }
        KeyCode::Char('L') => {
            app.auth.logout();
            state.status = Some("Signed out".into());
        }
        _ => match state.screen {
            Screen::Dashboard => handle_mailbox_list_keys(key, state, app),
            Screen::Mailbox => handle_email_list_keys(key, state, app),
            Screen::Email => handle_email_keys(key, state, app),
            Screen::Auth => {}
        },
    }
    false
}

fn handle_mailbox_list_keys(key: KeyEvent, state: &mut ViewState, app: &mut App) {
    match key.code {
        KeyCode::Char('g') => match app.generate_mailbox() {
            Ok(address) => {
                let last = app.mailboxes().map(|m| m.len()).unwrap_or(1) - 1;
                state.mailbox_list.select(Some(last));
                state.status = Some(format!("New mailbox {address} 🎁"));
            }
            Err(e) => state.status = Some(format!("Error: {e}")),
        },
        KeyCode::Down | KeyCode::Char('j') => state.move_mailbox_selection(app, 1),
        KeyCode::Up | KeyCode::Char('k') => state.move_mailbox_selection(app, -1),
        KeyCode::Enter => state.open_selected_mailbox(app),
        _ => {}
    }
}

fn handle_email_list_keys(key: KeyEvent, state: &mut ViewState, app: &mut App) {
    match key.code {
        KeyCode::Char('/') => state.focus = Focus::Search,
        KeyCode::Down | KeyCode::Char('j') => state.move_email_selection(app, 1),
        KeyCode::Up | KeyCode::Char('k') => state.move_email_selection(app, -1),
        KeyCode::Enter => state.open_selected_email(app),
        _ => apply_email_action(key, state, app),
    }
}

fn handle_email_keys(key: KeyEvent, state: &mut ViewState, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.scroll_body(1),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_body(-1),
        KeyCode::PageDown => state.scroll_body(10),
        KeyCode::PageUp => state.scroll_body(-10),
        _ => apply_email_action(key, state, app),
    }
}

/// Star, archive, mark read or delete the email under the cursor (or the
/// one opened). Archiving or deleting an opened email closes it.
fn apply_email_action(key: KeyEvent, state: &mut ViewState, app: &mut App) {
    let Some((address, id)) = state.target_email(app) else {
        return;
    };
    let (result, done, closes) = match key.code {
        KeyCode::Char('s') => (app.toggle_star(&address, id), "Star toggled", false),
        KeyCode::Char('a') => (app.toggle_archive(&address, id), "Archived", true),
        KeyCode::Char('r') => (app.mark_read(&address, id), "Marked as read", false),
        KeyCode::Char('d') => (app.delete_email(&address, id), "Deleted", true),
        _ => return,
    };
    let ok = result.is_ok();
    state.report(result, done);
    if ok && closes && state.screen == Screen::Email {
        state.close();
    }
    state.clamp_email_selection(app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(s: &str, state: &mut ViewState, app: &mut App) {
        for c in s.chars() {
            handle_key(press(KeyCode::Char(c)), state, app);
        }
    }

    fn signed_in() -> (ViewState, App) {
        let mut app: App = App::default();
        let mut state = ViewState::new();
        handle_key(press(KeyCode::Enter), &mut state, &mut app);
        (state, app)
    }

    #[test]
    fn test_typing_fills_focused_field_and_enter_signs_in() {
        let mut app: App = App::default();
        let mut state = ViewState::new();

        type_str("elf@northpole", &mut state, &mut app);
        handle_key(press(KeyCode::Tab), &mut state, &mut app);
        type_str("qwerty", &mut state, &mut app);
        handle_key(press(KeyCode::Backspace), &mut state, &mut app);
        assert_eq!(app.auth.login.email, "elf@northpole");
        assert_eq!(app.auth.login.password, "qwert");

        handle_key(press(KeyCode::Enter), &mut state, &mut app);
        assert!(app.auth.is_authenticated());
        assert_eq!(state.screen, Screen::Dashboard);
    }

    #[test]
    fn test_q_is_text_on_auth_screen() {
        let mut app: App = App::default();
        let mut state = ViewState::new();
        assert!(!handle_key(press(KeyCode::Char('q')), &mut state, &mut app));
        assert_eq!(app.auth.login.email, "q");
        assert!(handle_key(press(KeyCode::Esc), &mut state, &mut app));
    }

    #[test]
    fn test_f2_switches_to_registration() {
        let mut app: App = App::default();
        let mut state = ViewState::new();
        handle_key(press(KeyCode::F(2)), &mut state, &mut app);
        type_str("Rudolph", &mut state, &mut app);
        assert_eq!(app.auth.register.name, "Rudolph");

        handle_key(press(KeyCode::Enter), &mut state, &mut app);
        assert!(app.auth.is_authenticated());
        assert_eq!(app.auth.greeting_name(), "Rudolph");
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let (mut state, mut app) = signed_in();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key.kind, KeyEventKind::Press);
        assert!(handle_key(key, &mut state, &mut app));
    }

    #[test]
    fn test_generate_selects_new_mailbox() {
        let (mut state, mut app) = signed_in();
        handle_key(press(KeyCode::Char('g')), &mut state, &mut app);
        handle_key(press(KeyCode::Char('g')), &mut state, &mut app);
        assert_eq!(app.mailboxes().unwrap().len(), 2);
        assert_eq!(state.mailbox_list.selected(), Some(1));
        assert!(state.status.as_deref().unwrap().starts_with("New mailbox"));
    }

    #[test]
    fn test_email_actions_from_list() {
        let (mut state, mut app) = signed_in();
        handle_key(press(KeyCode::Char('g')), &mut state, &mut app);
        handle_key(press(KeyCode::Enter), &mut state, &mut app);
        assert_eq!(state.screen, Screen::Mailbox);

        handle_key(press(KeyCode::Char('s')), &mut state, &mut app);
        handle_key(press(KeyCode::Char('r')), &mut state, &mut app);
        handle_key(press(KeyCode::Char('r')), &mut state, &mut app);
        let email = &app.mailboxes().unwrap()[0].emails[0];
        assert!(email.is_starred);
        assert!(email.is_read);

        handle_key(press(KeyCode::Char('d')), &mut state, &mut app);
        assert!(app.mailboxes().unwrap()[0].emails.is_empty());
        assert_eq!(app.mailboxes().unwrap().len(), 1);
        assert_eq!(state.email_list.selected(), None);

        // Nothing left to act on.
        handle_key(press(KeyCode::Char('s')), &mut state, &mut app);
        assert_eq!(state.status.as_deref(), Some("Deleted"));
    }

    #[test]
    fn test_j_k_move_within_email_list() {
        let (mut state, mut app) = signed_in();
        handle_key(press(KeyCode::Char('g')), &mut state, &mut app);
        handle_key(press(KeyCode::Enter), &mut state, &mut app);

        handle_key(press(KeyCode::Char('j')), &mut state, &mut app);
        assert_eq!(state.email_list.selected(), Some(0));
        handle_key(press(KeyCode::Char('k')), &mut state, &mut app);
        assert_eq!(state.email_list.selected(), Some(0));
        assert_eq!(state.screen, Screen::Mailbox);
    }

    #[test]
    fn test_archive_from_detail_closes_it() {
        let (mut state, mut app) = signed_in();
        handle_key(press(KeyCode::Char('g')), &mut state, &mut app);
        handle_key(press(KeyCode::Enter), &mut state, &mut app);
        handle_key(press(KeyCode::Enter), &mut state, &mut app);
        assert_eq!(state.screen, Screen::Email);

        handle_key(press(KeyCode::Char('a')), &mut state, &mut app);
        assert_eq!(state.screen, Screen::Mailbox);
        assert!(app.mailboxes().unwrap()[0].emails[0].is_archived);
        assert_eq!(state.email_list.selected(), None);
    }

    #[test]
    fn test_search_input_filters_list() {
        let (mut state, mut app) = signed_in();
        handle_key(press(KeyCode::Char('g')), &mut state, &mut app);
        handle_key(press(KeyCode::Enter), &mut state, &mut app);

        handle_key(press(KeyCode::Char('/')), &mut state, &mut app);
        assert_eq!(state.focus, Focus::Search);
        // 'q' and 'd' are text while searching.
        type_str("zqd", &mut state, &mut app);
        assert_eq!(app.search_term(), "zqd");
        assert_eq!(app.mailboxes().unwrap()[0].emails.len(), 1);
        assert_eq!(state.email_list.selected(), None);

        for _ in 0..3 {
            handle_key(press(KeyCode::Backspace), &mut state, &mut app);
        }
        type_str("welcome", &mut state, &mut app);
        handle_key(press(KeyCode::Enter), &mut state, &mut app);
        assert_eq!(state.focus, Focus::List);
        assert_eq!(state.email_list.selected(), Some(0));
    }

    #[test]
    fn test_logout_returns_to_auth_screen() {
        let (mut state, mut app) = signed_in();
        handle_key(press(KeyCode::Char('g')), &mut state, &mut app);
        handle_key(press(KeyCode::Enter), &mut state, &mut app);
        handle_key(press(KeyCode::Char('L')), &mut state, &mut app);

        assert!(!app.auth.is_authenticated());
        assert_eq!(state.screen, Screen::Auth);
        // Dashboard keys are now plain text input.
        handle_key(press(KeyCode::Char('g')), &mut state, &mut app);
        assert!(app.mailboxes().is_err());
    }

    #[test]
    fn test_esc_walks_back_then_quits() {
        let (mut state, mut app) = signed_in();
        handle_key(press(KeyCode::Char('g')), &mut state, &mut app);
        handle_key(press(KeyCode::Enter), &mut state, &mut app);
        handle_key(press(KeyCode::Enter), &mut state, &mut app);

        assert!(!handle_key(press(KeyCode::Esc), &mut state, &mut app));
        assert_eq!(state.screen, Screen::Mailbox);
        assert!(!handle_key(press(KeyCode::Char('q')), &mut state, &mut app));
        assert_eq!(state.screen, Screen::Dashboard);
        assert!(handle_key(press(KeyCode::Char('q')), &mut state, &mut app));
    }
}
