use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::App;
use crate::auth::gate::FormMode;
use crate::domain::email::Email;
use crate::domain::mailbox::Mailbox;
use crate::terminal::state::{Focus, Screen, ViewState};

const ACCENT: Color = Color::Red;

pub fn render(f: &mut Frame, app: &App, state: &ViewState) {
    let [header, body, footer, status] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    render_header(f, header);

    match state.screen {
        Screen::Auth => render_auth(f, body, app, state),
        Screen::Dashboard => render_dashboard(f, body, app, state),
        Screen::Mailbox => {
            render_dashboard(f, body, app, state);
            render_mailbox(f, body, app, state);
        }
        Screen::Email => {
            render_dashboard(f, body, app, state);
            render_mailbox(f, body, app, state);
            render_email(f, body, app, state);
        }
    }

    render_hints(f, footer, state);
    if let Some(msg) = &state.status {
        let style = if msg.starts_with("Error") {
            Style::default().fg(Color::LightRed)
        } else {
            Style::default().fg(Color::Green)
        };
        f.render_widget(Paragraph::new(msg.as_str()).style(style), status);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let title = Line::from("🎄 Mailly.Christmas 🎄")
        .style(Style::default().add_modifier(Modifier::BOLD));
    let subtitle = Line::from("Get your holiday mailbox! 🎁");
    let p = Paragraph::new(Text::from(vec![title, subtitle]))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(ACCENT))
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    f.render_widget(p, area);
}

fn render_auth(f: &mut Frame, area: Rect, app: &App, state: &ViewState) {
    let fields = app.auth.fields();
    let height = fields.len() as u16 * 2 + 5;
    let card = centered(area, 52, height);

    let (title, switch) = match app.auth.mode() {
        FormMode::Login => (" Sign in ", "Create account"),
        FormMode::Register => (" Register ", "Already have an account?"),
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(ACCENT));

    let focused = state.auth_field(app);
    let mut lines = Vec::new();
    for &field in fields {
        let value = app.auth.field(field);
        let shown = if field.is_secret() {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let (marker, style) = if field == focused {
            ("➜ ", Style::default().fg(Color::Yellow))
        } else {
            ("  ", Style::default())
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(
                format!("{}:", field.label()),
                style.add_modifier(Modifier::BOLD),
            ),
        ]));
        let cursor = if field == focused { "▏" } else { "" };
        lines.push(Line::from(format!("    {shown}{cursor}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        match app.auth.mode() {
            FormMode::Login => "[Enter] Sign in",
            FormMode::Register => "[Enter] Register",
        },
        Style::default().fg(Color::White).bg(ACCENT),
    )));
    lines.push(Line::from(vec![
        Span::styled("F2", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(" {switch}")),
    ]));

    f.render_widget(Clear, card);
    f.render_widget(Paragraph::new(lines).block(block), card);
}

fn render_dashboard(f: &mut Frame, area: Rect, app: &App, state: &ViewState) {
    let [banner, heading, list_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .margin(1)
    .areas(area);

    let greeting = Paragraph::new(Line::from(vec![
        Span::raw(format!("Merry Christmas, {}! 🎄", app.auth.greeting_name())),
        Span::styled("   L sign out", Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::bordered().title(" Personal account "));
    f.render_widget(greeting, banner);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("My mailboxes", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("   g get a new mailbox", Style::default().fg(ACCENT)),
        ])),
        heading,
    );

    let mailboxes = app.mailboxes().unwrap_or(&[]);
    let border = if state.screen == Screen::Dashboard {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if mailboxes.is_empty() {
        let p = Paragraph::new("No mailboxes yet. Press g to get one 🎁")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        f.render_widget(p, list_area);
        return;
    }

    let items: Vec<ListItem> = mailboxes.iter().map(mailbox_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_symbol("➜ ")
        .highlight_style(Style::default().fg(Color::Green));
    f.render_stateful_widget(list, list_area, &mut state.mailbox_list.clone());
}

fn mailbox_item(m: &Mailbox) -> ListItem<'static> {
    let created = m.created_at.with_timezone(&Local).format("%Y-%m-%d");
    let address = Span::styled(
        m.address.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    );
    let meta = Span::styled(
        format!("Created: {created}  ·  View emails ({})", m.emails.len()),
        Style::default().fg(Color::Gray),
    );
    ListItem::new(Text::from(vec![Line::from(address), Line::from(meta)]))
}

fn render_mailbox(f: &mut Frame, area: Rect, app: &App, state: &ViewState) {
    let Some(address) = state.opened_mailbox.as_deref() else {
        return;
    };
    let popup = centered(area, area.width.saturating_sub(8).min(90), area.height);
    f.render_widget(Clear, popup);

    let border = if state.screen == Screen::Mailbox {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(format!(" Emails for {address} "))
        .border_style(Style::default().fg(border));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let [search, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);

    let searching = state.focus == Focus::Search;
    let search_style = if searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor = if searching { "▏" } else { "" };
    f.render_widget(
        Paragraph::new(format!("🔍 {}{cursor}", app.search_term()))
            .block(Block::bordered().title(" Search emails... ").border_style(search_style)),
        search,
    );

    let visible = app.visible_emails(address).unwrap_or_default();
    if visible.is_empty() {
        f.render_widget(
            Paragraph::new("No emails to show.").style(Style::default().fg(Color::Gray)),
            list_area,
        );
        return;
    }

    let items: Vec<ListItem> = visible.into_iter().map(email_item).collect();
    let list = List::new(items)
        .highlight_symbol("➜ ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_stateful_widget(list, list_area, &mut state.email_list.clone());
}

fn email_item(e: &Email) -> ListItem<'static> {
    let star = if e.is_starred {
        Span::styled("★ ", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("☆ ")
    };
    let read = if e.is_read {
        Span::styled("✓ ", Style::default().fg(Color::Green))
    } else {
        Span::styled("● ", Style::default().fg(ACCENT))
    };
    let subject_style = if e.is_read {
        Style::default()
    } else {
        Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)
    };
    let subject = Line::from(vec![
        star,
        read,
        Span::styled(e.subject.clone(), subject_style),
    ]);
    let preview = Line::from(Span::styled(
        format!("    {}", e.preview),
        Style::default().fg(Color::Gray),
    ));
    ListItem::new(Text::from(vec![subject, preview]))
}

fn render_email(f: &mut Frame, area: Rect, app: &App, state: &ViewState) {
    let (Some(address), Some(id)) = (state.opened_mailbox.as_deref(), state.opened_email) else {
        return;
    };
    let Some(email) = app.mailbox(address).ok().and_then(|m| m.email(id)) else {
        return;
    };

    let popup = centered(
        area,
        area.width.saturating_sub(16).min(80),
        area.height.saturating_sub(2),
    );
    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", email.subject))
        .border_style(Style::default().fg(Color::Yellow));

    let date = email.date.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S");
    let text = Text::from(vec![
        Line::from(Span::styled(
            date.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(email.content.clone()),
    ]);
    let p = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.body_scroll, 0));
    f.render_widget(p, popup);
}

fn render_hints(f: &mut Frame, area: Rect, state: &ViewState) {
    let hints: &[(&str, &str)] = match (state.screen, state.focus) {
        (Screen::Auth, _) => &[
            ("Tab", "next field"),
            ("Enter", "submit"),
            ("F2", "switch form"),
            ("Esc", "quit"),
        ],
        (Screen::Dashboard, _) => &[
            ("g", "new mailbox"),
            ("j/k", "move"),
            ("Enter", "open"),
            ("L", "sign out"),
            ("q", "quit"),
        ],
        (Screen::Mailbox, Focus::Search) => &[("type", "search"), ("Enter/Esc", "done")],
        (Screen::Mailbox, Focus::List) => &[
            ("j/k", "move"),
            ("Enter", "read"),
            ("/", "search"),
            ("s", "star"),
            ("a", "archive"),
            ("r", "mark read"),
            ("d", "delete"),
            ("Esc", "back"),
        ],
        (Screen::Email, _) => &[
            ("j/k", "scroll"),
            ("s", "star"),
            ("a", "archive"),
            ("r", "mark read"),
            ("d", "delete"),
            ("Esc", "back"),
        ],
    };

    let mut spans = Vec::new();
    for (key, what) in hints {
        spans.push(Span::styled(
            *key,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {what}  ")));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
