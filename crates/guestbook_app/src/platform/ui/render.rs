use guestbook_core::{AppViewModel, BatchStatus, DirectStatus, SessionState};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout::AppLayout;
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Info,
}

pub fn render(frame: &mut Frame, view: &AppViewModel, config: &AppConfig) {
    let layout = AppLayout::new(frame.area());

    frame.render_widget(
        Paragraph::new(session_line(&view.session))
            .block(Block::bordered().title(" Wallet  [^K connect  ^X disconnect] ")),
        layout.header,
    );

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(TITLE, Style::new().add_modifier(Modifier::BOLD))),
            Line::from(SUBTITLE),
        ])
        .centered(),
        layout.title,
    );

    let editor_style = if view.input_enabled {
        Style::new()
    } else {
        Style::new().fg(Color::DarkGray)
    };
    let editor_text = if view.message.is_empty() {
        Text::from(Line::from(Span::styled(
            PLACEHOLDER,
            Style::new().fg(Color::DarkGray),
        )))
    } else {
        Text::from(view.message.as_str())
    };
    frame.render_widget(
        Paragraph::new(editor_text)
            .style(editor_style)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title(editor_title(view))),
        layout.editor,
    );

    let button_style = if view.can_submit {
        Style::new().fg(Color::Cyan)
    } else {
        Style::new().fg(Color::DarkGray)
    };
    let [with_column, without_column] = layout.button_columns();
    frame.render_widget(
        Paragraph::new(vec![
            Line::from("^W writeContract"),
            Line::from("^S sendCalls"),
        ])
        .style(button_style)
        .block(Block::bordered().title(" With Attribution ")),
        with_column,
    );
    frame.render_widget(
        Paragraph::new(vec![
            Line::from("^E writeContract"),
            Line::from("^D sendCalls"),
        ])
        .style(button_style)
        .block(Block::bordered().title(" Without Attribution ")),
        without_column,
    );

    let lines: Vec<Line> = status_lines(view, config)
        .into_iter()
        .map(|(tone, text)| Line::from(Span::styled(text, tone_style(tone))))
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(" Status  [Esc quit] ")),
        layout.status,
    );
}

fn editor_title(view: &AppViewModel) -> &'static str {
    if view.is_pending {
        " Message (waiting for wallet) "
    } else {
        " Message "
    }
}

pub fn session_line(session: &SessionState) -> String {
    match session {
        SessionState::Disconnected => "Not connected".to_string(),
        SessionState::Connecting => "Connecting...".to_string(),
        SessionState::Connected(session) => format!(
            "{}  chain {}  {} ETH",
            session.account, session.chain_id, session.balance
        ),
        SessionState::Failed { message } => format!("Connection failed: {message}"),
    }
}

/// Text of the status panel, top to bottom.
pub fn status_lines(view: &AppViewModel, config: &AppConfig) -> Vec<(Tone, String)> {
    let mut lines = Vec::new();

    match &view.direct {
        DirectStatus::AwaitingSignature => {
            lines.push((Tone::Info, "writeContract: waiting for signature".to_string()));
        }
        DirectStatus::Confirming { hash } => {
            lines.push((Tone::Info, format!("writeContract: confirming {hash}")));
        }
        _ => {}
    }
    if view.batch == BatchStatus::Submitting {
        lines.push((Tone::Info, "sendCalls: waiting for wallet".to_string()));
    }

    if let Some(success) = &view.transaction_success {
        lines.push((Tone::Success, "Transaction successful!".to_string()));
        lines.push((Tone::Success, format!("Method: {}", success.method)));
        lines.push((Tone::Success, config.transaction_url(&success.hash)));
    }
    if let Some(success) = &view.batch_success {
        lines.push((Tone::Success, "Batch call submitted!".to_string()));
        lines.push((Tone::Success, format!("Method: {}", success.method)));
        lines.push((Tone::Success, format!("Call ID: {}", success.batch_id)));
    }
    if let Some(error) = &view.error {
        lines.push((Tone::Error, format!("Error: {error}")));
    }
    lines
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Success => Style::new().fg(Color::Green),
        Tone::Error => Style::new().fg(Color::Red),
        Tone::Info => Style::new().fg(Color::Yellow),
    }
}
