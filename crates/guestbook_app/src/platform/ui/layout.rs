use ratatui::layout::{Constraint, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub title: Rect,
    pub editor: Rect,
    pub buttons: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [header, title, editor, buttons, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(6),
            Constraint::Length(4),
            Constraint::Length(6),
        ])
        .areas(area);
        Self {
            header,
            title,
            editor,
            buttons,
            status,
        }
    }

    /// "With Attribution" and "Without Attribution" columns side by side.
    pub fn button_columns(&self) -> [Rect; 2] {
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(self.buttons)
    }
}
