use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::panel::{Panel, PanelType};

const TITLE_HEIGHT: u16 = 2;
const PROGRESS_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 4;

#[derive(Debug, Default)]
pub struct LayoutState {
    cached_panels: Vec<Panel>,
}

impl LayoutState {
    pub fn calculate_layout(&mut self, area: Rect) -> &[Panel] {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Length(PROGRESS_HEIGHT),
                Constraint::Min(6),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.cached_panels = vec![
            Panel {
                panel_type: PanelType::Title,
                rect: main_layout[0],
            },
            Panel {
                panel_type: PanelType::Progress,
                rect: main_layout[1],
            },
            Panel {
                panel_type: PanelType::Body,
                rect: main_layout[2],
            },
            Panel {
                panel_type: PanelType::Footer,
                rect: main_layout[3],
            },
        ];

        &self.cached_panels
    }

    pub fn get_panels(&self) -> &[Panel] {
        &self.cached_panels
    }
}

pub fn body_columns(area: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(area);
    (columns[0], columns[1])
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Slot for the `index`-th toast, stacked up from the bottom-right corner
/// just above the footer. `None` once the stack would leave the screen.
pub fn toast_rect(area: Rect, index: u16) -> Option<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let offset = FOOTER_HEIGHT + (index + 1) * TOAST_HEIGHT;
    if offset > area.height {
        return None;
    }
    Some(Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - offset,
        width,
        height: TOAST_HEIGHT,
    })
}
