use ratatui::layout::Rect;

use crate::input::ControlButton;

/// Screen placement of the on-screen control pad.
///
/// The renderer records where the pad was drawn on each frame; the game
/// loop hit-tests mouse clicks against it. The pad area is split into
/// four equal columns matching the drawn button order: left, up, down,
/// right.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlPad {
    area: Rect,
}

impl ControlPad {
    /// Record where the pad was drawn this frame
    pub fn place(&mut self, area: Rect) {
        self.area = area;
    }

    /// The button under (column, row), if any
    pub fn hit(&self, column: u16, row: u16) -> Option<ControlButton> {
        let area = self.area;
        if area.width < 4 || !contains(area, column, row) {
            return None;
        }

        let quarter = area.width / 4;
        match ((column - area.x) / quarter).min(3) {
            0 => Some(ControlButton::Left),
            1 => Some(ControlButton::Up),
            2 => Some(ControlButton::Down),
            _ => Some(ControlButton::Right),
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}
