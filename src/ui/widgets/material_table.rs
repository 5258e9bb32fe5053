//! Material table widget for ratatui
//!
//! For one selected slot: a row per material level showing the cumulative
//! total still needed, the shortfall for the next step, and the held
//! count. The held count is the only editable cell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::gear::{EquipLevel, SlotType};
use crate::progression::material_row;
use crate::tracker::Character;
use crate::ui::theme::Palette;

const LEVEL_COL: u16 = 1;
const TOTAL_COL: u16 = 10;
const MORE_COL: u16 = 18;
const HAVE_COL: u16 = 26;
const FIELD_WIDTH: u16 = 6;

/// Widget rendering the material requirements for one slot
pub struct MaterialTableWidget<'a> {
    character: &'a Character,
    slot: SlotType,
    palette: Palette,
    cursor: Option<usize>,
    focused: bool,
}

impl<'a> MaterialTableWidget<'a> {
    pub fn new(character: &'a Character, slot: SlotType, palette: Palette) -> Self {
        Self { character, slot, palette, cursor: None, focused: false }
    }

    /// Place the row cursor on one material level
    pub fn cursor(mut self, row: usize) -> Self {
        self.cursor = Some(row);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<'a> Widget for MaterialTableWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.palette.accent)
        } else {
            Style::default().fg(self.palette.border)
        };
        let block = Block::default()
            .title(format!(" Materials: {} ", self.slot.name()))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let header_style = Style::default().fg(self.palette.dim);
        buf.set_string(inner.x + LEVEL_COL, inner.y, "Level", header_style);
        buf.set_string(inner.x + TOTAL_COL, inner.y, "Total", header_style);
        buf.set_string(inner.x + MORE_COL, inner.y, "More", header_style);
        buf.set_string(inner.x + HAVE_COL, inner.y, "Have", header_style);

        let Some(item) = self.character.gear.get(&self.slot) else {
            return;
        };

        for (row, &level) in EquipLevel::all().iter().enumerate() {
            let y = inner.y + 1 + row as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let quantities =
                material_row(item, &self.character.inventory, self.slot, level);

            buf.set_string(
                inner.x + LEVEL_COL,
                y,
                format!("Lv{}", level.value()),
                Style::default().fg(self.palette.text),
            );
            buf.set_string(
                inner.x + TOTAL_COL,
                y,
                format!("{}", quantities.total_needed),
                Style::default().fg(self.palette.text),
            );

            let more_color = if quantities.shortfall > 0 {
                self.palette.shortfall
            } else {
                self.palette.ready
            };
            buf.set_string(
                inner.x + MORE_COL,
                y,
                format!("{}", quantities.shortfall),
                Style::default().fg(more_color),
            );

            let mut have_style = Style::default().fg(self.palette.text);
            if self.cursor == Some(row) {
                have_style = if self.focused {
                    have_style.bg(self.palette.cursor_bg).add_modifier(Modifier::BOLD)
                } else {
                    have_style.add_modifier(Modifier::UNDERLINED)
                };
            }
            buf.set_string(
                inner.x + HAVE_COL,
                y,
                format!("{:<width$}", quantities.have, width = FIELD_WIDTH as usize),
                have_style,
            );
        }
    }
}
