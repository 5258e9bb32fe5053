//! Gear table widget for ratatui
//!
//! Renders one character's six gear pieces as a table of slot, level,
//! enhancement tier, and refine step, with a cell cursor for editing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::gear::SlotType;
use crate::tracker::Character;
use crate::ui::theme::Palette;

/// Which editable column the cursor sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GearField {
    Level,
    Enhance,
    Refine,
}

impl GearField {
    pub fn left(self) -> Self {
        match self {
            GearField::Level | GearField::Enhance => GearField::Level,
            GearField::Refine => GearField::Enhance,
        }
    }

    pub fn right(self) -> Self {
        match self {
            GearField::Level => GearField::Enhance,
            GearField::Enhance | GearField::Refine => GearField::Refine,
        }
    }
}

// Column layout: slot name, then the three editable fields
const SLOT_COL: u16 = 1;
const LEVEL_COL: u16 = 12;
const ENHANCE_COL: u16 = 20;
const REFINE_COL: u16 = 30;
const FIELD_WIDTH: u16 = 7;

/// Widget rendering the gear table
pub struct GearTableWidget<'a> {
    character: &'a Character,
    palette: Palette,
    cursor: Option<(usize, GearField)>,
    focused: bool,
}

impl<'a> GearTableWidget<'a> {
    pub fn new(character: &'a Character, palette: Palette) -> Self {
        Self { character, palette, cursor: None, focused: false }
    }

    /// Place the cell cursor at (slot row, field column)
    pub fn cursor(mut self, row: usize, field: GearField) -> Self {
        self.cursor = Some((row, field));
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn field_style(&self, row: usize, field: GearField) -> Style {
        let base = Style::default().fg(self.palette.text);
        match self.cursor {
            Some((r, f)) if r == row && f == field => {
                if self.focused {
                    base.bg(self.palette.cursor_bg).add_modifier(Modifier::BOLD)
                } else {
                    base.add_modifier(Modifier::UNDERLINED)
                }
            }
            _ => base,
        }
    }
}

impl<'a> Widget for GearTableWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.palette.accent)
        } else {
            Style::default().fg(self.palette.border)
        };
        let block = Block::default()
            .title(" Gear ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let header_style = Style::default().fg(self.palette.dim);
        buf.set_string(inner.x + SLOT_COL, inner.y, "Slot", header_style);
        buf.set_string(inner.x + LEVEL_COL, inner.y, "Level", header_style);
        buf.set_string(inner.x + ENHANCE_COL, inner.y, "Enhance", header_style);
        buf.set_string(inner.x + REFINE_COL, inner.y, "Refine", header_style);

        for (row, &slot) in SlotType::all().iter().enumerate() {
            let y = inner.y + 1 + row as u16;
            if y >= inner.y + inner.height {
                break;
            }
            buf.set_string(
                inner.x + SLOT_COL,
                y,
                slot.name(),
                Style::default().fg(self.palette.text),
            );
            let Some(item) = self.character.gear.get(&slot) else {
                continue;
            };
            set_field(
                buf,
                inner.x + LEVEL_COL,
                y,
                &format!("{}", item.level.value()),
                self.field_style(row, GearField::Level),
            );
            set_field(
                buf,
                inner.x + ENHANCE_COL,
                y,
                &format!("+{}", item.enhance.value()),
                self.field_style(row, GearField::Enhance),
            );
            set_field(
                buf,
                inner.x + REFINE_COL,
                y,
                &format!("{}", item.refine.value()),
                self.field_style(row, GearField::Refine),
            );
        }
    }
}

fn set_field(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) {
    // Pad so the cursor background covers a constant-width cell
    buf.set_string(x, y, format!("{:<width$}", text, width = FIELD_WIDTH as usize), style);
}
