//! Main UI Application
//!
//! Coordinates rendering and input handling across all screens.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::factors::{catalog, factor_id, FactorDef, MAX_FACTOR_LEVEL};
use crate::gear::{EnhanceTier, EquipLevel, RefineLevel, SlotType};
use crate::store::{load_state, save_state, KvStore};
use crate::tracker::{apply, Command, TrackerState};
use crate::ui::theme::{palette, Palette};
use crate::ui::widgets::{GearField, GearTableWidget, MaterialTableWidget};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Roster,
    Character,
    Factors,
}

/// Which pane of the character screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Gear,
    Materials,
}

/// Main UI application
pub struct App<S: KvStore> {
    store: S,
    state: TrackerState,
    screen: Screen,
    /// Roster list cursor, also selects the open character
    roster_cursor: usize,
    pane: Pane,
    /// Row in the gear table, an index into [`SlotType::all`]
    slot_cursor: usize,
    field: GearField,
    /// Row in the material table, an index into [`EquipLevel::all`]
    material_cursor: usize,
    /// Factor screen cursor: (family index, level 1 through 9)
    factor_family: usize,
    factor_level: u8,
}

impl<S: KvStore> App<S> {
    /// Load state from the store and start on the roster screen
    pub fn new(store: S) -> Self {
        let state = load_state(&store);
        Self {
            store,
            state,
            screen: Screen::Roster,
            roster_cursor: 0,
            pane: Pane::Gear,
            slot_cursor: 0,
            field: GearField::Level,
            material_cursor: 0,
            factor_family: 0,
            factor_level: 1,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Run a command, keep the new snapshot, and persist it.
    ///
    /// A failed write is logged and the session keeps going on the
    /// in-memory state.
    fn dispatch(&mut self, command: Command) {
        self.state = apply(&self.state, command);
        if let Err(err) = save_state(&mut self.store, &self.state) {
            log::warn!("Failed to persist state: {}", err);
        }
    }

    fn selected_character_id(&self) -> Option<String> {
        self.state.characters.get(self.roster_cursor).map(|c| c.id.clone())
    }

    fn selected_slot(&self) -> SlotType {
        SlotType::all()[self.slot_cursor.min(SlotType::all().len() - 1)]
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        // Global quit shortcut
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }
        if key.code == KeyCode::Char('t') {
            self.dispatch(Command::SetTheme(self.state.theme.toggled()));
            return Ok(false);
        }

        match self.screen {
            Screen::Roster => self.handle_roster_input(key),
            Screen::Character => self.handle_character_input(key),
            Screen::Factors => self.handle_factors_input(key),
        }
    }

    fn handle_roster_input(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.roster_cursor = self.roster_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.roster_cursor + 1 < self.state.characters.len() {
                    self.roster_cursor += 1;
                }
            }
            KeyCode::Enter => {
                if !self.state.characters.is_empty() {
                    self.screen = Screen::Character;
                    self.pane = Pane::Gear;
                }
            }
            KeyCode::Char('f') => self.screen = Screen::Factors,
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            _ => {}
        }
        Ok(false)
    }

    fn handle_character_input(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.screen = Screen::Roster;
                return Ok(false);
            }
            KeyCode::Tab => {
                self.pane = match self.pane {
                    Pane::Gear => Pane::Materials,
                    Pane::Materials => Pane::Gear,
                };
                return Ok(false);
            }
            KeyCode::Char('f') => {
                self.screen = Screen::Factors;
                return Ok(false);
            }
            KeyCode::Char('a') => {
                if let Some(id) = self.selected_character_id() {
                    let have = self
                        .state
                        .character(&id)
                        .map(|c| !c.have_agent)
                        .unwrap_or(true);
                    self.dispatch(Command::SetAgent { character: id, have });
                }
                return Ok(false);
            }
            KeyCode::Char('u') => {
                if let Some(id) = self.selected_character_id() {
                    let slot = self.selected_slot();
                    self.dispatch(Command::Upgrade { character: id, slot });
                }
                return Ok(false);
            }
            _ => {}
        }

        match self.pane {
            Pane::Gear => self.handle_gear_pane_input(key),
            Pane::Materials => self.handle_material_pane_input(key),
        }
        Ok(false)
    }

    fn handle_gear_pane_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.slot_cursor = self.slot_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.slot_cursor + 1 < SlotType::all().len() {
                    self.slot_cursor += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.field = self.field.left(),
            KeyCode::Right | KeyCode::Char('l') => self.field = self.field.right(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_gear_field(true),
            KeyCode::Char('-') => self.adjust_gear_field(false),
            _ => {}
        }
    }

    fn handle_material_pane_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.material_cursor = self.material_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.material_cursor + 1 < EquipLevel::all().len() {
                    self.material_cursor += 1;
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_material(1),
            KeyCode::Char('-') => self.adjust_material(-1),
            _ => {}
        }
    }

    /// Step the selected gear field up or down through its option set
    fn adjust_gear_field(&mut self, up: bool) {
        let Some(id) = self.selected_character_id() else {
            return;
        };
        let slot = self.selected_slot();
        let Some(item) = self.state.character(&id).and_then(|c| c.gear.get(&slot).copied())
        else {
            return;
        };

        let command = match self.field {
            GearField::Level => {
                let stepped = step_level(item.level, up);
                Command::SetLevel { character: id, slot, level: stepped }
            }
            GearField::Enhance => {
                let stepped = step_enhance(item.enhance, up);
                Command::SetEnhance { character: id, slot, tier: stepped }
            }
            GearField::Refine => {
                let value = if up {
                    item.refine.value().saturating_add(1)
                } else {
                    item.refine.value().saturating_sub(1)
                };
                Command::SetRefine { character: id, slot, refine: RefineLevel::new(value) }
            }
        };
        self.dispatch(command);
    }

    fn adjust_material(&mut self, delta: i64) {
        let Some(id) = self.selected_character_id() else {
            return;
        };
        let level = EquipLevel::all()[self.material_cursor];
        let slot = self.selected_slot();
        self.dispatch(Command::AdjustMaterial { character: id, slot, level, delta });
    }

    fn handle_factors_input(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('f') => {
                self.screen = Screen::Roster;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.factor_family = self.factor_family.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.factor_family + 1 < catalog().len() {
                    self.factor_family += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.factor_level = self.factor_level.saturating_sub(1).max(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.factor_level = (self.factor_level + 1).min(MAX_FACTOR_LEVEL);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_factor(1),
            KeyCode::Char('-') => self.adjust_factor(-1),
            _ => {}
        }
        Ok(false)
    }

    fn adjust_factor(&mut self, delta: i64) {
        let family = &catalog()[self.factor_family];
        let factor = factor_id(family.name, self.factor_level);
        self.dispatch(Command::AdjustFactor { factor, delta });
    }

    /// Render the current screen
    pub fn render(&self, frame: &mut Frame) {
        let colors = palette(self.state.theme);
        match self.screen {
            Screen::Roster => self.render_roster(frame, colors),
            Screen::Character => self.render_character(frame, colors),
            Screen::Factors => self.render_factors(frame, colors),
        }
    }

    fn render_roster(&self, frame: &mut Frame, colors: Palette) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(frame.area());

        let mut lines = Vec::new();
        for (index, character) in self.state.characters.iter().enumerate() {
            let marker = if character.have_agent { "●" } else { "○" };
            let style = if index == self.roster_cursor {
                Style::default()
                    .fg(colors.accent)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            lines.push(Line::from(Span::styled(
                format!(" {} {}", marker, character.name),
                style,
            )));
        }

        let list = Paragraph::new(lines).block(
            Block::default()
                .title(" Characters ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );
        frame.render_widget(list, chunks[0]);
        self.render_help(
            frame,
            chunks[1],
            colors,
            "↑↓ select  Enter open  f factors  t theme  q quit",
        );
    }

    fn render_character(&self, frame: &mut Frame, colors: Palette) {
        let Some(character) = self.state.characters.get(self.roster_cursor) else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(9),
                Constraint::Min(9),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let agent = if character.have_agent { "agent ✓" } else { "agent ✗" };
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", character.name),
                Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(agent, Style::default().fg(colors.dim)),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let gear = GearTableWidget::new(character, colors)
            .cursor(self.slot_cursor, self.field)
            .focused(self.pane == Pane::Gear);
        frame.render_widget(gear, chunks[1]);

        let materials = MaterialTableWidget::new(character, self.selected_slot(), colors)
            .cursor(self.material_cursor)
            .focused(self.pane == Pane::Materials);
        frame.render_widget(materials, chunks[2]);

        self.render_help(
            frame,
            chunks[3],
            colors,
            "↑↓←→ move  +/- edit  u upgrade  a agent  Tab pane  f factors  t theme  Esc back",
        );
    }

    fn render_factors(&self, frame: &mut Frame, colors: Palette) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2 + catalog().len() as u16),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let mut lines = Vec::new();
        for (index, family) in catalog().iter().enumerate() {
            lines.push(self.factor_line(family, index == self.factor_family, colors));
        }
        let table = Paragraph::new(lines).block(
            Block::default()
                .title(" Factors ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );
        frame.render_widget(table, chunks[0]);

        self.render_combinations(frame, chunks[1], colors);
        self.render_help(
            frame,
            chunks[2],
            colors,
            "↑↓ family  ←→ level  +/- count  Esc back",
        );
    }

    /// One factor family as a line of per-level counts
    fn factor_line(&self, family: &FactorDef, selected: bool, colors: Palette) -> Line<'static> {
        let name_style = if selected {
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        let mut spans = vec![Span::styled(
            format!(" {:<8} ({:<16}) ", family.name, family.trait_name),
            name_style,
        )];
        for level in 1..=MAX_FACTOR_LEVEL {
            let count = self.state.factor_count(&factor_id(family.name, level));
            let mut style = Style::default().fg(if count > 0 { colors.text } else { colors.dim });
            if selected && level == self.factor_level {
                style = style.bg(colors.cursor_bg).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!("{:>3} ", count), style));
        }
        Line::from(spans)
    }

    fn render_combinations(&self, frame: &mut Frame, area: Rect, colors: Palette) {
        let family = &catalog()[self.factor_family];
        let mut lines = vec![Line::from(Span::styled(
            format!(
                " Lv{} bonus: +{} {}",
                self.factor_level,
                family.bonus(self.factor_level),
                family.trait_name
            ),
            Style::default().fg(colors.text),
        ))];
        for combo in family.combinations {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", combo.factors.join(" + ")),
                    Style::default().fg(colors.dim),
                ),
                Span::styled("→ ", Style::default().fg(colors.dim)),
                Span::styled(combo.result, Style::default().fg(colors.text)),
            ]));
        }
        let panel = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", family.name))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );
        frame.render_widget(panel, area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect, colors: Palette, text: &str) {
        frame.render_widget(
            Paragraph::new(Span::styled(text.to_string(), Style::default().fg(colors.dim))),
            area,
        );
    }
}

/// Step a base level one notch up or down the 45..70 scale
fn step_level(level: EquipLevel, up: bool) -> EquipLevel {
    let value = if up {
        level.value().saturating_add(5)
    } else {
        level.value().saturating_sub(5)
    };
    EquipLevel::from_value(value).unwrap_or(level)
}

/// Step an enhancement tier through the selector options
fn step_enhance(tier: EnhanceTier, up: bool) -> EnhanceTier {
    let options = EnhanceTier::options();
    // options are listed highest first
    let position = options
        .iter()
        .position(|&t| t == tier)
        .unwrap_or(options.len() - 1);
    let stepped = if up {
        position.saturating_sub(1)
    } else {
        (position + 1).min(options.len() - 1)
    };
    options[stepped]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::tracker::ThemeMode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App<MemoryStore> {
        App::new(MemoryStore::new())
    }

    #[test]
    fn test_starts_on_roster_with_default_characters() {
        let app = app();
        assert_eq!(app.screen, Screen::Roster);
        assert!(!app.state().characters.is_empty());
    }

    #[test]
    fn test_enter_opens_character_screen() {
        let mut app = app();
        app.handle_input(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.screen, Screen::Character);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let mut app = app();
        assert_eq!(app.state().theme, ThemeMode::Dark);
        app.handle_input(key(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.state().theme, ThemeMode::Light);

        // A fresh app over the same store sees the saved theme
        let reloaded = App::new(app.store.clone());
        assert_eq!(reloaded.state().theme, ThemeMode::Light);
    }

    #[test]
    fn test_material_edit_goes_through_command_layer() {
        let mut app = app();
        app.handle_input(key(KeyCode::Enter)).unwrap();
        app.handle_input(key(KeyCode::Tab)).unwrap(); // focus materials
        app.handle_input(key(KeyCode::Char('+'))).unwrap();
        app.handle_input(key(KeyCode::Char('+'))).unwrap();

        let character = &app.state().characters[0];
        assert_eq!(
            character.inventory.count(SlotType::Weapon, EquipLevel::Lv70),
            2
        );
    }

    #[test]
    fn test_material_count_never_goes_negative() {
        let mut app = app();
        app.handle_input(key(KeyCode::Enter)).unwrap();
        app.handle_input(key(KeyCode::Tab)).unwrap();
        app.handle_input(key(KeyCode::Char('-'))).unwrap();

        let character = &app.state().characters[0];
        assert_eq!(
            character.inventory.count(SlotType::Weapon, EquipLevel::Lv70),
            0
        );
    }

    #[test]
    fn test_enhance_steps_through_selector_options() {
        let mut app = app();
        app.handle_input(key(KeyCode::Enter)).unwrap();
        app.handle_input(key(KeyCode::Right)).unwrap(); // Level -> Enhance
        app.handle_input(key(KeyCode::Char('+'))).unwrap();

        // Fresh gear sits at tier 0; one step up selects tier 40
        let item = app.state().characters[0].gear[&SlotType::Weapon];
        assert_eq!(item.enhance, EnhanceTier::new(40));
    }

    #[test]
    fn test_level_steps_are_clamped_to_scale() {
        assert_eq!(step_level(EquipLevel::Lv70, true), EquipLevel::Lv70);
        assert_eq!(step_level(EquipLevel::Lv45, false), EquipLevel::Lv45);
        assert_eq!(step_level(EquipLevel::Lv60, true), EquipLevel::Lv65);
        assert_eq!(step_level(EquipLevel::Lv60, false), EquipLevel::Lv55);
    }

    #[test]
    fn test_enhance_step_bottoms_out_at_zero() {
        assert_eq!(step_enhance(EnhanceTier::new(0), false), EnhanceTier::new(0));
        assert_eq!(step_enhance(EnhanceTier::new(0), true), EnhanceTier::new(40));
        assert_eq!(step_enhance(EnhanceTier::new(70), true), EnhanceTier::new(70));
    }

    #[test]
    fn test_factor_adjust_targets_cursor_position() {
        let mut app = app();
        app.handle_input(key(KeyCode::Char('f'))).unwrap();
        app.handle_input(key(KeyCode::Down)).unwrap(); // Resist
        app.handle_input(key(KeyCode::Right)).unwrap(); // level 2
        app.handle_input(key(KeyCode::Char('+'))).unwrap();

        assert_eq!(app.state().factor_count("factor_resist_2"), 1);
        assert_eq!(app.state().factor_count("factor_resist_1"), 0);
    }

    #[test]
    fn test_upgrade_key_advances_selected_slot() {
        let mut app = app();
        app.handle_input(key(KeyCode::Enter)).unwrap();
        app.handle_input(key(KeyCode::Down)).unwrap(); // Helmet row
        app.handle_input(key(KeyCode::Char('u'))).unwrap();

        let gear = &app.state().characters[0].gear;
        assert_eq!(gear[&SlotType::Helmet].enhance, EnhanceTier::new(5));
        assert_eq!(gear[&SlotType::Weapon].enhance, EnhanceTier::new(0));
    }
}
