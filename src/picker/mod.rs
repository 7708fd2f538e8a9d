// Interactive currency picker.
//
// `Picker::update` takes one `Key` and mutates the selection; `view::render`
// draws the state with ratatui; `terminal` owns the event loop and only
// translates crossterm events into keys.
//
// Targets and the base are tracked by currency code. Only the cursor is a
// position in the catalog.

pub mod terminal;
pub mod view;

use crate::catalog::Catalog;
use ratatui::style::Style;
use std::collections::BTreeSet;
use tui_textarea::{Input, Key as FieldKey, TextArea};

/// Keystrokes the picker understands, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Enter,
    Backspace,
    Delete,
    Esc,
    CtrlC,
    Char(char),
}

/// Whether the loop should keep reading keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Behaviour switches for the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    /// Show the amount field and feed it every keystroke.
    pub amount_entry: bool,
    /// Maximum number of characters in the amount field.
    pub char_limit: usize,
    /// Shown, and used as the amount, while the field is empty.
    pub placeholder: String,
}

impl Default for PickerOptions {
    fn default() -> Self {
        PickerOptions {
            amount_entry: true,
            char_limit: 156,
            placeholder: "1".into(),
        }
    }
}

/// What the user left the picker with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub base: Option<String>,
    /// Target codes, sorted.
    pub targets: Vec<String>,
    /// Raw amount text, `None` when the amount field is disabled.
    pub amount: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Picker {
    catalog: Catalog,
    options: PickerOptions,
    cursor: usize,
    selected: BTreeSet<String>,
    base: Option<String>,
    amount: TextArea<'static>,
}

impl Picker {
    pub fn new(catalog: Catalog, options: PickerOptions) -> Self {
        let mut amount = TextArea::default();
        amount.set_placeholder_text(options.placeholder.clone());
        amount.set_cursor_line_style(Style::default());
        Picker {
            catalog,
            options,
            cursor: 0,
            selected: BTreeSet::new(),
            base: None,
            amount,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.selected.contains(code)
    }

    /// The amount field widget.
    pub fn amount(&self) -> &TextArea<'static> {
        &self.amount
    }

    /// Current contents of the amount field.
    pub fn amount_text(&self) -> String {
        self.amount.lines().concat()
    }

    /// Apply one keystroke. List navigation and the amount field both see
    /// every key that does not end the session.
    pub fn update(&mut self, key: Key) -> Flow {
        match key {
            Key::CtrlC | Key::Esc | Key::Char('q') => return Flow::Quit,
            Key::Up | Key::Char('k') => self.move_up(),
            Key::Down | Key::Char('j') => self.move_down(),
            Key::Char(' ') => self.toggle(),
            Key::Enter => self.designate_base(),
            _ => {}
        }
        if self.options.amount_entry {
            self.edit_amount(key);
        }
        Flow::Continue
    }

    /// Forward a key to the single-line amount field. Enter never reaches
    /// it, and characters past the limit are dropped.
    fn edit_amount(&mut self, key: Key) {
        let key = match key {
            Key::Char(c) if c.is_control() => return,
            Key::Char(_) if self.amount_text().chars().count() >= self.options.char_limit => {
                return
            }
            Key::Char(c) => FieldKey::Char(c),
            Key::Backspace => FieldKey::Backspace,
            Key::Delete => FieldKey::Delete,
            Key::Left => FieldKey::Left,
            Key::Right => FieldKey::Right,
            Key::Home => FieldKey::Home,
            Key::End => FieldKey::End,
            _ => return,
        };
        self.amount.input(Input {
            key,
            ..Default::default()
        });
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.catalog.len() {
            self.cursor += 1;
        }
    }

    /// Flip the currency under the cursor in or out of the target set.
    pub fn toggle(&mut self) {
        let Some(code) = self.current_code() else {
            return;
        };
        if !self.selected.remove(&code) {
            self.selected.insert(code);
        }
    }

    /// Make the currency under the cursor the base, dropping it from the
    /// targets if it was one.
    pub fn designate_base(&mut self) {
        let Some(code) = self.current_code() else {
            return;
        };
        self.selected.remove(&code);
        self.base = Some(code);
    }

    fn current_code(&self) -> Option<String> {
        self.catalog.get(self.cursor).map(|e| e.code.clone())
    }

    /// Consume the picker. Targets come out in sorted order.
    pub fn finish(self) -> Selection {
        let amount = self.options.amount_entry.then(|| self.amount_text());
        Selection {
            base: self.base,
            targets: self.selected.into_iter().collect(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Currency;
    use std::collections::HashMap;

    fn catalog(codes: &[&str]) -> Catalog {
        let data: HashMap<String, Currency> = codes
            .iter()
            .map(|c| {
                (
                    c.to_string(),
                    Currency {
                        name: format!("{} name", c),
                        code: c.to_string(),
                        ..Default::default()
                    },
                )
            })
            .collect();
        Catalog::from_map(data)
    }

    fn picker() -> Picker {
        Picker::new(catalog(&["AUD", "EUR", "USD"]), PickerOptions::default())
    }

    #[test]
    fn cursor_is_clamped_to_the_list() {
        let mut p = picker();
        p.update(Key::Up);
        assert_eq!(p.cursor(), 0);
        for _ in 0..5 {
            p.update(Key::Down);
        }
        assert_eq!(p.cursor(), 2);
        p.update(Key::Char('k'));
        assert_eq!(p.cursor(), 1);
        p.update(Key::Char('j'));
        p.update(Key::Char('j'));
        assert_eq!(p.cursor(), 2);
    }

    #[test]
    fn toggling_twice_restores_the_selection() {
        let mut p = picker();
        p.update(Key::Down);
        p.update(Key::Char(' '));
        assert!(p.is_selected("EUR"));
        p.update(Key::Char(' '));
        assert!(!p.is_selected("EUR"));
    }

    #[test]
    fn designating_base_removes_it_from_targets() {
        let mut p = picker();
        p.update(Key::Char(' '));
        assert!(p.is_selected("AUD"));
        p.update(Key::Enter);
        assert_eq!(p.base(), Some("AUD"));
        assert!(!p.is_selected("AUD"));

        p.update(Key::Down);
        p.update(Key::Enter);
        assert_eq!(p.base(), Some("EUR"));
    }

    #[test]
    fn quit_keys_end_the_session() {
        for key in [Key::Char('q'), Key::Esc, Key::CtrlC] {
            let mut p = picker();
            assert_eq!(p.update(key), Flow::Quit);
        }
        assert_eq!(picker().update(Key::Down), Flow::Continue);
    }

    #[test]
    fn every_key_reaches_the_amount_field() {
        let mut p = picker();
        for c in "j2k".chars() {
            p.update(Key::Char(c));
        }
        assert_eq!(p.amount_text(), "j2k");
        assert_eq!(p.cursor(), 0);
    }

    #[test]
    fn amount_field_can_be_disabled() {
        let options = PickerOptions {
            amount_entry: false,
            ..Default::default()
        };
        let mut p = Picker::new(catalog(&["EUR", "USD"]), options);
        p.update(Key::Char('5'));
        p.update(Key::Enter);
        let selection = p.finish();
        assert_eq!(selection.amount, None);
        assert_eq!(selection.base.as_deref(), Some("EUR"));
    }

    #[test]
    fn finish_sorts_targets() {
        let mut p = picker();
        p.update(Key::Down);
        p.update(Key::Down);
        p.update(Key::Char(' '));
        p.update(Key::Up);
        p.update(Key::Up);
        p.update(Key::Char(' '));
        p.update(Key::Down);
        p.update(Key::Enter);
        for c in "12".chars() {
            p.update(Key::Char(c));
        }
        let selection = p.finish();
        assert_eq!(selection.base.as_deref(), Some("EUR"));
        assert_eq!(selection.targets, vec!["AUD", "USD"]);
        assert_eq!(selection.amount.as_deref(), Some("  12"));
    }

    #[test]
    fn empty_catalog_ignores_selection_keys() {
        let mut p = Picker::new(Catalog::default(), PickerOptions::default());
        p.update(Key::Down);
        p.update(Key::Char(' '));
        p.update(Key::Enter);
        assert_eq!(p.cursor(), 0);
        assert_eq!(p.finish().base, None);
    }

    fn typed(p: &mut Picker, text: &str) {
        for c in text.chars() {
            p.update(Key::Char(c));
        }
    }

    #[test]
    fn amount_inserts_at_the_caret() {
        let mut p = picker();
        typed(&mut p, "15");
        p.update(Key::Left);
        p.update(Key::Char('2'));
        assert_eq!(p.amount_text(), "125");
        assert_eq!(p.amount().cursor(), (0, 2));
    }

    #[test]
    fn amount_backspace_and_delete() {
        let mut p = picker();
        typed(&mut p, "1234");
        p.update(Key::Backspace);
        assert_eq!(p.amount_text(), "123");
        p.update(Key::Home);
        p.update(Key::Delete);
        assert_eq!(p.amount_text(), "23");
        p.update(Key::Backspace);
        assert_eq!(p.amount_text(), "23");
        p.update(Key::End);
        assert_eq!(p.amount().cursor(), (0, 2));
    }

    #[test]
    fn enter_does_not_break_the_amount_line() {
        let mut p = picker();
        typed(&mut p, "5");
        p.update(Key::Enter);
        typed(&mut p, "0");
        assert_eq!(p.amount().lines().len(), 1);
        assert_eq!(p.amount_text(), "50");
    }

    #[test]
    fn amount_length_limit_is_enforced() {
        let options = PickerOptions {
            char_limit: 3,
            ..Default::default()
        };
        let mut p = Picker::new(catalog(&["EUR"]), options);
        typed(&mut p, "12345");
        assert_eq!(p.amount_text(), "123");
    }
}
