use crate::app::{Overlay, ViewState};
use crate::command::Command;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents the context for a keybinding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    View(ViewState),
    Overlay(Overlay),
}

type KeyBindingKey = (KeybindingContext, KeyCode, KeyModifiers);

/// Registry of all keybindings mapped to commands.
#[derive(Debug, Default)]
pub struct KeybindingRegistry {
    bindings: Vec<(KeyBindingKey, Command)>,
}

impl KeybindingRegistry {
    /// Creates a new keybinding registry with all default bindings.
    pub fn new() -> Self {
        let mut registry = Self { bindings: Vec::new() };

        registry.register_browse_bindings();
        registry.register_search_mode_bindings();
        registry.register_history_view_bindings();
        registry.register_error_state_bindings();

        for view in [ViewState::Browse, ViewState::SearchMode, ViewState::HistoryView] {
            registry.register_global_bindings(KeybindingContext::View(view));
        }
        registry.register_global_bindings(KeybindingContext::Overlay(Overlay::Error(String::new())));

        registry
    }

    fn find_cmd(
        bindings: &[(KeyBindingKey, Command)],
        expected_context: &KeybindingContext,
        key_event: KeyEvent,
    ) -> Option<Command> {
        bindings
            .iter()
            .find(|((context, kcode, kmod), _)| {
                context == expected_context && *kcode == key_event.code && *kmod == key_event.modifiers
            })
            .map(|(_, cmd)| *cmd)
    }

    pub fn lookup(&self, view_state: &ViewState, overlay: &Option<Overlay>, key_event: KeyEvent) -> Option<Command> {
        // Overlays capture all keys while shown
        if let Some(ov) = overlay {
            return Self::find_cmd(&self.bindings, &KeybindingContext::Overlay(ov.kind()), key_event);
        }

        Self::find_cmd(&self.bindings, &KeybindingContext::View(*view_state), key_event)
    }

    /// Returns all keybindings for a specific context in registration order.
    pub fn get_keybindings_for_context(&self, target_context: &KeybindingContext) -> Vec<(String, Command)> {
        self.bindings
            .iter()
            .filter(|((context, _, _), _)| context == target_context)
            .map(|((_, keycode, modifiers), cmd)| (Self::format_key(*keycode, *modifiers), *cmd))
            .collect()
    }

    fn format_key(keycode: KeyCode, modifiers: KeyModifiers) -> String {
        let key_str = match keycode {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::PageUp => "PageUp".to_string(),
            KeyCode::PageDown => "PageDown".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", keycode),
        };

        if modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key_str)
        } else if modifiers.contains(KeyModifiers::ALT) {
            format!("Alt+{}", key_str)
        } else {
            key_str
        }
    }

    /// Helper to register a single keybinding.
    fn bind(&mut self, context: KeybindingContext, keycode: KeyCode, modifiers: KeyModifiers, command: Command) {
        self.bindings.push(((context, keycode, modifiers), command));
    }

    /// Helper to register a keybinding without modifiers.
    fn bind_simple(&mut self, context: KeybindingContext, keycode: KeyCode, command: Command) {
        self.bind(context, keycode, KeyModifiers::empty(), command);
    }

    /// Helper to register a keybinding with SHIFT modifier.
    fn bind_shift(&mut self, context: KeybindingContext, c: char, command: Command) {
        self.bind(context, KeyCode::Char(c), KeyModifiers::SHIFT, command);
    }

    /// Registers global keybindings that work in all states.
    fn register_global_bindings(&mut self, context: KeybindingContext) {
        self.bind(context.clone(), KeyCode::Char('c'), KeyModifiers::CONTROL, Command::Quit);
        self.bind_simple(context.clone(), KeyCode::Esc, Command::Cancel);
        self.bind_simple(context.clone(), KeyCode::Enter, Command::Confirm);
        self.bind_simple(context, KeyCode::F(1), Command::ToggleHelp);
    }

    fn register_browse_bindings(&mut self) {
        let context = KeybindingContext::View(ViewState::Browse);

        self.bind_simple(context.clone(), KeyCode::Char('q'), Command::Quit);
        self.bind_simple(context.clone(), KeyCode::Up, Command::MoveUp);
        self.bind_simple(context.clone(), KeyCode::Down, Command::MoveDown);
        self.bind_simple(context.clone(), KeyCode::Char('k'), Command::MoveUp);
        self.bind_simple(context.clone(), KeyCode::Char('j'), Command::MoveDown);
        self.bind_simple(context.clone(), KeyCode::PageUp, Command::PageUp);
        self.bind_simple(context.clone(), KeyCode::PageDown, Command::PageDown);
        self.bind_simple(context.clone(), KeyCode::Char('g'), Command::GotoTop);
        self.bind_shift(context.clone(), 'G', Command::GotoBottom);
        self.bind_simple(context.clone(), KeyCode::Char('/'), Command::ActivateSearchMode);
        self.bind(
            context.clone(),
            KeyCode::Char('f'),
            KeyModifiers::CONTROL,
            Command::ActivateSearchMode,
        );
        self.bind_simple(context.clone(), KeyCode::Char('x'), Command::ClearSearch);
        self.bind_simple(context.clone(), KeyCode::Char('s'), Command::ToggleSort);
        self.bind_shift(context.clone(), 'H', Command::ActivateHistoryView);
        self.bind_shift(context.clone(), 'R', Command::Reload);
        self.bind_simple(context, KeyCode::Char('?'), Command::ToggleHelp);
    }

    fn register_search_mode_bindings(&mut self) {
        let context = KeybindingContext::View(ViewState::SearchMode);

        self.bind_simple(context.clone(), KeyCode::Up, Command::SearchHistoryPrevious);
        self.bind_simple(context.clone(), KeyCode::Down, Command::SearchHistoryNext);
        self.bind_simple(context.clone(), KeyCode::Backspace, Command::DeleteSearchChar);
        self.bind_simple(context.clone(), KeyCode::Tab, Command::ActivateHistoryView);
        self.bind(context, KeyCode::Char('u'), KeyModifiers::CONTROL, Command::ClearSearch);
    }

    fn register_history_view_bindings(&mut self) {
        let context = KeybindingContext::View(ViewState::HistoryView);

        self.bind_simple(context.clone(), KeyCode::Up, Command::MoveUp);
        self.bind_simple(context.clone(), KeyCode::Down, Command::MoveDown);
        self.bind_simple(context.clone(), KeyCode::Char('k'), Command::MoveUp);
        self.bind_simple(context.clone(), KeyCode::Char('j'), Command::MoveDown);
        self.bind_simple(context, KeyCode::Char('q'), Command::Cancel);
    }

    fn register_error_state_bindings(&mut self) {
        let context = KeybindingContext::Overlay(Overlay::Error(String::new()));

        self.bind_simple(context.clone(), KeyCode::Char('q'), Command::Quit);
        self.bind_shift(context, 'R', Command::Reload);
    }
}
