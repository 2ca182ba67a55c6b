// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Move to the tab on the left (wraps)
    PreviousTab,

    /// Move to the tab on the right (wraps)
    NextTab,

    /// Jump to a tab by index
    SelectTab(usize),

    /// Switch between classic and neon
    ToggleTheme,

    /// Left click at a screen position
    Click { column: u16, row: u16 },

    /// Terminal was resized; layout is re-derived on the next draw
    Resize,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != crossterm::event::KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Tab navigation
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => AppEvent::PreviousTab,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => AppEvent::NextTab,
            KeyCode::Char(c @ '1'..='9') => AppEvent::SelectTab(c as usize - '1' as usize),

            // Theme
            KeyCode::Char('t') => AppEvent::ToggleTheme,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}
