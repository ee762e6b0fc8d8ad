//! Key mapping from terminal events to machine actions.

use crate::types::{SlotAction, SymbolKind};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to machine actions.
///
/// Digits `1`-`4` force a kind from each payout family (low, medium, high,
/// special). Key releases are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<SlotAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(SlotAction::Spin)
        }
        KeyCode::Char('f') | KeyCode::Char('F') => Some(SlotAction::ForceRandom),

        // Family teasers
        KeyCode::Char('1') => Some(SlotAction::Force(SymbolKind::Nine)),
        KeyCode::Char('2') => Some(SlotAction::Force(SymbolKind::M1)),
        KeyCode::Char('3') => Some(SlotAction::Force(SymbolKind::H1)),
        KeyCode::Char('4') => Some(SlotAction::Force(SymbolKind::A)),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
