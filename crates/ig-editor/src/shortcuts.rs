//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `EditorAction`s. The map lives
//! here so native and web shells share one binding table.

/// Logical actions the keyboard surface can trigger. Each maps 1:1 to a
/// session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Undo,
    Redo,
    DeleteSelected,
    Deselect,
    DuplicateSelected,
    Save,
    BringForward,
    SendBackward,
}

/// Resolves key events into editor actions.
///
/// Platform-aware modifier detection: on macOS `meta` is the command
/// key, elsewhere `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(key: &str, ctrl: bool, shift: bool, meta: bool) -> Option<EditorAction> {
        let cmd = ctrl || meta;

        if cmd && shift {
            return match key {
                "z" | "Z" => Some(EditorAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(EditorAction::Undo),
                "y" | "Y" => Some(EditorAction::Redo),
                "d" | "D" => Some(EditorAction::DuplicateSelected),
                "s" | "S" => Some(EditorAction::Save),
                "]" => Some(EditorAction::BringForward),
                "[" => Some(EditorAction::SendBackward),
                _ => None,
            };
        }

        match key {
            "Delete" | "Backspace" => Some(EditorAction::DeleteSelected),
            "Escape" => Some(EditorAction::Deselect),
            _ => None,
        }
    }
}
