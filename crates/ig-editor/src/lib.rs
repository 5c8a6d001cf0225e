pub mod controller;
pub mod history;
pub mod input;
pub mod layout;
pub mod session;
pub mod shortcuts;

pub use controller::{DragController, EditCommand, Gesture, MIN_ELEMENT_SIZE};
pub use history::History;
pub use input::{CanvasView, Handle, PointerEvent};
pub use layout::{DUPLICATE_OFFSET, HAlign, VAlign};
pub use session::EditorSession;
pub use shortcuts::{EditorAction, ShortcutMap};
