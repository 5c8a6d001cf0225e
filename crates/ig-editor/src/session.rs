//! The editor session: one owned scene behind a command interface.
//!
//! Panels and shells never own scene state; they read through the
//! accessors and mutate through the commands here. The session also owns
//! the selection, the history stack, and the interaction controller, so
//! every invariant that spans them (selection cleared on delete, coarse
//! checkpoint granularity, gesture termination) lives in one place.
//!
//! Checkpoint policy: history snapshots are taken on element creation,
//! deletion, duplication, and project/template load — not on drag or
//! resize streams, and not on `update_element` (style edits included).
//! This matches the shipped editor's coarse undo granularity and is
//! intentional; extending checkpoints to every mutation would change the
//! history's semantics, not fix a bug.

use crate::controller::{CommandBatch, DragController, EditCommand};
use crate::history::History;
use crate::input::{CanvasView, Handle, PointerEvent};
use crate::layout::{self, DUPLICATE_OFFSET, HAlign, VAlign};
use crate::shortcuts::EditorAction;
use ig_core::{
    Element, ElementId, ElementKind, ElementPatch, ExportError, Geometry, Project, Scene,
    element_at, export_svg,
};

pub struct EditorSession {
    scene: Scene,
    selection: Option<ElementId>,
    history: History,
    controller: DragController,
    view: CanvasView,
    project_name: String,
}

impl EditorSession {
    /// Open a session over a scene. The starting state becomes the first
    /// history entry so undo has a floor to return to.
    pub fn new(scene: Scene) -> Self {
        let mut history = History::new();
        history.checkpoint(&scene.elements);
        Self {
            scene,
            selection: None,
            history,
            controller: DragController::new(),
            view: CanvasView::default(),
            project_name: "Untitled".into(),
        }
    }

    // ── Read surface ─────────────────────────────────────────────────

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.and_then(|id| self.scene.find(id))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    // ── Scene commands ───────────────────────────────────────────────

    /// Add an element: fresh id, `z_index` = element count + 1, appended,
    /// selected, checkpointed.
    pub fn add_element(&mut self, kind: ElementKind, geometry: Geometry) -> ElementId {
        let id = ElementId::fresh(kind.id_prefix());
        let z_index = self.scene.next_z_index();
        self.insert(Element::new(id, kind, geometry, z_index))
    }

    /// Shared tail of the add path: append, select, checkpoint. The
    /// element must be fully built first so the snapshot captures it.
    fn insert(&mut self, element: Element) -> ElementId {
        let id = element.id;
        log::debug!("add {id} z={}", element.z_index);
        self.scene.push(element);
        self.selection = Some(id);
        self.history.checkpoint(&self.scene.elements);
        id
    }

    /// Merge a patch into an element. Unknown ids are a no-op. Does not
    /// checkpoint (see module docs).
    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) {
        if let Some(element) = self.scene.find_mut(id) {
            element.apply(patch);
        }
    }

    /// Delete an element. Clears the selection atomically if it pointed
    /// at the deleted id. Checkpoints only when something was removed.
    pub fn delete_element(&mut self, id: ElementId) {
        if self.scene.remove(id).is_some() {
            if self.selection == Some(id) {
                self.selection = None;
            }
            self.history.checkpoint(&self.scene.elements);
            log::debug!("delete {id}");
        }
    }

    /// Clone the selected element's full field set — kind, geometry
    /// (offset by +20/+20), and the hidden/locked flags — through the
    /// add path, so the copy gets a fresh id, the top z, selection, and
    /// a checkpoint.
    pub fn duplicate_selected(&mut self) -> Option<ElementId> {
        let source = self.selected_element()?.clone();
        let id = ElementId::fresh(source.kind.id_prefix());
        let mut copy = Element::new(id, source.kind, source.geometry, self.scene.next_z_index());
        copy.geometry.x += DUPLICATE_OFFSET;
        copy.geometry.y += DUPLICATE_OFFSET;
        copy.hidden = source.hidden;
        copy.locked = source.locked;
        Some(self.insert(copy))
    }

    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        self.update_element(
            id,
            ElementPatch {
                hidden: Some(hidden),
                ..Default::default()
            },
        );
    }

    pub fn set_locked(&mut self, id: ElementId, locked: bool) {
        self.update_element(
            id,
            ElementPatch {
                locked: Some(locked),
                ..Default::default()
            },
        );
    }

    /// Select an element. Hidden, locked, and unknown ids are ignored.
    pub fn select(&mut self, id: ElementId) {
        if let Some(element) = self.scene.find(id)
            && !element.hidden
            && !element.locked
        {
            self.selection = Some(id);
        }
    }

    pub fn deselect(&mut self) {
        self.selection = None;
    }

    // ── History ──────────────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(elements) => {
                self.scene.elements = elements.to_vec();
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(elements) => {
                self.scene.elements = elements.to_vec();
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    /// Restoring an older snapshot can orphan the selected id; the
    /// selection invariant (never reference a missing element) also
    /// holds across undo/redo.
    fn prune_selection(&mut self) {
        if let Some(id) = self.selection
            && self.scene.find(id).is_none()
        {
            self.selection = None;
        }
    }

    // ── Layout operations (selected element) ─────────────────────────

    pub fn align_horizontal(&mut self, edge: HAlign) -> bool {
        self.selection
            .is_some_and(|id| layout::align_horizontal(&mut self.scene, id, edge))
    }

    pub fn align_vertical(&mut self, edge: VAlign) -> bool {
        self.selection
            .is_some_and(|id| layout::align_vertical(&mut self.scene, id, edge))
    }

    pub fn bring_forward(&mut self) -> bool {
        self.selection
            .is_some_and(|id| layout::bring_forward(&mut self.scene, id))
    }

    pub fn send_backward(&mut self) -> bool {
        self.selection
            .is_some_and(|id| layout::send_backward(&mut self.scene, id))
    }

    // ── Collaborator surface ─────────────────────────────────────────

    /// Replace the scene wholesale from a persisted project and push one
    /// checkpoint. Selection and any in-flight gesture are discarded.
    pub fn load_project(&mut self, project: Project) {
        log::info!("load project {:?}", project.name);
        self.project_name = project.name.clone();
        self.scene = project.into_scene();
        self.selection = None;
        self.controller.release();
        self.history.checkpoint(&self.scene.elements);
    }

    /// Apply a template: same wholesale replacement as a project load,
    /// but the session keeps its current name.
    pub fn apply_template(&mut self, template: Project) {
        log::info!("apply template {:?}", template.name);
        self.scene = template.into_scene();
        self.selection = None;
        self.controller.release();
        self.history.checkpoint(&self.scene.elements);
    }

    /// Hand the scene back in the exchange shape. Persistence and
    /// identity are the collaborator's responsibility.
    pub fn save(&self) -> Project {
        Project::from_scene(self.project_name.clone(), &self.scene)
    }

    /// Insert an image element from a collaborator-provided source
    /// reference (remote URL or inline data), stored verbatim. The image
    /// lands centered on the canvas.
    pub fn insert_image(&mut self, src: String) -> ElementId {
        let kind = ElementKind::Image { src };
        let (w, h) = kind.default_size();
        let x = (self.scene.canvas_width as f32 - w) / 2.0;
        let y = (self.scene.canvas_height as f32 - h) / 2.0;
        self.add_element(kind, Geometry::sized(x, y, w, h))
    }

    pub fn export_svg(&self) -> Result<String, ExportError> {
        export_svg(&self.scene)
    }

    // ── Pointer surface ──────────────────────────────────────────────

    pub fn set_view(&mut self, view: CanvasView) {
        self.view = view;
    }

    pub fn view(&self) -> CanvasView {
        self.view
    }

    /// Dispatch a raw pointer event from the shell's event loop.
    pub fn pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press { x, y } => self.pointer_press(x, y),
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Release => self.pointer_release(),
        }
    }

    pub fn pointer_press(&mut self, sx: f32, sy: f32) {
        let (cx, cy) = self.view.to_canvas(sx, sy);
        let hit = element_at(&self.scene, cx, cy);
        let commands = self.controller.press(&self.scene, hit, sx, sy, self.view);
        self.apply(commands);
    }

    /// Press on a resize handle of the selected element.
    pub fn press_handle(&mut self, handle: Handle, sx: f32, sy: f32) -> bool {
        match self.selection {
            Some(id) => self.controller.press_handle(&self.scene, id, handle, sx, sy),
            None => false,
        }
    }

    pub fn pointer_move(&mut self, sx: f32, sy: f32) {
        let commands = self.controller.pointer_move(sx, sy, self.view);
        self.apply(commands);
    }

    /// Global release listener: ends the gesture wherever the pointer is.
    pub fn pointer_release(&mut self) {
        self.controller.release();
    }

    fn apply(&mut self, commands: CommandBatch) {
        for command in commands {
            match command {
                EditCommand::Select(id) => self.selection = Some(id),
                EditCommand::Deselect => self.selection = None,
                EditCommand::Update(id, patch) => self.update_element(id, patch),
            }
        }
    }

    // ── Keyboard surface ─────────────────────────────────────────────

    /// Dispatch a logical keyboard action. `Save` hands the project back
    /// to the caller; every other action returns `None`.
    pub fn handle_action(&mut self, action: EditorAction) -> Option<Project> {
        match action {
            EditorAction::Undo => {
                self.undo();
            }
            EditorAction::Redo => {
                self.redo();
            }
            EditorAction::DeleteSelected => {
                if let Some(id) = self.selection {
                    self.delete_element(id);
                }
            }
            EditorAction::Deselect => self.deselect(),
            EditorAction::DuplicateSelected => {
                self.duplicate_selected();
            }
            EditorAction::BringForward => {
                self.bring_forward();
            }
            EditorAction::SendBackward => {
                self.send_backward();
            }
            EditorAction::Save => return Some(self.save()),
        }
        None
    }
}
