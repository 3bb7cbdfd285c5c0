use macroquad::prelude::*;

use super::text::UiFont;
use super::toolbar::draw_button_face;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogFocus {
    Confirm,
    Cancel,
}

/// Yes/no modal holding the action to run on confirm
#[derive(Debug)]
pub struct ConfirmDialog<A> {
    message: String,
    pending: Option<A>,
    visible: bool,
    focus: DialogFocus,
}

impl<A> ConfirmDialog<A> {
    pub fn new() -> Self {
        ConfirmDialog {
            message: String::new(),
            pending: None,
            visible: false,
            focus: DialogFocus::Confirm,
        }
    }

    /// Show `message` with the confirm control focused
    pub fn open(&mut self, message: &str, on_confirm: A) {
        self.message = message.to_string();
        self.pending = Some(on_confirm);
        self.visible = true;
        self.focus = DialogFocus::Confirm;
    }

    /// Close and hand back the pending action
    pub fn confirm(&mut self) -> Option<A> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.visible = false;
        self.pending = None;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DialogFocus::Confirm => DialogFocus::Cancel,
            DialogFocus::Cancel => DialogFocus::Confirm,
        };
    }

    /// Activate whichever control has focus
    pub fn activate_focused(&mut self) -> Option<A> {
        self.choose(self.focus)
    }

    /// Resolve the dialog with one of its two controls
    pub fn choose(&mut self, control: DialogFocus) -> Option<A> {
        match control {
            DialogFocus::Confirm => self.confirm(),
            DialogFocus::Cancel => {
                self.cancel();
                None
            }
        }
    }

    /// A completed click at `pos`; clicks outside both buttons are ignored
    pub fn click_at(&mut self, layout: &DialogLayout, pos: Vec2) -> Option<A> {
        if !self.visible {
            return None;
        }
        match layout.hit(pos) {
            Some(control) => self.choose(control),
            None => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn focus(&self) -> DialogFocus {
        self.focus
    }
}

impl<A> Default for ConfirmDialog<A> {
    fn default() -> Self {
        Self::new()
    }
}

const DIALOG_WIDTH: f32 = 460.0;
const DIALOG_HEIGHT: f32 = 150.0;

/// Where the dialog and its buttons sit for a given window size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialogLayout {
    pub panel: Rect,
    pub confirm: Rect,
    pub cancel: Rect,
}

impl DialogLayout {
    pub fn centered(screen: Vec2) -> Self {
        let x = (screen.x - DIALOG_WIDTH) / 2.0;
        let y = (screen.y - DIALOG_HEIGHT) / 2.0;
        let button_y = y + DIALOG_HEIGHT - 55.0;

        DialogLayout {
            panel: Rect::new(x, y, DIALOG_WIDTH, DIALOG_HEIGHT),
            confirm: Rect::new(x + DIALOG_WIDTH / 2.0 - 130.0, button_y, 110.0, 34.0),
            cancel: Rect::new(x + DIALOG_WIDTH / 2.0 + 20.0, button_y, 110.0, 34.0),
        }
    }

    pub fn hit(&self, pos: Vec2) -> Option<DialogFocus> {
        if self.confirm.contains(pos) {
            Some(DialogFocus::Confirm)
        } else if self.cancel.contains(pos) {
            Some(DialogFocus::Cancel)
        } else {
            None
        }
    }
}

/// Draw the modal over everything and handle its input.
/// Returns the action when the user confirms.
pub fn render_dialog<A>(dialog: &mut ConfirmDialog<A>, font: &UiFont) -> Option<A> {
    if !dialog.is_open() {
        return None;
    }

    // Dim the page behind the modal
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::from_rgba(0, 0, 0, 110));

    let layout = DialogLayout::centered(vec2(screen_width(), screen_height()));
    let panel = layout.panel;
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, Color::from_rgba(250, 250, 250, 255));
    draw_rectangle_lines(panel.x, panel.y, panel.w, panel.h, 2.0, BLACK);
    font.draw_centered(dialog.message(), Rect::new(panel.x, panel.y + 15.0, panel.w, 40.0), 18, BLACK);

    draw_button_face("OK", layout.confirm, dialog.focus() == DialogFocus::Confirm, font);
    draw_button_face("Cancel", layout.cancel, dialog.focus() == DialogFocus::Cancel, font);

    let mouse = Vec2::from(mouse_position());
    if is_mouse_button_released(MouseButton::Left) && layout.hit(mouse).is_some() {
        return dialog.click_at(&layout, mouse);
    }
    if is_key_pressed(KeyCode::Escape) {
        dialog.cancel();
        return None;
    }
    if is_key_pressed(KeyCode::Tab) || is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::Right) {
        dialog.toggle_focus();
    }
    if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
        return dialog.activate_focused();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Delete,
        Export,
    }

    #[test]
    fn open_focuses_confirm_and_confirm_returns_the_action() {
        let mut dialog = ConfirmDialog::new();
        dialog.open("delete?", Action::Delete);

        assert!(dialog.is_open());
        assert_eq!(dialog.message(), "delete?");
        assert_eq!(dialog.focus(), DialogFocus::Confirm);
        assert_eq!(dialog.confirm(), Some(Action::Delete));
        assert!(!dialog.is_open());
        assert_eq!(dialog.confirm(), None);
    }

    #[test]
    fn cancel_drops_the_action() {
        let mut dialog = ConfirmDialog::new();
        dialog.open("export?", Action::Export);
        dialog.cancel();

        assert!(!dialog.is_open());
        assert_eq!(dialog.confirm(), None);
    }

    #[test]
    fn reopening_replaces_the_pending_action_and_refocuses() {
        let mut dialog = ConfirmDialog::new();
        dialog.open("delete?", Action::Delete);
        dialog.toggle_focus();
        dialog.open("export?", Action::Export);

        assert_eq!(dialog.focus(), DialogFocus::Confirm);
        assert_eq!(dialog.activate_focused(), Some(Action::Export));
    }

    #[test]
    fn activating_focused_cancel_closes_without_action() {
        let mut dialog = ConfirmDialog::new();
        dialog.open("delete?", Action::Delete);
        dialog.toggle_focus();

        assert_eq!(dialog.focus(), DialogFocus::Cancel);
        assert_eq!(dialog.activate_focused(), None);
        assert!(!dialog.is_open());
    }

    #[test]
    fn clicks_resolve_by_button() {
        let layout = DialogLayout::centered(vec2(820.0, 690.0));
        let mut dialog = ConfirmDialog::new();

        dialog.open("delete?", Action::Delete);
        assert_eq!(dialog.click_at(&layout, layout.panel.point()), None);
        assert!(dialog.is_open());
        assert_eq!(dialog.click_at(&layout, layout.confirm.center()), Some(Action::Delete));
        assert!(!dialog.is_open());

        dialog.open("export?", Action::Export);
        assert_eq!(dialog.click_at(&layout, layout.cancel.center()), None);
        assert!(!dialog.is_open());
        assert_eq!(dialog.confirm(), None);
    }

    #[test]
    fn closed_dialog_ignores_clicks() {
        let layout = DialogLayout::centered(vec2(820.0, 690.0));
        let mut dialog: ConfirmDialog<Action> = ConfirmDialog::new();
        assert_eq!(dialog.click_at(&layout, layout.confirm.center()), None);
    }
}
