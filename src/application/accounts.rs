//! Editor sign-up and sign-in

use crate::domain::{Editor, EditorManager};
use crate::error::{NewsroomError, Result};

/// Register a new editor. No uniqueness check, matching the roster semantics.
pub fn sign_up(editors: &mut EditorManager, editor: Editor) -> &Editor {
    log::info!("Signing up editor {} <{}>", editor.name, editor.email);
    editors.add_editor(editor);
    &editors.list()[editors.len() - 1]
}

/// Look up an editor by name and email
pub fn sign_in(editors: &EditorManager, name: &str, email: &str) -> Result<Editor> {
    editors.find_editor(name, email).cloned().ok_or_else(|| {
        log::debug!("No editor matches {} <{}>", name, email);
        NewsroomError::EditorNotFound(format!("{} <{}>", name, email))
    })
}
