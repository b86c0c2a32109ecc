//! Editors and the editor roster

use serde::{Deserialize, Serialize};

/// A newsroom editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Editor {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub department: String,
}

impl Editor {
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Editor {
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
            department: department.into(),
        }
    }

    /// Owned reference to this editor for embedding in news and schedules
    pub fn to_ref(&self) -> EditorRef {
        EditorRef {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Identifying fields of an editor, stored inside news and schedule records.
///
/// Records are reloaded from disk as fresh values, so ownership checks compare
/// `email` rather than any live editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditorRef {
    pub name: String,
    pub email: String,
}

impl EditorRef {
    pub fn is(&self, editor: &Editor) -> bool {
        self.email == editor.email
    }
}

/// Insertion-ordered roster of editors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditorManager {
    #[serde(default)]
    editors: Vec<Editor>,
}

impl EditorManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an editor. Duplicate (name, email) pairs are accepted.
    pub fn add_editor(&mut self, editor: Editor) {
        self.editors.push(editor);
    }

    /// First editor whose name and email both match exactly
    pub fn find_editor(&self, name: &str, email: &str) -> Option<&Editor> {
        self.editors
            .iter()
            .find(|editor| editor.name == name && editor.email == email)
    }

    /// Resolve an embedded reference back to the full editor record
    pub fn resolve(&self, editor_ref: &EditorRef) -> Option<&Editor> {
        self.find_editor(&editor_ref.name, &editor_ref.email)
    }

    pub fn list(&self) -> &[Editor] {
        &self.editors
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}
