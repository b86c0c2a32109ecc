//! News items, their categories, and the news desk collection

use crate::domain::editor::{Editor, EditorRef};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Category label of a news item.
///
/// Copied from the authoring editor's department when the item is created and
/// never re-derived afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Category { name: name.into() }
    }
}

/// A news item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct News {
    pub title: String,
    pub summary: String,
    pub broadcast_time: NaiveDateTime,
    pub category: Category,
    pub editor: EditorRef,
}

impl News {
    /// Create a news item authored by `editor`, filed under its department
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        broadcast_time: NaiveDateTime,
        editor: &Editor,
    ) -> Self {
        News {
            title: title.into(),
            summary: summary.into(),
            broadcast_time,
            category: Category::new(editor.department.clone()),
            editor: editor.to_ref(),
        }
    }

    /// Whether `editor` may change this item.
    ///
    /// Requires both the author's email and a category equal to the editor's
    /// current department, so a story stays locked after a department change.
    pub fn is_owned_by(&self, editor: &Editor) -> bool {
        self.editor.is(editor) && self.category.name == editor.department
    }
}

/// Insertion-ordered collection of news items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewsManager {
    #[serde(default)]
    news: Vec<News>,
}

impl NewsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_news(&mut self, news: News) {
        self.news.push(news);
    }

    /// First item with exactly this title
    pub fn find_by_title(&self, title: &str) -> Option<&News> {
        self.news.iter().find(|news| news.title == title)
    }

    /// Overwrite summary and broadcast time of the first item titled `title`.
    ///
    /// No ownership check; see [`NewsManager::find_owned_mut`].
    pub fn edit_news(
        &mut self,
        title: &str,
        new_summary: impl Into<String>,
        new_broadcast_time: NaiveDateTime,
    ) -> bool {
        match self.news.iter_mut().find(|news| news.title == title) {
            Some(news) => {
                news.summary = new_summary.into();
                news.broadcast_time = new_broadcast_time;
                true
            }
            None => false,
        }
    }

    /// Remove the first item titled `title`
    pub fn delete_news(&mut self, title: &str) -> bool {
        match self.news.iter().position(|news| news.title == title) {
            Some(index) => {
                self.news.remove(index);
                true
            }
            None => false,
        }
    }

    /// All items whose category name equals `category`, in insertion order
    pub fn filter_by_category(&self, category: &str) -> Vec<&News> {
        self.news
            .iter()
            .filter(|news| news.category.name == category)
            .collect()
    }

    /// First item titled `title` that `editor` is allowed to change
    pub fn find_owned_mut(&mut self, title: &str, editor: &Editor) -> Option<&mut News> {
        self.news
            .iter_mut()
            .find(|news| news.title == title && news.is_owned_by(editor))
    }

    /// Remove the first item titled `title` that `editor` is allowed to change
    pub fn delete_owned(&mut self, title: &str, editor: &Editor) -> Option<News> {
        let index = self
            .news
            .iter()
            .position(|news| news.title == title && news.is_owned_by(editor))?;
        Some(self.news.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &News> {
        self.news.iter()
    }

    pub fn len(&self) -> usize {
        self.news.len()
    }

    pub fn is_empty(&self) -> bool {
        self.news.is_empty()
    }
}
