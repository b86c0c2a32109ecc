//! News desk use cases: publish, revise, retract and browse

use crate::domain::{parse_timestamp, Editor, News, NewsManager};
use crate::error::{NewsroomError, Result};

/// Requested changes to an existing news item. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct NewsRevision {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub broadcast_time: Option<String>,
}

impl NewsRevision {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.summary.is_none() && self.broadcast_time.is_none()
    }
}

/// File a new item under the author's department
pub fn publish(
    news: &mut NewsManager,
    author: &Editor,
    title: &str,
    summary: &str,
    broadcast_time: &str,
) -> Result<News> {
    let broadcast_time = parse_timestamp(broadcast_time)?;
    let item = News::new(title, summary, broadcast_time, author);

    log::info!(
        "{} published '{}' under {}",
        author.email,
        item.title,
        item.category.name
    );
    news.add_news(item.clone());
    Ok(item)
}

/// Apply `revision` to the item titled `title`, if `editor` owns it.
///
/// Ownership means same email and a category equal to the editor's current
/// department. Anything else is reported exactly like a missing title.
pub fn revise(
    news: &mut NewsManager,
    editor: &Editor,
    title: &str,
    revision: NewsRevision,
) -> Result<News> {
    // Validate before touching anything
    let broadcast_time = revision
        .broadcast_time
        .as_deref()
        .map(parse_timestamp)
        .transpose()?;

    let item = news
        .find_owned_mut(title, editor)
        .ok_or_else(|| NewsroomError::NewsNotFound(title.to_string()))?;

    if let Some(new_title) = revision.title {
        item.title = new_title;
    }
    if let Some(summary) = revision.summary {
        item.summary = summary;
    }
    if let Some(time) = broadcast_time {
        item.broadcast_time = time;
    }

    log::info!("{} revised '{}'", editor.email, title);
    Ok(item.clone())
}

/// Remove the item titled `title`, if `editor` owns it
pub fn retract(news: &mut NewsManager, editor: &Editor, title: &str) -> Result<News> {
    let removed = news
        .delete_owned(title, editor)
        .ok_or_else(|| NewsroomError::NewsNotFound(title.to_string()))?;

    log::info!("{} retracted '{}'", editor.email, title);
    Ok(removed)
}

/// Look up a single item by title
pub fn lookup<'a>(news: &'a NewsManager, title: &str) -> Result<&'a News> {
    news.find_by_title(title)
        .ok_or_else(|| NewsroomError::NewsNotFound(title.to_string()))
}

/// Items filed under `category`, in publication order
pub fn browse<'a>(news: &'a NewsManager, category: &str) -> Vec<&'a News> {
    news.filter_by_category(category)
}

/// Number of items per category, in the order the categories are given
pub fn category_counts<'a>(
    news: &NewsManager,
    categories: &'a [String],
) -> Vec<(&'a str, usize)> {
    categories
        .iter()
        .map(|category| (category.as_str(), news.filter_by_category(category).len()))
        .collect()
}
