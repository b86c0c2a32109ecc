//! Output formatting utilities

use crate::domain::{format_timestamp, Editor, News, Schedule};

const NEWS_RULE: &str =
    "------------------------------------------------------------------------------------------------";
const SCHEDULE_RULE: &str = "---------------------------------------------------";

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Format the full news table
pub fn format_news_table<'a>(news: impl IntoIterator<Item = &'a News>) -> String {
    let mut output = String::new();
    output.push_str(NEWS_RULE);
    output.push('\n');
    output.push_str(&format!(
        "{:<40} | {:<20} | {:<15} | {}\n",
        "Title", "Broadcast Time", "Category", "Editor"
    ));
    output.push_str(NEWS_RULE);
    output.push('\n');

    for item in news {
        output.push_str(&format!(
            "{:<40} | {:<20} | {:<15} | {}\n",
            or_na(&item.title),
            format_timestamp(&item.broadcast_time),
            or_na(&item.category.name),
            or_na(&item.editor.name)
        ));
    }

    output.push_str(NEWS_RULE);
    output.push('\n');
    output
}

/// Format the items of one category as title/summary blocks
pub fn format_category_view(category: &str, news: &[&News]) -> String {
    let mut output = format!("=== {} News ===\n\n", category);

    if news.is_empty() {
        output.push_str("No news found\n");
        return output;
    }

    for item in news {
        output.push_str(&format!(
            "Title: {}\nSummary: {}\nBroadcast Time: {}\n\n",
            item.title,
            item.summary,
            format_timestamp(&item.broadcast_time)
        ));
    }
    output
}

/// Format a single item with all its fields.
///
/// `author` is the roster entry behind the item's editor reference, when the
/// editor is still registered.
pub fn format_news_detail(item: &News, author: Option<&Editor>) -> String {
    let mut output = format!(
        "Title: {}\nSummary: {}\nBroadcast Time: {}\nCategory: {}\nEditor: {} <{}>\n",
        item.title,
        item.summary,
        format_timestamp(&item.broadcast_time),
        item.category.name,
        item.editor.name,
        item.editor.email
    );

    match author {
        Some(editor) => output.push_str(&format!(
            "Phone: {}\nDepartment: {}\n",
            or_na(&editor.phone_number),
            editor.department
        )),
        None => output.push_str("Editor is no longer registered\n"),
    }
    output
}

/// Format per-category counts
pub fn format_category_counts(counts: &[(&str, usize)]) -> String {
    if counts.is_empty() {
        return "No categories configured\n".to_string();
    }

    let mut output = String::new();
    for (category, count) in counts {
        output.push_str(&format!("{:<15} {}\n", category, count));
    }
    output
}

/// Format the broadcast schedule table
pub fn format_schedule_table(schedules: &[Schedule]) -> String {
    let mut output = String::new();
    output.push_str(SCHEDULE_RULE);
    output.push('\n');
    output.push_str(&format!("{:<20} | {:<10} | {}\n", "Time", "Content", "Editor"));
    output.push_str(SCHEDULE_RULE);
    output.push('\n');

    for schedule in schedules {
        output.push_str(&format!(
            "{:<20} | {:<10} | {}\n",
            format_timestamp(&schedule.time),
            schedule.content,
            or_na(&schedule.editor.name)
        ));
    }

    output.push_str(SCHEDULE_RULE);
    output.push('\n');
    output
}

/// Format the editor roster
pub fn format_editor_list(editors: &[Editor]) -> String {
    if editors.is_empty() {
        return "No editors found\n".to_string();
    }

    let mut output = String::new();
    for editor in editors {
        output.push_str(&format!(
            "Name: {}, Phone: {}, Email: {}, Dept: {}\n",
            editor.name, editor.phone_number, editor.email, editor.department
        ));
    }
    output
}
