use std::fmt::Write;

use shelf_core::{Book, LoadStatus, ShelfViewModel};

use super::constants::*;

pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn render(view: &ShelfViewModel) -> String {
    let mut out = String::new();

    match &view.load {
        LoadStatus::Pending => {
            let _ = writeln!(out, "{LOADING_TEXT}");
            return out;
        }
        LoadStatus::Failed(failure) => {
            let _ = writeln!(out, "{LOAD_FAILED_TEXT} ({})", failure.message);
        }
        LoadStatus::Loaded { .. } if view.items.is_empty() => {
            let _ = writeln!(out, "{EMPTY_TEXT}");
        }
        LoadStatus::Loaded { .. } => {
            for book in &view.items {
                render_card(&mut out, book);
            }
        }
    }

    let prev = if view.can_go_previous { "<" } else { " " };
    let next = if view.can_go_next { ">" } else { " " };
    let _ = writeln!(out, "{prev} {} {next}    {NAV_HINT}", view.page_indicator);
    out
}

fn render_card(out: &mut String, book: &Book) {
    let _ = writeln!(out, "{CARD_RULE}");

    let tags: Vec<String> = book
        .tags
        .iter()
        .take(MAX_TAGS)
        .map(|tag| format!("[{tag}]"))
        .collect();
    if !tags.is_empty() {
        let _ = writeln!(out, "{}", tags.join(" "));
    }
    if let Some(title) = &book.title {
        let _ = writeln!(out, "{title}");
    }
    if let Some(annotation) = &book.annotation {
        let _ = writeln!(out, "  {annotation}");
    }
    if let Some(cover) = &book.cover {
        let _ = writeln!(out, "  cover: {cover}");
    }
    if let Some(url) = &book.read_url {
        let _ = writeln!(out, "  {READ_LABEL}: {url}");
    }
    let _ = writeln!(
        out,
        "  {REASON_LABEL} {}",
        book.reason.as_deref().unwrap_or_default()
    );
}
