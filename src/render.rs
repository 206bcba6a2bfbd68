//! Terminal rendering of a [`View`].

use colored::Colorize;

use crate::history::Filter;
use crate::oracle::AnswerKind;
use crate::session::{HistoryView, ResultView, View};

/// The inline feedback line under the prompt.
pub fn format_feedback(view: &View) -> String {
    if view.input_error {
        format!("  ✗ {}", view.helper.red())
    } else {
        format!("  {}", view.helper.dimmed())
    }
}

/// The colored label, image link and optional message.
pub fn format_result(result: &ResultView) -> String {
    let mut out = String::new();
    let label = result
        .label
        .truecolor(result.color.0, result.color.1, result.color.2)
        .bold();
    out.push_str(&format!("\n  {label}\n"));

    if let Some(image) = &result.image {
        out.push_str(&format!("  🖼  {}\n", image.underline()));
    }
    if let Some(message) = &result.message {
        out.push_str(&format!("  {}\n", message.red()));
    }
    out
}

/// The history panel with filter tallies, newest first.
pub fn format_history(history: &HistoryView) -> String {
    let mut out = String::new();

    let tabs: Vec<String> = history
        .counts
        .iter()
        .map(|(filter, count)| {
            let tab = format!("{} ({count})", filter.label());
            if *filter == history.filter {
                tab.bold().underline().to_string()
            } else {
                tab.dimmed().to_string()
            }
        })
        .collect();
    out.push_str(&format!("\n  historial  {}\n", tabs.join("  ")));

    if history.entries.is_empty() {
        let note = match history.filter {
            Filter::All => "  no questions yet\n".to_string(),
            other => format!("  no \"{}\" answers yet\n", other.label()),
        };
        out.push_str(&note);
        return out;
    }

    let width = history
        .entries
        .iter()
        .map(|e| e.question.chars().count())
        .max()
        .unwrap_or(0);

    for entry in &history.entries {
        let color = AnswerKind::of(&entry.answer).color();
        let pad = width - entry.question.chars().count();
        out.push_str(&format!(
            "  {}{}  {}\n",
            entry.question,
            " ".repeat(pad),
            entry.answer.to_uppercase().truecolor(color.0, color.1, color.2)
        ));
    }
    out
}

/// Print whatever the view currently holds.
pub fn print_view(view: &View) {
    if view.input_error {
        println!("{}", format_feedback(view));
    }
    if let Some(result) = &view.result {
        print!("{}", format_result(result));
    }
    if let Some(history) = &view.history {
        print!("{}", format_history(history));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::oracle::Rgb;

    fn entry(question: &str, answer: &str) -> HistoryEntry {
        HistoryEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn result_shows_label_image_and_message() {
        let text = format_result(&ResultView {
            label: "YES".to_string(),
            color: Rgb(76, 175, 80),
            image: Some("https://x/y.gif".to_string()),
            message: Some("hola".to_string()),
        });
        assert!(text.contains("YES"));
        assert!(text.contains("https://x/y.gif"));
        assert!(text.contains("hola"));
    }

    #[test]
    fn result_without_image_has_no_link() {
        let text = format_result(&ResultView {
            label: "NO".to_string(),
            color: Rgb(244, 67, 54),
            image: None,
            message: None,
        });
        assert!(text.contains("NO"));
        assert!(!text.contains("🖼"));
    }

    #[test]
    fn history_lists_entries_and_counts() {
        let text = format_history(&HistoryView {
            filter: Filter::All,
            counts: [
                (Filter::All, 2),
                (Filter::Yes, 1),
                (Filter::No, 1),
                (Filter::Maybe, 0),
            ],
            entries: vec![entry("b?", "no"), entry("long question?", "Yes")],
        });
        assert!(text.contains("all (2)"));
        assert!(text.contains("maybe (0)"));
        assert!(text.contains("long question?"));
        assert!(text.contains("YES"));
        assert!(text.find("b?").unwrap() < text.find("long question?").unwrap());
    }

    #[test]
    fn empty_filtered_history_says_so() {
        let text = format_history(&HistoryView {
            filter: Filter::Maybe,
            counts: [
                (Filter::All, 0),
                (Filter::Yes, 0),
                (Filter::No, 0),
                (Filter::Maybe, 0),
            ],
            entries: Vec::new(),
        });
        assert!(text.contains("no \"maybe\" answers yet"));
    }
}
