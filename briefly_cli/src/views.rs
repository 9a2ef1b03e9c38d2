use std::time::Duration;

use briefly_core::history::dto::{HistoryLog, SummaryRecord};
use briefly_core::usage::handler::credits_for_duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Login,
    Results,
    History,
}

impl View {
    pub fn prompt(self) -> &'static str {
        match self {
            View::Home => "briefly> ",
            View::Login => "briefly (login)> ",
            View::Results => "briefly (results)> ",
            View::History => "briefly (history)> ",
        }
    }
}

pub struct CreditPack {
    pub name: &'static str,
    pub price: &'static str,
    pub credits: &'static str,
    pub note: &'static str,
}

pub const CREDIT_PACKS: &[CreditPack] = &[
    CreditPack {
        name: "Free",
        price: "£0",
        credits: "1.5 hours",
        note: "3×30min videos",
    },
    CreditPack {
        name: "Lite Pack",
        price: "£5.99",
        credits: "10 credits",
        note: "£0.60/credit",
    },
    CreditPack {
        name: "Pro Pack",
        price: "£17.99",
        credits: "50 credits",
        note: "£0.36/credit • Best Value",
    },
    CreditPack {
        name: "Ultra Pack",
        price: "£49.99",
        credits: "100 credits",
        note: "£0.50/credit",
    },
];

pub fn render_home() -> String {
    "Briefly\nWatch less. Know more.\n\nPaste a YouTube URL with `summarize <url>`.".to_string()
}

pub fn render_results(record: &SummaryRecord, credits: u64) -> String {
    format!(
        "Summary\n{}\n\n{}\n\n{} characters | Credits remaining: {}\n\n`save` to keep it, `another` to summarize another video.",
        record.source_url(),
        record.summary_text(),
        record.char_count(),
        credits
    )
}

pub fn render_history(log: &HistoryLog) -> String {
    if log.is_empty() {
        return "History\n\nNo summaries saved yet. Use `summarize <url>` to summarize a video.".to_string();
    }

    let entries = log
        .iter()
        .enumerate()
        .map(|(i, record)| {
            format!(
                "{}. {}\n   {} • {} characters",
                i + 1,
                record.source_url(),
                record.created_at().format("%Y-%m-%d"),
                record.char_count()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("History ({} saved)\n\n{}\n\n`view <n>` to re-open, `delete <n>` to remove.", log.len(), entries)
}

pub fn render_upgrade_prompt() -> String {
    let packs = CREDIT_PACKS
        .iter()
        .map(|pack| format!("  {:<11} {:>7}  {:<11} {}", pack.name, pack.price, pack.credits, pack.note))
        .collect::<Vec<_>>()
        .join("\n");

    let example = credits_for_duration(Duration::from_secs(90 * 60));

    format!(
        "Purchase Credits\nYou've run out of credits. Purchase more to continue summarizing videos.\n\n{}\n\nEach credit equals 1 hour of YouTube video time. Video duration is rounded up to the nearest credit, so a 90-minute video uses {} credits.",
        packs, example
    )
}

pub fn render_error(title: &str, message: &str) -> String {
    format!("✖ {}: {}", title, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str, url: &str) -> SummaryRecord {
        let created_at = "2024-02-03T10:00:00Z".parse().unwrap();
        SummaryRecord::new(text, url, created_at)
    }

    #[test]
    fn test_render_results() {
        let out = render_results(&record("Five.", "https://youtu.be/abc"), 4);

        assert!(out.contains("https://youtu.be/abc"));
        assert!(out.contains("Five."));
        assert!(out.contains("5 characters"));
        assert!(out.contains("Credits remaining: 4"));
    }

    #[test]
    fn test_render_history_numbers_from_one() {
        let mut log = HistoryLog::default();
        log.push_front(record("older", "https://youtu.be/1"));
        log.push_front(record("newer", "https://youtu.be/2"));

        let out = render_history(&log);
        assert!(out.contains("1. https://youtu.be/2"));
        assert!(out.contains("2. https://youtu.be/1"));
        assert!(out.contains("2024-02-03"));
    }

    #[test]
    fn test_render_empty_history() {
        assert!(render_history(&HistoryLog::default()).contains("No summaries saved yet"));
    }

    #[test]
    fn test_upgrade_prompt_lists_every_pack() {
        let out = render_upgrade_prompt();
        for pack in CREDIT_PACKS {
            assert!(out.contains(pack.name));
            assert!(out.contains(pack.price));
        }
        assert!(out.contains("a 90-minute video uses 2 credits"));
    }
}
