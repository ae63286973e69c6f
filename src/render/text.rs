use std::fmt::Write;

use crate::api::LotteryConfig;
use crate::form::lottery_option_label;
use crate::health::HealthStatus;
use crate::messages::Messages;
use crate::render::stat_label;
use crate::results::{ResultsView, StatKind, TagStyle};

const RESET: &str = "\x1b[0m";

fn paint(s: &str, code: &str, ansi: bool) -> String {
    if ansi {
        format!("\x1b[{}m{}{}", code, s, RESET)
    } else {
        s.to_string()
    }
}

fn tag_code(style: TagStyle) -> &'static str {
    match style {
        TagStyle::Amber => "33",
        TagStyle::Green => "32",
        TagStyle::Neutral => "90",
    }
}

fn health_code(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Checking => "33",
        HealthStatus::Connected => "32",
        HealthStatus::Error => "31",
    }
}

pub fn header(status: HealthStatus, msgs: &Messages, ansi: bool) -> String {
    format!(
        "{}  {} {}\n{}\n",
        paint(msgs.title, "1", ansi),
        paint("●", health_code(status), ansi),
        status.label(msgs),
        msgs.subtitle
    )
}

pub fn error_banner(msg: &str, ansi: bool) -> String {
    paint(&format!("! {}", msg), "31", ansi)
}

/// Numbered selector, 1-based; entry 0 is the placeholder.
pub fn catalog_menu(catalog: &[LotteryConfig], msgs: &Messages) -> String {
    if catalog.is_empty() {
        return format!("  {}\n", msgs.catalog_empty);
    }
    let mut out = format!("{}:\n  0) {}\n", msgs.field_loteria, msgs.select_placeholder);
    for (idx, lottery) in catalog.iter().enumerate() {
        let _ = writeln!(out, "  {}) {}", idx + 1, lottery_option_label(lottery, msgs));
    }
    out
}

pub fn estimated_games_line(games: Option<u64>, msgs: &Messages) -> Option<String> {
    games.map(|n| format!("~{} {}", n, msgs.estimated_games_suffix))
}

pub fn results(view: Option<&ResultsView>, msgs: &Messages, ansi: bool) -> String {
    let Some(view) = view else {
        return String::new();
    };
    let mut out = String::new();

    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "{}: {}", msgs.server_notice, notice);
    }

    // Stat cards
    let cells: Vec<String> = view
        .stats
        .iter()
        .map(|card| {
            let value = card.value.to_string();
            let value = match card.kind {
                StatKind::Total => value,
                StatKind::V3 => paint(&value, tag_code(TagStyle::Amber), ansi),
                StatKind::V5 => paint(&value, tag_code(TagStyle::Green), ansi),
            };
            format!("{}: {}", stat_label(card.kind, msgs), value)
        })
        .collect();
    let _ = writeln!(out, "{}\n", cells.join("   "));

    // Games table
    let _ = writeln!(out, "{}", paint(msgs.generated_games, "1", ansi));
    let tag_width = view
        .games
        .iter()
        .map(|g| g.tag.chars().count())
        .max()
        .unwrap_or(0)
        .max(3)
        + 2;
    let _ = writeln!(
        out,
        "  {:>4}  {:<w$}  {}",
        "#",
        msgs.col_tag,
        msgs.col_numbers,
        w = tag_width
    );
    for game in &view.games {
        let tag = format!("[{}]", game.tag);
        let pad = " ".repeat(tag_width.saturating_sub(tag.chars().count()));
        let _ = writeln!(
            out,
            "  {:>4}  {}{}  {}",
            game.position,
            paint(&tag, tag_code(game.style), ansi),
            pad,
            game.numbers.join(" ")
        );
    }

    // Backtest card
    if let Some(bt) = &view.backtest {
        let _ = writeln!(out, "\n{}", paint(msgs.backtest_results, "1", ansi));
        let _ = writeln!(
            out,
            "  {}: {}   {}: {}   {}: {}",
            msgs.avg_hits,
            bt.global_avg,
            msgs.max_hits,
            bt.global_max,
            msgs.draws_tested,
            bt.tested_draws
        );
        if let Some(rows) = &bt.per_game {
            let _ = writeln!(
                out,
                "  {:<6} {:>6} {:>4} {:>4}",
                msgs.col_game, msgs.col_avg, msgs.col_max, msgs.col_min
            );
            for row in rows {
                let _ = writeln!(
                    out,
                    "  {:<6} {:>6} {:>4} {:>4}",
                    row.label, row.avg, row.max, row.min
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BacktestResult, GameResult, GenerationJobResponse, GenerationStats};
    use crate::messages::EN;

    fn view(backtest: Option<BacktestResult>) -> ResultsView {
        let resp = GenerationJobResponse {
            job_id: "j".into(),
            loteria: "megasena".into(),
            orcamento: 10.0,
            games: vec![GameResult { numbers: vec![5, 12], source: "s".into(), tag: "v3".into() }],
            stats: GenerationStats { total_games: 1, v3_count: 1, v5_count: 0 },
            backtest,
            error: None,
        };
        ResultsView::build(Some(&resp)).unwrap()
    }

    #[test]
    fn test_nothing_for_absent_result() {
        assert_eq!(results(None, &EN, false), "");
    }

    #[test]
    fn test_games_and_no_backtest_section() {
        let out = results(Some(&view(None)), &EN, false);
        assert!(out.contains("Total Games: 1"));
        assert!(out.contains("[v3]"));
        assert!(out.contains("05 12"));
        assert!(!out.contains(EN.backtest_results));
    }

    #[test]
    fn test_backtest_headlines_without_table() {
        let bt = BacktestResult {
            global_avg: 2.5,
            global_max: 4,
            tested_draws: 10,
            per_game_stats: vec![],
        };
        let out = results(Some(&view(Some(bt))), &EN, false);
        assert!(out.contains("Avg Hits: 2.50"));
        assert!(out.contains("Draws Tested: 10"));
        assert!(!out.contains(EN.col_min));
    }

    #[test]
    fn test_estimated_games_line() {
        assert_eq!(estimated_games_line(Some(4), &EN).as_deref(), Some("~4 games"));
        assert_eq!(estimated_games_line(None, &EN), None);
    }
}
