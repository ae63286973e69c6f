//! Read-only projection of a generation response into what the results
//! panel shows. Numbers are taken from the payload as-is.

use crate::api::{BacktestResult, GenerationJobResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    Amber,
    Green,
    Neutral,
}

/// Case-insensitive substring match; "v3" wins over "v5".
pub fn tag_style(tag: &str) -> TagStyle {
    let lower = tag.to_lowercase();
    if lower.contains("v3") {
        TagStyle::Amber
    } else if lower.contains("v5") {
        TagStyle::Green
    } else {
        TagStyle::Neutral
    }
}

pub fn pad_number(n: u32) -> String {
    format!("{:02}", n)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Total,
    V3,
    V5,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub kind: StatKind,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    /// 1-based, as displayed.
    pub position: usize,
    pub tag: String,
    pub style: TagStyle,
    pub numbers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerGameRow {
    pub label: String,
    pub avg: String,
    pub max: u32,
    pub min: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BacktestCard {
    pub global_avg: String,
    pub global_max: u32,
    pub tested_draws: u64,
    /// `None` when the server sent no per-game breakdown.
    pub per_game: Option<Vec<PerGameRow>>,
}

impl BacktestCard {
    fn build(bt: &BacktestResult) -> Self {
        let per_game = if bt.per_game_stats.is_empty() {
            None
        } else {
            Some(
                bt.per_game_stats
                    .iter()
                    .map(|pg| PerGameRow {
                        label: format!("#{}", pg.game_index + 1),
                        avg: format!("{:.2}", pg.avg_hits),
                        max: pg.max_hits,
                        min: pg.min_hits,
                    })
                    .collect(),
            )
        };
        Self {
            global_avg: format!("{:.2}", bt.global_avg),
            global_max: bt.global_max,
            tested_draws: bt.tested_draws,
            per_game,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub job_id: String,
    pub loteria: String,
    pub orcamento: f64,
    pub stats: [StatCard; 3],
    pub games: Vec<GameRow>,
    pub backtest: Option<BacktestCard>,
    pub notice: Option<String>,
}

impl ResultsView {
    pub fn build(result: Option<&GenerationJobResponse>) -> Option<Self> {
        let result = result?;
        let stats = [
            StatCard { kind: StatKind::Total, value: result.stats.total_games },
            StatCard { kind: StatKind::V3, value: result.stats.v3_count },
            StatCard { kind: StatKind::V5, value: result.stats.v5_count },
        ];
        let games = result
            .games
            .iter()
            .enumerate()
            .map(|(idx, game)| GameRow {
                position: idx + 1,
                tag: game.tag.clone(),
                style: tag_style(&game.tag),
                numbers: game.numbers.iter().copied().map(pad_number).collect(),
            })
            .collect();
        Some(Self {
            job_id: result.job_id.clone(),
            loteria: result.loteria.clone(),
            orcamento: result.orcamento,
            stats,
            games,
            backtest: result.backtest.as_ref().map(BacktestCard::build),
            notice: result.error.clone().filter(|e| !e.trim().is_empty()),
        })
    }
}
