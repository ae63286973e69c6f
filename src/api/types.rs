use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub db_exists: bool,
    #[serde(default)]
    pub db_tables: Vec<String>,
}

/// One entry of the lottery catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotteryConfig {
    pub name: String,
    pub preco: f64,
    pub total_nums: u32,
    pub escolhe: u32,
    pub orcamento_alvo: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotteriesResponse {
    pub lotteries: Vec<LotteryConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationJobRequest {
    pub loteria: String,
    pub orcamento: f64,
    pub run_backtest: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtest_last_n: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub numbers: Vec<u32>,
    pub source: String,
    pub tag: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub total_games: u64,
    pub v3_count: u64,
    pub v5_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerGameStat {
    /// Zero-based position in `GenerationJobResponse::games`.
    pub game_index: usize,
    pub avg_hits: f64,
    pub max_hits: u32,
    pub min_hits: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    pub global_avg: f64,
    pub global_max: u32,
    pub tested_draws: u64,
    #[serde(default)]
    pub per_game_stats: Vec<PerGameStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationJobResponse {
    pub job_id: String,
    pub loteria: String,
    pub orcamento: f64,
    pub games: Vec<GameResult>,
    pub stats: GenerationStats,
    #[serde(default)]
    pub backtest: Option<BacktestResult>,
    #[serde(default)]
    pub error: Option<String>,
}
