//! User-visible strings, one table per locale.
//!
//! Every label, badge and validation message the dashboard shows comes from a
//! `Messages` table so the front ends never hard-code a language.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    PtBr,
}

impl Locale {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en_us" | "english" => Some(Locale::En),
            "pt" | "pt-br" | "pt_br" | "portuguese" => Some(Locale::PtBr),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-BR",
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::PtBr => &PT_BR,
        }
    }
}

#[derive(Debug)]
pub struct Messages {
    pub locale: Locale,

    // validation
    pub selection_required: &'static str,
    pub unknown_lottery: &'static str,
    pub not_a_number: &'static str,
    pub must_be_positive: &'static str,
    pub max_exceeded: &'static str,
    pub invalid_last_n: &'static str,

    // health badge
    pub health_checking: &'static str,
    pub health_connected: &'static str,
    pub health_error: &'static str,

    // page chrome
    pub title: &'static str,
    pub subtitle: &'static str,
    pub generating: &'static str,
    pub unknown_error: &'static str,
    pub catalog_empty: &'static str,

    // form
    pub field_loteria: &'static str,
    pub field_orcamento: &'static str,
    pub field_backtest: &'static str,
    pub field_last_n: &'static str,
    pub select_placeholder: &'static str,
    pub budget_placeholder: &'static str,
    pub option_connective: &'static str,
    pub estimated_games_suffix: &'static str,
    pub submit: &'static str,
    pub submit_busy: &'static str,

    // results
    pub total_games: &'static str,
    pub v3_games: &'static str,
    pub v5_games: &'static str,
    pub generated_games: &'static str,
    pub col_tag: &'static str,
    pub col_numbers: &'static str,
    pub backtest_results: &'static str,
    pub avg_hits: &'static str,
    pub max_hits: &'static str,
    pub draws_tested: &'static str,
    pub col_game: &'static str,
    pub col_avg: &'static str,
    pub col_max: &'static str,
    pub col_min: &'static str,
    pub server_notice: &'static str,
}

pub static EN: Messages = Messages {
    locale: Locale::En,

    selection_required: "Selection required",
    unknown_lottery: "Not an available lottery",
    not_a_number: "Must be a number",
    must_be_positive: "Must be greater than zero",
    max_exceeded: "Must be at most 1000",
    invalid_last_n: "Must be a whole number of draws",

    health_checking: "Checking API...",
    health_connected: "API Connected",
    health_error: "API Unavailable",

    title: "Lottery Intelligence",
    subtitle: "AI-powered number generation and backtesting",
    generating: "Generating games...",
    unknown_error: "An unknown error occurred",
    catalog_empty: "No lotteries available",

    field_loteria: "Lottery",
    field_orcamento: "Budget (R$)",
    field_backtest: "Run backtest analysis",
    field_last_n: "Backtest last N draws (blank for all)",
    select_placeholder: "Select a lottery...",
    budget_placeholder: "Enter an amount",
    option_connective: "of",
    estimated_games_suffix: "games",
    submit: "Generate Games",
    submit_busy: "Generating...",

    total_games: "Total Games",
    v3_games: "V3 Games",
    v5_games: "V5 Games",
    generated_games: "Generated Games",
    col_tag: "Tag",
    col_numbers: "Numbers",
    backtest_results: "Backtest Results",
    avg_hits: "Avg Hits",
    max_hits: "Max Hits",
    draws_tested: "Draws Tested",
    col_game: "Game",
    col_avg: "Avg",
    col_max: "Max",
    col_min: "Min",
    server_notice: "Server notice",
};

pub static PT_BR: Messages = Messages {
    locale: Locale::PtBr,

    selection_required: "Selecione uma loteria",
    unknown_lottery: "Loteria indisponivel",
    not_a_number: "O valor deve ser um numero",
    must_be_positive: "O valor deve ser maior que zero",
    max_exceeded: "O valor deve ser no maximo R$1.000",
    invalid_last_n: "Informe um numero inteiro de sorteios",

    health_checking: "Verificando API...",
    health_connected: "API Conectada",
    health_error: "API Indisponivel",

    title: "Lottery Intelligence",
    subtitle: "Geracao de numeros e backtesting com IA",
    generating: "Gerando jogos...",
    unknown_error: "Ocorreu um erro desconhecido",
    catalog_empty: "Nenhuma loteria disponivel",

    field_loteria: "Loteria",
    field_orcamento: "Orcamento (R$)",
    field_backtest: "Executar analise de backtest",
    field_last_n: "Backtest nos ultimos N sorteios (vazio para todos)",
    select_placeholder: "Selecione uma loteria...",
    budget_placeholder: "Informe o valor",
    option_connective: "de",
    estimated_games_suffix: "jogos",
    submit: "Gerar Jogos",
    submit_busy: "Gerando...",

    total_games: "Total de Jogos",
    v3_games: "Jogos V3",
    v5_games: "Jogos V5",
    generated_games: "Jogos Gerados",
    col_tag: "Tag",
    col_numbers: "Numeros",
    backtest_results: "Resultados do Backtest",
    avg_hits: "Media de Acertos",
    max_hits: "Maximo de Acertos",
    draws_tested: "Sorteios Testados",
    col_game: "Jogo",
    col_avg: "Media",
    col_max: "Max",
    col_min: "Min",
    server_notice: "Aviso do servidor",
};
