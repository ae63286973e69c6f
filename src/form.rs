//! Generation form: raw input, validation, and the derived previews shown
//! next to the inputs.
//!
//! `GenerationFormInput` is what the user typed. `validate` turns it into a
//! `GenerationFormValues` or reports the first failing rule of each field.

use crate::api::{GenerationJobRequest, LotteryConfig};
use crate::messages::Messages;

pub const MAX_BUDGET: f64 = 1000.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationFormInput {
    pub loteria: String,
    pub orcamento: String,
    /// `None` when the checkbox was never touched.
    pub run_backtest: Option<bool>,
    pub backtest_last_n: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationFormValues {
    pub loteria: String,
    pub orcamento: f64,
    pub run_backtest: bool,
    pub backtest_last_n: Option<u32>,
}

impl GenerationFormValues {
    pub fn to_request(&self) -> GenerationJobRequest {
        GenerationJobRequest {
            loteria: self.loteria.clone(),
            orcamento: self.orcamento,
            run_backtest: self.run_backtest,
            backtest_last_n: self.backtest_last_n,
        }
    }
}

/// At most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub loteria: Option<&'static str>,
    pub orcamento: Option<&'static str>,
    pub backtest_last_n: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.loteria.is_none() && self.orcamento.is_none() && self.backtest_last_n.is_none()
    }

    /// `(field, message)` pairs in form order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        [
            ("loteria", self.loteria),
            ("orcamento", self.orcamento),
            ("backtest_last_n", self.backtest_last_n),
        ]
        .into_iter()
        .filter_map(|(field, msg)| msg.map(|m| (field, m)))
        .collect()
    }

    /// First message, for surfaces that show a single line.
    pub fn first(&self) -> Option<&'static str> {
        self.entries().first().map(|(_, m)| *m)
    }
}

/// `catalog` is `Some` once the lottery list has loaded; the name must then
/// be one of its entries.
pub fn validate(
    input: &GenerationFormInput,
    catalog: Option<&[LotteryConfig]>,
    msgs: &Messages,
) -> Result<GenerationFormValues, FieldErrors> {
    let mut errors = FieldErrors::default();

    let loteria = input.loteria.trim();
    if loteria.is_empty() {
        errors.loteria = Some(msgs.selection_required);
    } else if let Some(catalog) = catalog {
        if find_lottery(catalog, loteria).is_none() {
            errors.loteria = Some(msgs.unknown_lottery);
        }
    }

    let orcamento = match coerce_budget(&input.orcamento) {
        None => {
            errors.orcamento = Some(msgs.not_a_number);
            0.0
        }
        Some(v) if v <= 0.0 => {
            errors.orcamento = Some(msgs.must_be_positive);
            v
        }
        Some(v) if v > MAX_BUDGET => {
            errors.orcamento = Some(msgs.max_exceeded);
            v
        }
        Some(v) => v,
    };

    let last_n_raw = input.backtest_last_n.trim();
    let backtest_last_n = if last_n_raw.is_empty() {
        None
    } else {
        match last_n_raw.parse::<u32>() {
            Ok(n) => Some(n),
            Err(_) => {
                errors.backtest_last_n = Some(msgs.invalid_last_n);
                None
            }
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(GenerationFormValues {
        loteria: loteria.to_string(),
        orcamento,
        run_backtest: input.run_backtest.unwrap_or(true),
        backtest_last_n,
    })
}

/// Number coercion for the budget field. Blank input counts as zero; a comma
/// is accepted as the decimal separator. `None` means "not a number".
pub fn coerce_budget(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub fn find_lottery<'a>(catalog: &'a [LotteryConfig], name: &str) -> Option<&'a LotteryConfig> {
    let name = name.trim();
    catalog.iter().find(|l| l.name == name)
}

/// How many games the budget buys, shown under the budget input.
pub fn estimated_games(lottery: Option<&LotteryConfig>, budget: Option<f64>) -> Option<u64> {
    let lottery = lottery?;
    let budget = budget?;
    if budget <= 0.0 || lottery.preco <= 0.0 {
        return None;
    }
    Some((budget / lottery.preco).floor() as u64)
}

/// Live preview straight from the raw inputs; unparseable budget hides it.
pub fn preview_games(catalog: &[LotteryConfig], input: &GenerationFormInput) -> Option<u64> {
    estimated_games(
        find_lottery(catalog, &input.loteria),
        coerce_budget(&input.orcamento),
    )
}

pub fn lottery_option_label(lottery: &LotteryConfig, msgs: &Messages) -> String {
    format!(
        "{} (R${:.2} - {} {} {})",
        lottery.name, lottery.preco, lottery.escolhe, msgs.option_connective, lottery.total_nums
    )
}

pub fn budget_placeholder(lottery: Option<&LotteryConfig>, msgs: &Messages) -> String {
    match lottery {
        Some(l) => format!("{}", l.orcamento_alvo),
        None => msgs.budget_placeholder.to_string(),
    }
}
