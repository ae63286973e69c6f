//! Interactive terminal dashboard.
//!
//! Loads the catalog and checks the backend on startup, then loops over the
//! generation form until stdin closes or the user quits.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use loteria_dash::api::HttpApi;
use loteria_dash::config::Config;
use loteria_dash::dashboard::{Dashboard, SubmitOutcome};
use loteria_dash::form::{budget_placeholder, find_lottery, preview_games, GenerationFormInput};
use loteria_dash::logging::{log, obj, v_str, Domain, Level};
use loteria_dash::messages::Messages;
use loteria_dash::render::text;
use loteria_dash::report::{render_page, write_report};
use loteria_dash::results::ResultsView;

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> Option<String> {
    print!("{}> ", label);
    let _ = io::stdout().flush();
    lines.next().and_then(|l| l.ok())
}

/// Accepts a menu number or a lottery name. "0", blank and numbers past the
/// end of the menu mean no selection.
fn resolve_selection(raw: &str, catalog: &[loteria_dash::api::LotteryConfig]) -> String {
    let raw = raw.trim();
    match raw.parse::<usize>() {
        Ok(0) => String::new(),
        Ok(n) => catalog.get(n - 1).map(|l| l.name.clone()).unwrap_or_default(),
        Err(_) => raw.to_string(),
    }
}

fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "" => None,
        "y" | "yes" | "s" | "sim" => Some(true),
        "n" | "no" | "nao" | "não" => Some(false),
        _ => None,
    }
}

fn read_form(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    catalog: &[loteria_dash::api::LotteryConfig],
    msgs: &Messages,
) -> Option<GenerationFormInput> {
    print!("{}", text::catalog_menu(catalog, msgs));
    let mut input = GenerationFormInput {
        loteria: resolve_selection(&prompt(lines, msgs.field_loteria)?, catalog),
        ..Default::default()
    };

    let placeholder = budget_placeholder(find_lottery(catalog, &input.loteria), msgs);
    input.orcamento = prompt(lines, &format!("{} [{}]", msgs.field_orcamento, placeholder))?;
    if let Some(line) = text::estimated_games_line(preview_games(catalog, &input), msgs) {
        println!("  {}", line);
    }

    input.run_backtest = parse_yes_no(&prompt(lines, &format!("{} [Y/n]", msgs.field_backtest))?);
    if input.run_backtest != Some(false) {
        input.backtest_last_n = prompt(lines, msgs.field_last_n)?;
    }
    Some(input)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env()?;
    let msgs = cfg.messages();
    let ansi = std::env::var("NO_COLOR").is_err();
    log(
        Level::Info,
        Domain::System,
        "startup",
        obj(&[
            ("api_base", v_str(cfg.api_base.as_str())),
            ("locale", v_str(cfg.locale.as_str())),
        ]),
    );

    let dash = Dashboard::new(HttpApi::new(&cfg)?, msgs);
    dash.mount().await;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let state = dash.snapshot();
        println!();
        print!("{}", text::header(state.health.status(), msgs, ansi));
        if let Some(err) = state.visible_error() {
            println!("{}", text::error_banner(err, ansi));
        }
        print!("{}", text::results(ResultsView::build(state.result()).as_ref(), msgs, ansi));

        let Some(cmd) = prompt(&mut lines, "[g]enerate [s]ave [d]ismiss [q]uit") else {
            break;
        };
        match cmd.trim() {
            "q" | "quit" => break,
            "d" | "dismiss" => dash.dismiss_error(),
            "s" | "save" => {
                let page = render_page(&dash.snapshot(), msgs);
                match write_report(&cfg.report_path, &page) {
                    Ok(()) => println!("  {}", cfg.report_path.display()),
                    Err(err) => println!("{}", text::error_banner(&format!("{:#}", err), ansi)),
                }
            }
            "g" | "generate" | "" => {
                let catalog = dash.catalog();
                let Some(input) = read_form(&mut lines, &catalog, msgs) else {
                    break;
                };
                println!("{}", msgs.generating);
                match dash.submit(&input).await {
                    SubmitOutcome::Invalid(errors) => {
                        for (field, msg) in errors.entries() {
                            let line = format!("{}: {}", field, msg);
                            println!("{}", text::error_banner(&line, ansi));
                        }
                    }
                    SubmitOutcome::Busy => println!("{}", msgs.submit_busy),
                    SubmitOutcome::Succeeded
                    | SubmitOutcome::Failed(_)
                    | SubmitOutcome::Detached => {}
                }
            }
            _ => {}
        }
    }

    dash.unmount();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loteria_dash::api::LotteryConfig;

    fn catalog() -> Vec<LotteryConfig> {
        vec![LotteryConfig {
            name: "megasena".to_string(),
            preco: 5.0,
            total_nums: 60,
            escolhe: 6,
            orcamento_alvo: 25.0,
        }]
    }

    #[test]
    fn test_resolve_selection() {
        let catalog = catalog();
        assert_eq!(resolve_selection("1", &catalog), "megasena");
        assert_eq!(resolve_selection(" megasena ", &catalog), "megasena");
        assert_eq!(resolve_selection("0", &catalog), "");
        assert_eq!(resolve_selection("", &catalog), "");
    }

    #[test]
    fn test_out_of_range_index_is_no_selection() {
        assert_eq!(resolve_selection("7", &catalog()), "");
        assert_eq!(resolve_selection("2", &[]), "");
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("sim"), Some(true));
        assert_eq!(parse_yes_no("N"), Some(false));
        assert_eq!(parse_yes_no(""), None);
    }
}
