//! One-shot report: submits a single generation job and writes the results
//! as a self-contained HTML page.
//!
//! Usage: report <loteria> <orcamento> [--no-backtest] [--last-n N] [--out PATH]

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use loteria_dash::api::HttpApi;
use loteria_dash::config::Config;
use loteria_dash::dashboard::{Dashboard, SubmitOutcome};
use loteria_dash::form::GenerationFormInput;
use loteria_dash::report::{render_page, write_report};

struct Args {
    input: GenerationFormInput,
    out: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut positional = Vec::new();
    let mut input = GenerationFormInput::default();
    let mut out = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--no-backtest" => input.run_backtest = Some(false),
            "--last-n" => {
                input.backtest_last_n = iter
                    .next()
                    .cloned()
                    .ok_or_else(|| anyhow!("--last-n needs a value"))?;
            }
            "--out" => {
                let path = iter.next().ok_or_else(|| anyhow!("--out needs a path"))?;
                out = Some(PathBuf::from(path));
            }
            _ => positional.push(arg.clone()),
        }
    }
    let [loteria, orcamento] = positional.as_slice() else {
        return Err(anyhow!(
            "usage: report <loteria> <orcamento> [--no-backtest] [--last-n N] [--out PATH]"
        ));
    };
    input.loteria = loteria.clone();
    input.orcamento = orcamento.clone();
    Ok(Args { input, out })
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;
    let cfg = Config::from_env()?;
    let msgs = cfg.messages();

    let dash = Dashboard::new(HttpApi::new(&cfg)?, msgs);
    dash.mount().await;

    match dash.submit(&args.input).await {
        SubmitOutcome::Invalid(errors) => {
            let detail: Vec<String> = errors
                .entries()
                .iter()
                .map(|(f, m)| format!("{}: {}", f, m))
                .collect();
            return Err(anyhow!("invalid input: {}", detail.join("; ")));
        }
        SubmitOutcome::Failed(msg) => eprintln!("generation failed: {}", msg),
        _ => {}
    }

    let path = args.out.unwrap_or_else(|| cfg.report_path.clone());
    write_report(&path, &render_page(&dash.snapshot(), msgs))?;
    println!("{} written", path.display());
    Ok(())
}
