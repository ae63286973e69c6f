use std::fmt::Write;

use crate::health::HealthStatus;
use crate::messages::Messages;
use crate::render::stat_label;
use crate::results::{ResultsView, StatKind, TagStyle};

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn tag_class(style: TagStyle) -> &'static str {
    match style {
        TagStyle::Amber => "tag tag-amber",
        TagStyle::Green => "tag tag-green",
        TagStyle::Neutral => "tag tag-neutral",
    }
}

pub fn health_badge(status: HealthStatus, msgs: &Messages) -> String {
    format!(
        r#"<div class="health"><span class="dot" style="background:{}"></span>{}</div>"#,
        status.color(),
        escape(status.label(msgs))
    )
}

pub fn error_banner(msg: &str) -> String {
    format!(r#"<div class="banner">{}</div>"#, escape(msg))
}

pub fn results(view: Option<&ResultsView>, msgs: &Messages) -> String {
    let Some(view) = view else {
        return String::new();
    };
    let mut out = String::from(r#"<section class="results">"#);

    if let Some(notice) = &view.notice {
        let _ = write!(
            out,
            r#"<p class="notice">{}: {}</p>"#,
            escape(msgs.server_notice),
            escape(notice)
        );
    }

    out.push_str(r#"<div class="grid">"#);
    for card in &view.stats {
        let accent = match card.kind {
            StatKind::Total => "",
            StatKind::V3 => " amber",
            StatKind::V5 => " green",
        };
        let _ = write!(
            out,
            r#"<div class="card"><p class="card-val{}">{}</p><p class="card-label">{}</p></div>"#,
            accent,
            card.value,
            escape(stat_label(card.kind, msgs))
        );
    }
    out.push_str("</div>");

    let _ = write!(
        out,
        r#"<div class="panel"><h3>{}</h3><div class="scroll tall"><table>"#,
        escape(msgs.generated_games)
    );
    let _ = write!(
        out,
        "<thead><tr><th>#</th><th>{}</th><th>{}</th></tr></thead><tbody>",
        escape(msgs.col_tag),
        escape(msgs.col_numbers)
    );
    for game in &view.games {
        let balls: String = game
            .numbers
            .iter()
            .map(|n| format!(r#"<span class="ball">{}</span>"#, n))
            .collect();
        let _ = write!(
            out,
            concat!(
                r#"<tr><td class="muted">{}</td>"#,
                r#"<td><span class="{}">{}</span></td><td>{}</td></tr>"#,
            ),
            game.position,
            tag_class(game.style),
            escape(&game.tag),
            balls
        );
    }
    out.push_str("</tbody></table></div></div>");

    if let Some(bt) = &view.backtest {
        let _ = write!(
            out,
            r#"<div class="panel" id="backtest"><h3>{}</h3><div class="grid">"#,
            escape(msgs.backtest_results)
        );
        for (value, label) in [
            (bt.global_avg.clone(), msgs.avg_hits),
            (bt.global_max.to_string(), msgs.max_hits),
            (bt.tested_draws.to_string(), msgs.draws_tested),
        ] {
            let _ = write!(
                out,
                concat!(
                    r#"<div class="headline"><p class="card-val">{}</p>"#,
                    r#"<p class="card-label">{}</p></div>"#,
                ),
                value,
                escape(label)
            );
        }
        out.push_str("</div>");
        if let Some(rows) = &bt.per_game {
            let _ = write!(
                out,
                concat!(
                    r#"<div class="scroll short"><table id="per-game"><thead><tr>"#,
                    "<th>{}</th><th>{}</th><th>{}</th><th>{}</th></tr></thead><tbody>",
                ),
                escape(msgs.col_game),
                escape(msgs.col_avg),
                escape(msgs.col_max),
                escape(msgs.col_min)
            );
            for row in rows {
                let _ = write!(
                    out,
                    r#"<tr><td class="muted">{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
                    row.label, row.avg, row.max, row.min
                );
            }
            out.push_str("</tbody></table></div>");
        }
        out.push_str("</div>");
    }

    out.push_str("</section>");
    out
}

/// Self-contained document around pre-rendered fragments.
pub fn page(msgs: &Messages, health: &str, banner: &str, body: &str, generated: &str) -> String {
    fill(
        TEMPLATE,
        &[
            ("__LANG__", msgs.locale.as_str()),
            ("__TITLE__", escape(msgs.title).as_str()),
            ("__SUBTITLE__", escape(msgs.subtitle).as_str()),
            ("__HEALTH__", health),
            ("__GENERATED__", escape(generated).as_str()),
            ("__BANNER__", banner),
            ("__BODY__", body),
        ],
    )
}

/// Substitutes placeholders in one pass over `template`. Inserted values are
/// never scanned again, so a fragment may contain placeholder text verbatim.
fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("__") {
        let (before, tail) = rest.split_at(start);
        out.push_str(before);
        match slots.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push_str("__");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="__LANG__">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>__TITLE__</title>
  <style>
    :root {
      --bg: #18181b; --bg-raised: #27272a; --border: #3f3f46;
      --fg: #d4d4d8; --fg-muted: #71717a; --fg-bright: #f4f4f5;
      --amber: #fbbf24; --green: #4ade80; --red: #f87171;
      --mono: 'JetBrains Mono', 'Fira Code', 'SF Mono', monospace;
      --sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
      --radius: 8px;
    }
    *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: var(--sans); background: var(--bg); color: var(--fg); line-height: 1.5;
    }
    main { max-width: 56rem; margin: 0 auto; padding: 2rem 1rem; }
    header {
      display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem;
    }
    h1 { color: var(--fg-bright); font-size: 1.5rem; }
    h3 {
      color: var(--fg-bright); font-size: 1rem; font-weight: 500;
      padding: 0.75rem 1rem; border-bottom: 1px solid var(--border);
    }
    .sub, .muted, .card-label { color: var(--fg-muted); font-size: 0.8rem; }
    .health {
      display: flex; align-items: center; gap: 0.5rem;
      font-size: 0.85rem; color: var(--fg-muted);
    }
    .dot { display: inline-block; width: 10px; height: 10px; border-radius: 50%; }
    .banner {
      margin-bottom: 1.5rem; padding: 0.75rem 1rem; border-radius: var(--radius);
      border: 1px solid rgba(220,38,38,0.3); background: rgba(220,38,38,0.1); color: var(--red);
    }
    .notice { color: var(--amber); font-size: 0.85rem; }
    .results > * + * { margin-top: 1.5rem; }
    .grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
    .panel .grid { padding: 1rem; }
    .card, .panel {
      background: var(--bg-raised); border: 1px solid var(--border); border-radius: var(--radius);
    }
    .card, .headline { padding: 1rem; text-align: center; }
    .card-val {
      font-size: 1.5rem; font-weight: 700; color: var(--fg-bright); font-family: var(--mono);
    }
    .card-val.amber { color: var(--amber); }
    .card-val.green { color: var(--green); }
    .scroll { overflow-y: auto; }
    .scroll.tall { max-height: 28rem; }
    .scroll.short { max-height: 12rem; padding: 0 1rem 1rem; }
    table { width: 100%; border-collapse: collapse; font-size: 0.85rem; }
    th {
      position: sticky; top: 0; background: var(--bg-raised);
      text-align: left; color: var(--fg-muted); padding: 0.5rem 1rem;
    }
    td { padding: 0.5rem 1rem; border-top: 1px solid rgba(63,63,70,0.5); }
    .tag {
      display: inline-block; border-radius: 4px; border: 1px solid;
      padding: 0.1rem 0.5rem; font-size: 0.75rem;
    }
    .tag-amber {
      color: var(--amber); border-color: rgba(217,119,6,0.3); background: rgba(217,119,6,0.2);
    }
    .tag-green {
      color: var(--green); border-color: rgba(22,163,74,0.3); background: rgba(22,163,74,0.2);
    }
    .tag-neutral {
      color: #a1a1aa; border-color: rgba(82,82,91,0.3); background: rgba(82,82,91,0.2);
    }
    .ball {
      display: inline-flex; width: 1.75rem; height: 1.75rem; margin: 0 0.2rem 0.2rem 0;
      align-items: center; justify-content: center; border-radius: 50%;
      background: #3f3f46; font-size: 0.75rem; color: var(--fg-bright);
    }
    footer {
      margin-top: 2rem; color: var(--fg-muted); font-size: 0.7rem; font-family: var(--mono);
    }
  </style>
</head>
<body>
<main>
  <header>
    <div><h1>__TITLE__</h1><p class="sub">__SUBTITLE__</p></div>
    __HEALTH__
  </header>
  __BANNER__
  __BODY__
  <footer>Generated __GENERATED__</footer>
</main>
</body>
</html>"##;
