use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::dashboard::DashboardState;
use crate::logging::{log, obj, v_num, v_str, ts_now, Domain, Level};
use crate::messages::Messages;
use crate::render::html;
use crate::results::ResultsView;

/// Full HTML page for the current dashboard state.
pub fn render_page(state: &DashboardState, msgs: &Messages) -> String {
    let badge = html::health_badge(state.health.status(), msgs);
    let banner = state.visible_error().map(html::error_banner).unwrap_or_default();
    let view = ResultsView::build(state.result());
    let body = html::results(view.as_ref(), msgs);
    html::page(msgs, &badge, &banner, &body, &ts_now())
}

pub fn write_report(path: &Path, page: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(path, page).with_context(|| format!("writing {}", path.display()))?;
    log(
        Level::Info,
        Domain::Report,
        "written",
        obj(&[
            ("path", v_str(&path.to_string_lossy())),
            ("kb", v_num(page.len() as f64 / 1024.0)),
        ]),
    );
    Ok(())
}
