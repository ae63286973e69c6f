//! Front-end renderers for the results view: terminal text and HTML.
//! Both render nothing for an absent result.

pub mod html;
pub mod text;

use crate::messages::Messages;
use crate::results::StatKind;

pub fn stat_label(kind: StatKind, msgs: &Messages) -> &'static str {
    match kind {
        StatKind::Total => msgs.total_games,
        StatKind::V3 => msgs.v3_games,
        StatKind::V5 => msgs.v5_games,
    }
}
