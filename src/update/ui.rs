//! UI message handlers (popups, frame ticks)

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Tick(now) => {
            let before = model.popups.len();
            model.popups.expire(now);
            (model.popups.len() != before).then_some(Cmd::Redraw)
        }
        UiMsg::ShowPopup { key, placeholders } => {
            let placeholders: Vec<(&str, &str)> = placeholders
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            model.configured_popup(&key, &placeholders, Instant::now());
            Some(Cmd::Redraw)
        }
        UiMsg::DismissPopup(id) => model.popups.remove(id).then_some(Cmd::Redraw),
    }
}
