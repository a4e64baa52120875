use serde::Serialize;

use crate::status::StatusResult;

pub const OPEN_TEXT: &str = "本日営業中";
pub const NEAR_CLOSE_TEXT: &str = "まもなくL.O.";
pub const CLOSED_TEXT: &str = "本日営業終了";

pub const OPEN_COLOR: &str = "var(--color-primary)";
pub const NEAR_CLOSE_COLOR: &str = "var(--color-accent)";
pub const CLOSED_COLOR: &str = "#666";

/// What the hours badge on the page shows for a status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub text: &'static str,
    pub color: &'static str,
    pub time_display: String,
    /// `None` hides the L.O. element.
    pub last_order_display: Option<String>,
}

impl From<&StatusResult> for Badge {
    fn from(status: &StatusResult) -> Self {
        match (status.close_time(), status.last_order_time()) {
            (Some(close), Some(last_order)) if status.is_open() => {
                let (text, color) = if status.is_near_close() {
                    (NEAR_CLOSE_TEXT, NEAR_CLOSE_COLOR)
                } else {
                    (OPEN_TEXT, OPEN_COLOR)
                };
                Badge {
                    text,
                    color,
                    time_display: format!("〜{}", close),
                    last_order_display: Some(format!("(L.O.{})", last_order)),
                }
            }
            _ => Badge {
                text: CLOSED_TEXT,
                color: CLOSED_COLOR,
                time_display: status.next_opening_message().unwrap_or_default(),
                last_order_display: None,
            },
        }
    }
}
