//! Transcript headers.

use serde::{Deserialize, Serialize};

/// Seven-tag PGN header block for a reconstructed game.
///
/// The players are unknown to the recognition pipeline, so the defaults
/// stamp both sides as "AI" and leave the result unresolved.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameMeta {
    pub event: String,
    pub site: String,
    /// `YYYY.MM.DD`.
    pub date: String,
    pub round: String,
    pub white: String,
    pub black: String,
    pub result: String,
}

impl Default for GameMeta {
    fn default() -> Self {
        Self {
            event: "Auto-generated game".to_owned(),
            site: "Chess Recognition System".to_owned(),
            date: chrono::Local::now().format("%Y.%m.%d").to_string(),
            round: "1".to_owned(),
            white: "AI".to_owned(),
            black: "AI".to_owned(),
            result: "*".to_owned(),
        }
    }
}

impl GameMeta {
    /// Render the bracketed tag block, one tag per line.
    pub fn render(&self) -> String {
        format!(
            "[Event \"{}\"]\n[Site \"{}\"]\n[Date \"{}\"]\n[Round \"{}\"]\n[White \"{}\"]\n[Black \"{}\"]\n[Result \"{}\"]\n",
            self.event, self.site, self.date, self.round, self.white, self.black, self.result
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header_block_carries_all_seven_tags() {
        let rendered = GameMeta::default().render();
        for tag in ["Event", "Site", "Date", "Round", "White", "Black", "Result"] {
            assert!(rendered.contains(&format!("[{tag} \"")), "missing {tag}");
        }
        assert_eq!(rendered.lines().count(), 7);
    }

    #[test]
    fn default_date_is_dotted() {
        let meta = GameMeta::default();
        let parts: Vec<&str> = meta.date.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4);
    }
}
