use shakmaty::{Chess, Move, san::SanPlus};
use smallvec::SmallVec;

/// Substituted for a tag the game does not carry.
pub const MISSING_TAG: &str = "?";

/// Mainline moves of one game, in play order.
pub type MoveList = SmallVec<[Move; 128]>;

/// Tag pairs of one game in file order. The first occurrence of a tag wins
/// and empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn insert(&mut self, name: &str, value: &str) {
        if value.is_empty() || self.get(name).is_some() {
            return;
        }
        self.0.push((name.to_string(), value.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_or_placeholder(&self, name: &str) -> &str {
        self.get(name).unwrap_or(MISSING_TAG)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One parsed game: its tags, where it starts, and its resolved mainline.
///
/// `moves` is always playable from `start` in order. When the movetext
/// contains a move that cannot be resolved, the list stops before it and
/// `parse_error` says why.
#[derive(Debug, Clone)]
pub struct Game {
    pub headers: Headers,
    pub start: Chess,
    pub moves: MoveList,
    pub sans: Vec<SanPlus>,
    pub outcome: Option<String>,
    pub parse_error: Option<String>,
}

impl Game {
    pub fn white(&self) -> &str {
        self.headers.get_or_placeholder("White")
    }

    pub fn black(&self) -> &str {
        self.headers.get_or_placeholder("Black")
    }

    /// The `Result` tag, or the movetext's termination marker without one.
    pub fn result(&self) -> &str {
        self.headers
            .get("Result")
            .or(self.outcome.as_deref())
            .unwrap_or(MISSING_TAG)
    }

    pub fn mainline_moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn mainline_sans(&self) -> &[SanPlus] {
        &self.sans
    }

    pub fn starting_position(&self) -> &Chess {
        &self.start
    }

    pub fn parse_error(&self) -> Option<&str> {
        self.parse_error.as_deref()
    }
}

/// Dropdown entry for one game. `index` is 0-based while the ordinal shown
/// in `label` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub label: String,
    pub index: usize,
}

impl GameSummary {
    pub fn new(white: &str, black: &str, result: &str, index: usize) -> Self {
        Self {
            label: format!("{}-{} {} (g {})", white, black, result, index + 1),
            index,
        }
    }

    pub fn from_headers(headers: &Headers, index: usize) -> Self {
        Self::new(
            headers.get_or_placeholder("White"),
            headers.get_or_placeholder("Black"),
            headers.get_or_placeholder("Result"),
            index,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_first_value_wins() {
        let mut headers = Headers::default();
        headers.insert("White", "Carlsen");
        headers.insert("White", "Nakamura");

        assert_eq!(headers.get("White"), Some("Carlsen"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_headers_empty_value_is_absent() {
        let mut headers = Headers::default();
        headers.insert("Black", "");

        assert!(headers.is_empty());
        assert_eq!(headers.get("Black"), None);
        assert_eq!(headers.get_or_placeholder("Black"), "?");

        headers.insert("Black", "Caruana");
        assert_eq!(headers.get("Black"), Some("Caruana"));
    }

    #[test]
    fn test_headers_iter_preserves_file_order() {
        let mut headers = Headers::default();
        headers.insert("Event", "Casual");
        headers.insert("White", "A");
        headers.insert("Black", "B");

        let keys: Vec<&str> = headers.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Event", "White", "Black"]);
    }

    #[test]
    fn test_summary_label_uses_one_based_ordinal() {
        let summary = GameSummary::new("Anand", "Kramnik", "1/2-1/2", 0);

        assert_eq!(summary.label, "Anand-Kramnik 1/2-1/2 (g 1)");
        assert_eq!(summary.index, 0);
    }

    #[test]
    fn test_summary_from_headers_substitutes_placeholder() {
        let mut headers = Headers::default();
        headers.insert("White", "Tal");

        let summary = GameSummary::from_headers(&headers, 4);
        assert_eq!(summary.label, "Tal-? ? (g 5)");
        assert_eq!(summary.index, 4);
    }

    #[test]
    fn test_game_result_falls_back_to_outcome_marker() {
        let game = Game {
            headers: Headers::default(),
            start: Chess::default(),
            moves: MoveList::new(),
            sans: Vec::new(),
            outcome: Some("0-1".to_string()),
            parse_error: None,
        };

        assert_eq!(game.result(), "0-1");
        assert_eq!(game.white(), "?");
        assert!(game.mainline_moves().is_empty());
    }
}
