use crate::game_state::chess_types::Alliance;
use crate::search::minimax::SearchConfig;
use crate::search::threading::ThreadingConfig;

/// Who chooses the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerControl {
    Human,
    Ai,
}

/// Per-match setup: which sides are computer-controlled and how hard the
/// computer searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub white: PlayerControl,
    pub black: PlayerControl,
    pub search_depth: u8,
    pub threads: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            white: PlayerControl::Human,
            black: PlayerControl::Ai,
            search_depth: SearchConfig::default().max_depth,
            threads: ThreadingConfig::default().threads,
        }
    }
}

impl MatchConfig {
    #[inline]
    pub fn control(&self, alliance: Alliance) -> PlayerControl {
        match alliance {
            Alliance::White => self.white,
            Alliance::Black => self.black,
        }
    }

    #[inline]
    pub fn is_ai(&self, alliance: Alliance) -> bool {
        self.control(alliance) == PlayerControl::Ai
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.search_depth,
        }
    }

    pub fn threading_config(&self) -> ThreadingConfig {
        ThreadingConfig {
            threads: self.threads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MatchConfig, PlayerControl};
    use crate::game_state::chess_types::Alliance;

    #[test]
    fn default_match_is_human_against_computer() {
        let config = MatchConfig::default();
        assert!(!config.is_ai(Alliance::White));
        assert!(config.is_ai(Alliance::Black));
        assert_eq!(config.search_config().max_depth, 4);
        assert_eq!(config.threading_config().threads, 1);
    }

    #[test]
    fn controls_are_independent_per_side() {
        let config = MatchConfig {
            white: PlayerControl::Ai,
            black: PlayerControl::Ai,
            ..MatchConfig::default()
        };
        assert_eq!(config.control(Alliance::White), PlayerControl::Ai);
        assert!(config.is_ai(Alliance::White) && config.is_ai(Alliance::Black));
    }
}
