#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// How hard the `Game` works to keep a player from exposing their own king.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum CheckFilter {
    /// Try every candidate move on a copy of the board and drop the ones that leave the mover's
    /// king in check.
    Full,
    /// Offer nothing at all while the mover's king is already attacked, and offer the raw rule
    /// output otherwise.  Moves that walk into check are not caught.
    AlreadyInCheck,
    /// Offer the raw rule output.
    Off,
}

/// Knobs for the rules a `Game` enforces.
///
/// ```
/// use chess_rules::{RulesConfig, CheckFilter};
///
/// let config = RulesConfig::default();
/// assert_eq!(config.check_filter, CheckFilter::Full);
/// assert!(config.king_captures);
/// ```
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct RulesConfig {
    pub check_filter: CheckFilter,
    /// When false, kings only ever make quiet moves.
    pub king_captures: bool,
}

impl RulesConfig {
    /// A looser rule set: kings never capture, and a side gets no moves at all while its king
    /// is in check.  Anything else, walking into check included, is allowed.
    pub fn reference() -> RulesConfig {
        RulesConfig {
            check_filter: CheckFilter::AlreadyInCheck,
            king_captures: false,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> RulesConfig {
        RulesConfig {
            check_filter: CheckFilter::Full,
            king_captures: true,
        }
    }
}

#[cfg(all(test, feature = "serialize"))]
mod tests {
    use super::*;

    #[test]
    fn config_serializes() {
        let json = serde_json::to_string(&RulesConfig::reference()).unwrap();
        assert_eq!(json, r#"{"check_filter":"AlreadyInCheck","king_captures":false}"#);
        let back: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RulesConfig::reference());
    }
}
