//! Supported coin symbols and their provider aliases.
//!
//! The symbol set is closed: only the coins listed in [`Symbol::ALL`] can be
//! requested. Each symbol maps to one or more CoinGecko identifiers, tried in
//! order when reading a quote table.

use std::fmt;
use std::str::FromStr;

/// A coin ticker a user can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Btc,
    Eth,
    Ton,
}

impl Symbol {
    /// Every supported symbol, in default display order.
    pub const ALL: [Symbol; 3] = [Symbol::Btc, Symbol::Eth, Symbol::Ton];

    /// Lowercase ticker as typed by users.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Btc => "btc",
            Self::Eth => "eth",
            Self::Ton => "ton",
        }
    }

    /// Uppercase ticker used in replies.
    #[must_use]
    pub const fn ticker(self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Eth => "ETH",
            Self::Ton => "TON",
        }
    }

    /// Provider identifiers for this symbol, most preferred first.
    ///
    /// Never empty.
    #[must_use]
    pub const fn provider_ids(self) -> &'static [&'static str] {
        match self {
            Self::Btc => &["bitcoin"],
            Self::Eth => &["ethereum"],
            // CoinGecko has listed TON under both slugs.
            Self::Ton => &["toncoin", "the-open-network"],
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token is not a supported symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSymbol(pub String);

impl fmt::Display for UnknownSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown symbol `{}`", self.0)
    }
}

impl std::error::Error for UnknownSymbol {}

impl FromStr for Symbol {
    type Err = UnknownSymbol;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::ALL
            .into_iter()
            .find(|symbol| symbol.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSymbol(s.to_string()))
    }
}

/// Turn raw user tokens into a selection of supported symbols.
///
/// Unknown tokens are dropped and repeats collapse onto their first
/// occurrence. An empty result means nothing usable was requested.
pub fn normalize_selection<'a, I>(tokens: I) -> Vec<Symbol>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut selection = Vec::new();
    for token in tokens {
        if let Ok(symbol) = token.parse::<Symbol>() {
            if !selection.contains(&symbol) {
                selection.push(symbol);
            }
        }
    }
    selection
}

/// Selection used when the user names no symbols.
#[must_use]
pub fn default_selection() -> Vec<Symbol> {
    Symbol::ALL.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_has_a_provider_id() {
        for symbol in Symbol::ALL {
            assert!(!symbol.provider_ids().is_empty(), "{symbol} has no alias");
        }
    }

    #[test]
    fn ton_aliases_keep_preference_order() {
        assert_eq!(Symbol::Ton.provider_ids(), ["toncoin", "the-open-network"]);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("BTC".parse::<Symbol>().unwrap(), Symbol::Btc);
        assert_eq!("Eth".parse::<Symbol>().unwrap(), Symbol::Eth);
        assert_eq!("ton".parse::<Symbol>().unwrap(), Symbol::Ton);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "xyz".parse::<Symbol>().unwrap_err();
        assert_eq!(err, UnknownSymbol("xyz".into()));
        assert_eq!(err.to_string(), "unknown symbol `xyz`");
    }

    #[test]
    fn normalize_drops_unknown_and_repeats() {
        let selection = normalize_selection(["eth", "XYZ", "ton", "ETH", "btc"]);
        assert_eq!(selection, vec![Symbol::Eth, Symbol::Ton, Symbol::Btc]);
    }

    #[test]
    fn normalize_unsupported_only_is_empty() {
        assert!(normalize_selection(["xyz", "doge"]).is_empty());
    }

    #[test]
    fn default_selection_lists_all_in_order() {
        assert_eq!(
            default_selection(),
            vec![Symbol::Btc, Symbol::Eth, Symbol::Ton]
        );
    }
}
