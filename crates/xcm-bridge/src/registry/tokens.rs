//! Per-chain token registries.
//!
//! The first entry of every table is the chain's native token.

use crate::domain::{BridgeError, ChainId, CurrencyId, Token};

/// Polkadot tokens.
pub static POLKADOT_TOKENS: &[Token] = &[Token::new(
    "DOT",
    10,
    10_000_000_000,
    Some(CurrencyId::Native),
)];

/// Kusama tokens.
pub static KUSAMA_TOKENS: &[Token] = &[Token::new("KSM", 12, 79_999_999, Some(CurrencyId::Native))];

/// Calamari tokens, keyed by Manta asset-manager id.
pub static CALAMARI_TOKENS: &[Token] = &[
    Token::new("KMA", 12, 100_000_000_000, Some(CurrencyId::MantaCurrency(1))),
    Token::new("KAR", 12, 100_000_000_000, Some(CurrencyId::MantaCurrency(8))),
    Token::new("KUSD", 12, 10_000_000_000, Some(CurrencyId::MantaCurrency(9))),
    Token::new("LKSM", 12, 500_000_000, Some(CurrencyId::MantaCurrency(10))),
    Token::new("MOVR", 18, 100_000_000_000_000_000, Some(CurrencyId::MantaCurrency(11))),
    Token::new("KSM", 12, 100_000_000, Some(CurrencyId::MantaCurrency(12))),
    Token::new("USDT", 6, 10_000, Some(CurrencyId::MantaCurrency(14))),
    Token::new("DAI", 18, 10_000_000_000_000_000, Some(CurrencyId::MantaCurrency(15))),
    Token::new("USDCet", 6, 10_000, Some(CurrencyId::MantaCurrency(16))),
    Token::new("ARB", 18, 9_000_000_000_000_000, Some(CurrencyId::MantaCurrency(17))),
    Token::new("BNB", 18, 40_000_000_000_000, Some(CurrencyId::MantaCurrency(21))),
    Token::new("BUSD", 18, 10_000_000_000_000_000, Some(CurrencyId::MantaCurrency(23))),
    Token::new("WBTC", 8, 35, Some(CurrencyId::MantaCurrency(26))),
    Token::new("WETH", 18, 5_555_555_555_555, Some(CurrencyId::MantaCurrency(27))),
];

/// Moonbeam tokens. Bridged assets carry metadata only.
pub static MOONBEAM_TOKENS: &[Token] = &[
    Token::new("GLMR", 18, 100_000_000_000_000_000, Some(CurrencyId::SelfReserve)),
    Token::new("ACA", 12, 100_000_000_000, None),
    Token::new("AUSD", 12, 100_000_000_000, None),
    Token::new("LDOT", 10, 500_000_000, None),
];

/// Moonriver tokens. Bridged assets carry metadata only.
pub static MOONRIVER_TOKENS: &[Token] = &[
    Token::new("MOVR", 18, 1_000_000_000_000_000, Some(CurrencyId::SelfReserve)),
    Token::new("KAR", 12, 0, None),
    Token::new("KUSD", 12, 0, None),
];

/// Token metadata of one chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenRegistry {
    chain: ChainId,
    tokens: &'static [Token],
}

impl TokenRegistry {
    /// Wrap a static table. The first entry is the native token.
    pub fn new(chain: ChainId, tokens: &'static [Token]) -> Self {
        Self { chain, tokens }
    }

    /// Registry for a chain with a configured table.
    pub fn for_chain(chain: ChainId) -> Option<Self> {
        let tokens = match chain {
            ChainId::Polkadot => POLKADOT_TOKENS,
            ChainId::Kusama => KUSAMA_TOKENS,
            ChainId::Calamari => CALAMARI_TOKENS,
            ChainId::Moonbeam => MOONBEAM_TOKENS,
            ChainId::Moonriver => MOONRIVER_TOKENS,
            _ => return None,
        };
        Some(Self::new(chain, tokens))
    }

    /// Owning chain.
    pub fn chain(&self) -> ChainId {
        self.chain
    }

    /// Look up a token by symbol.
    pub fn get(&self, symbol: &str) -> Result<&'static Token, BridgeError> {
        self.tokens
            .iter()
            .find(|t| t.symbol == symbol)
            .ok_or_else(|| BridgeError::TokenNotFound(symbol.to_string()))
    }

    /// The native token, if the table is non-empty.
    pub fn native(&self) -> Option<&'static Token> {
        self.tokens.first()
    }

    /// Whether `symbol` is the native token.
    pub fn is_native(&self, symbol: &str) -> bool {
        self.native().is_some_and(|t| t.symbol == symbol)
    }

    /// On-wire currency id of a token.
    pub fn currency_id(&self, symbol: &str) -> Result<CurrencyId, BridgeError> {
        self.get(symbol)?
            .currency
            .ok_or_else(|| BridgeError::CurrencyNotFound(symbol.to_string()))
    }

    /// Every token.
    pub fn tokens(&self) -> &'static [Token] {
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_is_first_entry() {
        let registry = TokenRegistry::for_chain(ChainId::Calamari).unwrap();
        assert_eq!(registry.native().unwrap().symbol, "KMA");
        assert!(registry.is_native("KMA"));
        assert!(!registry.is_native("KSM"));
    }

    #[test]
    fn test_lookup_missing_token() {
        let registry = TokenRegistry::for_chain(ChainId::Kusama).unwrap();
        assert_eq!(
            registry.get("DOT"),
            Err(BridgeError::TokenNotFound("DOT".to_string()))
        );
    }

    #[test]
    fn test_currency_ids() {
        let calamari = TokenRegistry::for_chain(ChainId::Calamari).unwrap();
        assert_eq!(calamari.currency_id("USDT"), Ok(CurrencyId::MantaCurrency(14)));

        let moonriver = TokenRegistry::for_chain(ChainId::Moonriver).unwrap();
        assert_eq!(
            moonriver.currency_id("KAR"),
            Err(BridgeError::CurrencyNotFound("KAR".to_string()))
        );
    }

    #[test]
    fn test_chains_without_tables() {
        assert!(TokenRegistry::for_chain(ChainId::Karura).is_none());
    }
}
