//! Static route tables: (destination, token) -> fee and weight policy.

use crate::domain::{ChainId, Route, RouteSet, WeightLimit};

const CALAMARI_DEST_WEIGHT: WeightLimit = WeightLimit::Limited(5_000_000_000);
const MOONRIVER_DEST_WEIGHT: WeightLimit = WeightLimit::Limited(800_000_000);

/// Polkadot outbound routes.
pub static POLKADOT_ROUTES: &[Route] = &[Route::new(
    ChainId::Acala,
    "DOT",
    3_549_633,
    WeightLimit::Unlimited,
)];

/// Kusama outbound routes while the runtime accepts legacy XCM.
pub static KUSAMA_ROUTES: &[Route] = &[
    Route::new(ChainId::Karura, "KSM", 71_927_964, WeightLimit::Unlimited),
    Route::new(ChainId::Basilisk, "KSM", 51_618_187, WeightLimit::Unlimited),
    Route::new(ChainId::Statemine, "KSM", 5_275_240, WeightLimit::Unlimited),
    Route::new(ChainId::Calamari, "KSM", 167_728_833, WeightLimit::Unlimited),
];

/// Kusama outbound routes after the V3 upgrade.
pub static KUSAMA_V3_ROUTES: &[Route] = &[
    Route::new(ChainId::Karura, "KSM", 44_163_610, WeightLimit::Unlimited),
    Route::new(ChainId::Basilisk, "KSM", 72_711_796, WeightLimit::Unlimited),
    Route::new(ChainId::Statemine, "KSM", 34_368_318, WeightLimit::Unlimited),
    Route::new(ChainId::Calamari, "KSM", 167_728_833, WeightLimit::Unlimited),
];

/// Calamari outbound routes.
pub static CALAMARI_ROUTES: &[Route] = &[
    Route::new(ChainId::Karura, "KMA", 6_400_000_000, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Karura, "KUSD", 6_381_112_603, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Karura, "KAR", 6_400_000_000, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Karura, "USDT", 808, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Karura, "LKSM", 452_334_406, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Karura, "KSM", 54_632_622, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Karura, "DAI", 808_240_000_000_000, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Karura, "USDCet", 808, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Karura, "WBTC", 2, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Karura, "WETH", 449_022_222_222, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Karura, "BNB", 3_232_960_000_000, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Karura, "BUSD", 808_240_000_000_000, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Karura, "ARB", 727_416_000_000_000, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Kusama, "KSM", 90_287_436, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Moonriver, "MOVR", 23_356_409_465_885, CALAMARI_DEST_WEIGHT),
    Route::new(ChainId::Statemine, "USDT", 1_183, CALAMARI_DEST_WEIGHT),
];

/// Moonriver outbound routes.
pub static MOONRIVER_ROUTES: &[Route] = &[Route::new(
    ChainId::Calamari,
    "MOVR",
    2_000_000_000_000_000,
    MOONRIVER_DEST_WEIGHT,
)];

/// Moonbeam has no configured corridors.
pub static MOONBEAM_ROUTES: &[Route] = &[];

/// Route tables of a source chain, if it has any.
pub fn route_set(chain: ChainId) -> Option<RouteSet> {
    match chain {
        ChainId::Polkadot => Some(RouteSet::single(POLKADOT_ROUTES)),
        ChainId::Kusama => Some(RouteSet {
            legacy: KUSAMA_ROUTES,
            current: Some(KUSAMA_V3_ROUTES),
        }),
        ChainId::Calamari => Some(RouteSet::single(CALAMARI_ROUTES)),
        ChainId::Moonbeam => Some(RouteSet::single(MOONBEAM_ROUTES)),
        ChainId::Moonriver => Some(RouteSet::single(MOONRIVER_ROUTES)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{invariant_fee_token_registered, invariant_route_token_registered};
    use crate::registry::TokenRegistry;

    #[test]
    fn test_every_route_token_is_registered() {
        for chain in ChainId::ALL {
            let (Some(set), Some(tokens)) = (route_set(chain), TokenRegistry::for_chain(chain))
            else {
                continue;
            };
            for route in set.legacy.iter().chain(set.current.unwrap_or(&[]).iter()) {
                assert!(
                    invariant_route_token_registered(route, tokens.tokens()).is_ok(),
                    "{chain}: {} not registered",
                    route.token
                );
                assert!(invariant_fee_token_registered(route, tokens.tokens()).is_ok());
            }
        }
    }

    #[test]
    fn test_routes_never_loop_back() {
        for chain in ChainId::ALL {
            if let Some(set) = route_set(chain) {
                assert!(set.legacy.iter().all(|r| r.to != chain));
            }
        }
    }

    #[test]
    fn test_kusama_v3_table_differs() {
        let set = route_set(ChainId::Kusama).unwrap();
        let legacy = set.active(true).iter().find(|r| r.to == ChainId::Karura).unwrap();
        let current = set.active(false).iter().find(|r| r.to == ChainId::Karura).unwrap();
        assert_eq!(legacy.xcm.fee.amount, 71_927_964);
        assert_eq!(current.xcm.fee.amount, 44_163_610);
    }
}
