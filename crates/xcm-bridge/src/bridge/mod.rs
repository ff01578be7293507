//! # Cross-Chain Adapter
//!
//! One engine for every source chain, parameterized by a `SourceFamily`.
//!
//! ## Lifecycle
//!
//! ```text
//! new(chain, tokens, routes) ──init(connection)──> bound
//!        │                                          │
//!        └── helpers only                           └── balances, max-input,
//!                                                       fees, create_tx
//! ```
//!
//! `init` detects the runtime's XCM version once and selects the active
//! route table. Operations other than the static helpers fail with
//! `ApiNotFound` until then.

pub mod family;

pub use family::{evm_transfer_fee, CallRequest, SourceFamily};

use crate::algorithms::{
    combine_latest, compute_max_input, detect_xcm_version, AddressCodec, DestinationKind,
};
use crate::balance::BalanceAdapter;
use crate::config::BridgeConfig;
use crate::domain::{
    invariant_destination_shape, BridgeError, Chain, ChainId, FixedPoint, Route, RouteSet, Token,
    TransferCall, TransferParams, WeightLimit, XcmVersion,
};
use crate::ports::{BalanceStream, ChainConnection, CrossChainApi, MaxInputStream};
use crate::registry::{chain, TokenRegistry};
use async_trait::async_trait;
use futures::future::{self, BoxFuture, FutureExt};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info};
use xcm_telemetry::log_transfer_event;

/// State that exists only once a connection is bound.
struct BoundState {
    connection: Arc<dyn ChainConnection>,
    xcm_version: XcmVersion,
    routes: &'static [Route],
    balance: BalanceAdapter,
}

/// Cross-chain adapter of one source chain.
pub struct CrossChainAdapter {
    chain: &'static Chain,
    family: SourceFamily,
    tokens: TokenRegistry,
    route_set: RouteSet,
    config: BridgeConfig,
    bound: Option<BoundState>,
}

impl CrossChainAdapter {
    /// Create an unbound adapter.
    pub fn new(
        chain: &'static Chain,
        tokens: TokenRegistry,
        route_set: RouteSet,
        config: BridgeConfig,
    ) -> Self {
        Self {
            chain,
            family: SourceFamily::for_chain(chain),
            tokens,
            route_set,
            config,
            bound: None,
        }
    }

    /// Adapter for a chain with configured tables.
    pub fn for_chain(id: ChainId, config: BridgeConfig) -> Result<Self, BridgeError> {
        let tokens = TokenRegistry::for_chain(id)
            .ok_or_else(|| BridgeError::UnsupportedChain(id.to_string()))?;
        let route_set = crate::registry::route_set(id)
            .ok_or_else(|| BridgeError::UnsupportedChain(id.to_string()))?;
        Ok(Self::new(chain(id), tokens, route_set, config))
    }

    /// Source chain.
    pub fn chain(&self) -> &'static Chain {
        self.chain
    }

    /// Source family.
    pub fn family(&self) -> SourceFamily {
        self.family
    }

    /// Active route table. Before `init` this is the current-version table.
    pub fn routes(&self) -> &'static [Route] {
        match &self.bound {
            Some(bound) => bound.routes,
            None => self.route_set.active(false),
        }
    }

    /// Token registry.
    pub fn tokens(&self) -> &TokenRegistry {
        &self.tokens
    }

    /// Native token.
    pub fn native_token(&self) -> Option<&'static Token> {
        self.tokens.native()
    }

    /// Look up a token.
    pub fn get_token(&self, symbol: &str) -> Result<&'static Token, BridgeError> {
        self.tokens.get(symbol)
    }

    /// Route for sending `token` to `to`; `TokenNotFound` if none is configured.
    pub fn get_route(&self, token: &str, to: ChainId) -> Result<&'static Route, BridgeError> {
        self.routes()
            .iter()
            .find(|r| r.to == to && r.token == token)
            .ok_or_else(|| BridgeError::TokenNotFound(token.to_string()))
    }

    /// Destination weight policy of a route.
    pub fn get_dest_weight(&self, token: &str, to: ChainId) -> Result<WeightLimit, BridgeError> {
        Ok(self.get_route(token, to)?.xcm.weight_limit)
    }

    /// Detected XCM version, once bound.
    pub fn xcm_version(&self) -> Option<XcmVersion> {
        self.bound.as_ref().map(|b| b.xcm_version)
    }

    /// Whether a connection is bound.
    pub fn is_initialized(&self) -> bool {
        self.bound.is_some()
    }

    fn bound(&self) -> Result<&BoundState, BridgeError> {
        self.bound
            .as_ref()
            .ok_or(BridgeError::ApiNotFound(self.chain.id))
    }

    /// Fee of sending `token` over `route`, without the max-input margin.
    fn fee_future(
        &self,
        bound: &BoundState,
        route: &'static Route,
    ) -> Result<BoxFuture<'static, Result<FixedPoint, BridgeError>>, BridgeError> {
        if self.family.uses_live_fee() {
            let native = self
                .tokens
                .native()
                .ok_or_else(|| BridgeError::TokenNotFound(route.token.to_string()))?;
            let decimals = native.decimals;
            let connection = Arc::clone(&bound.connection);
            let config = self.config.clone();

            return Ok(async move {
                let gas_price = connection.gas_price().await?;
                let fee = evm_transfer_fee(gas_price, &config)?;
                FixedPoint::from_inner(fee, decimals)
            }
            .boxed());
        }

        let fee_token = self.tokens.get(route.xcm.fee.token)?;
        let fee = FixedPoint::from_inner(route.xcm.fee.amount, fee_token.decimals)?;
        Ok(future::ready(Ok(fee)).boxed())
    }
}

#[async_trait]
impl CrossChainApi for CrossChainAdapter {
    async fn init(&mut self, connection: Arc<dyn ChainConnection>) -> Result<(), BridgeError> {
        connection.ready().await?;

        let probe = self.config.probe_xcm_version
            && (self.family.is_version_sensitive() || self.route_set.current.is_some());
        let xcm_version = if probe {
            detect_xcm_version(connection.xcm_location_versions().await)
        } else {
            XcmVersion::Current
        };

        let routes = self.route_set.active(xcm_version.is_legacy());
        let balance = BalanceAdapter::new(self.chain, self.tokens, Arc::clone(&connection));

        info!(
            chain = %self.chain.id,
            family = ?self.family,
            ?xcm_version,
            routes = routes.len(),
            "[xcm-bridge] adapter initialized"
        );

        self.bound = Some(BoundState {
            connection,
            xcm_version,
            routes,
            balance,
        });
        Ok(())
    }

    fn subscribe_token_balance(
        &self,
        token: &str,
        address: &str,
    ) -> Result<BalanceStream, BridgeError> {
        self.bound()?.balance.subscribe_balance(token, address)
    }

    fn subscribe_max_input(
        &self,
        token: &str,
        address: &str,
        to: ChainId,
    ) -> Result<MaxInputStream, BridgeError> {
        let bound = self.bound()?;
        AddressCodec::validate(address, self.chain.account_model)?;
        let meta = self.tokens.get(token)?;
        let route = self.get_route(token, to)?;
        let balances = bound.balance.subscribe_balance(token, address)?;

        let fee = if self.tokens.is_native(token) {
            self.fee_future(bound, route)?
        } else {
            future::ready(Ok(FixedPoint::zero(meta.decimals))).boxed()
        };
        let fee_factor = self.config.fee_factor.as_pair();

        debug!(chain = %self.chain.id, %to, token, "[xcm-bridge] subscribing max input");

        let available = balances.map(|snapshot| snapshot.available);
        Ok(combine_latest(stream::once(fee), available)
            .map(move |(fee, available)| {
                fee.and_then(|fee| compute_max_input(available, fee, meta, fee_factor))
            })
            .boxed())
    }

    async fn estimate_tx_fee(&self, params: &TransferParams) -> Result<FixedPoint, BridgeError> {
        let bound = self.bound()?;
        self.tokens.get(&params.token)?;
        let route = self.get_route(&params.token, params.to)?;
        self.fee_future(bound, route)?.await
    }

    fn create_tx(&self, params: &TransferParams) -> Result<TransferCall, BridgeError> {
        let bound = self.bound()?;
        let token = self.tokens.get(&params.token)?;
        let route = self.get_route(&params.token, params.to)?;

        let destination = chain(params.to);
        let account = AddressCodec::decode(&params.address, destination.account_model)?;
        let amount = params.amount.rescale(token.decimals)?.to_chain_data()?;

        let request = CallRequest {
            destination,
            kind: DestinationKind::classify(self.chain, destination),
            version: bound.xcm_version,
            token,
            is_native: self.tokens.is_native(token.symbol),
            route,
            account,
            amount,
        };
        let call = self.family.build_call(&request)?;
        debug_assert!(invariant_destination_shape(&call, destination));

        log_transfer_event!(
            debug,
            "[xcm-bridge] transfer call built",
            self.chain.id,
            params.to,
            token.symbol,
            call = %format!("{}.{}", call.pallet(), call.method()),
            version = call.version_tag(),
            amount = %params.amount
        );
        Ok(call)
    }
}
