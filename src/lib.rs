//! # NFT AMM
//!
//! Bonding-curve exchange engine for pools of non-fungible items and
//! native value.
//!
//! A [`Pair`](pair::Pair) binds one item collection to one pricing curve
//! and one pool type:
//!
//! - **Token** pools buy items with native value.
//! - **NFT** pools sell items for native value.
//! - **Trade** pools do both and keep a trade fee.
//!
//! Prices move along one of three feature-gated curves:
//!
//! - **Linear**: additive step per item. `linear` feature.
//! - **Exponential**: multiplicative step per item. `exponential` feature.
//! - **Constant Product**: virtual `x * y = k` reserves.
//!   `constant-product` feature.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `all-curves` | yes | Enables all three curves |
//! | `linear`, `exponential`, `constant-product` | via `all-curves` | One curve each |
//!
//! # Quick Start
//!
//! ```rust
//! use nft_amm::prelude::*;
//!
//! let admin = Address::from_bytes([9u8; 32]);
//! let seller = Address::from_bytes([1u8; 32]);
//! let buyer = Address::from_bytes([2u8; 32]);
//! let collection_id = Address::from_bytes([0xaa; 32]);
//!
//! // 1. Collaborators: a native-value bank and an item collection
//! let mut bank = MemoryBank::new();
//! bank.mint(&buyer, Amount::units(10)).expect("mint");
//! let mut collection = MemoryCollection::enumerable(collection_id);
//! collection.mint_many(&seller, [1, 2, 3].map(ItemId::new)).expect("mint");
//!
//! // 2. A factory charging the default 1 % protocol fee
//! let mut factory = PairFactory::new(
//!     Address::from_bytes([0xfa; 32]),
//!     admin,
//!     ProtocolFeeConfig::with_default_fee(admin),
//! )
//! .expect("valid fee config");
//!
//! // 3. An NFT pool on an exponential curve: spot 1, delta 1.5
//! let config = PairConfig::new(
//!     collection_id,
//!     CurveKind::Exponential,
//!     PoolType::Nft,
//!     Amount::units(1),
//!     Amount::ratio(3, 2),
//! )
//! .with_items([1, 2, 3].map(ItemId::new));
//! let mut pair = factory
//!     .create_pair(&mut CallContext::new(seller, &mut bank, &mut collection), &config)
//!     .expect("pair created");
//!
//! // 4. Buy one item: 1.5 plus the 1 % protocol fee
//! let mut ctx = CallContext::new(buyer, &mut bank, &mut collection).with_value(Amount::units(2));
//! let record = pair
//!     .swap_token_for_any_items(&mut ctx, 1, Amount::units(2), buyer)
//!     .expect("bought");
//! assert_eq!(record.amount_in, Amount::ratio(1515, 1000));
//! assert_eq!(pair.spot_price(), Amount::ratio(3, 2));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Factory    │  allow-list, protocol fee, pair creation
//! └──────┬──────┘
//!        │ create_pair(ctx, &PairConfig)
//!        ▼
//! ┌─────────────┐
//! │    Pair      │  swaps, admin, journaled settlement
//! └──┬───────┬──┘
//!    │       │
//!    ▼       ▼
//! ┌──────┐ ┌───────────┐
//! │Curve │ │ Inventory  │  CurveBox / InventoryTracker (enum dispatch)
//! └──┬───┘ └─────┬─────┘
//!    ▼           ▼
//! ┌─────────────────────┐
//! │ NativeBank, ItemCollection │  external collaborators
//! └─────────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Fraction`](domain::Fraction), [`Address`](domain::Address), [`ItemId`](domain::ItemId), records |
//! | [`traits`] | Seams: [`Curve`](traits::Curve), [`ItemCollection`](traits::ItemCollection), [`NativeBank`](traits::NativeBank), [`Inventory`](traits::Inventory) |
//! | [`curves`] | Feature-gated curves and [`CurveBox`](curves::CurveBox) |
//! | [`inventory`] | Enumerable and registry inventory strategies |
//! | [`pair`] | [`Pair`](pair::Pair) state machine and [`CallContext`](pair::CallContext) |
//! | [`factory`] | [`PairFactory`](factory::PairFactory) |
//! | [`config`] | [`PairConfig`](config::PairConfig), [`ProtocolFeeConfig`](config::ProtocolFeeConfig) |
//! | [`ledger`] | In-memory bank and collection |
//! | [`math`] | Rounding division and WAD fixed point |
//! | [`obs`] | Tracing subscriber setup |
//! | [`error`] | [`AmmError`](error::AmmError) |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod curves;
pub mod domain;
pub mod error;
pub mod factory;
pub mod inventory;
pub mod ledger;
pub mod math;
pub mod obs;
pub mod pair;
pub mod prelude;
pub mod traits;
