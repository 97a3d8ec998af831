//! Pair creation and factory-wide administration.
//!
//! The [`PairFactory`] deploys [`Pair`](crate::pair::Pair)s, funds them
//! from the creator's attached value and items, and owns the protocol fee
//! settings every pair reads on each trade.
//!
//! # Usage
//!
//! ```rust
//! use nft_amm::config::{PairConfig, ProtocolFeeConfig};
//! use nft_amm::domain::{Address, Amount, CurveKind, ItemId, PoolType};
//! use nft_amm::factory::PairFactory;
//! use nft_amm::ledger::{MemoryBank, MemoryCollection};
//! use nft_amm::pair::CallContext;
//!
//! let admin = Address::from_bytes([9u8; 32]);
//! let creator = Address::from_bytes([1u8; 32]);
//! let mut bank = MemoryBank::new();
//! let mut collection = MemoryCollection::new(Address::from_bytes([0xaa; 32]));
//! collection.mint_many(&creator, [1, 2].map(ItemId::new)).expect("fresh ids");
//!
//! let mut factory = PairFactory::new(
//!     Address::from_bytes([0xfa; 32]),
//!     admin,
//!     ProtocolFeeConfig::with_default_fee(admin),
//! )
//! .expect("valid fee config");
//!
//! let config = PairConfig::new(
//!     Address::from_bytes([0xaa; 32]),
//!     CurveKind::Linear,
//!     PoolType::Nft,
//!     Amount::units(1),
//!     Amount::ratio(1, 2),
//! )
//! .with_items([1, 2].map(ItemId::new));
//!
//! let mut ctx = CallContext::new(creator, &mut bank, &mut collection);
//! let pair = factory.create_pair(&mut ctx, &config).expect("pair created");
//! assert_eq!(pair.owner(), creator);
//! assert_eq!(factory.records().len(), 1);
//! ```

mod pair_factory;

pub use pair_factory::PairFactory;
