//! NFT pool walkthrough.
//!
//! Creates a factory, an exponential NFT pool and a linear Trade pool,
//! trades against both and prints balances along the way.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example nft_pool
//! ```

use nft_amm::config::{PairConfig, ProtocolFeeConfig};
use nft_amm::domain::{Address, Amount, CurveKind, Fraction, ItemId, PoolType};
use nft_amm::factory::PairFactory;
use nft_amm::ledger::{MemoryBank, MemoryCollection};
use nft_amm::obs;
use nft_amm::pair::CallContext;
use nft_amm::traits::NativeBank;

const FEE_CONFIG: &str = r#"
fee = "10000000000000000"
recipient = "0x0909090909090909090909090909090909090909090909090909090909090909"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    obs::init()?;
    println!("=== NFT AMM pools ===\n");

    // ── 1. Collaborators ───────────────────────────────────────────────
    let admin = Address::from_bytes([9u8; 32]);
    let creator = Address::from_bytes([1u8; 32]);
    let trader = Address::from_bytes([2u8; 32]);
    let collection_id = Address::from_bytes([0xaa; 32]);

    let mut bank = MemoryBank::new();
    bank.mint(&creator, Amount::units(100))?;
    bank.mint(&trader, Amount::units(100))?;
    let mut collection = MemoryCollection::enumerable(collection_id);
    collection.mint_many(&creator, (1..=10).map(ItemId::new))?;
    collection.mint_many(&trader, (100..=104).map(ItemId::new))?;

    // ── 2. Factory with a TOML fee config ──────────────────────────────
    let fees = ProtocolFeeConfig::from_toml_str(FEE_CONFIG)?;
    let mut factory = PairFactory::new(Address::from_bytes([0xfa; 32]), admin, fees)?;
    println!("Protocol fee: {} to {}", fees.fee(), fees.recipient());

    // ── 3. NFT pool: exponential, spot 1, delta 1.5 ────────────────────
    let nft_config = PairConfig::new(
        collection_id,
        CurveKind::Exponential,
        PoolType::Nft,
        Amount::units(1),
        Amount::ratio(3, 2),
    )
    .with_items((1..=5).map(ItemId::new));
    let mut nft_pool =
        factory.create_pair(&mut CallContext::new(creator, &mut bank, &mut collection), &nft_config)?;
    println!("\nNFT pool {} holds {:?}", nft_pool.address(), nft_pool.nft_ids(&collection));

    let quote = nft_pool.quote_buy(2)?;
    println!("Buying 2 costs {} (protocol fee {})", quote.value(), quote.protocol_fee());
    let mut ctx = CallContext::new(trader, &mut bank, &mut collection).with_value(quote.value());
    let bought = nft_pool.swap_token_for_any_items(&mut ctx, 2, quote.value(), trader)?;
    println!("Paid {}; new spot price {}", bought.amount_in, nft_pool.spot_price());

    // ── 4. Trade pool: linear, spot 1, delta 0.1, 5 % trade fee ────────
    let trade_config = PairConfig::new(
        collection_id,
        CurveKind::Linear,
        PoolType::Trade,
        Amount::units(1),
        Amount::ratio(1, 10),
    )
    .with_trade_fee(Fraction::percent(5))
    .with_items((6..=8).map(ItemId::new));
    let mut ctx = CallContext::new(creator, &mut bank, &mut collection).with_value(Amount::units(10));
    let mut trade_pool = factory.create_pair(&mut ctx, &trade_config)?;

    let sold: Vec<ItemId> = (100..=101).map(ItemId::new).collect();
    let mut ctx = CallContext::new(trader, &mut bank, &mut collection);
    let record = trade_pool.swap_items_for_token(&mut ctx, &sold, Amount::ZERO, trader)?;
    println!(
        "\nTrade pool {} paid {} for 2 items; holds {:?}",
        trade_pool.address(),
        record.amount_out,
        trade_pool.nft_ids(&collection)
    );

    // ── 5. Balances ────────────────────────────────────────────────────
    println!("\n--- Balances ---");
    println!("  creator:       {}", bank.balance_of(&creator));
    println!("  trader:        {}", bank.balance_of(&trader));
    println!("  protocol:      {}", bank.balance_of(&fees.recipient()));
    println!("  trade pool:    {}", trade_pool.balance(&bank));
    println!("  pairs created: {}", factory.records().len());
    Ok(())
}
