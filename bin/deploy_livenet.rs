//! Deploy the liquidity pool to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000

use odra::casper_types::U256;
use odra::host::Deployer;
use odra::prelude::*;

use cspr_lp_contracts::mocks::{TestOracle, TestStaking, TestToken, TestTokenInitArgs};
use cspr_lp_contracts::pool::{LiquidityPool, LiquidityPoolInitArgs};

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== CSPR-LP Livenet Deployment ===");
    println!();

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls (required for Casper 2.0 txs)
    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    // Get deployer address
    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    // ==================== Phase 1: Collaborators ====================
    println!("=== Phase 1: Deploying Collaborators ===");
    println!();

    println!("Deploying wrapped-native token (WCSPR)...");
    let mut wcspr = TestToken::deploy(
        &env,
        TestTokenInitArgs {
            name: String::from("Wrapped CSPR"),
            symbol: String::from("WCSPR"),
            decimals: 9,
        },
    );
    let wcspr_addr = wcspr.address().clone();
    println!("WCSPR deployed at: {:?}", wcspr_addr);

    println!("Deploying stable unit token (lpUSD)...");
    let mut lpusd = TestToken::deploy(
        &env,
        TestTokenInitArgs {
            name: String::from("LP USD"),
            symbol: String::from("lpUSD"),
            decimals: 9,
        },
    );
    let lpusd_addr = lpusd.address().clone();
    println!("lpUSD deployed at: {:?}", lpusd_addr);

    println!("Deploying TestOracle...");
    let mut oracle = TestOracle::deploy(&env, odra::host::NoArgs);
    let oracle_addr = oracle.address().clone();
    println!("TestOracle deployed at: {:?}", oracle_addr);

    println!("Deploying TestStaking...");
    let staking = TestStaking::deploy(&env, odra::host::NoArgs);
    let staking_addr = staking.address().clone();
    println!("TestStaking deployed at: {:?}", staking_addr);

    println!();

    // ==================== Phase 2: Pool ====================
    println!("=== Phase 2: Deploying LiquidityPool ===");
    println!();

    let pool = LiquidityPool::deploy(
        &env,
        LiquidityPoolInitArgs {
            native_asset: wcspr_addr,
            stable_unit: lpusd_addr,
            oracle: oracle_addr,
            staking_bridge: staking_addr,
        },
    );
    let pool_addr = pool.address().clone();
    println!("LiquidityPool deployed at: {:?}", pool_addr);

    println!();

    // ==================== Phase 3: Wiring ====================
    println!("=== Phase 3: Cross-contract Configuration ===");
    println!();

    println!("Authorizing pool as lpUSD minter...");
    lpusd.add_minter(pool_addr);
    println!("Done.");

    println!("Seeding oracle price for WCSPR...");
    oracle.set_price(wcspr_addr, U256::one());
    println!("Done.");

    println!("Minting initial WCSPR to deployer...");
    wcspr.mint(deployer, U256::from(100_000_000_000u64));
    println!("Done.");

    println!();
    println!("=== Deployment Complete ===");
    println!();
    println!("Contract Addresses:");
    println!("  WCSPR:         {:?}", wcspr_addr);
    println!("  lpUSD:         {:?}", lpusd_addr);
    println!("  TestOracle:    {:?}", oracle_addr);
    println!("  TestStaking:   {:?}", staking_addr);
    println!("  LiquidityPool: {:?}", pool_addr);
}
