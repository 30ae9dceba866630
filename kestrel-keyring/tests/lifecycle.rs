//! End-to-end wallet lifecycle tests across the registry and both chains.

use kestrel::Wallet;
use kestrel_keyring::{Chain, WalletState};

const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

#[test]
fn generated_phrase_round_trips_through_validation() {
    let state = WalletState::generate().unwrap();
    let phrase = state.mnemonic().unwrap();

    assert!(kestrel_keyring::validate_phrase(phrase));
    assert!(WalletState::from_phrase(phrase).is_ok());
}

#[test]
fn created_account_matches_direct_derivation() {
    let state = WalletState::generate().unwrap();
    let phrase = state.mnemonic().unwrap().to_string();
    let (account, _) = state.create_account(Chain::Solana, None).unwrap();

    // The registry's first account equals a direct index-0 derivation.
    let wallet = Wallet::from_mnemonic(&phrase, None).unwrap();
    let direct = kestrel_sol::Deriver::new(&wallet).derive(0).unwrap();

    assert_eq!(account.public_key, direct.address);
    assert_eq!(account.derivation_path(), direct.path);
}

#[test]
fn imported_ethereum_account_matches_independent_address() {
    // A 64-hex-digit key without 0x prefix.
    let key_hex = "0000000000000000000000000000000000000000000000000000000000000001";
    let state = WalletState::new();

    let (account, _) = state
        .import_account(Chain::Ethereum, key_hex, None)
        .unwrap();

    let independent = kestrel_evm::StandardWallet::from_hex(key_hex).unwrap();
    assert_eq!(account.public_key, independent.address());
    assert_eq!(account.public_key, "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf");
}

#[test]
fn removed_index_is_never_reused() {
    let state = WalletState::from_phrase(TEST_MNEMONIC).unwrap();

    let (first, state) = state.create_account(Chain::Solana, None).unwrap();
    let (second, state) = state.create_account(Chain::Solana, None).unwrap();
    let state = state.remove_account(first.id);
    let (third, state) = state.create_account(Chain::Solana, None).unwrap();

    assert_eq!(first.index(), 0);
    assert_eq!(second.index(), 1);
    assert_eq!(third.index(), 2);
    assert_eq!(state.next_index(Chain::Solana), 3);
}

#[test]
fn index_advances_by_exactly_one_per_create() {
    let mut state = WalletState::from_phrase(TEST_MNEMONIC).unwrap();
    let before = state.next_index(Chain::Ethereum);

    for _ in 0..4 {
        let (_, next) = state.create_account(Chain::Ethereum, None).unwrap();
        // Interleave removals; they must not disturb the counter.
        state = next.remove_account(kestrel_keyring::AccountId(0));
    }

    assert_eq!(state.next_index(Chain::Ethereum), before + 4);
    assert_eq!(state.next_index(Chain::Solana), 0);
}

#[test]
fn revealed_hd_key_reimports_to_same_account() {
    let state = WalletState::from_phrase(TEST_MNEMONIC).unwrap();

    let (sol, state) = state.create_account(Chain::Solana, None).unwrap();
    let (evm, state) = state.create_account(Chain::Ethereum, None).unwrap();

    let sol_key = state.reveal_private_key(sol.id).unwrap();
    let (sol_imported, state) = state
        .import_account(Chain::Solana, &sol_key, None)
        .unwrap();
    assert_eq!(sol_imported.public_key, sol.public_key);

    let evm_key = state.reveal_private_key(evm.id).unwrap();
    let (evm_imported, _) = state
        .import_account(Chain::Ethereum, &evm_key, None)
        .unwrap();
    assert_eq!(evm_imported.public_key, evm.public_key);
}

#[test]
fn import_only_wallet_reveals_without_phrase() {
    let seed_b58 = bs58::encode(&[9u8; 32]).into_string();
    let state = WalletState::new();

    let (account, state) = state
        .import_account(Chain::Solana, &seed_b58, Some("Paper"))
        .unwrap();

    // Stored normalized form is the 64-byte keypair encoding.
    let revealed = state.reveal_private_key(account.id).unwrap();
    let decoded = bs58::decode(revealed.as_str()).into_vec().unwrap();
    assert_eq!(decoded.len(), 64);

    assert!(state.mnemonic().is_none());
}

#[test]
fn persistence_shape_is_stable() {
    let state = WalletState::from_phrase(TEST_MNEMONIC).unwrap();
    let (_, state) = state.create_account(Chain::Solana, None).unwrap();
    let (_, state) = state
        .import_account(
            Chain::Ethereum,
            "0x0000000000000000000000000000000000000000000000000000000000000002",
            None,
        )
        .unwrap();

    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["mnemonic"], TEST_MNEMONIC);
    assert_eq!(json["nextSolanaIndex"], 1);
    assert_eq!(json["nextEthereumIndex"], 0);
    assert_eq!(json["accounts"][0]["chain"], "solana");
    assert_eq!(json["accounts"][0]["origin"]["derived"]["path"], "m/44'/501'/0'/0'");
    assert_eq!(json["accounts"][1]["chain"], "ethereum");
    assert!(json["accounts"][1]["origin"]["imported"]["privateKey"]
        .as_str()
        .unwrap()
        .starts_with("0x"));

    // Round trip reproduces the state exactly.
    let restored: WalletState = serde_json::from_value(json).unwrap();
    assert_eq!(restored, state);
}
