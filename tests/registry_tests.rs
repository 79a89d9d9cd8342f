//! Registry integration tests.
//!
//! These tests exercise the ownership aggregate through realistic session
//! sequences: registration, claiming and transfer, destruction, and the
//! point aggregation queries.

use relic_core::{ClaimPolicy, OwnerId, Rarity, Relic, RegistryConfig, RelicError, RelicRegistry};

fn relic(name: &str, rarity: Rarity) -> Relic {
    Relic::new(name, rarity).unwrap()
}

/// Registration makes a relic visible to every read API.
#[test]
fn test_register_then_read_back() {
    let mut registry = RelicRegistry::new();
    let mace = relic("Mace of Djibuttiron", Rarity::Unique);

    registry.register(mace.clone()).unwrap();

    assert!(registry.contains(&mace));
    assert_eq!(registry.by_name("Mace of Djibuttiron"), Some(&mace));
    assert_eq!(registry.owner_of(&mace).unwrap(), None);
    assert_eq!(registry.all().count(), 1);
    assert_eq!(registry.owned().count(), 0);
}

/// Name collisions are rejected even when the rarity differs.
#[test]
fn test_name_uniqueness_ignores_rarity() {
    let mut registry = RelicRegistry::new();
    registry.register(relic("Seal", Rarity::Common)).unwrap();

    let err = registry.register(relic("Seal", Rarity::Legendary)).unwrap_err();
    assert!(matches!(err, RelicError::AlreadyRegistered { ref name } if name == "Seal"));

    // The original entry is untouched.
    assert_eq!(registry.by_name("Seal").unwrap().rarity(), Rarity::Common);
}

/// Claim, transfer by re-claim, and the distinction between "unclaimed"
/// and "not registered".
#[test]
fn test_claim_transfer_and_owner_queries() {
    let mut registry = RelicRegistry::new();
    let seal = relic("Seal", Rarity::Rare);
    let first = OwnerId::new_v4();
    let second = OwnerId::new_v4();

    registry.register(seal.clone()).unwrap();
    registry.claim(&seal, first).unwrap();
    assert_eq!(registry.owner_of(&seal).unwrap(), Some(first));

    // Default policy: last claim wins, effecting a transfer.
    registry.claim(&seal, second).unwrap();
    assert_eq!(registry.owner_of(&seal).unwrap(), Some(second));

    let ghost = relic("Ghost", Rarity::Rare);
    assert!(matches!(
        registry.owner_of(&ghost).unwrap_err(),
        RelicError::NotRegistered { .. }
    ));
    assert!(matches!(
        registry.claim(&ghost, first).unwrap_err(),
        RelicError::NotRegistered { .. }
    ));
}

/// The strict policy turns re-claim into an error instead of a transfer.
#[test]
fn test_strict_claim_policy() {
    let mut registry = RelicRegistry::with_config(RegistryConfig {
        claim_policy: ClaimPolicy::RequireUnowned,
    });
    let seal = relic("Seal", Rarity::Rare);
    let holder = OwnerId::new_v4();

    registry.register(seal.clone()).unwrap();
    registry.claim(&seal, holder).unwrap();

    let err = registry.claim(&seal, OwnerId::new_v4()).unwrap_err();
    assert!(matches!(err, RelicError::AlreadyOwned { ref name } if name == "Seal"));
    assert_eq!(registry.owner_of(&seal).unwrap(), Some(holder));

    // Destruction frees the name for a fresh register + claim cycle.
    registry.destroy(&seal).unwrap();
    registry.register(seal.clone()).unwrap();
    registry.claim(&seal, OwnerId::new_v4()).unwrap();
}

/// Destruction removes the relic and its ownership atomically; repeating
/// it fails.
#[test]
fn test_destroy_lifecycle() {
    let mut registry = RelicRegistry::new();
    let blade = relic("Blade", Rarity::Legendary);

    registry.register(blade.clone()).unwrap();
    registry.claim(&blade, OwnerId::new_v4()).unwrap();
    registry.destroy(&blade).unwrap();

    assert!(!registry.contains(&blade));
    assert_eq!(registry.by_name("Blade"), None);
    assert!(matches!(
        registry.owner_of(&blade).unwrap_err(),
        RelicError::NotRegistered { .. }
    ));
    assert!(matches!(
        registry.destroy(&blade).unwrap_err(),
        RelicError::NotRegistered { .. }
    ));
}

/// Point totals per owner follow the 1/2/3/5/8 rarity curve; owners
/// without relics never appear.
#[test]
fn test_points_by_owner_aggregation() {
    let mut registry = RelicRegistry::new();
    let a = OwnerId::new_v4();
    let b = OwnerId::new_v4();
    let c = OwnerId::new_v4();
    let idle = OwnerId::new_v4();

    let holdings = [
        ("Crown", Rarity::Unique, a),
        ("Coin", Rarity::Common, b),
        ("Seal", Rarity::Rare, b),
        ("Mask", Rarity::Epic, b),
        ("Blade", Rarity::Legendary, c),
    ];
    for (name, rarity, owner) in holdings {
        let item = relic(name, rarity);
        registry.register(item.clone()).unwrap();
        registry.claim(&item, owner).unwrap();
    }

    let totals = registry.points_by_owner();
    assert_eq!(totals.get(&a), Some(&8), "one Unique");
    assert_eq!(totals.get(&b), Some(&6), "Common + Rare + Epic");
    assert_eq!(totals.get(&c), Some(&5), "one Legendary");
    assert_eq!(totals.get(&idle), None, "empty-handed owners are absent");
    assert_eq!(totals.len(), 3);
}

/// Totals track destruction and transfer.
#[test]
fn test_points_follow_mutations() {
    let mut registry = RelicRegistry::new();
    let a = OwnerId::new_v4();
    let b = OwnerId::new_v4();
    let crown = relic("Crown", Rarity::Unique);
    let coin = relic("Coin", Rarity::Common);

    registry.register(crown.clone()).unwrap();
    registry.register(coin.clone()).unwrap();
    registry.claim(&crown, a).unwrap();
    registry.claim(&coin, a).unwrap();
    assert_eq!(registry.points_by_owner().get(&a), Some(&9));

    registry.claim(&crown, b).unwrap();
    let totals = registry.points_by_owner();
    assert_eq!(totals.get(&a), Some(&1));
    assert_eq!(totals.get(&b), Some(&8));

    registry.destroy(&coin).unwrap();
    let totals = registry.points_by_owner();
    assert_eq!(totals.get(&a), None, "a's last relic is gone");
    assert_eq!(totals.get(&b), Some(&8));
}
