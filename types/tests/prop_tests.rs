use proptest::prelude::*;

use vouch_types::{ProtocolParams, WalletAddress};

proptest! {
    /// WalletAddress roundtrip: new -> as_str returns the original string.
    #[test]
    fn address_roundtrip(suffix in "[a-z0-9]{1,40}") {
        let raw = format!("vch_{suffix}");
        let addr = WalletAddress::new(raw.clone());
        prop_assert_eq!(addr.as_str(), raw.as_str());
        prop_assert!(addr.is_valid());
    }

    /// WalletAddress bincode serialization roundtrip.
    #[test]
    fn address_bincode_roundtrip(suffix in "[a-z0-9]{1,40}") {
        let addr = WalletAddress::new(format!("vch_{suffix}"));
        let encoded = bincode::serialize(&addr).unwrap();
        let decoded: WalletAddress = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, addr);
    }

    /// ProtocolParams bincode serialization roundtrip preserves every field.
    #[test]
    fn params_bincode_roundtrip(
        max_endorsements in 1u64..1_000,
        weightage_activity in 0u64..10_000,
        multiplier in 0u64..100_000,
    ) {
        let params = ProtocolParams {
            max_endorsements,
            default_weightage_activity: weightage_activity,
            default_weightage_quality: 10_000 - weightage_activity,
            default_multiplier: multiplier,
            ..ProtocolParams::vouch_defaults()
        };
        let encoded = bincode::serialize(&params).unwrap();
        let decoded: ProtocolParams = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded.max_endorsements, params.max_endorsements);
        prop_assert_eq!(decoded.default_weightage_activity, params.default_weightage_activity);
        prop_assert_eq!(decoded.default_weightage_quality, params.default_weightage_quality);
        prop_assert_eq!(decoded.default_multiplier, params.default_multiplier);
        prop_assert_eq!(decoded.reward_precision, params.reward_precision);
    }
}
