use proptest::prelude::*;

use txscript::push::{push_prefix, push_size};
use txscript::scriptnum::ScriptNum;
use txscript::template::{csv, multisig, op_return, p2pkh, p2sh, witness};
use txscript::{classify, push_from_bytes, BuildFlags, Script, ScriptType};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn multisig_length_and_type(n in 1usize..=16, m_seed in any::<u32>(), key_byte in any::<u8>()) {
        let m = m_seed % n as u32 + 1;
        let keys = vec![key_byte; 33 * n];
        let mut out = vec![0u8; 3 + 34 * 16];
        let written = multisig::lock_from_bytes(&keys, m, BuildFlags::NONE, &mut out).unwrap();
        prop_assert_eq!(written, 3 + 34 * n);
        prop_assert_eq!(classify(&out[..written]).unwrap(), ScriptType::Multisig);
    }

    #[test]
    fn p2pkh_and_p2sh_classify(hash in prop::array::uniform20(any::<u8>())) {
        prop_assert_eq!(classify(&p2pkh::lock(&hash)).unwrap(), ScriptType::P2pkh);
        prop_assert_eq!(classify(&p2sh::lock(&hash)).unwrap(), ScriptType::P2sh);
    }

    #[test]
    fn csv_lengths_follow_timelock(csv_blocks in 1u32..=0xffff) {
        let csv_len = 1 + usize::from(csv_blocks > 0x7f) + usize::from(csv_blocks > 0x7fff);
        prop_assert_eq!(ScriptNum::from(csv_blocks).encoded_len(), csv_len);

        let mut out = [0u8; 160];
        let two = vec![0x02u8; 66];
        let three = vec![0x03u8; 99];
        let none = BuildFlags::NONE;
        prop_assert_eq!(
            csv::lock_2of2_then_1_from_bytes(&two, csv_blocks, none, &mut out).unwrap(),
            2 * 34 + 9 + 1 + csv_len
        );
        prop_assert_eq!(
            csv::lock_2of3_then_2_from_bytes(&three, csv_blocks, none, &mut out).unwrap(),
            3 * 34 + 13 + 1 + csv_len
        );
    }

    #[test]
    fn push_writes_prefix_then_data(data in prop::collection::vec(any::<u8>(), 1..600)) {
        let mut out = vec![0u8; data.len() + 5];
        let written = push_from_bytes(&data, BuildFlags::NONE, &mut out).unwrap();
        let prefix = push_prefix(data.len()).unwrap();
        prop_assert_eq!(written, push_size(data.len()).unwrap());
        prop_assert_eq!(&out[..prefix.len()], &prefix[..]);
        prop_assert_eq!(&out[prefix.len()..written], &data[..]);
    }

    #[test]
    fn short_output_is_a_size_query(
        data in prop::collection::vec(any::<u8>(), 20..200),
        short in 0usize..20,
    ) {
        let mut out = vec![0xeeu8; short];
        let needed = push_from_bytes(&data, BuildFlags::NONE, &mut out).unwrap();
        prop_assert_eq!(needed, push_size(data.len()).unwrap());
        prop_assert!(out.iter().all(|&b| b == 0xee));
    }

    #[test]
    fn witness_program_hashes_any_input(data in prop::collection::vec(any::<u8>(), 1..100)) {
        let p2wpkh =
            Script::build(|out| witness::program_from_bytes(&data, BuildFlags::HASH160, out))
                .unwrap();
        let p2wsh =
            Script::build(|out| witness::program_from_bytes(&data, BuildFlags::SHA256, out))
                .unwrap();
        prop_assert_eq!(p2wpkh.script_type().unwrap(), ScriptType::P2wpkh);
        prop_assert_eq!(p2wsh.script_type().unwrap(), ScriptType::P2wsh);
    }

    #[test]
    fn op_return_classifies(data in prop::collection::vec(any::<u8>(), 0..=80)) {
        let script =
            Script::build(|out| op_return::lock_from_bytes(&data, BuildFlags::NONE, out)).unwrap();
        prop_assert_eq!(script.script_type().unwrap(), ScriptType::OpReturn);
    }

    #[test]
    fn script_hex_roundtrip(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let script = Script::from_bytes(&data);
        let script2 = Script::from_hex(&script.to_hex()).unwrap();
        prop_assert_eq!(script.to_bytes(), script2.to_bytes());
    }
}
