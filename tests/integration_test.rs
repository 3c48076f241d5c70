use rlp_codec::rlp::{self, Item};
use rlp_codec::{render_hex, write_output, Config, InputError, ItemParser, OutputFormat};
use rlp_codec::types::Bytes;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_encode_from_json_notation() {
    let parser = ItemParser::default();
    let item = parser.parse_str(r#"[1, "0x", []]"#).unwrap();
    
    let encoded = rlp::encode(&item);
    assert_eq!(render_hex(&encoded, &Config::default().output), "0xc30180c0");
}

#[test]
fn test_hex_file_reference() {
    let temp_dir = TempDir::new().unwrap();
    let payload = vec![0xabu8; 60];
    fs::write(
        temp_dir.path().join("input.hex"),
        format!("0x{}\n", Bytes::from_vec(payload.clone()).to_hex()),
    )
    .unwrap();
    
    let item_path = temp_dir.path().join("item.json");
    fs::write(&item_path, r#"[1, "875000001", "@input.hex", 1337, 0]"#).unwrap();
    
    // @input.hex resolves next to item.json
    let item = ItemParser::default().parse_file(&item_path).unwrap();
    assert_eq!(
        item,
        Item::list(vec![
            Item::from(1u8),
            Item::from(875000001u32),
            Item::bytes(payload.clone()),
            Item::from(1337u16),
            Item::from(0u8),
        ])
    );
    
    let encoded = rlp::encode(&item);
    assert_eq!(&encoded[..2], &[0xf8, 1 + 5 + 62 + 3 + 1]);
    assert_eq!(&encoded[2..8], &[0x01, 0x84, 0x34, 0x27, 0x70, 0xc1]);
    assert_eq!(&encoded[8..10], &[0xb8, 60]);
}

#[test]
fn test_missing_hex_file() {
    let temp_dir = TempDir::new().unwrap();
    let parser = ItemParser::default().with_base_dir(temp_dir.path());
    
    let err = parser.parse_str(r#""@absent.hex""#).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
}

#[test]
fn test_negative_input_is_invalid() {
    let parser = ItemParser::default();
    let err = parser.parse_str("[1, -5]").unwrap_err();
    assert!(err.to_string().contains("negative integer -5"));
}

#[test]
fn test_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rlp-codec.toml");
    
    let mut config = Config::default();
    config.output.prefix = false;
    config.output.format = OutputFormat::Binary;
    config.input.max_depth = 8;
    config.to_file(&path).unwrap();
    
    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_config_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rlp-codec.toml");
    fs::write(&path, "[input]\nmax_depth = 0\n").unwrap();
    
    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_write_output_formats() {
    let temp_dir = TempDir::new().unwrap();
    let encoded = rlp::encode(&Item::from("dog"));
    let mut config = Config::default().output;
    
    let hex_path = temp_dir.path().join("out.hex");
    write_output(&hex_path, &encoded, &config).unwrap();
    assert_eq!(fs::read_to_string(&hex_path).unwrap(), "0x83646f67\n");
    
    config.format = OutputFormat::Binary;
    let bin_path = temp_dir.path().join("out.bin");
    write_output(&bin_path, &encoded, &config).unwrap();
    assert_eq!(fs::read(&bin_path).unwrap(), vec![0x83, b'd', b'o', b'g']);
}

proptest! {
    #[test]
    fn decimal_strings_match_native_integers(n in any::<u128>()) {
        let parser = ItemParser::default();
        let parsed = parser.parse_str(&format!("\"{}\"", n)).unwrap();
        prop_assert_eq!(rlp::encode(&parsed), rlp::encode(&Item::from(n)));
    }
}
