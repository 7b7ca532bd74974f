//! Public contract of the cipher engine

use obscura_cipher::{
    ChainSpec, CipherConfig, CipherEngine, CipherKind, Error, Preset, Suggestion,
};
use serde_json::{json, Value};

const PLAIN: &str = "Meet me by the old oak tree at noon";

fn round_trip(engine: &CipherEngine, cipher_type: &str, config: Value) -> String {
    let encrypted = engine.encrypt(PLAIN, cipher_type, &config).unwrap();
    engine.decrypt(&encrypted, cipher_type, &config).unwrap()
}

#[test]
fn every_cipher_round_trips_its_normal_form() {
    let engine = CipherEngine::new();
    let upper = PLAIN.to_uppercase();
    let compact: String = PLAIN.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(round_trip(&engine, "caesar", json!({"shift": 11})), PLAIN);
    assert_eq!(round_trip(&engine, "vigenere", json!({"key": "Oak"})), PLAIN);
    assert_eq!(round_trip(&engine, "base64", Value::Null), PLAIN);
    assert_eq!(round_trip(&engine, "atbash", Value::Null), upper);
    assert_eq!(round_trip(&engine, "morse", json!({})), upper);
    assert_eq!(round_trip(&engine, "railfence", json!({"rails": 4})), compact);
    assert_eq!(round_trip(&engine, "baconian", Value::Null), compact.to_uppercase());
    assert_eq!(round_trip(&engine, "polybius", Value::Null), compact.to_uppercase());
}

#[test]
fn chain_equals_manual_composition() {
    let engine = CipherEngine::new();
    let chain = ChainSpec::parse(&json!([
        {"type": "caesar", "config": {"shift": 3}},
        {"type": "atbash"}
    ]))
    .unwrap();

    let shifted = engine.encrypt(PLAIN, "caesar", &json!({"shift": 3})).unwrap();
    let expected = engine.encrypt(&shifted, "atbash", &Value::Null).unwrap();

    let encrypted = engine.encrypt_chain(PLAIN, &chain).unwrap();
    assert_eq!(encrypted.ciphertext, expected);

    let decrypted = engine.decrypt_chain(&encrypted.ciphertext, &chain).unwrap();
    assert_eq!(decrypted.plaintext, PLAIN.to_uppercase());
    assert_eq!(decrypted.chain[0].kind, CipherKind::Atbash);
}

#[test]
fn chain_report_serializes_camel_case() {
    let engine = CipherEngine::new();
    let chain = ChainSpec::new(vec![CipherConfig::caesar(1)]).unwrap();
    let value = serde_json::to_value(engine.encrypt_chain("abc", &chain).unwrap()).unwrap();

    assert_eq!(value["ciphertext"], "bcd");
    assert_eq!(value["layers"], 1);
    assert_eq!(value["chain"][0]["layer"], 1);
    assert_eq!(value["chain"][0]["type"], "caesar");
    assert_eq!(value["chain"][0]["metadata"]["parameters"]["shift"], 1);
    assert_eq!(value["chain"][0]["success"], true);
}

#[test]
fn chain_failure_is_atomic() {
    let engine = CipherEngine::new();
    let chain = ChainSpec::new(vec![
        CipherConfig::caesar(3),
        CipherConfig::Base64,
        CipherConfig::Atbash,
    ])
    .unwrap();

    match engine.encrypt_chain("price: 5€", &chain) {
        Err(Error::ChainLayer { layer, cipher, .. }) => {
            assert_eq!(layer, 2);
            assert_eq!(cipher, "base64");
        }
        other => panic!("expected ChainLayer, got {:?}", other),
    }
}

#[test]
fn validate_chain_rejects_bad_shapes() {
    let engine = CipherEngine::new();

    assert!(!engine.validate_chain(&json!([])).valid);
    assert!(!engine.validate_chain(&json!([{"type": "enigma"}])).valid);
    assert!(!engine.validate_chain(&json!([{"type": "caesar", "config": {"shift": 30}}])).valid);
    assert!(!engine.validate_chain(&json!([{"type": "atbash", "config": {"rails": 3}}])).valid);

    let six: Vec<Value> = (0..6).map(|_| json!({"type": "atbash"})).collect();
    let report = engine.validate_chain(&Value::Array(six));
    assert!(report.valid);
    assert_eq!(report.warnings.len(), 1);

    let value = serde_json::to_value(report).unwrap();
    assert_eq!(value["layerCount"], 6);
}

#[test]
fn analysis_suggests_symbol_ciphers() {
    let engine = CipherEngine::new();
    assert!(engine.analyze("... --- ...").suggestions.contains(&Suggestion::Morse));
    assert!(engine.analyze("13 11 12").suggestions.contains(&Suggestion::Polybius));

    let bacon = engine.encrypt("hidden", "baconian", &Value::Null).unwrap();
    let suggestions = engine.analyze(&bacon).suggestions;
    assert!(suggestions.contains(&Suggestion::Baconian));
    assert!(suggestions.contains(&Suggestion::Substitution));
}

#[test]
fn solver_recovers_short_key() {
    let engine = CipherEngine::new();
    let plaintext = "The quick development of modern computers has changed the way people \
        think about secret writing. In earlier centuries a message could be protected by a simple \
        shift of the alphabet, and most readers would never guess the method. Later writers used \
        a keyword to change the shift for every letter, which made the common patterns";

    let ciphertext = engine.encrypt(plaintext, "vigenere", &json!({"key": "KEY"})).unwrap();
    let estimate = engine.solve_vigenere(&ciphertext).unwrap();
    assert_eq!(estimate.key, "KEY");
    assert_eq!(estimate.key_length, 3);

    assert!(engine.solve_vigenere("Q").is_none());
}

#[test]
fn presets_run_as_chains() {
    let engine = CipherEngine::new();
    let presets = engine.presets();

    let rot13 = presets.get("rot13").unwrap();
    assert_eq!(rot13, &Preset::Single(CipherConfig::caesar(13)));
    let encrypted = engine.encrypt_chain("Hello", &rot13.as_chain()).unwrap();
    assert_eq!(encrypted.ciphertext, "Uryyb");

    let key = presets.get("obscuraKey").unwrap().as_chain();
    let encrypted = engine.encrypt_chain("Hidden in plain sight", &key).unwrap();
    let decrypted = engine.decrypt_chain(&encrypted.ciphertext, &key).unwrap();
    assert_eq!(decrypted.plaintext, "Hidden in plain sight");
}
