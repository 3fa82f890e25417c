#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;

#[test]
fn test_built_ins_are_preinterned() {
    let map = TokenMap::new();
    assert_eq!(map.len(), Key::BUILT_IN_COUNT as usize);
    assert_eq!(map.get("func"), Some(BuiltIn::Func.id()));
    assert_eq!(map.insert("&^=").unwrap(), BuiltIn::AmpHatEq.id());
    assert_eq!(map.by_id(BuiltIn::DotDot.id()), "..");
}

#[test]
fn test_insert_classifies_new_text() {
    let map = TokenMap::new();

    let ident = map.insert("decode_header").unwrap();
    assert!(ident.is_ident());
    assert!(!ident.is_built_in());

    let num = map.insert("0x1F").unwrap();
    assert!(num.is_literal());
    assert!(num.is_num_literal());
    assert!(!num.is_ident());

    let s = map.insert("\"gif \"").unwrap();
    assert!(s.is_literal());
    assert!(s.is_str_literal());
}

#[test]
fn test_insert_is_idempotent() {
    let map = TokenMap::new();
    let a = map.insert("width").unwrap();
    let b = map.insert("width").unwrap();
    assert_eq!(a, b);
    assert_eq!(map.by_id(a), "width");
    assert_eq!(map.len(), Key::BUILT_IN_COUNT as usize + 1);
}

#[test]
fn test_insert_rejects_unknown_text() {
    let map = TokenMap::new();
    assert_eq!(map.insert(""), Err(TokenMapError::Empty));
    assert!(matches!(map.insert("@@"), Err(TokenMapError::Unrecognized(_))));
    assert!(matches!(map.insert("\"open"), Err(TokenMapError::Unrecognized(_))));
    assert!(matches!(map.insert("a-b"), Err(TokenMapError::Unrecognized(_))));
}

#[test]
fn test_lookup_of_none_is_empty() {
    let map = TokenMap::new();
    assert_eq!(map.by_id(Id::NONE), "");
    assert_eq!(map.by_key(Key::from_raw(1_000_000)), "");
}

#[test]
fn test_concurrent_inserts_agree() {
    let map = TokenMap::new();
    let ids: Vec<Vec<Id>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    (0..64)
                        .map(|i| map.insert(&format!("name{i}")).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for other in &ids[1..] {
        assert_eq!(&ids[0], other);
    }
    assert_eq!(map.len(), Key::BUILT_IN_COUNT as usize + 64);
}
