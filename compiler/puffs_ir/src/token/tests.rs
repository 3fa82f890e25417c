use super::*;

#[test]
fn test_table_is_in_key_order() {
    for (i, b) in BuiltIn::all().enumerate() {
        assert_eq!(b as usize, i + 1, "{b:?} is out of order");
        assert_eq!(BuiltIn::from_key(b.key()), Some(b));
    }
    assert_eq!(BuiltIn::all().count() as u32 + 1, Key::BUILT_IN_COUNT);
}

#[test]
fn test_from_key_out_of_range() {
    assert_eq!(BuiltIn::from_key(Key::NONE), None);
    assert_eq!(BuiltIn::from_key(Key::from_raw(Key::BUILT_IN_COUNT)), None);
}

#[test]
fn test_id_packs_key_and_flags() {
    let id = Id::new(Key::from_raw(4242), IdFlags::IDENT);
    assert_eq!(id.key().raw(), 4242);
    assert!(id.is_ident());
    assert!(!id.is_literal());
    assert!(!id.is_built_in());
}

#[test]
fn test_none_id() {
    assert!(Id::NONE.is_none());
    assert_eq!(Id::NONE.key(), Key::NONE);
    assert_eq!(Id::NONE.built_in(), None);
    assert_eq!(Id::NONE.binary_form(), None);
}

#[test]
fn test_operator_predicates() {
    let plus = BuiltIn::Plus.id();
    assert!(plus.is_unary_op());
    assert!(plus.is_binary_op());
    assert!(plus.is_associative_op());

    let minus = BuiltIn::Minus.id();
    assert!(minus.is_unary_op());
    assert!(minus.is_binary_op());
    assert!(!minus.is_associative_op());

    assert!(BuiltIn::Not.id().is_unary_op());
    assert!(!BuiltIn::Not.id().is_binary_op());

    assert!(BuiltIn::As.id().is_binary_op());
    assert_eq!(BuiltIn::As.id().binary_form(), None);
}

#[test]
fn test_operator_forms() {
    assert_eq!(BuiltIn::Minus.id().unary_form(), Some(UnaryOp::Minus));
    assert_eq!(BuiltIn::Minus.id().binary_form(), Some(BinaryOp::Sub));
    assert_eq!(BuiltIn::Minus.id().associative_form(), None);
    assert_eq!(BuiltIn::And.id().associative_form(), Some(AssociativeOp::And));
    assert_eq!(BuiltIn::AmpHat.id().binary_form(), Some(BinaryOp::BitAndNot));
}

#[test]
fn test_every_associative_op_is_binary() {
    for b in BuiltIn::all() {
        let id = b.id();
        if id.is_associative_op() {
            assert!(id.is_binary_op(), "{b:?}");
            assert!(id.associative_form().is_some(), "{b:?}");
            assert!(id.binary_form().is_some(), "{b:?}");
        }
        if id.is_unary_op() {
            assert!(id.unary_form().is_some(), "{b:?}");
        }
    }
}

#[test]
fn test_assignment_ops() {
    assert!(BuiltIn::Eq.id().is_assign());
    assert!(BuiltIn::AmpHatEq.id().is_assign());
    assert!(!BuiltIn::EqEq.id().is_assign());
}

#[test]
fn test_reserved_identifiers_are_built_in_idents() {
    for b in [BuiltIn::In, BuiltIn::Out, BuiltIn::This, BuiltIn::U8, BuiltIn::Reader1] {
        assert!(b.id().is_ident());
        assert!(b.id().is_built_in());
    }
}

#[test]
fn test_is_compares_keys_only() {
    let id = BuiltIn::Colon.id();
    assert!(id.is(BuiltIn::Colon));
    assert!(!id.is(BuiltIn::Semicolon));
}
