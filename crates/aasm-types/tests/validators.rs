use aasm_types::{Argument, AttrKey, CompositeType, Operator, Tag, TypeError, TypeQuery};
use fixtures::{init_log, modify_scope, received_scope, send_scope};

mod fixtures;

fn committed(arg: &Argument) -> &CompositeType {
    arg.type_in_op().expect("argument was not committed")
}

#[test]
fn literal_is_no_round_target() {
    init_log();
    let mut five = Argument::new(&modify_scope(), "5.0");
    assert!(!five.round_number_context());
    assert!(five.type_in_op().is_none());
}

#[test]
fn agent_param_is_round_target() {
    init_log();
    let mut x = Argument::new(&modify_scope(), "speed");
    assert!(x.round_number_context());
    assert!(committed(&x).matches(&TypeQuery::from([Tag::Float, Tag::Mutable])));
}

#[test]
fn list_write_value_must_fit_list() {
    init_log();
    let scope = modify_scope();
    let mut list = Argument::new(&scope, "history");
    let mut idx = Argument::new(&scope, "2");
    let mut value = Argument::new(&scope, "peer");
    assert!(!list.list_write_context(&mut idx, &mut value));
    assert!(list.type_in_op().is_none());
    assert!(idx.type_in_op().is_none());
    assert!(value.type_in_op().is_none());

    let mut friends = Argument::new(&scope, "friends");
    assert!(friends.list_write_context(&mut idx, &mut value));
    assert_eq!(committed(&idx).name(), "Float_Immutable_Literal");
    assert_eq!(committed(&value).name(), "Connection_Declared_Mutable");
}

#[test]
fn math_is_deterministic() {
    init_log();
    let scope = modify_scope();
    let mut target = Argument::new(&scope, "speed");
    let mut rhs = Argument::new(&scope, "3");

    assert!(target.math_context(&mut rhs));
    let first = (committed(&target).clone(), committed(&rhs).clone());
    assert!(target.math_context(&mut rhs));
    assert_eq!(first, (committed(&target).clone(), committed(&rhs).clone()));
    //Float reading comes before the integer one
    assert_eq!(first.1.name(), "Float_Immutable_Literal");
}

#[test]
fn math_rejects_connections() {
    init_log();
    let scope = modify_scope();
    for rhs in ["3", "peer", "speed", "nothing"] {
        let mut target = Argument::new(&scope, "peer");
        let mut rhs = Argument::new(&scope, rhs);
        assert!(!target.math_context(&mut rhs));
        assert!(target.type_in_op().is_none());
    }
}

#[test]
fn declaration() {
    init_log();
    let scope = modify_scope();
    let mut name = Argument::new(&scope, "fresh");
    let mut value = Argument::new(&scope, "1.5");
    assert!(name.declaration_context(&mut value));
    assert_eq!(
        committed(&name),
        &CompositeType::compose(&[Tag::Float, Tag::Declared, Tag::Mutable])
    );

    let mut name = Argument::new(&scope, "fresh");
    let mut value = Argument::new(&scope, "self");
    assert!(name.declaration_context(&mut value));
    assert_eq!(
        committed(&name),
        &CompositeType::compose(&[Tag::Connection, Tag::Declared, Tag::Mutable])
    );

    let mut value = Argument::new(&scope, "friends");
    assert!(!name.declaration_context(&mut value));
}

#[test]
fn enum_comparison() {
    init_log();
    let scope = modify_scope();
    let mut mood = Argument::new(&scope, "mood");
    let mut happy = Argument::new(&scope, "happy");
    assert!(mood.unordered_comparison_context(&mut happy));
    assert_eq!(committed(&happy).attribute(AttrKey::FromEnum), Some("mood"));

    //enum values are unordered
    assert!(!mood.ordered_comparison_context(&mut happy));

    let mut speed = Argument::new(&scope, "speed");
    assert!(!speed.unordered_comparison_context(&mut happy));
    let mut three = Argument::new(&scope, "3");
    assert!(speed.ordered_comparison_context(&mut three));
}

#[test]
fn exponentiation_and_modulo() {
    init_log();
    let scope = modify_scope();
    let mut target = Argument::new(&scope, "tmp");
    let mut base = Argument::new(&scope, "2");
    let mut arg = Argument::new(&scope, "connCount");
    assert!(target.math_exponentiation_context(&mut base, &mut arg));
    assert!(target.math_modulo_context(&mut base, &mut arg));

    let mut immutable = Argument::new(&scope, "connCount");
    assert!(!immutable.math_modulo_context(&mut base, &mut arg));
}

#[test]
fn list_operations() {
    init_log();
    let scope = received_scope();
    let mut friends = Argument::new(&scope, "friends");
    let mut inbox = Argument::new(&scope, "inbox");
    let mut history = Argument::new(&scope, "history");
    let mut sender = Argument::new(&scope, "rcv.sender");
    let mut msg = Argument::new(&scope, "rcv");
    let mut value = Argument::new(&scope, "rcv.value");

    assert!(friends.list_modification_context(&mut sender));
    assert!(inbox.list_modification_context(&mut msg));
    assert!(history.list_modification_context(&mut value));
    assert!(!history.list_modification_context(&mut sender));

    assert!(friends.list_inclusion_context(&mut sender));
    assert!(!inbox.list_inclusion_context(&mut value));

    assert!(friends.list_n_removal_context(&mut value));
    assert!(history.list_clear_context());
    assert_eq!(committed(&history).name(), "List_FloatList_AgentParam_Mutable");

    let mut count = Argument::new(&scope, "speed");
    assert!(count.list_length_context(&mut inbox));
    assert!(!value.list_length_context(&mut inbox));

    let mut subset_of = Argument::new(&scope, "connections");
    assert!(friends.list_subset_context(&mut subset_of, &mut value));
    assert!(!history.list_subset_context(&mut subset_of, &mut value));
}

#[test]
fn list_read() {
    init_log();
    let scope = modify_scope();
    let mut idx = Argument::new(&scope, "0");
    let mut tmp = Argument::new(&scope, "tmp");
    let mut history = Argument::new(&scope, "history");
    assert!(tmp.list_read_context(&mut history, &mut idx));

    let mut peer = Argument::new(&scope, "peer");
    let mut friends = Argument::new(&scope, "friends");
    assert!(peer.list_read_context(&mut friends, &mut idx));
    assert!(!peer.list_read_context(&mut history, &mut idx));
}

#[test]
fn send_targets() {
    init_log();
    let scope = send_scope();
    let mut friends = Argument::new(&scope, "friends");
    assert!(friends.send_context());
    let mut origin = Argument::new(&scope, "send.origin");
    assert!(origin.send_context());
    let mut value = Argument::new(&scope, "send.value");
    assert!(!value.send_context());
}

#[test]
fn random_numbers() {
    init_log();
    let scope = modify_scope();
    let mut target = Argument::new(&scope, "tmp");
    assert!(target.random_number_generation_context(&mut []));

    let mut lo = Argument::new(&scope, "0");
    let mut hi = Argument::new(&scope, "speed");
    assert!(target.random_number_generation_context(&mut [&mut lo, &mut hi]));
    assert_eq!(committed(&hi).name(), "Float_AgentParam_Mutable");

    let mut bad = Argument::new(&scope, "peer");
    assert!(!target.random_number_generation_context(&mut [&mut lo, &mut bad]));
}

#[test]
fn operator_resolution_is_pure() {
    init_log();
    let scope = modify_scope();
    let target = Argument::new(&scope, "speed");
    let rhs = Argument::new(&scope, "3");

    let res = Operator::Math
        .resolve(&[&target, &rhs], &scope)
        .unwrap()
        .expect("math should resolve");
    assert!(target.type_in_op().is_none());
    assert_eq!(res.len(), 2);
    assert_eq!(res.operand(1).unwrap().name(), "Float_Immutable_Literal");

    let committed = res.committed(&[&target, &rhs]).unwrap();
    assert_eq!(committed[0].explain_type_in_op(), "Float_AgentParam_Mutable");

    assert!(Operator::Math.resolve(&[&target], &scope).is_err());
    assert!(Operator::RandomNumberGeneration
        .resolve(&[&target, &rhs, &rhs, &rhs], &scope)
        .unwrap()
        .is_some());
}

#[test]
fn resolution_needs_all_operands() {
    init_log();
    let scope = modify_scope();
    let mut target = Argument::new(&scope, "speed");
    let mut rhs = Argument::new(&scope, "3");
    let res = Operator::Math
        .resolve(&[&target, &rhs], &scope)
        .unwrap()
        .unwrap();

    assert_eq!(
        res.apply(&mut [&mut target]),
        Err(TypeError::ResolutionMismatch {
            resolved: 2,
            found: 1
        })
    );
    assert!(target.type_in_op().is_none());
    assert!(res.committed(&[&target]).is_err());

    assert_eq!(res.apply(&mut [&mut target, &mut rhs]), Ok(()));
    assert_eq!(target.explain_type_in_op(), "Float_AgentParam_Mutable");
}
