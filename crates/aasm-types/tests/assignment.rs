use aasm_types::{find_module_variable_type, Argument, CompositeType, Tag};
use fixtures::{init_log, modify_scope, received_scope, send_scope};

mod fixtures;

#[test]
fn float_pair_before_enum_pair() {
    init_log();
    use Tag::*;
    let scope = modify_scope();
    let mut target = Argument::from_types(
        "both",
        vec![
            CompositeType::compose(&[Enum, AgentParam, Mutable]),
            CompositeType::compose(&[Float, AgentParam, Mutable]),
        ],
    );
    let mut rhs = Argument::new(&scope, "speed");

    assert!(target.assignment_context(&mut rhs, &scope));
    assert_eq!(
        target.type_in_op(),
        Some(&CompositeType::compose(&[Float, AgentParam, Mutable]))
    );
}

#[test]
fn immutable_targets() {
    init_log();
    let scope = received_scope();
    let mut target = Argument::new(&scope, "connCount");
    let mut rhs = Argument::new(&scope, "1");
    assert!(!target.assignment_context(&mut rhs, &scope));

    let mut target = Argument::new(&scope, "rcv.value");
    assert!(!target.assignment_context(&mut rhs, &scope));
}

#[test]
fn basic_pairs() {
    init_log();
    let scope = received_scope();
    let cases = [
        ("mood", "sad", true),
        ("speed", "rcv.value", true),
        ("friends", "connections", true),
        ("history", "history", true),
        ("inbox", "inbox", true),
        ("mood", "speed", false),
        ("history", "friends", false),
    ];
    for (target, rhs, expected) in cases {
        let mut target = Argument::new(&scope, target);
        let mut rhs = Argument::new(&scope, rhs);
        assert_eq!(
            target.assignment_context(&mut rhs, &scope),
            expected,
            "{} = {}",
            target.expr(),
            rhs.expr()
        );
    }
}

#[test]
fn send_message_params() {
    init_log();
    let scope = send_scope();
    let mut value = Argument::new(&scope, "send.value");
    let mut speed = Argument::new(&scope, "speed");
    assert!(value.assignment_context(&mut speed, &scope));
    assert_eq!(value.explain_type_in_op(), "Float_SendMessageParam_Mutable");

    let mut pos = Argument::new(&scope, "send.pos");
    let mut position = Argument::new(&scope, "position");
    assert!(pos.assignment_context(&mut position, &scope));
    assert_eq!(pos.explain_type_in_op(), "Vector3_SendMessageParam_Mutable");

    //Connection fields go through the plain connection pair.
    let mut origin = Argument::new(&scope, "send.origin");
    let mut me = Argument::new(&scope, "self");
    assert!(origin.assignment_context(&mut me, &scope));
    assert_eq!(origin.explain_type_in_op(), "Connection_SendMessageParam_Mutable");
}

#[test]
fn module_variable_subtypes() {
    init_log();
    let scope = modify_scope();
    let mut position = Argument::new(&scope, "position");
    let mut heading = Argument::new(&scope, "heading");
    let mut offset = Argument::new(&scope, "offset");
    let mut target = Argument::new(&scope, "target");

    assert!(position.assignment_context(&mut heading, &scope));
    assert_eq!(position.explain_type_in_op(), "Vector3_AgentParam_Mutable");
    assert!(target.assignment_context(&mut position, &scope));

    assert!(!heading.assignment_context(&mut offset, &scope));
    assert!(!offset.assignment_context(&mut target, &scope));
}

#[test]
fn module_variable_lookup_order() {
    init_log();
    let scope = received_scope();
    assert_eq!(
        find_module_variable_type(&Argument::new(&scope, "position"), &scope),
        "Vector3"
    );
    assert_eq!(
        find_module_variable_type(&Argument::new(&scope, "rcv.pos"), &scope),
        "Vector3"
    );
    assert_eq!(
        find_module_variable_type(&Argument::new(&scope, "speed"), &scope),
        ""
    );

    let mut rcv_pos = Argument::new(&scope, "rcv.pos");
    let mut position = Argument::new(&scope, "position");
    assert!(position.assignment_context(&mut rcv_pos, &scope));
    //received fields are never targets
    assert!(!rcv_pos.assignment_context(&mut position, &scope));

    let send = send_scope();
    assert_eq!(
        find_module_variable_type(&Argument::new(&send, "send.pos"), &send),
        "Vector3"
    );
}

#[test]
fn unresolvable_module_variable() {
    init_log();
    use Tag::*;
    let scope = modify_scope();
    //Reading that claims to be a module variable, but nothing in scope declares it.
    let mut ghost = Argument::from_types(
        "ghost",
        vec![CompositeType::module_variable("Vector3", &[Declared, Mutable])],
    );
    let mut position = Argument::new(&scope, "position");
    assert_eq!(find_module_variable_type(&ghost, &scope), "");
    assert!(!ghost.assignment_context(&mut position, &scope));
}
