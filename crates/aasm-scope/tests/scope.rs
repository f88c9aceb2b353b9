use aasm_scope::{Action, Agent, Behaviour, BehaviourKind, Message, Scope};

#[test]
fn rcv_only_in_message_received_behaviour() {
    let msg = Message::new("ping", "query").with_float_param("value");

    let scope = Scope::new(
        Agent::new("node"),
        Behaviour::message_received("on_ping", msg.clone()),
        Action::modify("answer"),
    );
    assert_eq!(scope.received_message(), Some(&msg));
    assert!(scope.send_message().is_none());

    let cyclic = Scope::new(
        Agent::new("node"),
        Behaviour::new("tick", BehaviourKind::Cyclic { period: 1.0 }),
        Action::modify("answer"),
    );
    assert!(cyclic.received_message().is_none());
}

#[test]
fn send_only_in_send_action() {
    let msg = Message::new("pong", "inform").with_connection_param("origin");
    let scope = Scope::new(
        Agent::new("node"),
        Behaviour::setup("init"),
        Action::send("reply", msg),
    );

    let send = scope.send_message().unwrap();
    assert!(send.connection_params.contains("origin"));
    assert!(send.is_reserved_type_param("performative"));
    assert!(send.is_reserved_connection_param("sender"));
}

#[test]
fn message_module_variable_lookup() {
    let msg = Message::new("state", "inform").with_module_variable_param("pos", "Vector3");
    assert_eq!(msg.get_module_variable_type("pos"), Ok("Vector3"));
    assert!(msg.get_module_variable_type("rot").is_err());
}
