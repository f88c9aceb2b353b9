#![allow(dead_code)]
//! Scopes shared by the typing tests.

use aasm_scope::{Action, Agent, Behaviour, EnumParam, Message, Scope};

pub fn init_log() {
    let _ = pretty_env_logger::try_init();
}

///Agent with one parameter of each kind.
pub fn agent() -> Agent {
    Agent::new("walker")
        .with_float_param("speed")
        .with_enum(
            EnumParam::new("mood")
                .with_value("happy", 60.0)
                .with_value("sad", 40.0),
        )
        .with_message_list("inbox")
        .with_connection_list("friends")
        .with_float_list("history")
        .with_module_variable("position", "Vector3")
        .with_module_variable("heading", "Vector3")
        .with_module_variable("offset", "Vector2")
}

pub fn ping() -> Message {
    Message::new("ping", "query")
        .with_float_param("value")
        .with_connection_param("origin")
        .with_module_variable_param("pos", "Vector3")
}

///Setup behaviour with a plain modify action that declared `tmp`, `peer` and `target`.
pub fn modify_scope() -> Scope {
    Scope::new(
        agent(),
        Behaviour::setup("init"),
        Action::modify("update")
            .with_float("tmp")
            .with_connection("peer")
            .with_module_variable("target", "Vector3"),
    )
}

///Reacting to [ping].
pub fn received_scope() -> Scope {
    Scope::new(
        agent(),
        Behaviour::message_received("on_ping", ping()),
        Action::modify("answer"),
    )
}

///Sending a [ping].
pub fn send_scope() -> Scope {
    Scope::new(
        agent(),
        Behaviour::setup("init"),
        Action::send("say_hello", ping()),
    )
}
