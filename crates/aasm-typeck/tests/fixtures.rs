#![allow(dead_code)]

use aasm_scope::{Action, Agent, Behaviour, EnumParam, Message, Scope};

pub fn init_log() {
    let _ = pretty_env_logger::try_init();
}

///Agent `counter`, reacting to a `tick` message in a plain modify action.
pub fn counter_scope() -> Scope {
    let agent = Agent::new("counter")
        .with_float_param("count")
        .with_float_list("samples")
        .with_connection_list("peers")
        .with_enum(
            EnumParam::new("mode")
                .with_value("idle", 50.0)
                .with_value("busy", 50.0),
        );

    let tick = Message::new("tick", "inform").with_float_param("delta");

    Scope::new(
        agent,
        Behaviour::message_received("on_tick", tick),
        Action::modify("accumulate"),
    )
}
