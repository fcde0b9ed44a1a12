// Adapters layer: concrete implementations of the domain ports (http, session storage, terminal output).

pub mod http;
pub mod session;
pub mod terminal;
