pub mod listing;
pub mod responder;
