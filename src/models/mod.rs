mod turn;

pub use turn::{Target, TurnPayload, TurnRequest, TurnResult};
