pub mod board;
pub mod game;
pub mod move_request;
pub mod responses;
