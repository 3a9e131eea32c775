pub mod board_flow;
