mod board;
mod common;
mod config;
