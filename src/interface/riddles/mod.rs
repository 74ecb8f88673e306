//! Implementation of the Riddles.io engine protocol.
//! The engine drives the bot over stdin with `settings`, `update` and
//! `action move` lines, and the bot answers each `action move` with a
//! single move line on stdout.

pub mod client;
pub mod command;
