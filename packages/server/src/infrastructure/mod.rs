//! Infrastructure 層
//!
//! Webhook の DTO / TwiML と、Domain 層の trait の具体的な実装を提供します。

pub mod dto;
pub mod model;
