//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod error;
pub mod load_model;
pub mod reply_to_message;

pub use error::ReplyError;
pub use load_model::LoadModelUseCase;
pub use reply_to_message::ReplyToMessageUseCase;
