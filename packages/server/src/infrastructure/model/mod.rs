//! ModelLoader の実装
//!
//! ドメイン層が定義する ModelLoader trait の具体的な実装を提供します。

pub mod file;

pub use file::FileModelLoader;
