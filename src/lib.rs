pub mod convert;
pub mod host;
pub mod metadata;
pub mod noun;
pub mod recipe;
pub mod scale;
pub mod value;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
