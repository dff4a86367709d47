pub mod check;
mod context;
pub mod init;
pub mod show;
pub mod stats;
pub mod types;

pub use context::CommandContext;
