// Core modules
pub mod config;
pub mod input;
pub mod output;

// Re-export commonly used types
pub use config::{Config, InputConfig, LogConfig, OutputConfig, OutputFormat};
pub use input::{InputError, ItemParser};
pub use output::{render_hex, write_output};

// Re-export crate modules
pub use rlp_codec_core as rlp;
pub use rlp_codec_types as types;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get client version string
pub fn client_version() -> String {
    format!("rlp-codec/v{}/rust", VERSION)
}
