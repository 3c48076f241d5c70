use crate::config::{OutputConfig, OutputFormat};
use anyhow::{Context, Result};
use rlp_codec_types::Bytes;
use std::fs;
use std::path::Path;

/// Render an encoding as hex text according to `config`.
pub fn render_hex(bytes: &Bytes, config: &OutputConfig) -> String {
    match (config.prefix, config.uppercase) {
        (true, true) => format!("{:#X}", bytes),
        (true, false) => format!("{:#x}", bytes),
        (false, true) => format!("{:X}", bytes),
        (false, false) => format!("{:x}", bytes),
    }
}

/// Write an encoding to `path`, as raw bytes or as a line of hex.
pub fn write_output<P: AsRef<Path>>(path: P, bytes: &Bytes, config: &OutputConfig) -> Result<()> {
    let path = path.as_ref();
    let content = match config.format {
        OutputFormat::Binary => bytes.to_vec(),
        OutputFormat::Hex => format!("{}\n", render_hex(bytes, config)).into_bytes(),
    };
    
    fs::write(path, content)
        .with_context(|| format!("Failed to write output to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_render_hex() {
        let bytes = Bytes::from_vec(vec![0xc3, 0x01, 0x80, 0xc0]);
        let mut config = OutputConfig::default();
        assert_eq!(render_hex(&bytes, &config), "0xc30180c0");
        
        config.uppercase = true;
        assert_eq!(render_hex(&bytes, &config), "0xC30180C0");
        
        config.prefix = false;
        assert_eq!(render_hex(&bytes, &config), "C30180C0");
    }
}
