//! JSON notation for item trees.
//!
//! - non-negative JSON integers are integers
//! - `"0x…"` strings are hex byte strings
//! - strings of decimal digits are arbitrary-precision integers
//! - `"@path"` reads a hex byte string from a file
//! - any other string is its UTF-8 bytes
//! - arrays are lists

use crate::config::InputConfig;
use num_bigint::BigUint;
use rlp_codec_core::{EncoderError, Item};
use rlp_codec_types::{Bytes, TypesError};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    
    #[error(transparent)]
    Encoder(#[from] EncoderError),
    
    #[error("Invalid hex in {context}: {source}")]
    Hex {
        context: String,
        #[source]
        source: TypesError,
    },
    
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    
    #[error("Unsupported number {0}; pass large integers as decimal strings")]
    UnsupportedNumber(String),
    
    #[error("Unsupported JSON value: {0}")]
    UnsupportedValue(String),
    
    #[error("List nesting exceeds the maximum depth of {0}")]
    TooDeep(usize),
}

pub type Result<T> = std::result::Result<T, InputError>;

pub struct ItemParser {
    max_depth: usize,
    base_dir: Option<PathBuf>,
}

impl ItemParser {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            base_dir: config.base_dir.clone(),
        }
    }
    
    /// Resolve relative `@file` references against `dir`.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }
    
    pub fn parse_str(&self, text: &str) -> Result<Item> {
        let value = self.read_json(text)?;
        self.parse_value(&value)
    }
    
    /// Parse a JSON file. Unless a base directory was set, `@file`
    /// references inside it are relative to the file's own directory.
    pub fn parse_file(&self, path: &Path) -> Result<Item> {
        let text = read(path)?;
        let value = self.read_json(&text)?;
        
        match (&self.base_dir, path.parent()) {
            (None, Some(parent)) => ItemParser {
                max_depth: self.max_depth,
                base_dir: Some(parent.to_path_buf()),
            }
            .parse_value(&value),
            _ => self.parse_value(&value),
        }
    }
    
    /// serde_json's own recursion limit is lifted so `max_depth` governs;
    /// the nesting scan keeps unbounded input off the deserializer's stack.
    fn read_json(&self, text: &str) -> Result<Value> {
        check_nesting(text, self.max_depth)?;
        
        let mut deserializer = serde_json::Deserializer::from_str(text);
        deserializer.disable_recursion_limit();
        let value = Value::deserialize(&mut deserializer)?;
        deserializer.end()?;
        
        Ok(value)
    }
    
    pub fn parse_value(&self, value: &Value) -> Result<Item> {
        self.parse_at(value, 0)
    }
    
    fn parse_at(&self, value: &Value, depth: usize) -> Result<Item> {
        match value {
            Value::Number(number) => {
                if let Some(n) = number.as_u64() {
                    Ok(Item::from(n))
                } else if let Some(n) = number.as_i64() {
                    Err(EncoderError::NegativeInteger(n.to_string()).into())
                } else {
                    Err(InputError::UnsupportedNumber(number.to_string()))
                }
            }
            Value::String(s) => self.parse_string(s),
            Value::Array(values) => {
                if depth >= self.max_depth {
                    return Err(InputError::TooDeep(self.max_depth));
                }
                values
                    .iter()
                    .map(|v| self.parse_at(v, depth + 1))
                    .collect::<Result<Vec<_>>>()
                    .map(Item::List)
            }
            other => Err(InputError::UnsupportedValue(other.to_string())),
        }
    }
    
    fn parse_string(&self, s: &str) -> Result<Item> {
        if s.starts_with("0x") || s.starts_with("0X") {
            return Bytes::from_hex(s).map(Item::from).map_err(|source| InputError::Hex {
                context: format!("{:?}", s),
                source,
            });
        }
        
        if let Some(path) = s.strip_prefix('@') {
            return self.read_hex_file(Path::new(path));
        }
        
        if let Some(digits) = s.strip_prefix('-') {
            if is_decimal(digits) {
                return Err(EncoderError::NegativeInteger(s.to_string()).into());
            }
        }
        
        if let Some(n) = decimal(s) {
            return Ok(Item::from(n));
        }
        
        Ok(Item::from(s))
    }
    
    fn read_hex_file(&self, path: &Path) -> Result<Item> {
        let path = match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        };
        
        let text = read(&path)?;
        let bytes = Bytes::from_hex(&text).map_err(|source| InputError::Hex {
            context: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), len = bytes.len(), "loaded hex input");
        
        Ok(Item::from(bytes))
    }
}

impl Default for ItemParser {
    fn default() -> Self {
        Self::new(&InputConfig::default())
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Rejects bracket nesting deeper than `max_depth`, ignoring brackets
/// inside string literals.
fn check_nesting(text: &str, max_depth: usize) -> Result<()> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    
    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > max_depth {
                    return Err(InputError::TooDeep(max_depth));
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    
    Ok(())
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn decimal(s: &str) -> Option<BigUint> {
    if is_decimal(s) {
        BigUint::parse_bytes(s.as_bytes(), 10)
    } else {
        None
    }
}
