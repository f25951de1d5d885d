use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use std::{fs, io::Read};

/// Resolves a command line argument that is either inline json, a path to a
/// `.json` file, or `-` for stdin.
pub fn read_json_arg(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else if arg.ends_with(".json") {
        fs::read_to_string(arg).map_err(|e| anyhow!("Failed to read file {}: {}", arg, e))
    } else {
        Ok(arg.to_string())
    }
}

pub fn load_json_arg<T>(arg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let json_str = read_json_arg(arg)?;
    serde_json::from_str::<T>(&json_str).map_err(|e| anyhow!("Failed to parse {}: {}", arg, e))
}
