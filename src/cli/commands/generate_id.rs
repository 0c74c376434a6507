//! Generate-id command implementation

use crate::domain::{generate_id, DEFAULT_ID_LENGTH};
use clap::Args;

/// Arguments for the generate-id command
#[derive(Args, Debug)]
pub struct GenerateIdArgs {
    /// Number of characters in the identifier
    #[arg(short = 'n', long, default_value_t = DEFAULT_ID_LENGTH)]
    pub length: usize,
}

impl GenerateIdArgs {
    /// Execute the generate-id command
    pub fn execute(&self) -> anyhow::Result<i32> {
        if self.length == 0 {
            eprintln!("❌ --length must be at least 1");
            return Ok(2);
        }

        println!("{}", generate_id(self.length));
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_is_rejected() {
        let args = GenerateIdArgs { length: 0 };
        assert_eq!(args.execute().unwrap(), 2);
    }

    #[test]
    fn test_generate_id_succeeds() {
        let args = GenerateIdArgs { length: 6 };
        assert_eq!(args.execute().unwrap(), 0);
    }
}
