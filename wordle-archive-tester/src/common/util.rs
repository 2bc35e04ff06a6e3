use anyhow::{Context, Result};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse comma-separated numeric seeds; negative values use their magnitude.
pub fn parse_seeds(s: &str) -> Result<Vec<u64>> {
    split_csv(s)
        .iter()
        .map(|token| {
            token
                .parse::<i64>()
                .map(i64::unsigned_abs)
                .or_else(|_| token.parse::<u64>())
                .with_context(|| format!("invalid seed '{token}'"))
        })
        .collect()
}
