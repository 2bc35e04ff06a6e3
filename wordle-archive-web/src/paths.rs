//! Deployment base path handling.
///
/// When `PUBLIC_URL` is set at compile time (e.g. `/wordle-archive` for GitHub
/// Pages) the router is mounted under it.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_base_means_root() {
        assert_eq!(router_base_with_base(""), None);
        assert_eq!(router_base_with_base("  "), None);
        assert_eq!(router_base_with_base("/"), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            router_base_with_base("/wordle-archive/"),
            Some(String::from("/wordle-archive"))
        );
    }
}
