pub(crate) fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }

    let visible = key.chars().count().min(4);
    let prefix: String = key.chars().take(visible).collect();
    format!("{prefix}***")
}

pub(crate) fn format_context(context_length: Option<u32>) -> String {
    match context_length {
        Some(tokens) => format!("{tokens} tokens"),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_all_but_prefix() {
        assert_eq!(mask_api_key("sk-abcdef123"), "sk-a***");
        assert_eq!(mask_api_key("ab"), "ab***");
        assert_eq!(mask_api_key(""), "(not set)");
    }

    #[test]
    fn formats_context() {
        assert_eq!(format_context(Some(8192)), "8192 tokens");
        assert_eq!(format_context(None), "unknown");
    }
}
