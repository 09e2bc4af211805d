//! Text helper functions

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("politics"), "Politics");
        assert_eq!(capitalize_first("iPL"), "IPL");
        assert_eq!(capitalize_first("éco"), "Éco");
        assert_eq!(capitalize_first(""), "");
    }
}
