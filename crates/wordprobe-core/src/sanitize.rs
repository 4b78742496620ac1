/// Normalize a raw fact string: drop every whitespace character,
/// internal runs included, and lowercase what remains.
pub fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::sanitize;

    #[test]
    fn removes_internal_whitespace_and_lowercases() {
        assert_eq!(sanitize("John Smith"), "johnsmith");
        assert_eq!(sanitize("  Rex\tThe Dog \n"), "rexthedog");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
    }
}
