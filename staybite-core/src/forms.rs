/// Normalize the admin console's comma-separated image URL field into the
/// array the API expects: split on commas, trim each entry, drop empties so a
/// trailing comma contributes nothing.
pub fn split_image_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_in_order() {
        assert_eq!(
            split_image_list("a.jpg, b.jpg , c.jpg"),
            vec!["a.jpg", "b.jpg", "c.jpg"]
        );
    }

    #[test]
    fn trailing_comma_adds_no_empty_entry() {
        assert_eq!(split_image_list("a.jpg,b.jpg,"), vec!["a.jpg", "b.jpg"]);
        assert_eq!(split_image_list("a.jpg,,b.jpg"), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn blank_input_yields_empty_list() {
        assert!(split_image_list("").is_empty());
        assert!(split_image_list("  ,  ").is_empty());
    }
}
