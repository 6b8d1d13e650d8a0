//! Splits generated text into individual post drafts.

/// Splits on blank-line boundaries (`"\n\n"`), trims each segment, and drops
/// the ones that are empty after trimming.
pub fn split_posts(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|post| !post.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_blank_segments_dropped() {
        assert_eq!(split_posts("A\n\nB\n\n"), vec!["A", "B"]);
    }

    #[test]
    fn test_segments_are_trimmed() {
        assert_eq!(
            split_posts("  first post \n\n\n  second post\n"),
            vec!["first post", "second post"]
        );
    }

    #[test]
    fn test_single_newlines_stay_inside_a_post() {
        assert_eq!(
            split_posts("1/ intro\nmore\n\n2/ outro"),
            vec!["1/ intro\nmore", "2/ outro"]
        );
    }

    #[test]
    fn test_blank_text_yields_nothing() {
        assert!(split_posts("").is_empty());
        assert!(split_posts("\n\n  \n\n").is_empty());
    }
}
