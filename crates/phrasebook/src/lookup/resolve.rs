//! Dotted-path resolution through a language's phrase tree.

use crate::types::{PhraseNode, Phrases};

/// Separator between path segments in a lookup key.
pub const KEY_SEPARATOR: char = '.';

/// Resolve a dotted key to a phrase.
///
/// Walks `key` one segment at a time from `root`. The first segment that lands
/// on a leaf ends the walk and that leaf is returned, even if segments remain:
/// with `a.b` a leaf, `a.b.c` resolves to it. A segment that is not found
/// leaves the walk on an empty branch, so the remaining segments cannot match.
/// Returns `None` if the segments run out on a branch.
///
/// A missing language is passed as `None` and behaves like an empty tree.
pub fn resolve<'a>(root: Option<&'a Phrases>, key: &str) -> Option<&'a str> {
    let mut current = root;
    for segment in key.split(KEY_SEPARATOR) {
        match current.and_then(|branch| branch.get(segment)) {
            Some(PhraseNode::Leaf(text)) => return Some(text),
            Some(PhraseNode::Branch(nested)) => current = Some(nested),
            None => current = None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrases;

    fn tree() -> Phrases {
        phrases! {
            "greeting" => "Hello",
            "menu" => phrases! {
                "file" => phrases! { "open" => "Open" },
                "quit" => "Quit",
            },
        }
    }

    #[test]
    fn test_top_level_leaf() {
        let tree = tree();
        assert_eq!(resolve(Some(&tree), "greeting"), Some("Hello"));
    }

    #[test]
    fn test_nested_leaf() {
        let tree = tree();
        assert_eq!(resolve(Some(&tree), "menu.file.open"), Some("Open"));
    }

    #[test]
    fn test_stops_at_first_leaf() {
        let tree = tree();
        assert_eq!(resolve(Some(&tree), "menu.quit.now.please"), Some("Quit"));
    }

    #[test]
    fn test_branch_is_not_a_phrase() {
        let tree = tree();
        assert_eq!(resolve(Some(&tree), "menu.file"), None);
    }

    #[test]
    fn test_missing_segment_does_not_recover() {
        let tree = tree();
        assert_eq!(resolve(Some(&tree), "nope.greeting"), None);
        assert_eq!(resolve(Some(&tree), "menu.nope.quit"), None);
    }

    #[test]
    fn test_missing_language() {
        assert_eq!(resolve(None, "greeting"), None);
    }

    #[test]
    fn test_empty_key() {
        let tree = tree();
        assert_eq!(resolve(Some(&tree), ""), None);

        let with_empty = phrases! { "" => "blank" };
        assert_eq!(resolve(Some(&with_empty), ""), Some("blank"));
    }
}
