use url::Url;

use crate::error::{FetchError, Result};
use crate::models::FictionId;

const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*', ' '];

/// Replaces characters that are not allowed in filenames with `_`.
///
/// Distinct titles may collapse to the same name; the later write wins.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .collect()
}

/// Directory name for a fiction: the canonical path from the id onwards,
/// with `/` turned into `_` (`/fiction/25225/delve` -> `25225_delve`).
pub fn output_dir_name(canonical_url: &Url, fiction_id: &FictionId) -> Result<String> {
    let path = canonical_url.path();
    let start = path
        .find(fiction_id.as_str())
        .ok_or_else(|| FetchError::InvalidUrl(canonical_url.to_string()))?;
    Ok(path[start..].replace('/', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_forbidden_character() {
        assert_eq!(
            sanitize_filename(r#"001 <Woodland>: "a/b\c" | why? *"#),
            "001__Woodland____a_b_c____why___"
        );
    }

    #[test]
    fn leaves_other_characters_alone() {
        assert_eq!(sanitize_filename("Chapitre_été-1.5"), "Chapitre_été-1.5");
        assert_eq!(sanitize_filename(""), "");
    }

    #[test]
    fn output_never_contains_forbidden_and_is_idempotent() {
        for title in [
            "Chapter 1: The Beginning",
            "What?! <Part 2/3>",
            r#"Quote "this" \ that"#,
            "***",
        ] {
            let once = sanitize_filename(title);
            assert!(!once.contains(FORBIDDEN), "{once}");
            assert_eq!(once, sanitize_filename(title));
            assert_eq!(once, sanitize_filename(&once));
        }
    }

    #[test]
    fn output_dir_name_starts_at_the_id() {
        let id: FictionId = "25225".parse().unwrap();
        let url = Url::parse("https://www.royalroad.com/fiction/25225/delve").unwrap();
        assert_eq!(output_dir_name(&url, &id).unwrap(), "25225_delve");

        let url = Url::parse("http://127.0.0.1:25225/fiction/25225/delve/").unwrap();
        assert_eq!(output_dir_name(&url, &id).unwrap(), "25225_delve_");
    }

    #[test]
    fn output_dir_name_requires_the_id() {
        let id: FictionId = "25225".parse().unwrap();
        let url = Url::parse("https://www.royalroad.com/fiction/99/other").unwrap();
        assert!(matches!(
            output_dir_name(&url, &id),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
