//! Lexical path helpers

/// Lexically clean a `/`-separated path.
///
/// Collapses repeated separators, drops `.` segments, resolves `name/..`
/// pairs and strips trailing separators. `..` at the start of a rooted path
/// is dropped, at the start of a relative path it is kept. An empty result
/// becomes `.`. No filesystem access takes place.
pub fn lexical_clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                let can_pop = matches!(parts.last(), Some(&last) if last != "..");
                if can_pop {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_clean_keeps_plain_names() {
        assert_eq!(lexical_clean("-hello"), "-hello");
        assert_eq!(lexical_clean("--resized-200-300"), "--resized-200-300");
    }

    #[test]
    fn test_lexical_clean() {
        assert_eq!(lexical_clean("a//b"), "a/b");
        assert_eq!(lexical_clean("./thumb"), "thumb");
        assert_eq!(lexical_clean("thumb/"), "thumb");
        assert_eq!(lexical_clean("a/b/../c"), "a/c");
        assert_eq!(lexical_clean("../x"), "../x");
        assert_eq!(lexical_clean("a/../.."), "..");
        assert_eq!(lexical_clean("/../x"), "/x");
        assert_eq!(lexical_clean("a/.."), ".");
        assert_eq!(lexical_clean("/"), "/");
        assert_eq!(lexical_clean(""), ".");
    }
}
