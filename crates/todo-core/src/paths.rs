use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Default locations (tilde-prefixed, run through expand_home before use)
// ---------------------------------------------------------------------------

pub const TODO_DIR: &str = "~/.todo";
pub const DEFAULT_TODO_FILE: &str = "~/.todo/TODO.md";
pub const DEFAULT_MEMORY_FILE: &str = "~/.todo/memory/brain-memory.jsonl";
pub const DEFAULT_CONFIG_FILE: &str = "~/.todo/config.yaml";

// ---------------------------------------------------------------------------
// Home expansion
// ---------------------------------------------------------------------------

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Every other input, including the empty string and `~user` forms, comes
/// back verbatim. When no home directory can be found the input is also
/// returned unchanged.
pub fn expand_home(p: &str) -> PathBuf {
    if p == "~" {
        if let Some(home) = home::home_dir() {
            return home;
        }
    } else if let Some(rest) = p.strip_prefix("~/") {
        if let Some(home) = home::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(p)
}

pub fn default_todo_file() -> PathBuf {
    expand_home(DEFAULT_TODO_FILE)
}

pub fn default_memory_file() -> PathBuf {
    expand_home(DEFAULT_MEMORY_FILE)
}

pub fn default_config_file() -> PathBuf {
    expand_home(DEFAULT_CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn empty_is_unchanged() {
        assert_eq!(expand_home(""), PathBuf::from(""));
    }

    #[test]
    fn bare_tilde_is_home() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_home("~"), home);
    }

    #[test]
    fn tilde_slash_joins_home() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_home("~/foo/bar"), home.join("foo/bar"));
        assert!(expand_home("~/foo/bar").ends_with(Path::new("foo").join("bar")));
    }

    #[test]
    fn other_paths_are_verbatim() {
        for p in ["/usr/local/bin", "relative/path", "~other/x", "a/~/b"] {
            assert_eq!(expand_home(p), PathBuf::from(p), "expected verbatim: {p}");
        }
    }

    #[test]
    fn defaults_live_under_todo_dir() {
        let dir = expand_home(TODO_DIR);
        assert!(default_todo_file().starts_with(&dir));
        assert!(default_memory_file().starts_with(&dir));
        assert!(default_config_file().starts_with(&dir));
    }
}
