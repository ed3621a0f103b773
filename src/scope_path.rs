pub fn normalize(path: &str) -> String {
    let mut normalized = path.replace('\\', "/");
    while normalized.ends_with('/') && normalized.len() > 1 {
        normalized.pop();
    }
    normalized
}

pub fn join(dir: &str, name: &str) -> String {
    let dir = normalize(dir);
    if dir.is_empty() {
        return name.to_string();
    }
    if dir.ends_with('/') {
        return format!("{dir}{name}");
    }
    format!("{dir}/{name}")
}

/// True when `name` is a bare node name with no path separator in it.
pub fn is_base_name(name: &str) -> bool {
    !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(normalize("/foo/bar/"), "/foo/bar");
        assert_eq!(normalize("/foo/bar///"), "/foo/bar");
        assert_eq!(normalize("/"), "/");
    }

    #[test]
    fn normalize_converts_backslashes() {
        assert_eq!(normalize("C:\\Users\\test"), "C:/Users/test");
    }

    #[test]
    fn join_handles_root_and_trailing_separators() {
        assert_eq!(join("/tmp", "notes.txt"), "/tmp/notes.txt");
        assert_eq!(join("/tmp/", "notes.txt"), "/tmp/notes.txt");
        assert_eq!(join("/", "etc"), "/etc");
        assert_eq!(join("", "notes.txt"), "notes.txt");
        assert_eq!(join("C:\\Users\\", "a.txt"), "C:/Users/a.txt");
    }

    #[test]
    fn base_name_rejects_separators() {
        assert!(is_base_name("notes.txt"));
        assert!(is_base_name(".hidden"));
        assert!(!is_base_name("a/b"));
        assert!(!is_base_name("a\\b"));
    }
}
