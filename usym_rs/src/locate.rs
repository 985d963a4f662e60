use std::fs;
use std::path::PathBuf;

/// Maps a logical program name to the executable that the kernel will load.
///
/// Overrides are checked first, in order, by exact name match; a matching
/// override wins even when its fixed path is missing, in which case the
/// miss is reported instead of falling through to the generic search.
/// The generic search probes the roots in order and appends the suffix,
/// first existing candidate wins.
pub struct SearchPolicy {
    overrides: Vec<(String, PathBuf)>,
    roots: Vec<PathBuf>,
    suffix: String,
}

impl SearchPolicy {
    pub fn new(
        overrides: Vec<(String, PathBuf)>,
        roots: Vec<PathBuf>,
        suffix: &str,
    ) -> SearchPolicy {
        SearchPolicy {
            overrides,
            roots,
            suffix: suffix.to_owned(),
        }
    }

    pub fn resolve(&self, name: &str) -> Result<PathBuf, String> {
        if name.is_empty() {
            return Err("program name is empty".to_owned());
        }

        if let Some((_, path)) = self.overrides.iter().find(|(n, _)| n == name) {
            if path.exists() {
                return Ok(path.clone());
            }
            return Err(format!(
                "program {} not found: override path {} does not exist",
                name,
                path.display()
            ));
        }

        for root in &self.roots {
            let candidate = root.join(format!("{}{}", name, self.suffix));
            if candidate.exists() {
                return Ok(candidate);
            }
        }

        Err(format!(
            "program {} not found in any search directory",
            name
        ))
    }

    /// Names that `resolve` would currently succeed on: suffix-bearing
    /// files in the search roots plus overrides whose path exists.
    pub fn available_programs(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .overrides
            .iter()
            .filter(|(_, path)| path.exists())
            .map(|(name, _)| name.clone())
            .collect();

        for root in &self.roots {
            let entries = match fs::read_dir(root) {
                Ok(entries) => entries,
                Err(_) => continue,
            };
            for entry in entries.flatten() {
                if let Some(name) = entry
                    .file_name()
                    .to_str()
                    .and_then(|f| f.strip_suffix(self.suffix.as_str()))
                {
                    names.push(name.to_owned());
                }
            }
        }

        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    struct TempTree {
        root: PathBuf,
    }

    impl TempTree {
        fn new(tag: &str) -> TempTree {
            let root = std::env::temp_dir().join(format!(
                "usym_locate_{}_{}",
                tag,
                std::process::id()
            ));
            fs::create_dir_all(&root).unwrap();
            TempTree { root }
        }

        fn touch(&self, rel: &str) -> PathBuf {
            let path = self.root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, b"").unwrap();
            path
        }
    }

    impl Drop for TempTree {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    fn policy(root: &Path) -> SearchPolicy {
        SearchPolicy::new(
            vec![("init".to_owned(), root.join("user/sbin/init.exec"))],
            vec![root.join("user/usr/bin"), root.join("user/bin")],
            ".exec",
        )
    }

    #[test]
    fn override_wins_over_search_directories() {
        let tree = TempTree::new("override_wins");
        tree.touch("user/usr/bin/init.exec");
        let fixed = tree.touch("user/sbin/init.exec");

        assert_eq!(policy(&tree.root).resolve("init").unwrap(), fixed);
    }

    #[test]
    fn missing_override_path_is_not_searched_around() {
        let tree = TempTree::new("override_miss");
        tree.touch("user/usr/bin/init.exec");

        let err = policy(&tree.root).resolve("init").unwrap_err();
        assert!(err.contains("not found"), "{}", err);
        assert!(err.contains("user/sbin"), "{}", err);
    }

    #[test]
    fn primary_directory_beats_fallback() {
        let tree = TempTree::new("primary");
        let primary = tree.touch("user/usr/bin/shell.exec");
        tree.touch("user/bin/shell.exec");

        assert_eq!(policy(&tree.root).resolve("shell").unwrap(), primary);
    }

    #[test]
    fn fallback_directory_is_probed_second() {
        let tree = TempTree::new("fallback");
        let fallback = tree.touch("user/bin/shell.exec");

        assert_eq!(policy(&tree.root).resolve("shell").unwrap(), fallback);
    }

    #[test]
    fn absent_program_is_not_found() {
        let tree = TempTree::new("ghost");
        tree.touch("user/usr/bin/shell.exec");

        let err = policy(&tree.root).resolve("ghost").unwrap_err();
        assert!(err.contains("not found"), "{}", err);
    }

    #[test]
    fn empty_name_is_rejected() {
        let tree = TempTree::new("empty");
        assert!(policy(&tree.root).resolve("").is_err());
    }

    #[test]
    fn available_programs_lists_roots_and_live_overrides() {
        let tree = TempTree::new("available");
        tree.touch("user/usr/bin/shell.exec");
        tree.touch("user/usr/bin/hello.exec");
        tree.touch("user/usr/bin/README");
        tree.touch("user/bin/shell.exec");
        tree.touch("user/bin/args.exec");
        tree.touch("user/sbin/init.exec");

        assert_eq!(
            policy(&tree.root).available_programs(),
            vec!["args", "hello", "init", "shell"]
        );
    }

    #[test]
    fn available_programs_skips_dead_overrides() {
        let tree = TempTree::new("dead_override");
        tree.touch("user/usr/bin/shell.exec");

        assert_eq!(policy(&tree.root).available_programs(), vec!["shell"]);
    }
}
