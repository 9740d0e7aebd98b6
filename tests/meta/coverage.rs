//! Every source file has a unit-test counterpart and every test file has tests

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    // Crate roots and module declarations carry no logic of their own
    fn is_organisational(path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name == "lib.rs" || name == "main.rs" || name == "mod.rs")
    }

    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(|e| io::Error::other(e.to_string()))?;
                    found.insert(relative.to_path_buf());
                }
            }
        }
        Ok(found)
    }

    fn listing(paths: &[&PathBuf], prefix: &str) -> String {
        paths
            .iter()
            .map(|path| format!("  - {prefix}/{}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests each logic file in src has a mirrored unit test file
    #[test]
    fn test_all_src_files_have_unit_tests() -> io::Result<()> {
        let sources = rust_files(Path::new(SRC))?;
        let units = rust_files(Path::new(UNIT))?;

        let missing: Vec<&PathBuf> = sources
            .iter()
            .filter(|path| !is_organisational(path) && !units.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without a unit test file in {UNIT}:\n{}",
            listing(&missing, SRC)
        );
        Ok(())
    }

    // Tests no unit test file outlives the source file it mirrors
    #[test]
    fn test_all_unit_tests_have_src_counterparts() -> io::Result<()> {
        let sources = rust_files(Path::new(SRC))?;
        let units = rust_files(Path::new(UNIT))?;

        let orphaned: Vec<&PathBuf> = units
            .iter()
            .filter(|path| !is_organisational(path) && !sources.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files with no source file in {SRC}:\n{}",
            listing(&orphaned, UNIT)
        );
        Ok(())
    }

    // Tests every non-organisational file under tests declares at least one test
    #[test]
    fn test_all_test_files_contain_tests() -> io::Result<()> {
        let root = Path::new("tests");
        let mut empty = Vec::new();

        for relative in rust_files(root)? {
            if is_organisational(&relative) {
                continue;
            }
            if !fs::read_to_string(root.join(&relative))?.contains("#[test]") {
                empty.push(relative);
            }
        }

        let empty: Vec<&PathBuf> = empty.iter().collect();
        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            listing(&empty, "tests")
        );
        Ok(())
    }
}
