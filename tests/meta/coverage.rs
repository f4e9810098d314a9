//! Checks that every source module has a mirrored unit test file and vice versa

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Paths of `.rs` files and directories under `dir`, relative to `base`
    fn relative_paths(dir: &Path, base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|err| io::Error::other(err.to_string()))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.extend(relative_paths(&path, base)?);
                paths.insert(relative);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }
        Ok(paths)
    }

    fn is_module_root(path: &str) -> bool {
        path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs")
    }

    fn src_and_unit_paths() -> io::Result<(BTreeSet<String>, BTreeSet<String>)> {
        let src = Path::new("src");
        let unit = Path::new("tests/unit");
        Ok((relative_paths(src, src)?, relative_paths(unit, unit)?))
    }

    // Tests that each source file has a unit test file at the same relative path
    #[test]
    fn test_all_src_files_have_unit_tests() -> io::Result<()> {
        let (src, unit) = src_and_unit_paths()?;
        let missing: Vec<&String> = src
            .iter()
            .filter(|path| !is_module_root(path) && !unit.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "src files without tests/unit counterparts: {missing:?}"
        );
        Ok(())
    }

    // Tests that no unit test file outlives its source module
    #[test]
    fn test_all_unit_tests_have_src_counterparts() -> io::Result<()> {
        let (src, unit) = src_and_unit_paths()?;
        let orphaned: Vec<&String> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "tests/unit files without src counterparts: {orphaned:?}"
        );
        Ok(())
    }

    fn files_without_tests(dir: &Path, found: &mut Vec<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                files_without_tests(&path, found)?;
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            // crate roots and module files only declare modules
            if !name.ends_with(".rs") || name == "main.rs" || name == "mod.rs" {
                continue;
            }
            if !fs::read_to_string(&path)?.contains("#[test]") {
                found.push(path.display().to_string());
            }
        }
        Ok(())
    }

    // Tests that every test file actually contains tests
    #[test]
    fn test_all_test_files_contain_tests() -> io::Result<()> {
        let mut found = Vec::new();
        files_without_tests(Path::new("tests"), &mut found)?;
        assert!(found.is_empty(), "test files without #[test]: {found:?}");
        Ok(())
    }
}
