//! Integration tests for reading the root path from standard input

#[cfg(test)]
mod stdin_tests {
    use dirjson::deserialize_tree;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use std::process::{Command, Stdio};
    use tempfile::tempdir;

    fn run_dirjson_stdin(cwd: &Path, input: &str, args: &[&str]) -> (bool, String, String) {
        let mut child = Command::new(env!("CARGO_BIN_EXE_dirjson"))
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start dirjson");

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes()).unwrap();
        }

        let output = child.wait_with_output().expect("Failed to wait for dirjson");
        (
            output.status.success(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        )
    }

    #[test]
    fn test_prompted_path() {
        let work = tempdir().unwrap();
        fs::create_dir_all(work.path().join("inputs/ext")).unwrap();
        fs::write(work.path().join("inputs/ext/one.txt"), "1").unwrap();

        let (ok, _, stderr) = run_dirjson_stdin(work.path(), "  inputs/ext  \n", &["--quiet"]);
        assert!(ok, "dirjson failed: {}", stderr);
        assert!(stderr.contains("Please enter directory path"));

        let tree = deserialize_tree(&fs::read(work.path().join("fileList.json")).unwrap()).unwrap();
        assert_eq!(tree.name, "ext");
        assert_eq!(tree.path, "inputs/ext");
        assert_eq!(tree.children.len(), 1);
    }

    #[test]
    fn test_empty_stdin_fails() {
        let work = tempdir().unwrap();

        let (ok, _, stderr) = run_dirjson_stdin(work.path(), "", &[]);
        assert!(!ok);
        assert!(stderr.contains("No directory path provided"), "{}", stderr);
        assert!(!work.path().join("fileList.json").exists());
    }
}
