use log::debug;
use stencil::cli::{run, CreateArgs};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let mut files1 = std::collections::HashSet::new();
    let mut files2 = std::collections::HashSet::new();

    // Follow symlinks so files reachable via symlinked folders are included in the comparison.
    for entry in WalkDir::new(dir1)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
    {
        let rel = entry.path().strip_prefix(dir1).unwrap().to_path_buf();
        files1.insert(rel);
    }
    for entry in WalkDir::new(dir2)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
    {
        let rel = entry.path().strip_prefix(dir2).unwrap().to_path_buf();
        files2.insert(rel);
    }

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);
    println!();

    let only_in_actual: Vec<_> = files1.difference(&files2).collect();
    let only_in_expected: Vec<_> = files2.difference(&files1).collect();

    if !only_in_actual.is_empty() {
        println!("Files only in ACTUAL output:");
        for file in &only_in_actual {
            println!("  + {:?}", file);
        }
        println!();
    }

    if !only_in_expected.is_empty() {
        println!("Files only in EXPECTED output:");
        for file in &only_in_expected {
            println!("  - {:?}", file);
        }
        println!();
    }

    let mut has_content_diff = false;
    for file in files1.intersection(&files2) {
        let path1 = dir1.join(file);
        let path2 = dir2.join(file);
        let content1 = fs::read(&path1).unwrap();
        let content2 = fs::read(&path2).unwrap();
        if content1 != content2 {
            if !has_content_diff {
                println!("Files with different content:");
                has_content_diff = true;
            }
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:");
            match String::from_utf8(content1.clone()) {
                Ok(s) => println!("{}", s),
                Err(_) => println!("  (binary content, {} bytes)", content1.len()),
            }
            println!("  --- Expected content:");
            match String::from_utf8(content2.clone()) {
                Ok(s) => println!("{}", s),
                Err(_) => println!("  (binary content, {} bytes)", content2.len()),
            }
        }
    }

    if !has_content_diff && only_in_actual.is_empty() && only_in_expected.is_empty() {
        println!("No differences found (this shouldn't happen if test failed!)");
    }
    println!("=== End of Comparison ===\n");
}

/// Arguments for a non-interactive `create` into `output_dir`.
pub fn create_args(template: &str, output_dir: &Path, answers: &str) -> CreateArgs {
    CreateArgs {
        template: template.to_string(),
        output_dir: output_dir.to_path_buf(),
        force: false,
        verbose: 2,
        answers: Some(answers.to_string()),
        non_interactive: true,
        dry_run: false,
        strict: false,
        skip_preflight: true,
    }
}

/// Runs `create` with the given template and answers, compares the output to the expected directory,
/// prints any differences, and asserts that the directories are identical.
///
/// # Arguments
/// * `template` - Path to the template directory.
/// * `expected_dir` - Path to the directory with expected output.
/// * `answers` - Answers as a JSON object.
pub fn run_and_assert(template: &str, expected_dir: &str, answers: &str) {
    let tmp_dir = tempfile::tempdir().unwrap();
    run(create_args(template, tmp_dir.path(), answers)).unwrap();
    let result = dir_diff::is_different(tmp_dir.path(), expected_dir);
    match result {
        Ok(different) => {
            if different {
                print_dir_diff(tmp_dir.path(), expected_dir.as_ref());
                panic!("Directories differ. See above for details.");
            }
        }
        Err(e) => {
            debug!("Error comparing directories: {e}");
        }
    }
    assert!(!dir_diff::is_different(tmp_dir.path(), expected_dir).unwrap());
}

/// Writes the reference project layout below `project_root/src`.
pub fn scaffold_project(project_root: &Path) {
    let src = project_root.join("src");
    let files = [
        ("application/example/__init__.py", "from .service import ExampleService\n"),
        ("application/example/service.py", "class ExampleService:\n    pass\n"),
        ("domain/example/entity.py", "class Example:\n    id: int\n"),
        ("domain/example/nested/value.py", "VALUE = 1\n"),
        (
            "presentation/api/v1/controllers/healthcheck.py",
            "router = APIRouter(prefix=\"/healthcheck\")\n\n\ndef healthcheck():\n    return {\"status\": \"ok\"}\n",
        ),
        ("presentation/async_api/consumer.py", "async def consume():\n    pass\n"),
        ("main.py", "app = None\n"),
    ];
    for (relative, content) in files {
        let path = src.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}
