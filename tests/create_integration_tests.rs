use std::fs;
use stencil::cli::run;
use stencil::error::Error;
use tempfile::TempDir;
use test_log::test;

mod utils;
use utils::{create_args, run_and_assert};

const TEMPLATE: &str = "tests/templates/backend";

#[test]
fn generates_backend_project() {
    run_and_assert(
        TEMPLATE,
        "tests/expected/backend",
        r#"{"project_name": "Shop Backend", "author": "Jane Doe",
            "modules": "Billing, users", "include_async_api": "no"}"#,
    );
}

#[test]
fn without_modules_only_scaffold_is_removed() {
    let output = TempDir::new().unwrap();
    run(create_args(
        TEMPLATE,
        output.path(),
        r#"{"project_name": "Notes", "include_sync_api": "no", "include_async_api": "yes"}"#,
    ))
    .unwrap();

    let src = output.path().join("notes/src");
    assert!(!src.join("presentation/api").exists());
    assert!(src.join("presentation/async_api/consumer.py").exists());
    assert_eq!(fs::read_dir(src.join("application")).unwrap().count(), 0);
    assert_eq!(fs::read_dir(src.join("domain")).unwrap().count(), 0);
}

#[test]
fn dry_run_leaves_output_untouched() {
    let output = TempDir::new().unwrap();
    let mut args = create_args(
        TEMPLATE,
        output.path(),
        r#"{"project_name": "Shop", "modules": ["billing"]}"#,
    );
    args.dry_run = true;

    run(args).unwrap();

    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn existing_project_requires_force() {
    let output = TempDir::new().unwrap();
    let existing = output.path().join("shop");
    fs::create_dir_all(&existing).unwrap();
    fs::write(existing.join("keep.txt"), "mine").unwrap();
    let answers = r#"{"project_name": "Shop", "modules": "billing"}"#;

    let err = run(create_args(TEMPLATE, output.path(), answers)).unwrap_err();
    assert!(matches!(err, Error::OutputDirectoryExistsError { .. }), "unexpected error: {err}");
    assert!(existing.join("keep.txt").exists());

    let mut args = create_args(TEMPLATE, output.path(), answers);
    args.force = true;
    run(args).unwrap();
    assert!(!existing.join("keep.txt").exists());
    assert!(existing.join("src/application/billing/service.py").exists());
}

#[test]
fn failed_materialization_publishes_nothing() {
    let output = TempDir::new().unwrap();

    let err = run(create_args(
        TEMPLATE,
        output.path(),
        r#"{"project_name": "Shop", "modules": "Billing, billing"}"#,
    ))
    .unwrap_err();

    assert!(matches!(err, Error::DestinationExists { .. }), "unexpected error: {err}");
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn strict_mode_reports_duplicate_modules() {
    let output = TempDir::new().unwrap();
    let mut args = create_args(
        TEMPLATE,
        output.path(),
        r#"{"project_name": "Shop", "modules": "Billing, billing"}"#,
    );
    args.strict = true;

    let err = run(args).unwrap_err();
    assert!(matches!(err, Error::DuplicateModule { .. }), "unexpected error: {err}");
}

#[test]
fn missing_template_is_reported() {
    let output = TempDir::new().unwrap();
    let err = run(create_args(
        "tests/templates/does-not-exist",
        output.path(),
        r#"{"project_name": "Shop"}"#,
    ))
    .unwrap_err();
    assert!(matches!(err, Error::TemplateDoesNotExistsError { .. }), "unexpected error: {err}");
}

#[test]
fn preflight_rejects_missing_tools() {
    let template = TempDir::new().unwrap();
    fs::write(
        template.path().join("stencil.json"),
        r#"{"schemaVersion": "v1", "required_tools": ["stencil-definitely-not-installed"]}"#,
    )
    .unwrap();
    fs::create_dir_all(template.path().join("{{ cookiecutter.project_slug }}")).unwrap();
    let output = TempDir::new().unwrap();

    let mut args = create_args(
        template.path().to_str().unwrap(),
        output.path(),
        r#"{"project_name": "Shop"}"#,
    );
    args.skip_preflight = false;

    let err = run(args).unwrap_err();
    assert!(matches!(err, Error::MissingTool { .. }), "unexpected error: {err}");
}
