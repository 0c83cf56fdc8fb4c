use std::fs;
use std::path::Path;
use stencil::config::Layout;
use stencil::context::{ApiLayer, GenerationContext};
use stencil::error::Error;
use stencil::materializer::{MaterializeOperation, Materializer};
use tempfile::TempDir;
use test_log::test;

mod utils;
use utils::scaffold_project;

fn context(modules: &[&str], sync_api: ApiLayer, async_api: ApiLayer) -> GenerationContext {
    GenerationContext::new(modules.iter().map(|m| m.to_string()).collect(), sync_api, async_api)
}

fn materialize(root: &Path, context: &GenerationContext) -> stencil::error::Result<Vec<MaterializeOperation>> {
    Materializer::new(root, Layout::default()).run(context)
}

#[test]
fn module_subtrees_are_exact_copies_of_the_examples() {
    let project = TempDir::new().unwrap();
    scaffold_project(project.path());
    let src = project.path().join("src");
    let original = TempDir::new().unwrap();
    scaffold_project(original.path());
    let original_src = original.path().join("src");

    materialize(
        project.path(),
        &context(&["Billing", "Users"], ApiLayer::Enabled, ApiLayer::Enabled),
    )
    .unwrap();

    for layer in ["application", "domain"] {
        for module in ["billing", "users"] {
            assert!(
                !dir_diff::is_different(
                    src.join(layer).join(module),
                    original_src.join(layer).join("example")
                )
                .unwrap(),
                "{layer}/{module} differs from {layer}/example"
            );
        }
        assert!(!src.join(layer).join("example").exists());
        assert!(!src.join(layer).join("Billing").exists());
    }
}

#[test]
fn zero_modules_still_prunes_and_cleans_up() {
    let project = TempDir::new().unwrap();
    scaffold_project(project.path());
    let src = project.path().join("src");

    let applied =
        materialize(project.path(), &context(&[], ApiLayer::Enabled, ApiLayer::Disabled)).unwrap();

    assert_eq!(applied.len(), 3);
    assert!(!src.join("presentation/async_api").exists());
    assert!(src.join("presentation/api/v1/controllers/healthcheck.py").exists());
    assert!(!src.join("application/example").exists());
    assert!(!src.join("domain/example").exists());
    assert_eq!(fs::read_dir(src.join("application")).unwrap().count(), 0);
    assert_eq!(fs::read_dir(src.join("domain")).unwrap().count(), 0);
    assert_eq!(
        fs::read_dir(src.join("presentation/api/v1/controllers")).unwrap().count(),
        1
    );
}

#[test]
fn disabled_sync_api_removes_controllers_too() {
    let project = TempDir::new().unwrap();
    scaffold_project(project.path());
    let src = project.path().join("src");

    materialize(project.path(), &context(&["orders"], ApiLayer::Disabled, ApiLayer::Enabled))
        .unwrap();

    assert!(!src.join("presentation/api").exists());
    assert!(src.join("presentation/async_api/consumer.py").exists());
    assert!(src.join("application/orders/service.py").exists());
    assert!(src.join("domain/orders/nested/value.py").exists());
}

#[test]
fn controller_is_derived_from_the_template_controller() {
    let project = TempDir::new().unwrap();
    scaffold_project(project.path());
    let controllers = project.path().join("src/presentation/api/v1/controllers");
    let template = fs::read_to_string(controllers.join("healthcheck.py")).unwrap();

    materialize(project.path(), &context(&["Billing"], ApiLayer::Enabled, ApiLayer::Enabled))
        .unwrap();

    assert_eq!(
        fs::read_to_string(controllers.join("billing.py")).unwrap(),
        template.replace("healthcheck", "billing")
    );
    assert_eq!(fs::read_to_string(controllers.join("healthcheck.py")).unwrap(), template);
}

#[test]
fn second_run_collides() {
    let project = TempDir::new().unwrap();
    scaffold_project(project.path());
    let ctx = context(&["billing"], ApiLayer::Enabled, ApiLayer::Enabled);

    materialize(project.path(), &ctx).unwrap();
    // Put the scaffold back; the billing subtrees from the first run remain.
    scaffold_project(project.path());

    let err = materialize(project.path(), &ctx).unwrap_err();
    assert!(matches!(err, Error::DestinationExists { .. }), "unexpected error: {err}");
}

#[test]
fn case_insensitive_duplicates_collide() {
    let project = TempDir::new().unwrap();
    scaffold_project(project.path());
    let src = project.path().join("src");

    let err = materialize(
        project.path(),
        &context(&["Billing", "billing"], ApiLayer::Enabled, ApiLayer::Enabled),
    )
    .unwrap_err();

    assert!(matches!(err, Error::DestinationExists { .. }), "unexpected error: {err}");
    // No rollback: the first module stays, and cleanup never ran.
    assert!(src.join("application/billing").exists());
    assert!(src.join("application/example").exists());
}

#[test]
fn strict_mode_rejects_duplicates_without_touching_the_tree() {
    let project = TempDir::new().unwrap();
    scaffold_project(project.path());
    let src = project.path().join("src");

    let err = Materializer::new(project.path(), Layout::default())
        .with_strict(true)
        .run(&context(&["Billing", "billing"], ApiLayer::Enabled, ApiLayer::Disabled))
        .unwrap_err();

    assert!(matches!(err, Error::DuplicateModule { .. }), "unexpected error: {err}");
    assert!(!src.join("application/billing").exists());
    assert!(src.join("presentation/async_api").exists());
}

#[test]
fn missing_subtrees_are_skipped() {
    let project = TempDir::new().unwrap();
    let src = project.path().join("src");
    fs::create_dir_all(src.join("domain/example")).unwrap();
    fs::write(src.join("domain/example/entity.py"), "class Example: ...\n").unwrap();

    let applied = materialize(
        project.path(),
        &context(&["orders"], ApiLayer::Disabled, ApiLayer::Disabled),
    )
    .unwrap();

    assert_eq!(applied.len(), 2);
    assert!(src.join("domain/orders/entity.py").exists());
    assert!(!src.join("application").exists());
    assert!(!src.join("domain/example").exists());
}
