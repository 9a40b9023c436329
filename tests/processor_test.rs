mod common;

use common::MockPrompter;
use droidstamp::catalog::{template_set, SetOptions, TemplateKind, ACTIVITY, ACTIVITY_LAYOUT};
use droidstamp::context::Context;
use droidstamp::loader::Templates;
use droidstamp::naming::{ApplicationId, FeatureName, PackageName};
use droidstamp::processor::{execute, is_rendered_path_valid, Action, Processor};
use droidstamp::renderer::MiniJinjaRenderer;
use std::fs;
use tempfile::TempDir;

fn login_context() -> serde_json::Value {
    Context::new(
        &FeatureName::parse("Login").unwrap(),
        &PackageName::parse("com.example.app.ui.login").unwrap(),
        &ApplicationId::parse("com.example.app").unwrap(),
    )
    .to_value()
    .unwrap()
}

#[test]
fn test_is_rendered_path_valid() {
    assert!(!is_rendered_path_valid(""));
    assert!(!is_rendered_path_valid("java//Login.kt"));
    assert!(!is_rendered_path_valid("/java/Login.kt"));
    assert!(!is_rendered_path_valid("java/../Login.kt"));
    assert!(is_rendered_path_valid("Login.kt"));
    assert!(is_rendered_path_valid("java/com/example/Login.kt"));
}

#[test]
fn test_resolve_target_path() {
    let temp_dir = TempDir::new().unwrap();
    let (renderer, prompt, templates, context) =
        (MiniJinjaRenderer::new(), MockPrompter::silent(), Templates::builtin(), login_context());
    let processor =
        Processor::new(&renderer, &prompt, &templates, temp_dir.path(), &context, false, false);

    assert_eq!(
        processor.resolve_target_path(&ACTIVITY).unwrap(),
        temp_dir.path().join("java/com/example/app/ui/login/LoginActivity.kt")
    );
    assert_eq!(
        processor.resolve_target_path(&ACTIVITY_LAYOUT).unwrap(),
        temp_dir.path().join("res/layout/activity_login.xml")
    );
}

#[test]
fn test_plan_writes_nothing_until_executed() {
    let temp_dir = TempDir::new().unwrap();
    let (renderer, prompt, templates, context) =
        (MiniJinjaRenderer::new(), MockPrompter::silent(), Templates::builtin(), login_context());
    let processor =
        Processor::new(&renderer, &prompt, &templates, temp_dir.path(), &context, false, false);

    let plan = processor
        .plan(&template_set(TemplateKind::Fragment, SetOptions::default()))
        .unwrap();

    assert_eq!(plan.len(), 3);
    assert!(plan.iter().all(|result| result.action == Action::Created));
    assert!(plan.iter().all(|result| !result.target.exists()));

    execute(&plan).unwrap();
    assert!(plan.iter().all(|result| result.target.is_file()));

    let fragment = fs::read_to_string(&plan[0].target).unwrap();
    assert!(fragment.starts_with("package com.example.app.ui.login\n"));
    assert!(fragment.contains("import com.example.app.databinding.FragmentLoginBinding"));
    assert!(fragment.contains("R.layout.fragment_login"));
}

#[test]
fn test_identical_file_is_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let (renderer, prompt, templates, context) =
        (MiniJinjaRenderer::new(), MockPrompter::silent(), Templates::builtin(), login_context());
    let processor =
        Processor::new(&renderer, &prompt, &templates, temp_dir.path(), &context, false, false);

    let first = processor.process(&ACTIVITY).unwrap();
    execute(std::slice::from_ref(&first)).unwrap();

    let second = processor.process(&ACTIVITY).unwrap();
    assert_eq!(second.action, Action::Unchanged);
    assert!(!second.needs_write());
    assert!(prompt.asked.borrow().is_empty());
}

#[test]
fn test_conflict_asks_and_respects_answer() {
    let temp_dir = TempDir::new().unwrap();
    let (renderer, templates, context) =
        (MiniJinjaRenderer::new(), Templates::builtin(), login_context());
    let target = temp_dir.path().join("java/com/example/app/ui/login/LoginActivity.kt");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "// hand written\n").unwrap();

    let decline = MockPrompter::new(&[], false);
    let processor =
        Processor::new(&renderer, &decline, &templates, temp_dir.path(), &context, false, false);
    let result = processor.process(&ACTIVITY).unwrap();
    assert_eq!(result.action, Action::Skipped);
    assert_eq!(decline.asked.borrow().len(), 1);

    execute(&[result]).unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "// hand written\n");

    let accept = MockPrompter::new(&[], true);
    let processor =
        Processor::new(&renderer, &accept, &templates, temp_dir.path(), &context, false, false);
    let result = processor.process(&ACTIVITY).unwrap();
    assert_eq!(result.action, Action::Overwritten);
}

#[test]
fn test_force_and_skip_overwrite_check() {
    let temp_dir = TempDir::new().unwrap();
    let (renderer, templates, context) =
        (MiniJinjaRenderer::new(), Templates::builtin(), login_context());
    let target = temp_dir.path().join("res/layout/activity_login.xml");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "<layout />\n").unwrap();

    let prompt = MockPrompter::new(&[], false);

    let forced =
        Processor::new(&renderer, &prompt, &templates, temp_dir.path(), &context, true, false);
    assert_eq!(forced.process(&ACTIVITY_LAYOUT).unwrap().action, Action::Overwritten);

    let unchecked =
        Processor::new(&renderer, &prompt, &templates, temp_dir.path(), &context, false, true);
    assert_eq!(unchecked.process(&ACTIVITY_LAYOUT).unwrap().action, Action::Overwritten);

    assert!(prompt.asked.borrow().is_empty());
}

#[test]
fn test_action_display() {
    assert_eq!(Action::Created.to_string(), "Created");
    assert_eq!(Action::Overwritten.to_string(), "Overwritten");
    assert_eq!(Action::Unchanged.to_string(), "Unchanged");
    assert_eq!(Action::Skipped.to_string(), "Skipped");
    assert_eq!(Action::Conflict.to_string(), "Conflict");
}

#[test]
fn test_dry_run_reports_conflicts_without_asking() {
    let temp_dir = TempDir::new().unwrap();
    let (renderer, templates, context) =
        (MiniJinjaRenderer::new(), Templates::builtin(), login_context());
    let target = temp_dir.path().join("java/com/example/app/ui/login/LoginActivity.kt");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "// hand written\n").unwrap();

    let prompt = MockPrompter::new(&[], true);
    let processor =
        Processor::new(&renderer, &prompt, &templates, temp_dir.path(), &context, false, false)
            .dry_run(true);
    let plan = processor
        .generate(&template_set(TemplateKind::Activity, SetOptions::default()))
        .unwrap();

    let actions: Vec<Action> = plan.iter().map(|result| result.action).collect();
    assert_eq!(actions, vec![Action::Conflict, Action::Created, Action::Created]);
    assert!(prompt.asked.borrow().is_empty());
    assert!(plan[1..].iter().all(|result| !result.target.exists()));
    assert_eq!(fs::read_to_string(&target).unwrap(), "// hand written\n");

    let forced =
        Processor::new(&renderer, &prompt, &templates, temp_dir.path(), &context, true, false)
            .dry_run(true);
    assert_eq!(forced.process(&ACTIVITY).unwrap().action, Action::Overwritten);
    assert_eq!(fs::read_to_string(&target).unwrap(), "// hand written\n");
}

#[test]
fn test_generate_writes_when_not_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    let (renderer, prompt, templates, context) =
        (MiniJinjaRenderer::new(), MockPrompter::silent(), Templates::builtin(), login_context());
    let processor =
        Processor::new(&renderer, &prompt, &templates, temp_dir.path(), &context, false, false);

    let plan = processor
        .generate(&template_set(TemplateKind::ViewModel, SetOptions::default()))
        .unwrap();

    assert_eq!(plan.len(), 1);
    assert!(plan[0].target.is_file());
}

#[test]
fn test_non_utf8_target_counts_as_different() {
    let temp_dir = TempDir::new().unwrap();
    let (renderer, templates, context) =
        (MiniJinjaRenderer::new(), Templates::builtin(), login_context());
    let target = temp_dir.path().join("res/layout/activity_login.xml");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, [0xff, 0xfe, 0x00, 0x3c]).unwrap();

    let prompt = MockPrompter::new(&[], false);
    let processor =
        Processor::new(&renderer, &prompt, &templates, temp_dir.path(), &context, false, false);

    assert_eq!(processor.process(&ACTIVITY_LAYOUT).unwrap().action, Action::Skipped);
    assert_eq!(prompt.asked.borrow().len(), 1);
}
