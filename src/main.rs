//! droidstamp's application entry point.
//! Resolves parameters, loads templates, plans the generated files and
//! writes them.

use droidstamp::{
    answers::get_answers,
    catalog::template_set,
    cli::{get_args, Args},
    config::get_config,
    context::Context,
    error::{default_error_handler, Result},
    loader::load_templates,
    logger::init_logger,
    options::Options,
    processor::Processor,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the project configuration
/// 2. Resolves name, package and application id (CLI, config, prompt)
/// 3. Loads template bodies (built-in or override directory)
/// 4. Plans the template set and settles conflicts
/// 5. Writes the files unless this is a dry run
fn run(args: Args) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();

    let config = get_config(&args.project_dir)?;
    let options = Options::resolve(&args, &config);

    let answers = get_answers(&prompt, &args.name, options.package, options.application_id)?;
    let context = Context::new(&answers.name, &answers.package, &answers.application_id);
    let context = context.to_value()?;

    let templates = load_templates(options.templates)?;
    let files = template_set(args.kind, options.set);

    let processor = Processor::new(
        &renderer,
        &prompt,
        &templates,
        &options.output_root,
        &context,
        args.force,
        args.skip_overwrite_check,
    )
    .dry_run(args.dry_run);
    let plan = processor.generate(&files)?;

    let suffix = if args.dry_run { " (dry run)" } else { "" };
    for result in &plan {
        println!("{}{}: '{}'", result.action, suffix, result.target.display());
    }

    if !args.dry_run {
        println!(
            "Generated {} '{}' in {}.",
            args.kind,
            answers.name,
            options.output_root.display()
        );
    }
    Ok(())
}
