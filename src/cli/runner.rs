use crate::{
    cli::{
        answers::{read_preset_answers, AnswerCollector, ProjectAnswers},
        processor::FileProcessor,
        CreateArgs,
    },
    config::{Config, ConfigV1},
    error::{Error, Result},
    ignore::{build_globset, parse_ignore_file},
    ioutils::{create_dir_all, get_output_dir, move_dir},
    loader::get_template,
    materializer::Materializer,
    preflight::check_tools,
    prompt::get_prompt_provider,
    renderer::{template_context, TemplateRenderer},
    template::{get_template_engine, processor::TemplateProcessor},
};
use std::path::{Component, Path};
use tempfile::TempDir;

/// Orchestrates `stencil create`: load, ask, render, materialize, publish.
pub struct Runner {
    args: CreateArgs,
}

impl Runner {
    pub fn new(args: CreateArgs) -> Self {
        Self { args }
    }

    /// Executes the complete project generation workflow
    pub fn run(self) -> Result<()> {
        let template = get_template(&self.args.template)?;
        let template_root = template.root();

        let config = self.load_and_validate_config(template_root)?;

        if self.args.skip_preflight {
            log::debug!("Skipping preflight checks");
        } else {
            check_tools(&config.required_tools)?;
        }

        let answers = self.collect_answers()?;
        let context = template_context(&answers.to_context());

        let engine = get_template_engine();
        let project_name = self.render_project_dir(&engine, &config, &context)?;
        let destination = get_output_dir(self.args.output_dir.join(&project_name), self.args.force)?;

        let staging = self.staging_dir()?;
        log::debug!("Rendering into staging directory {}", staging.path().display());
        self.render_template(template_root, staging.path(), &config, &engine, &context)?;

        let project_root = staging.path().join(&project_name);
        let mut materializer = Materializer::new(project_root.clone(), config.layout.clone())
            .with_dry_run(self.args.dry_run)
            .with_strict(self.args.strict || config.strict_modules);
        materializer.run(&answers.generation_context())?;

        if self.args.dry_run {
            println!(
                "[DRY RUN] Project '{}' would be created in {}.",
                answers.project_name,
                destination.display()
            );
            return Ok(());
        }

        self.publish(&project_root, &destination)?;
        println!(
            "Project '{}' has been successfully created in {}.",
            answers.project_name,
            destination.display()
        );
        Ok(())
    }

    /// Loads and validates the template configuration
    fn load_and_validate_config(&self, template_root: &Path) -> Result<ConfigV1> {
        let Config::V1(config) = Config::load_config(template_root)?;
        config.validate()?;
        Ok(config)
    }

    fn collect_answers(&self) -> Result<ProjectAnswers> {
        let preset = read_preset_answers(self.args.answers.clone())?;
        let prompter = get_prompt_provider();
        AnswerCollector::new(&prompter, self.args.non_interactive).collect_answers(&preset)
    }

    /// Renders the name of the generated project directory.
    ///
    /// It becomes a single path component below the output directory.
    fn render_project_dir(
        &self,
        engine: &dyn TemplateRenderer,
        config: &ConfigV1,
        context: &serde_json::Value,
    ) -> Result<String> {
        let rendered = engine.render(&config.project_dir, context, Some("project_dir"))?;
        let rendered = rendered.trim().to_string();
        let mut components = Path::new(&rendered).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(rendered),
            _ => Err(Error::ValidationError(format!(
                "project directory '{}' renders to '{rendered}', which is not a directory name",
                config.project_dir
            ))),
        }
    }

    /// A scratch directory next to the destination, so publishing is a rename.
    ///
    /// Dry runs stage in the system temp directory and leave the output untouched.
    fn staging_dir(&self) -> Result<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(".stencil-");
        if self.args.dry_run {
            return Ok(builder.tempdir()?);
        }
        create_dir_all(&self.args.output_dir)?;
        Ok(builder.tempdir_in(&self.args.output_dir)?)
    }

    fn render_template(
        &self,
        template_root: &Path,
        staging: &Path,
        config: &ConfigV1,
        engine: &dyn TemplateRenderer,
        context: &serde_json::Value,
    ) -> Result<()> {
        let project_template = template_root.join(&config.project_dir);
        if !project_template.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: project_template.display().to_string(),
            });
        }

        let ignored = parse_ignore_file(template_root)?;
        let verbatim = build_globset(template_root, &config.copy_without_render)?;

        let processor = TemplateProcessor::new(
            engine,
            template_root.to_path_buf(),
            staging.to_path_buf(),
            context,
            &ignored,
            &verbatim,
        );
        FileProcessor::new(processor).process_all_files(&project_template)
    }

    /// Moves the finished project to its destination, replacing it under `--force`.
    fn publish(&self, project_root: &Path, destination: &Path) -> Result<()> {
        if destination.exists() {
            log::warn!("Replacing existing directory {}", destination.display());
            std::fs::remove_dir_all(destination)?;
        }
        move_dir(project_root, destination)
    }
}

/// Main entry point for `stencil create`
pub fn run(args: CreateArgs) -> Result<()> {
    Runner::new(args).run()
}
