use crate::{
    cli::Args,
    error::Result,
    params::{build_parameters, Parameters},
    renderer::MiniJinjaRenderer,
    template::{register_templates, OutputTarget, TemplateDriver},
};

/// Main CLI runner that orchestrates parameter loading, registration and rendering
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete rendering workflow
    pub fn run(self) -> Result<()> {
        let parameters = self.load_parameters()?;

        let mut engine = MiniJinjaRenderer::new();
        let entries = register_templates(self.args.templates.as_slice(), &mut engine)?;

        let output = OutputTarget::new(self.args.output.clone(), self.args.append);
        let driver = TemplateDriver::new(&engine, &output);
        let rendered = driver.execute(&entries, &parameters, &mut std::io::stderr())?;

        log::debug!("Rendered {rendered} of {} templates", entries.len());
        Ok(())
    }

    /// Builds the parameter tree from `--set` and `--set-from-file`
    fn load_parameters(&self) -> Result<Parameters> {
        let parameters = build_parameters(
            self.args.values.as_slice(),
            self.args.value_files.as_slice(),
        )?;
        log::debug!("Loaded {} top-level values", parameters.values().len());
        Ok(parameters)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
