// Mon Oct 19 2026 - Alex

use super::args::Args;
use crate::generator::{GenerationReport, Generator};
use crate::utils::LoggingUtils;
use anyhow::Context;
use colored::Colorize;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_output(&args);

        let config = args.resolve_config().context("invalid generator configuration")?;
        let generator = Generator::new(config);

        if !args.quiet {
            println!(
                "{} Generating metric {} from templates in {}",
                "[*]".blue(),
                args.metric_name.cyan().bold(),
                generator.config().template_dir.display()
            );
        }

        let report = generator
            .generate(&args.metric_name)
            .with_context(|| format!("failed to generate metric \"{}\"", args.metric_name))?;

        if !args.quiet {
            self.print_report(&report);
        }

        Ok(())
    }

    fn setup_output(&self, args: &Args) {
        if args.no_color {
            colored::control::set_override(false);
        }

        LoggingUtils::init_logger(args.log_filter());
    }

    fn print_report(&self, report: &GenerationReport) {
        let vars = &report.variables;
        println!("{}", "Variables".cyan().bold());
        println!("{}", "-".repeat(40).cyan());
        println!("  metric_type:       {}", vars.metric_type.green());
        println!("  metric_class:      {}", vars.metric_class.green());
        println!("  metric_include:    {}", vars.metric_include.green());
        println!("  metric_type_name:  {}", vars.metric_type_name.green());
        println!("  metric_output_var: {}", vars.metric_output_var.green());
        println!();

        for path in &report.written {
            println!("{} Wrote {}", "[+]".green(), path.display());
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
