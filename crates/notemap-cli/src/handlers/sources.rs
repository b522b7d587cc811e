use crate::context::ExecutionContext;
use crate::presentation::console::ConsoleRenderer;
use crate::presentation::presenters::present_source_list;
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::PathBuf;

pub fn handle(ctx: &ExecutionContext, paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let sources = ctx.load_sources(paths)?;
    let model = present_source_list(&sources);
    let renderer = ConsoleRenderer::for_stdout();

    match format {
        OutputFormat::Json => renderer.print_json(&model),
        OutputFormat::Plain => {
            print!("{}", renderer.render_source_list(&model));
            Ok(())
        }
    }
}
