use crate::args::SourceArgs;
use crate::context::ExecutionContext;
use crate::presentation::tui::{MindMapApp, TuiRenderer};
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use notemap_runtime::Viewport;

pub fn handle(ctx: &ExecutionContext, args: &SourceArgs, auto_generate: bool) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("`notemap view` needs a terminal; use `notemap render` for piped output");
    }

    let sources = ctx.load_sources(&args.paths)?;
    let generator = ctx.generator(args.tree.as_deref())?;
    let selection = args.selection(&ctx.config().view.default_source);
    tracing::info!(
        sources = sources.len(),
        selection = %selection,
        "starting interactive viewer"
    );

    let viewport = Viewport::new().with_source(selection);
    let app = MindMapApp::new(sources, viewport, ctx.config().view.label_width);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let result = TuiRenderer::new(app, generator, runtime.handle().clone()).run(auto_generate);

    // Do not wait for a generator process that is still running
    runtime.shutdown_background();
    result
}
