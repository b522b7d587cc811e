use crate::args::SourceArgs;
use crate::context::ExecutionContext;
use crate::presentation::console::ConsoleRenderer;
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use notemap_engine::{LayoutOptions, MountTree, NodePath, layout};
use notemap_runtime::{DEFAULT_ZOOM, GenerationStatus, Viewport};

pub fn handle(
    ctx: &ExecutionContext,
    args: &SourceArgs,
    zoom: f64,
    collapse_depth: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    if !zoom.is_finite() {
        bail!("--zoom must be a finite number");
    }

    let sources = ctx.load_sources(&args.paths)?;
    let generator = ctx.generator(args.tree.as_deref())?;
    let selection = args.selection(&ctx.config().view.default_source);

    let mut viewport = Viewport::new().with_source(selection.clone());
    if !viewport.can_generate(sources.sources()) {
        bail!(
            "nothing to analyze for source \"{}\": pass --source with non-empty files and a matching --select",
            selection
        );
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(viewport.generate(sources.sources(), generator.as_ref()));

    let tree = match viewport.status() {
        GenerationStatus::Ready(tree) => tree.clone(),
        GenerationStatus::Failed(message) => bail!("{}", message),
        other => bail!("generation did not finish (status: {:?})", other),
    };

    // A generation resets zoom, so apply the requested factor afterwards
    viewport.set_zoom(zoom - DEFAULT_ZOOM);
    let renderer = ConsoleRenderer::for_stdout();

    match format {
        OutputFormat::Json => renderer.print_json(tree.as_ref()),
        OutputFormat::Plain => {
            let mut mounted = MountTree::mount(tree);
            if let Some(depth) = collapse_depth {
                collapse_at_depth(&mut mounted, depth);
            }
            let options = LayoutOptions::for_zoom(viewport.zoom(), ctx.config().view.label_width);
            print!("{}", renderer.render_tree(&layout(&mounted, &options)));
            Ok(())
        }
    }
}

/// Collapse every expanded node at `depth`, hiding everything below it.
fn collapse_at_depth(mounted: &mut MountTree, depth: usize) {
    let targets: Vec<NodePath> = mounted
        .visible_paths()
        .into_iter()
        .filter(|path| path.depth() == depth)
        .filter(|path| {
            mounted
                .node(path)
                .is_some_and(|node| node.is_expandable() && node.is_expanded())
        })
        .collect();

    for path in &targets {
        mounted.toggle_expanded(path);
    }
    tracing::debug!(depth, collapsed = targets.len(), "collapsed nodes");
}
