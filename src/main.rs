mod app;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use topology_details::table::{DEFAULT_ROW_LIMIT, RowOptions, ViewState, build_table, clamp_limit};
use topology_details::topology::load_snapshot;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON snapshot holding the node collection and its columns
    snapshot: PathBuf,

    /// Header of the label column; defaults to the snapshot's label
    #[arg(long)]
    label: Option<String>,

    #[arg(long)]
    sort_by: Option<String>,

    #[arg(long)]
    sort_desc: Option<bool>,

    /// Rows shown before expanding; 0 or negative shows every row
    #[arg(long, default_value_t = DEFAULT_ROW_LIMIT as i64, allow_negative_numbers = true)]
    limit: i64,

    /// Node attribute used as the label link target
    #[arg(long, default_value = "id")]
    node_id_key: String,

    #[arg(long)]
    topology_id: Option<String>,

    /// Print the table to stdout instead of opening the viewer
    #[arg(long)]
    print: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,topology_details=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_table(args: &Args, view_state: &ViewState, row_options: RowOptions) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)
        .with_context(|| format!("failed to load snapshot {}", args.snapshot.display()))?;

    let label = args.label.as_deref().unwrap_or(&snapshot.label);
    let row_options = RowOptions {
        topology_id: row_options.topology_id.or_else(|| snapshot.topology_id.clone()),
        ..row_options
    };
    let view = build_table(
        &snapshot.nodes,
        &snapshot.columns,
        label,
        view_state,
        &row_options,
    );

    print!("{view}");
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let view_state =
        ViewState::new(clamp_limit(args.limit)).with_sort(args.sort_by.clone(), args.sort_desc);
    let row_options = RowOptions {
        node_id_key: args.node_id_key.clone(),
        topology_id: args.topology_id.clone(),
        reference_time: Some(Utc::now()),
    };

    if args.print {
        return print_table(&args, &view_state, row_options);
    }

    let config = app::ViewerConfig {
        snapshot_path: args.snapshot.clone(),
        label: args.label.clone(),
        view_state,
        row_options,
    };
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 820.0]),
        ..Default::default()
    };

    eframe::run_native(
        "topology-details",
        options,
        Box::new(move |cc| Ok(Box::new(app::TopologyDetailsApp::new(cc, config)))),
    )
    .map_err(|error| anyhow!("viewer exited with an error: {error}"))
}
