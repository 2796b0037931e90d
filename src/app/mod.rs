use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::Context as _;
use eframe::egui::{self, Context};
use tracing::{error, info};

use topology_details::table::{RowOptions, RowPointer, SortChange, ViewState};
use topology_details::topology::{Snapshot, load_snapshot};

mod ui;

#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub snapshot_path: PathBuf,
    pub label: Option<String>,
    pub view_state: ViewState,
    pub row_options: RowOptions,
}

pub struct TopologyDetailsApp {
    config: ViewerConfig,
    state: AppState,
    reload_rx: Option<Receiver<Result<Snapshot, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<Snapshot, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    snapshot: Snapshot,
    label: String,
    row_options: RowOptions,
    view_state: ViewState,
    search: String,
    selected: Option<String>,
    pointer: RowPointer,
    pressed_row: Option<String>,
    last_sort_change: Option<SortChange>,
}

impl ViewModel {
    fn new(snapshot: Snapshot, config: &ViewerConfig) -> Self {
        let label = config
            .label
            .clone()
            .unwrap_or_else(|| snapshot.label.clone());
        let mut row_options = config.row_options.clone();
        if row_options.topology_id.is_none() {
            row_options.topology_id = snapshot.topology_id.clone();
        }

        Self {
            snapshot,
            label,
            row_options,
            view_state: config.view_state.clone(),
            search: String::new(),
            selected: None,
            pointer: RowPointer::default(),
            pressed_row: None,
            last_sort_change: None,
        }
    }
}

impl TopologyDetailsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ViewerConfig) -> Self {
        let state = Self::start_load(config.snapshot_path.clone());
        Self {
            config,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(snapshot_path: PathBuf) -> Receiver<Result<Snapshot, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_snapshot(&snapshot_path)
                .with_context(|| format!("failed to load snapshot {}", snapshot_path.display()))
                .map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(snapshot_path: PathBuf) -> AppState {
        info!(path = %snapshot_path.display(), "loading snapshot");
        AppState::Loading {
            rx: Self::spawn_load(snapshot_path),
        }
    }

    fn loaded(&self, result: Result<Snapshot, String>) -> AppState {
        match result {
            Ok(snapshot) => AppState::Ready(Box::new(ViewModel::new(snapshot, &self.config))),
            Err(message) => {
                error!(%message, "snapshot load failed");
                AppState::Error(message)
            }
        }
    }
}

impl eframe::App for TopologyDetailsApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(result);
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading topology snapshot...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(message) => {
                let mut retry = false;
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load topology snapshot");
                    ui.add_space(6.0);
                    ui.label(message.as_str());
                    ui.add_space(10.0);
                    retry = ui.button("Retry").clicked();
                });
                if retry {
                    self.state = Self::start_load(self.config.snapshot_path.clone());
                    return;
                }
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(
                    ctx,
                    &self.config.snapshot_path,
                    &mut reload_requested,
                    is_reloading,
                );

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.config.snapshot_path.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => transition = Some(result),
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition =
                                Some(Err("Background load worker disconnected".to_owned()));
                        }
                    }
                }
            }
        }

        if let Some(result) = transition {
            self.reload_rx = None;
            self.state = self.loaded(result);
        }
    }
}
