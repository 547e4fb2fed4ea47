//! App module - contains the main application state and logic

mod controller;
mod requests;
mod targets;
mod toast;
mod views;

pub use controller::ConversionController;
pub use targets::TargetSet;

use crate::api::ConvertClient;
use crate::clipboard::SystemClipboard;
use crate::error::ConvertError;
use crate::settings::Settings;
use crate::theme;
use crate::types::ApiStatus;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Result of the in-flight conversion, filled by the runtime task and taken
/// by the UI thread.
pub(crate) type PendingResult = Arc<Mutex<Option<Result<String, ConvertError>>>>;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) controller: ConversionController,
    pub(crate) client: ConvertClient,
    pub(crate) clipboard: SystemClipboard,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) pending: PendingResult,
    pub(crate) health: Arc<Mutex<Option<ApiStatus>>>,
    pub(crate) health_started: bool,
    pub(crate) focus_input: bool,
    // Central panel rect for toast positioning
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let targets = TargetSet::from_settings(&settings);
        info!(
            api = %settings.api_base_url,
            options = targets.options().len(),
            selected = %targets.selected().value,
            "Converter ready"
        );

        Ok(Self {
            controller: ConversionController::new(targets),
            client: ConvertClient::new(&settings.api_base_url),
            clipboard: SystemClipboard::default(),
            runtime: tokio::runtime::Runtime::new()?,
            pending: Arc::new(Mutex::new(None)),
            health: Arc::new(Mutex::new(None)),
            health_started: false,
            focus_input: true,
            central_panel_rect: None,
            settings,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        })
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.last_target = Some(self.controller.targets().selected().value.clone());
        self.settings.save(&self.data_dir);
    }
}
