//! Background requests: conversion and the start-up health probe

use super::App;
use crate::types::ApiStatus;
use eframe::egui;
use std::time::Instant;
use tracing::{debug, info, warn};

impl App {
    /// Handle a click on Convert: validate, enter loading, spawn the request.
    pub fn start_conversion(&mut self, ctx: &egui::Context) {
        let Some(request) = self.controller.begin_conversion(Instant::now()) else {
            return;
        };

        let client = self.client.clone();
        let pending = self.pending.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let outcome = client.convert(&request).await;
            if let Ok(mut slot) = pending.lock() {
                *slot = Some(outcome);
            }
            ctx.request_repaint();
        });
    }

    /// Move a settled conversion result into the controller
    pub fn poll_conversion(&mut self) {
        let outcome = match self.pending.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        if let Some(outcome) = outcome {
            self.controller.finish_conversion(outcome);
        }
    }

    pub fn check_api_health(&mut self, ctx: &egui::Context) {
        if self.health_started {
            return;
        }
        self.health_started = true;

        let client = self.client.clone();
        let health = self.health.clone();
        let ctx = ctx.clone();
        debug!(url = %client.base_url(), "Probing API health");

        self.runtime.spawn(async move {
            let status = match client.health().await {
                Ok(()) => {
                    info!("Conversion API online");
                    ApiStatus::Online
                }
                Err(e) => {
                    warn!(error = ?e, "Conversion API health check failed");
                    ApiStatus::Offline(e.to_string())
                }
            };
            if let Ok(mut slot) = health.lock() {
                *slot = Some(status);
            }
            ctx.request_repaint();
        });
    }

    pub fn poll_api_health(&mut self) {
        let status = match self.health.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        if let Some(status) = status {
            self.controller.set_api_status(status);
        }
    }
}
