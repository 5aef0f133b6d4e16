//! Pinion - pin-diagram layout and composition for hardware boards.
//!
//! Pinion turns a declarative pin-list catalog into two-column pinout
//! diagrams and places multiple board diagrams side by side on a shared
//! canvas, without overlap. The output is a renderer-agnostic
//! [`Scene`](pinion_core::scene::Scene); a built-in exporter renders
//! scenes to SVG.

pub mod catalog;
pub mod compose;
pub mod config;
pub mod export;
pub mod layout;
pub mod session;

mod error;

pub use pinion_core::{geometry, scene};

pub use error::PinionError;
pub use export::svg::SvgBuilder;

use log::{debug, info};

use crate::catalog::Catalog;
use crate::compose::{CompositionPlanner, ReferenceEntry};
use crate::config::AppConfig;
use crate::scene::Scene;
use crate::session::PlacementLog;

/// Builder for composing and rendering pinout scenes.
///
/// This is the high-level entry point: it holds the configuration and
/// drives the composition and export stages. Placement state lives outside
/// the builder, in a [`PlacementLog`] owned by the caller, and every
/// composition is a full re-derivation from that log.
///
/// # Examples
///
/// ```
/// use pinion::{PinoutBuilder, config::AppConfig};
/// use pinion::catalog::Catalog;
/// use pinion::session::PlacementLog;
///
/// let catalog = Catalog::from_json_str(
///     r#"{"Board": ["3.3V", "5V", "GND", "GPIO1"]}"#,
/// ).expect("valid catalog");
///
/// let mut log = PlacementLog::new();
/// log.place("Board");
///
/// let builder = PinoutBuilder::new(AppConfig::default());
/// let scene = builder.compose(&catalog, &log).expect("composition succeeds");
/// let svg = builder.render_svg(&scene);
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct PinoutBuilder {
    config: AppConfig,
}

impl PinoutBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compose the interactive scene from a catalog and a placement log.
    ///
    /// Each placed component receives the next horizontal slot in placement
    /// order; the scene is recomputed from the full log on every call.
    ///
    /// # Errors
    ///
    /// Returns `PinionError` if a placed name is not in the catalog or if
    /// any component fails layout. The whole composition fails rather than
    /// silently omitting the offending component.
    pub fn compose(&self, catalog: &Catalog, log: &PlacementLog) -> Result<Scene, PinionError> {
        info!(placements = log.len(); "Composing scene");

        let planner = CompositionPlanner::new(&self.config);
        let scene = planner.plan(catalog, log)?;

        debug!(
            markers = scene.markers().len(),
            borders = scene.borders().len();
            "Scene composed"
        );

        Ok(scene)
    }

    /// Compose a static reference sheet from explicit entries.
    ///
    /// Entries carry their own column pairs; pins are numbered and frames
    /// drop to the baseline (the reference presentation style).
    ///
    /// # Errors
    ///
    /// Returns `PinionError` if any entry fails layout.
    pub fn compose_reference(&self, entries: &[ReferenceEntry]) -> Result<Scene, PinionError> {
        info!(entries = entries.len(); "Composing reference sheet");

        let planner = CompositionPlanner::new(&self.config);
        planner.plan_reference(entries)
    }

    /// Render a composed scene to an SVG document string.
    ///
    /// Rendering happens entirely in memory and is infallible.
    pub fn render_svg(&self, scene: &Scene) -> String {
        let mut builder = SvgBuilder::new();
        if let Some(color) = self.config.style().background_color() {
            builder = builder.with_background(color);
        }

        let svg = builder.build().render(scene);
        info!(bytes = svg.len(); "SVG rendered");
        svg
    }
}
