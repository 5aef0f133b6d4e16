//! The composition planner: slot assignment and scene accumulation.
//!
//! The planner turns placement state into a drawable [`Scene`]. For the
//! interactive view it assigns each placed component a horizontal slot in
//! placement order and derives that slot's column pair from
//! [`LayoutConfig`](crate::config::LayoutConfig); for a static reference
//! sheet it takes explicit per-entry column pairs instead.
//!
//! Every plan is a full re-derivation from the placement state: the scene
//! is a deterministic projection of its inputs and is never patched
//! incrementally. If any placed component fails layout the whole plan
//! fails; a partially wrong diagram is worse than an explicit error for a
//! hardware-reference tool.

use log::debug;

use pinion_core::geometry::Bounds;
use pinion_core::scene::{Border, MarkerGroup, MarkerStyle, Scene, SceneLabel, TextAnchor};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::error::PinionError;
use crate::layout::{Columns, LayoutError, LayoutResult, LayoutStyle, layout};
use crate::session::{PlacementLog, PlacementSlot};

/// Fixed width of the reference-sheet canvas, in diagram units.
pub const REFERENCE_CANVAS_WIDTH: f32 = 5.0;

/// One entry of a static reference sheet: a titled pin list at an explicit
/// column position.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceEntry {
    title: String,
    labels: Vec<String>,
    columns: Columns,
}

impl ReferenceEntry {
    pub fn new(title: impl Into<String>, labels: Vec<String>, columns: Columns) -> Self {
        Self {
            title: title.into(),
            labels,
            columns,
        }
    }

    /// Returns the entry's title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the entry's pin labels
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the entry's column pair
    pub fn columns(&self) -> Columns {
        self.columns
    }
}

/// Assigns slots and accumulates layout output into one scene.
pub struct CompositionPlanner<'a> {
    config: &'a AppConfig,
}

impl<'a> CompositionPlanner<'a> {
    /// Creates a planner using the given configuration.
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Derives the column pair for a placement slot.
    ///
    /// Slot `i` spans `x_start + i*x_spacing` to
    /// `x_start + i*x_spacing + column_gap`. With the default constants any
    /// two distinct slots have non-overlapping horizontal extents.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidColumnSpec`] if the configured column
    /// gap is not positive.
    pub fn columns_for_slot(&self, slot: PlacementSlot) -> Result<Columns, LayoutError> {
        let layout_config = self.config.layout();
        let left = layout_config.x_start() + slot as f32 * layout_config.x_spacing();
        Columns::new(left, left + layout_config.column_gap())
    }

    /// Composes the interactive scene from the full placement log.
    ///
    /// Re-invoked on every placement-state change; the log is the single
    /// source of truth and the scene is recomputed from scratch each time.
    /// The viewport is the union of the configured base canvas, every
    /// component's extent, and a `max_rows + 2` headroom, so tall
    /// components are never clipped.
    ///
    /// # Errors
    ///
    /// - [`PinionError::UnknownComponent`] if a placed name is not in the catalog
    /// - [`PinionError::Layout`] if any component fails layout
    pub fn plan(&self, catalog: &Catalog, log: &PlacementLog) -> Result<Scene, PinionError> {
        debug!(placements = log.len(); "Composing interactive scene");

        let mut scene = Scene::new(self.config.layout().canvas_bounds());
        let style = LayoutStyle::placed();
        let mut max_rows = 0;

        for (slot, name) in log.placements().iter().enumerate() {
            let component = catalog
                .get(name)
                .ok_or_else(|| PinionError::unknown_component(name))?;
            let columns = self.columns_for_slot(slot)?;
            let result = layout(component.name(), component.pins().labels(), columns, &style)?;

            max_rows = max_rows.max(result.rows());
            self.accumulate(&mut scene, &result, self.config.style().border_color());
        }

        if max_rows > 0 {
            scene.expand_viewport(Bounds::new(0.0, 0.0, 0.0, max_rows as f32 + 2.0));
        }

        Ok(scene)
    }

    /// Composes a static reference sheet from explicit entries.
    ///
    /// Entries carry their own column pairs (validated at [`Columns`]
    /// construction) and are laid out with [`LayoutStyle::reference`]:
    /// baseline frames and numbered pins. The viewport spans the fixed
    /// reference canvas width and `max_rows + 2` units of height.
    ///
    /// # Errors
    ///
    /// Returns [`PinionError::Layout`] if any entry fails layout.
    pub fn plan_reference(&self, entries: &[ReferenceEntry]) -> Result<Scene, PinionError> {
        debug!(entries = entries.len(); "Composing reference sheet");

        let mut scene = Scene::new(Bounds::new(0.0, 0.0, REFERENCE_CANVAS_WIDTH, 0.0));
        let style = LayoutStyle::reference();
        let mut max_rows = 0;

        for entry in entries {
            let result = layout(entry.title(), entry.labels(), entry.columns(), &style)?;
            max_rows = max_rows.max(result.rows());
            self.accumulate(
                &mut scene,
                &result,
                self.config.style().reference_border_color(),
            );
        }

        scene.expand_viewport(Bounds::new(0.0, 0.0, 0.0, max_rows as f32 + 2.0));

        Ok(scene)
    }

    /// Pushes one layout result into the scene and grows the viewport to
    /// cover it.
    fn accumulate(&self, scene: &mut Scene, result: &LayoutResult, border_color: &str) {
        let style = self.config.style();
        let marker_style = MarkerStyle::new(
            style.marker_size(),
            style.marker_color(),
            style.stroke_width(),
        );

        scene.push_border(Border::new(
            result.border(),
            border_color,
            style.stroke_width(),
        ));
        scene.push_marker_group(MarkerGroup::new(
            result.left_points().to_vec(),
            TextAnchor::Left,
            marker_style.clone(),
        ));
        scene.push_marker_group(MarkerGroup::new(
            result.right_points().to_vec(),
            TextAnchor::Right,
            marker_style,
        ));
        for number in result.pin_numbers() {
            scene.push_label(SceneLabel::new(number.position(), number.text()));
        }
        scene.push_label(SceneLabel::new(
            result.title().position(),
            result.title().text(),
        ));

        scene.expand_viewport(result.extent());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json_str(
            r#"{
                "A": ["1", "2", "3", "4"],
                "B": ["1", "2", "3", "4", "5", "6", "7", "8"],
                "Tall": [
                    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10",
                    "11", "12", "13", "14", "15", "16", "17", "18", "19", "20",
                    "21", "22", "23", "24", "25", "26", "27", "28", "29", "30"
                ]
            }"#,
        )
        .expect("valid catalog")
    }

    fn planner_config() -> AppConfig {
        AppConfig::default()
    }

    #[test]
    fn test_columns_for_slot_follows_spacing() {
        let config = planner_config();
        let planner = CompositionPlanner::new(&config);

        let slot0 = planner.columns_for_slot(0).expect("valid");
        assert_eq!((slot0.left(), slot0.right()), (2.0, 2.5));

        let slot1 = planner.columns_for_slot(1).expect("valid");
        assert_eq!((slot1.left(), slot1.right()), (6.0, 6.5));

        let slot3 = planner.columns_for_slot(3).expect("valid");
        assert_eq!((slot3.left(), slot3.right()), (14.0, 14.5));
    }

    #[test]
    fn test_plan_places_a_then_b() {
        let config = planner_config();
        let planner = CompositionPlanner::new(&config);
        let catalog = catalog();

        let mut log = PlacementLog::new();
        log.place("A");
        log.place("B");

        let scene = planner.plan(&catalog, &log).expect("plan succeeds");

        // Two components: a border, two marker groups, and a title each.
        assert_eq!(scene.borders().len(), 2);
        assert_eq!(scene.markers().len(), 4);
        assert_eq!(scene.labels().len(), 2);

        // A's markers sit at x in [2, 2.5], B's at [6, 6.5].
        assert_eq!(scene.markers()[0].points()[0].position().x(), 2.0);
        assert_eq!(scene.markers()[1].points()[0].position().x(), 2.5);
        assert_eq!(scene.markers()[2].points()[0].position().x(), 6.0);
        assert_eq!(scene.markers()[3].points()[0].position().x(), 6.5);

        // B has four rows; the viewport accommodates them.
        assert_eq!(scene.markers()[2].points().len(), 4);
        assert!(scene.viewport().max_y() >= 6.0);
    }

    #[test]
    fn test_plan_slots_never_overlap() {
        let config = planner_config();
        let planner = CompositionPlanner::new(&config);
        let catalog = catalog();

        let mut log = PlacementLog::new();
        for _ in 0..5 {
            log.place("A");
        }

        let scene = planner.plan(&catalog, &log).expect("plan succeeds");
        let borders = scene.borders();
        for i in 0..borders.len() {
            for j in (i + 1)..borders.len() {
                assert!(
                    !borders[i].bounds().overlaps_horizontally(&borders[j].bounds()),
                    "slots {i} and {j} overlap"
                );
            }
        }
    }

    #[test]
    fn test_plan_unknown_component_fails_whole_recomputation() {
        let config = planner_config();
        let planner = CompositionPlanner::new(&config);
        let catalog = catalog();

        let mut log = PlacementLog::new();
        log.place("A");
        log.place("Nonexistent");

        let err = planner.plan(&catalog, &log).unwrap_err();
        match err {
            PinionError::UnknownComponent { name } => assert_eq!(name, "Nonexistent"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_plan_is_a_pure_projection_of_the_log() {
        let config = planner_config();
        let planner = CompositionPlanner::new(&config);
        let catalog = catalog();

        let mut log = PlacementLog::new();
        log.place("B");
        log.place("A");

        let first = planner.plan(&catalog, &log).expect("plan succeeds");
        let second = planner.plan(&catalog, &log).expect("plan succeeds");
        assert_eq!(first, second);
    }

    #[test]
    fn test_plan_empty_log_is_bare_canvas() {
        let config = planner_config();
        let planner = CompositionPlanner::new(&config);

        let scene = planner
            .plan(&catalog(), &PlacementLog::new())
            .expect("plan succeeds");
        assert!(scene.markers().is_empty());
        assert!(scene.borders().is_empty());
        assert_eq!(scene.viewport(), config.layout().canvas_bounds());
    }

    #[test]
    fn test_plan_tall_component_grows_viewport() {
        let config = planner_config();
        let planner = CompositionPlanner::new(&config);

        let mut log = PlacementLog::new();
        log.place("Tall");

        let scene = planner.plan(&catalog(), &log).expect("plan succeeds");
        // 30 pins -> 15 rows; the 10-unit base canvas must grow to 17.
        assert_eq!(scene.viewport().max_y(), 17.0);
        assert_eq!(scene.viewport().max_x(), 15.0);
    }

    #[test]
    fn test_plan_reference_emits_numbers_and_baseline_frames() {
        let config = planner_config();
        let planner = CompositionPlanner::new(&config);

        let entries = vec![
            ReferenceEntry::new(
                "Left Board",
                vec!["a".into(), "b".into(), "c".into(), "d".into()],
                Columns::new(2.0, 2.5).expect("valid"),
            ),
            ReferenceEntry::new(
                "Right Board",
                vec!["a".into(), "b".into()],
                Columns::new(4.0, 4.5).expect("valid"),
            ),
        ];

        let scene = planner.plan_reference(&entries).expect("plan succeeds");

        // Per entry: pin-number labels plus a title.
        assert_eq!(scene.labels().len(), 4 + 1 + 2 + 1);
        assert_eq!(scene.borders()[0].bounds().min_y(), 0.0);
        assert_eq!(scene.borders()[0].color(), "black");

        // Viewport: fixed width, max_rows + 2 height.
        assert_eq!(scene.viewport().max_x(), REFERENCE_CANVAS_WIDTH);
        assert_eq!(scene.viewport().max_y(), 4.0);
    }

    #[test]
    fn test_plan_propagates_layout_errors() {
        let config = planner_config();
        let planner = CompositionPlanner::new(&config);

        let entries = vec![ReferenceEntry::new(
            "Odd",
            vec!["a".into(), "b".into(), "c".into()],
            Columns::new(2.0, 2.5).expect("valid"),
        )];

        assert!(matches!(
            planner.plan_reference(&entries).unwrap_err(),
            PinionError::Layout(LayoutError::InvalidPinSpec { len: 3 })
        ));
    }
}
