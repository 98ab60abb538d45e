//! Session state: current matrices, graph, highlight and view settings
//!
//! A [`Session`] is the single owner of everything the UI layer displays.
//! Operations validate their input before touching state, so a failed load
//! leaves the previous graph in place. Observers register with
//! [`Session::subscribe`] and are told what changed.

use std::time::Duration;

use crate::config::Config;
use crate::data::csv;
use crate::data::input::GvInput;
use crate::error::Result;
use crate::graph::algorithms;
use crate::graph::convert::adjacency_matrix_to_graph;
use crate::graph::generator::{self, GvParams};
use crate::graph::matrix::{AdjacencyMatrix, WeightMatrix};
use crate::graph::model::Graph;
use crate::highlight::{highlight_from_mst, highlight_from_partial_mst, HighlightModel};
use crate::mst::{self, MstEdgeList, PrimSteps};
use crate::viz::{DisplayMode, RenderScene, ThemeName};

/// What changed in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// New adjacency matrix and derived graph
    GraphChanged,
    WeightsChanged,
    HighlightChanged,
    HighlightVisibilityChanged,
    ThemeChanged,
    ModeChanged,
}

/// Handle to one animated MST run.
///
/// Any later MST computation or graph load supersedes it, after which it
/// applies no further steps.
#[derive(Debug)]
pub struct MstAnimation {
    generation: u64,
    steps: PrimSteps<'static>,
    applied: usize,
}

impl MstAnimation {
    /// Steps applied so far
    pub fn applied(&self) -> usize {
        self.applied
    }
}

/// Outcome of [`Session::advance_animation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationStatus {
    /// A step was applied to the highlight
    Applied(MstEdgeList),
    /// The run produced its last step earlier
    Finished,
    /// A newer computation or graph replaced this run
    Superseded,
}

type Subscriber = Box<dyn FnMut(&SessionEvent)>;

/// Explicit replacement for an app-wide reactive store
pub struct Session {
    config: Config,
    gv_input: GvInput,
    adjacency: AdjacencyMatrix,
    weights: Option<WeightMatrix>,
    graph: Graph,
    highlight: HighlightModel,
    highlight_visible: bool,
    theme: ThemeName,
    mode: DisplayMode,
    /// Bumped whenever running animations must stop
    generation: u64,
    next_subscriber: usize,
    subscribers: Vec<(usize, Subscriber)>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Session {
    pub fn new(config: Config) -> Self {
        let gv_input = GvInput::new(
            config.gv_name.clone(),
            config.gv_size.clone(),
            config.gv_dividers.clone(),
        );
        Self {
            gv_input,
            adjacency: AdjacencyMatrix::empty(),
            weights: None,
            graph: Graph::empty(),
            highlight: HighlightModel::new(),
            highlight_visible: true,
            theme: config.theme,
            mode: config.mode,
            generation: 0,
            next_subscriber: 0,
            subscribers: Vec::new(),
            config,
        }
    }

    /// Register an observer; returns an id for [`Session::unsubscribe`]
    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent) + 'static) -> usize {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: usize) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    fn notify(&mut self, event: SessionEvent) {
        for (_, listener) in self.subscribers.iter_mut() {
            listener(&event);
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn gv_input(&self) -> &GvInput {
        &self.gv_input
    }

    pub fn adjacency(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    pub fn weights(&self) -> Option<&WeightMatrix> {
        self.weights.as_ref()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn highlight(&self) -> &HighlightModel {
        &self.highlight
    }

    pub fn is_highlight_visible(&self) -> bool {
        self.highlight_visible
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.gv_input.name = name.into();
    }

    pub fn set_size(&mut self, size: impl Into<String>) {
        self.gv_input.size = size.into();
    }

    pub fn set_dividers(&mut self, dividers: impl Into<String>) {
        self.gv_input.dividers = dividers.into();
    }

    /// GV parameters from the current fields, strict or lenient per config
    pub fn gv_params(&self) -> Result<GvParams> {
        if self.config.lenient_gv_input {
            Ok(GvParams::from_input_lenient(
                &self.gv_input,
                self.config.fallback_size,
                self.config.fallback_divider,
            ))
        } else {
            GvParams::from_input(&self.gv_input)
        }
    }

    /// Generate a graph from the GV fields and make it current
    pub fn load_graph_from_gv(&mut self) -> Result<()> {
        let params = self.gv_params()?;
        let matrix = generator::generate_with(&params, self.config.generator)?;
        self.replace_adjacency(matrix);
        Ok(())
    }

    /// Parse matrix text and make it the current adjacency matrix
    pub fn load_adjacency_from_text(&mut self, text: &str) -> Result<()> {
        let matrix = csv::csv_text_to_matrix(text)?;
        self.replace_adjacency(matrix);
        Ok(())
    }

    /// Parse matrix text as weights for the current adjacency matrix
    pub fn load_weights_from_text(&mut self, text: &str) -> Result<()> {
        let weights = csv::csv_text_to_weights(text, &self.adjacency)?;
        self.weights = Some(weights);
        self.invalidate_highlight();
        self.notify(SessionEvent::WeightsChanged);
        Ok(())
    }

    pub fn clear_weights(&mut self) {
        if self.weights.take().is_some() {
            self.invalidate_highlight();
            self.notify(SessionEvent::WeightsChanged);
        }
    }

    fn replace_adjacency(&mut self, matrix: AdjacencyMatrix) {
        log::info!(
            "Loaded graph with {} vertices, {} edges, {} components",
            matrix.size(),
            matrix.edge_count(),
            algorithms::component_count(&matrix)
        );

        let dropped_weights = match self.weights.as_ref().map(|w| w.ensure_matches(&matrix)) {
            Some(Err(err)) => {
                log::warn!("Dropping weight matrix that no longer fits the graph: {}", err);
                true
            }
            _ => false,
        };
        if dropped_weights {
            self.weights = None;
        }

        self.graph = adjacency_matrix_to_graph(&matrix);
        self.adjacency = matrix;
        self.invalidate_highlight();
        self.notify(SessionEvent::GraphChanged);
        if dropped_weights {
            self.notify(SessionEvent::WeightsChanged);
        }
    }

    /// Stop running animations and clear the highlight
    fn invalidate_highlight(&mut self) {
        self.generation += 1;
        self.highlight.reset();
        self.notify(SessionEvent::HighlightChanged);
    }

    /// Compute the whole tree at once and highlight it
    pub fn calculate_mst(&mut self) -> Result<MstEdgeList> {
        let tree = mst::compute_mst(&self.adjacency, self.weights.as_ref())?;

        self.generation += 1;
        self.highlight
            .set_highlighted(highlight_from_mst(&tree, self.adjacency.size()));
        self.notify(SessionEvent::HighlightChanged);
        Ok(tree)
    }

    /// Begin an animated run; earlier runs stop applying steps
    pub fn start_animation(&mut self) -> Result<MstAnimation> {
        let steps = PrimSteps::owned(self.adjacency.clone(), self.weights.clone())?;

        self.invalidate_highlight();
        log::info!("Starting MST animation (run {})", self.generation);

        Ok(MstAnimation {
            generation: self.generation,
            steps,
            applied: 0,
        })
    }

    /// Whether `animation` is still the current run
    pub fn is_current(&self, animation: &MstAnimation) -> bool {
        animation.generation == self.generation
    }

    /// Apply the next step of `animation` to the highlight
    pub fn advance_animation(&mut self, animation: &mut MstAnimation) -> AnimationStatus {
        if !self.is_current(animation) {
            return AnimationStatus::Superseded;
        }

        match animation.steps.next() {
            Some(step) => {
                animation.applied += 1;
                self.highlight
                    .set_highlighted(highlight_from_partial_mst(&step));
                self.notify(SessionEvent::HighlightChanged);
                AnimationStatus::Applied(step)
            }
            None => AnimationStatus::Finished,
        }
    }

    /// Run a whole animation, calling `pause` between steps.
    ///
    /// Returns the final edge list.
    pub fn play_animation(&mut self, mut pause: impl FnMut(Duration)) -> Result<MstEdgeList> {
        let interval = self.config.animation_interval;
        let mut animation = self.start_animation()?;
        let mut last = MstEdgeList::new();

        while let AnimationStatus::Applied(step) = self.advance_animation(&mut animation) {
            last = step;
            pause(interval);
        }
        Ok(last)
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.notify(SessionEvent::ThemeChanged);
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.notify(SessionEvent::ModeChanged);
    }

    pub fn toggle_highlight(&mut self) {
        self.highlight_visible = !self.highlight_visible;
        self.notify(SessionEvent::HighlightVisibilityChanged);
    }

    /// Styled scene for the current state
    pub fn scene(&self) -> RenderScene {
        let highlight = self.highlight_visible.then_some(&self.highlight);
        RenderScene::build(&self.graph, highlight, &self.theme.palette(), self.mode)
    }
}
