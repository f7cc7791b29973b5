//! End-to-end discovery runs.
//!
//! A run moves through [`Phase`]s:
//!
//! ```text
//! Idle -> FetchingSchema -> Classifying -> BuildingModels -> BuildingCollections -> Ready
//!                        \-> Failed
//! ```
//!
//! The fetch is the only await point. Once the schema is in hand,
//! [`discover`] classifies, names, and registers everything without
//! yielding. The [`Orchestrator`] owns the resulting [`Registries`] and hands
//! out shared snapshots of them.

use std::sync::Arc;

use strum::Display;
use tokio::sync::{Mutex, RwLock, watch};

use crate::class::Registries;
use crate::classify::RouteClassifier;
use crate::error::DiscoveryError;
use crate::schema::RawSchema;
use crate::settings::ApiSettings;
use crate::source::SchemaSource;

/// Stage of a discovery run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Phase {
    /// No run has started.
    Idle,
    /// Waiting on the schema source.
    FetchingSchema,
    /// Splitting routes into models and collections.
    Classifying,
    /// Registering model classes.
    BuildingModels,
    /// Registering collection classes and linking them to models.
    BuildingCollections,
    /// The latest run completed.
    Ready,
    /// The latest run could not fetch its schema.
    Failed,
}

impl Phase {
    /// Returns `true` for [`Phase::Ready`] and [`Phase::Failed`].
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }
}

/// Turns a schema into registries.
///
/// Every model class is registered before the first collection class looks
/// up its model. `on_phase` is called on entry to each phase.
///
/// ## Examples
///
/// ```
/// use wp_api_lib::{ApiSettings, RawSchema, RouteClassifier, RouteDescriptor, discover};
///
/// let settings = ApiSettings::default();
/// let mut schema = RawSchema::default();
/// schema.routes.insert("/wp/v2/comments".to_string(), RouteDescriptor::with_methods(["GET"]));
///
/// let registries = discover(&RouteClassifier::new(&settings), &settings.prefix(), schema, |_| {});
/// let comments = registries.collection("Comments").unwrap();
/// assert_eq!(comments.url().as_static(), Some("http://localhost/wp-json/wp/v2/comments"));
/// ```
pub fn discover(
    classifier: &RouteClassifier,
    prefix: &str,
    schema: RawSchema,
    mut on_phase: impl FnMut(Phase),
) -> Registries {
    on_phase(Phase::Classifying);
    let routes = classifier.classify(schema);
    tracing::info!(
        models = routes.models.len(),
        collections = routes.collections.len(),
        "routes classified"
    );

    let mut registries = Registries::default();

    on_phase(Phase::BuildingModels);
    registries.register_models(routes.models, prefix);

    on_phase(Phase::BuildingCollections);
    registries.register_collections(routes.collections, prefix);

    registries
}

/// Runs discovery against a [`SchemaSource`] and keeps the latest result.
///
/// Runs on one orchestrator are serialized: a second `init` waits for the
/// first to finish, then performs its own fetch. Registries from a
/// successful run replace the previous ones wholesale; a failed run leaves
/// them untouched.
///
/// ## Examples
///
/// ```
/// use wp_api_lib::{ApiSettings, Orchestrator, Phase, StaticSchemaSource};
///
/// # async fn example() {
/// let source = StaticSchemaSource::from_json(
///     r#"{"routes": {"/wp/v2/posts": {}, "/wp/v2/posts/(?P<id>[\\d]+)": {}}}"#,
/// ).unwrap();
/// let orchestrator = Orchestrator::new(ApiSettings::default(), source);
///
/// let registries = orchestrator.init().await;
/// assert_eq!(orchestrator.phase(), Phase::Ready);
/// assert!(registries.collection("Posts").unwrap().model().is_some());
/// # }
/// ```
pub struct Orchestrator<S> {
    settings: ApiSettings,
    source: S,
    classifier: RouteClassifier,
    current: RwLock<Arc<Registries>>,
    phase: watch::Sender<Phase>,
    run_lock: Mutex<()>,
}

impl<S: SchemaSource> Orchestrator<S> {
    /// Creates an idle orchestrator with empty registries.
    pub fn new(settings: ApiSettings, source: S) -> Self {
        let classifier = RouteClassifier::new(&settings);
        Self::with_classifier(settings, source, classifier)
    }

    /// Creates an idle orchestrator with a custom classifier.
    pub fn with_classifier(settings: ApiSettings, source: S, classifier: RouteClassifier) -> Self {
        let (phase, _) = watch::channel(Phase::Idle);
        Self {
            settings,
            source,
            classifier,
            current: RwLock::new(Arc::new(Registries::default())),
            phase,
            run_lock: Mutex::new(()),
        }
    }

    /// Returns the settings.
    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    /// Subscribes to phase changes.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }

    /// Returns the registries of the latest successful run.
    pub async fn registries(&self) -> Arc<Registries> {
        Arc::clone(&*self.current.read().await)
    }

    /// Runs discovery, absorbing any failure.
    ///
    /// A fetch failure is logged and the previous registries are returned.
    pub async fn init(&self) -> Arc<Registries> {
        match self.try_init().await {
            Ok(registries) => registries,
            Err(err) => {
                tracing::error!(error = %err, "schema load error");
                self.registries().await
            }
        }
    }

    /// Runs discovery and returns the failure instead of absorbing it.
    ///
    /// ## Errors
    ///
    /// Returns [`DiscoveryError::Fetch`] if the schema source fails. The phase
    /// is then [`Phase::Failed`] and the previous registries are kept.
    pub async fn try_init(&self) -> Result<Arc<Registries>, DiscoveryError> {
        let _run = self.run_lock.lock().await;
        let prefix = self.settings.prefix();

        tracing::info!(prefix = %prefix, "loading schema");
        self.set_phase(Phase::FetchingSchema);

        let schema = match self.source.fetch().await {
            Ok(schema) => schema,
            Err(err) => {
                self.set_phase(Phase::Failed);
                return Err(err.into());
            }
        };
        tracing::info!(routes = schema.len(), "schema loaded, processing");

        let registries = Arc::new(discover(&self.classifier, &prefix, schema, |phase| {
            self.set_phase(phase);
        }));

        *self.current.write().await = Arc::clone(&registries);
        self.set_phase(Phase::Ready);
        tracing::info!(
            models = registries.models().len(),
            collections = registries.collections().len(),
            "discovery complete"
        );

        Ok(registries)
    }

    fn set_phase(&self, phase: Phase) {
        tracing::trace!(%phase, "phase transition");
        self.phase.send_replace(phase);
    }
}

impl<S> std::fmt::Debug for Orchestrator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("settings", &self.settings)
            .field("phase", &*self.phase.borrow())
            .finish_non_exhaustive()
    }
}
