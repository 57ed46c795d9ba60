//! Journey types and the journey read view.
//!
//! A journey is a fixed template of transport segments. The annotations
//! shown with it are never stored on the template; [`JourneyView`] attaches
//! the store's current contents each time a journey is read.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;
use crate::error::{Error, Result};
use crate::storage::AnnotationStore;

/// Identifier of the one journey the service knows about.
pub const SAMPLE_JOURNEY_ID: &str = "journey-001";

/// How a segment is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    /// On foot.
    Walk,
    /// Bus.
    Bus,
    /// Heavy rail.
    Train,
    /// Tram or light rail.
    Tram,
    /// Underground.
    Metro,
}

impl TransportMode {
    /// Pictogram used by the terminal rendering.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Walk => "🚶",
            Self::Bus => "🚌",
            Self::Train => "🚆",
            Self::Tram => "🚊",
            Self::Metro => "🚇",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Walk => write!(f, "Walk"),
            Self::Bus => write!(f, "Bus"),
            Self::Train => write!(f, "Train"),
            Self::Tram => write!(f, "Tram"),
            Self::Metro => write!(f, "Metro"),
        }
    }
}

/// Planning state of a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JourneyStatus {
    /// Not yet started.
    Planning,
    /// In progress.
    Active,
    /// Finished.
    Completed,
}

impl std::fmt::Display for JourneyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planning => write!(f, "Planning"),
            Self::Active => write!(f, "Active"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Noise, light and crowd intensity on a 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensoryLevels {
    /// Noise intensity.
    pub noise: u8,
    /// Light intensity.
    pub light: u8,
    /// Crowd density.
    pub crowd: u8,
}

impl SensoryLevels {
    /// Highest level on the scale.
    pub const MAX: u8 = 10;

    /// Create a set of levels.
    #[must_use]
    pub const fn new(noise: u8, light: u8, crowd: u8) -> Self {
        Self {
            noise,
            light,
            crowd,
        }
    }

    /// Human-readable label for a single level.
    #[must_use]
    pub fn describe(level: u8) -> &'static str {
        match level {
            0..=2 => "Very Low",
            3..=4 => "Low",
            5..=6 => "Moderate",
            7..=8 => "High",
            _ => "Very High",
        }
    }
}

/// One leg of a journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Segment identifier.
    pub id: String,
    /// How this leg is travelled.
    pub transport_mode: TransportMode,
    /// Where the leg starts.
    pub from_location: String,
    /// Where the leg ends.
    pub to_location: String,
    /// Expected duration.
    pub duration_minutes: u32,
    /// Sensory warning for this leg, `null` when there is none.
    pub sensory_warning: Option<String>,
    /// Expected sensory intensity.
    pub sensory_levels: SensoryLevels,
}

impl Segment {
    fn new(
        id: &str,
        transport_mode: TransportMode,
        from: &str,
        to: &str,
        duration_minutes: u32,
        sensory_warning: Option<&str>,
        sensory_levels: SensoryLevels,
    ) -> Self {
        Self {
            id: id.to_string(),
            transport_mode,
            from_location: from.to_string(),
            to_location: to.to_string(),
            duration_minutes,
            sensory_warning: sensory_warning.map(str::to_string),
            sensory_levels,
        }
    }
}

/// The immutable part of a journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    /// Journey identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Planning state.
    pub status: JourneyStatus,
    /// Estimated total duration.
    pub estimated_minutes: u32,
    /// Ordered legs.
    pub segments: Vec<Segment>,
}

impl Journey {
    /// The built-in sample commute.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            id: SAMPLE_JOURNEY_ID.to_string(),
            title: "Morning Commute to Central Library".to_string(),
            status: JourneyStatus::Planning,
            estimated_minutes: 35,
            segments: vec![
                Segment::new(
                    "seg-1",
                    TransportMode::Walk,
                    "Home",
                    "Oak Street Bus Stop",
                    5,
                    None,
                    SensoryLevels::new(3, 5, 2),
                ),
                Segment::new(
                    "seg-2",
                    TransportMode::Bus,
                    "Oak Street Bus Stop",
                    "City Center Station",
                    15,
                    Some("Rush hour: expect moderate crowding"),
                    SensoryLevels::new(6, 4, 7),
                ),
                Segment::new(
                    "seg-3",
                    TransportMode::Walk,
                    "City Center Station",
                    "Central Library",
                    8,
                    Some("Construction noise on Main Street"),
                    SensoryLevels::new(8, 6, 5),
                ),
            ],
        }
    }
}

/// A journey as returned to clients: the template plus annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyRecord {
    /// The template fields.
    #[serde(flatten)]
    pub journey: Journey,
    /// Annotations attached at read time.
    pub sensory_annotations: Vec<Annotation>,
}

/// Read-only assembly of journey responses.
#[derive(Debug, Clone)]
pub struct JourneyView {
    template: Arc<Journey>,
    store: Arc<AnnotationStore>,
}

impl JourneyView {
    /// Create a view over `template` that reads annotations from `store`.
    #[must_use]
    pub fn new(template: Journey, store: Arc<AnnotationStore>) -> Self {
        Self {
            template: Arc::new(template),
            store,
        }
    }

    /// The static template this view serves.
    #[must_use]
    pub fn template(&self) -> &Journey {
        &self.template
    }

    /// Look up a journey by id.
    ///
    /// The returned annotation list is the whole store, unfiltered, as of
    /// this call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JourneyNotFound`] for any id other than the
    /// template's.
    pub fn get_journey(&self, id: &str) -> Result<JourneyRecord> {
        if id != self.template.id {
            return Err(Error::journey_not_found(id));
        }

        Ok(JourneyRecord {
            journey: Journey::clone(&self.template),
            sensory_annotations: self.store.list_all(),
        })
    }
}
