//! The frozen query-mode state and its file round-trip.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use tg_catalog::Catalog;
use tg_core::RoutingSettings;
use tg_routing::{EdgeActivity, RouteCache};

/// Everything query mode needs, in one serializable value.
///
/// Contains every field that influences a query result: stops with
/// coordinates and bus lists, buses with canonical sequences and
/// statistics, the routing settings, the edge-activity table, and the
/// all-pairs route cache with expanded edge lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuideSnapshot {
    pub catalog: Catalog,
    pub routing: RoutingSettings,
    /// Indexed by `EdgeId`; wait entries first, then rides.
    pub activities: Vec<EdgeActivity>,
    pub cache: RouteCache,
}

impl GuideSnapshot {
    /// Write the snapshot to `path`, replacing any previous artifact.
    ///
    /// The file handle is scoped to this call and closed on every exit
    /// path, including failures.
    pub fn save(&self, path: &Path) -> crate::PersistResult<()> {
        let file = BufWriter::new(File::create(path)?);
        bincode::serialize_into(file, self)?;
        log::info!("catalog serialized to {}", path.display());
        Ok(())
    }

    /// Restore a snapshot previously written by [`save`](Self::save).
    pub fn load(path: &Path) -> crate::PersistResult<GuideSnapshot> {
        let file = BufReader::new(File::open(path)?);
        let snapshot = bincode::deserialize_from(file)?;
        log::info!("catalog deserialized from {}", path.display());
        Ok(snapshot)
    }

    /// The serialized byte image, without touching the filesystem.  Useful
    /// for build-determinism checks.
    pub fn to_bytes(&self) -> crate::PersistResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }
}
