use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::route::{RouteDescriptor, RoutePath, Routes, TemplateId};

/// The file the route manifest is stored under.
pub const MANIFEST_FILE_NAME: &str = "routes.json";

/// Somewhere the renderer can pick compiled routes up from.
pub trait Store {
    type Error: std::error::Error;

    /// Stores the page data (path, template and context) for a single route.
    fn store_page_data(&self, route: &RouteDescriptor, json: String) -> Result<(), Self::Error>;

    /// Stores the manifest listing every route and its template.
    fn store_manifest(&self, json: String) -> Result<(), Self::Error>;
}

#[derive(Error, Debug)]
pub enum StoreRoutesError {
    #[error("failed to serialize route data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Serialize)]
struct ManifestEntry<'a> {
    path: &'a RoutePath,
    template: TemplateId,
}

/// Writes the page data for every route, followed by the manifest.
pub fn store_routes(routes: &Routes, storage: &impl Store) -> Result<(), StoreRoutesError> {
    for route in routes {
        let json = serde_json::to_string_pretty(route)?;
        storage
            .store_page_data(route, json)
            .map_err(|err| StoreRoutesError::Storage(err.to_string()))?;
    }

    let manifest = routes
        .iter()
        .map(|route| ManifestEntry {
            path: &route.path,
            template: route.template,
        })
        .collect::<Vec<_>>();

    storage
        .store_manifest(serde_json::to_string_pretty(&manifest)?)
        .map_err(|err| StoreRoutesError::Storage(err.to_string()))?;

    info!(routes = routes.len(), "stored routes");

    Ok(())
}

/// Stores page data under `{output_path}/page-data/{path}/page-data.json`.
///
/// The root's page data lives directly at `{output_path}/page-data/page-data.json`,
/// so every route path maps to its own file.
pub struct DiskStorage {
    output_path: PathBuf,
}

impl DiskStorage {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn page_data_dir(&self, path: &RoutePath) -> PathBuf {
        path.segments()
            .fold(self.output_path.join("page-data"), |dir, segment| dir.join(segment))
    }
}

impl Store for DiskStorage {
    type Error = io::Error;

    fn store_page_data(&self, route: &RouteDescriptor, json: String) -> Result<(), Self::Error> {
        let output_dir = self.page_data_dir(&route.path);
        fs::create_dir_all(&output_dir)?;

        let output_path = output_dir.join("page-data.json");
        let mut output_file = File::create(&output_path)?;
        output_file.write_all(json.as_bytes())?;

        debug!(path = %output_path.display(), "wrote page data");

        Ok(())
    }

    fn store_manifest(&self, json: String) -> Result<(), Self::Error> {
        fs::create_dir_all(&self.output_path)?;
        fs::write(self.output_path.join(MANIFEST_FILE_NAME), json)
    }
}

/// Keeps stored routes in memory, keyed by route path. The manifest is kept
/// under [`MANIFEST_FILE_NAME`].
pub struct InMemoryStorage {
    storage: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new(storage: Arc<RwLock<HashMap<String, String>>>) -> Self {
        Self { storage }
    }
}

#[derive(Error, Debug)]
pub enum InMemoryStorageError {
    #[error("poisoned")]
    Poisoned,
}

impl Store for InMemoryStorage {
    type Error = InMemoryStorageError;

    fn store_page_data(&self, route: &RouteDescriptor, json: String) -> Result<(), Self::Error> {
        self.storage
            .write()
            .map_err(|_| InMemoryStorageError::Poisoned)?
            .insert(route.path.to_string(), json);

        Ok(())
    }

    fn store_manifest(&self, json: String) -> Result<(), Self::Error> {
        self.storage
            .write()
            .map_err(|_| InMemoryStorageError::Poisoned)?
            .insert(MANIFEST_FILE_NAME.to_string(), json);

        Ok(())
    }
}
