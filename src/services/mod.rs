/// Business logic services layer
use crate::catalog;
use crate::clients::BodiesClient;
use crate::config::OrbitSettings;
use crate::detail;
use crate::domain::{
    Catalog, CatalogRow, CatalogStats, DashboardCharts, DetailSection, ObjectDetail,
    OrbitalSample, RawBodyRecord, TypeFilter,
};
use crate::errors::{ApiError, ApiResult};
use crate::orbit::{self, OrbitalParams};
use crate::utils::known;
use crate::view::{FetchSlot, LoadState};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// Upper bound for caller-chosen sample counts
pub const MAX_SAMPLE_COUNT: usize = 1000;

/// Filtered dashboard payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: CatalogStats,
    pub results: usize,
    pub rows: Vec<CatalogRow>,
    pub charts: DashboardCharts,
    pub fetched_at: DateTime<Utc>,
}

/// Everything the detail page renders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectView {
    pub object: ObjectDetail,
    pub sections: Vec<DetailSection>,
    pub samples: Vec<OrbitalSample>,
    pub show_temperature: bool,
}

/// Catalog and object-detail service
pub struct ExplorerService {
    client: BodiesClient,
    catalog_limit: usize,
    orbit: OrbitSettings,
    catalog: FetchSlot<(), Catalog>,
    focus: FetchSlot<String, ObjectView>,
}

impl ExplorerService {
    pub fn new(client: BodiesClient, catalog_limit: usize, orbit: OrbitSettings) -> Self {
        Self {
            client,
            catalog_limit,
            orbit,
            catalog: FetchSlot::new(),
            focus: FetchSlot::new(),
        }
    }

    /// Fetch and project the catalog; returns whether the result was published.
    /// The previous catalog stays visible while the fetch runs and after it fails.
    pub async fn refresh_catalog(&self) -> ApiResult<bool> {
        let ticket = self.catalog.begin_refresh(()).await;

        let result = self.client.fetch_bodies().await.map(|records| Catalog {
            rows: catalog::project(&records, self.catalog_limit),
            fetched_at: Utc::now(),
        });

        let applied = self
            .catalog
            .settle_refresh(&ticket, load_state(&result))
            .await;

        let catalog = result?;
        if applied {
            info!(
                "Catalog refreshed: {} rows from {}",
                catalog.rows.len(),
                self.client.base_url()
            );
        } else {
            warn!(
                "Catalog refresh #{} superseded by a newer one",
                ticket.generation()
            );
        }
        Ok(applied)
    }

    /// Current dashboard; `None` while the catalog is still loading
    pub async fn dashboard(
        &self,
        search: &str,
        type_filter: TypeFilter,
    ) -> ApiResult<Option<Dashboard>> {
        match self.catalog.state().await {
            LoadState::Idle | LoadState::Loading => Ok(None),
            LoadState::Ready(catalog) => {
                let rows = catalog::filter(&catalog.rows, search, type_filter);
                Ok(Some(Dashboard {
                    stats: catalog::stats(&catalog.rows),
                    results: rows.len(),
                    rows,
                    charts: catalog::charts(&catalog.rows),
                    fetched_at: catalog.fetched_at,
                }))
            }
            LoadState::Failed(cause) => Err(ApiError::FetchFailure(cause)),
            LoadState::NotFound(what) => Err(ApiError::NotFound(what)),
        }
    }

    /// Fetch one body, focus it and build its detail view
    pub async fn object_detail(
        &self,
        name: &str,
        sample_count: Option<usize>,
    ) -> ApiResult<ObjectView> {
        let settings = match sample_count {
            Some(n) if n > MAX_SAMPLE_COUNT => {
                return Err(ApiError::InvalidInput(format!(
                    "samples must be at most {MAX_SAMPLE_COUNT}"
                )))
            }
            Some(n) => OrbitSettings {
                sample_count: n,
                ..self.orbit
            },
            None => self.orbit,
        };

        let ticket = self.focus.begin(name.to_string()).await;

        let result = self
            .client
            .fetch_body(name)
            .await
            .map(|record| build_object_view(&record, &settings));

        if !self.focus.settle(&ticket, load_state(&result)).await {
            info!("Focus moved away from '{}' before its detail arrived", name);
        }

        result
    }

    /// The most recently requested object and its state
    pub async fn focused(&self) -> (Option<String>, LoadState<ObjectView>) {
        self.focus.snapshot().await
    }
}

fn build_object_view(record: &RawBodyRecord, settings: &OrbitSettings) -> ObjectView {
    let object = detail::describe(record);
    let samples = orbit::generate(
        &OrbitalParams::from(record),
        settings,
        &mut rand::thread_rng(),
    );
    ObjectView {
        sections: detail::sections(&object),
        show_temperature: known(object.avg_temp).is_some(),
        object,
        samples,
    }
}

fn load_state<T: Clone>(result: &ApiResult<T>) -> LoadState<T> {
    match result {
        Ok(value) => LoadState::Ready(value.clone()),
        Err(ApiError::NotFound(what)) => LoadState::NotFound(what.clone()),
        Err(ApiError::FetchFailure(cause)) => LoadState::Failed(cause.clone()),
        Err(other) => LoadState::Failed(other.to_string()),
    }
}
