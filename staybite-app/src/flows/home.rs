use std::sync::Arc;

use staybite_client::api::CatalogApi;
use staybite_core::catalog::{PgListing, RoomListing};

use crate::error::FlowError;

/// The landing page's two featured catalogs, fetched side by side. A failure
/// in either fails the whole page load; food lives on its own page.
#[derive(Debug, Default)]
pub struct HomeData {
    pub pgs: Vec<PgListing>,
    pub rooms: Vec<RoomListing>,
}

pub struct HomeFlow {
    api: Arc<dyn CatalogApi>,
}

impl HomeFlow {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    pub async fn load(&self) -> Result<HomeData, FlowError> {
        let (pgs, rooms) = tokio::join!(self.api.list_pgs(), self.api.list_rooms());
        Ok(HomeData {
            pgs: pgs?,
            rooms: rooms?,
        })
    }
}
