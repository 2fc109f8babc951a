//! Activity sub-client — sales and listings queries.

use crate::client::PulseClient;
use crate::domain::activity::{
    filter, listing_records, sale_records, ActivityRecord, MarketActivityTable,
};
use crate::domain::envelope;
use crate::error::PulseError;
use crate::http::Transport;
use crate::query::{ListingsQuery, SalesQuery};
use crate::shared::CollectionAddress;

use chrono::Utc;

pub struct Activity<'a, T: Transport> {
    pub(crate) client: &'a PulseClient<T>,
}

impl<'a, T: Transport> Activity<'a, T> {
    /// Sales over the last 24 hours, ascending by time.
    pub async fn sales(
        &self,
        collection: &CollectionAddress,
    ) -> Result<Vec<ActivityRecord>, PulseError> {
        let doc = SalesQuery::new(collection.clone()).document();
        let body = self.client.transport.execute(&doc).await?;
        let data = envelope::take_data(body)?;
        Ok(sale_records(data)?)
    }

    /// Active asks, ascending by price. Unfiltered — callers apply the
    /// recency window.
    pub async fn listings(
        &self,
        collection: &CollectionAddress,
    ) -> Result<Vec<ActivityRecord>, PulseError> {
        let doc = ListingsQuery::new(collection.clone()).document();
        let body = self.client.transport.execute(&doc).await?;
        let data = envelope::take_data(body)?;
        Ok(listing_records(data)?)
    }

    /// The combined chart table: sales first, then listings restricted to
    /// the recency window as of now. The two fetches run concurrently and
    /// the table is built only if both succeed.
    pub async fn combined(
        &self,
        collection: &CollectionAddress,
    ) -> Result<MarketActivityTable, PulseError> {
        let (sales, listings) =
            tokio::try_join!(self.sales(collection), self.listings(collection))?;
        let listings = filter::retain_recent(listings, Utc::now(), filter::listing_window());
        Ok(MarketActivityTable::new(collection.clone(), sales, listings))
    }
}
