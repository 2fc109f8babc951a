//! Volume sub-client — aggregate sales volume queries.

use crate::client::PulseClient;
use crate::domain::envelope;
use crate::domain::volume::{volume_records, VolumeRecord};
use crate::error::PulseError;
use crate::http::Transport;
use crate::query::VolumeQuery;
use crate::shared::CollectionAddress;

pub struct Volume<'a, T: Transport> {
    pub(crate) client: &'a PulseClient<T>,
}

impl<'a, T: Transport> Volume<'a, T> {
    /// Day and week sales volume for a collection, from one aggregate
    /// query.
    pub async fn summary(
        &self,
        collection: &CollectionAddress,
    ) -> Result<Vec<VolumeRecord>, PulseError> {
        let doc = VolumeQuery::new(collection.clone()).document();
        let body = self.client.transport.execute(&doc).await?;
        let data = envelope::take_data(body)?;
        Ok(volume_records(data)?)
    }
}
