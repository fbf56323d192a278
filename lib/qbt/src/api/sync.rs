//! Sync endpoints (`sync/*`).

use qbt_core::{HttpClient, InfoHash, Params, Result};

use crate::client::Client;
use crate::model::{SyncMainData, SyncTorrentPeers};

/// API methods under `sync`.
///
/// Responses are differenced: pass the `rid` of the previous response to
/// receive a delta, or `None` (or `0`) for a full snapshot. The decoded
/// payloads carry both shapes; merging the running state is the caller's
/// job.
#[derive(Debug)]
pub struct SyncApi<'a, T: HttpClient> {
    client: &'a Client<T>,
}

impl<'a, T: HttpClient> SyncApi<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Main sync data: torrents, categories, tags, and server state.
    pub async fn maindata(&self, rid: Option<i64>) -> Result<SyncMainData> {
        let mut params = Params::new();
        params.optional_int("rid", rid);

        self.client.get_json("sync/maindata", Some(params)).await
    }

    /// Peers of one torrent.
    pub async fn torrent_peers(
        &self,
        hash: &InfoHash,
        rid: Option<i64>,
    ) -> Result<SyncTorrentPeers> {
        let mut params = Params::with_hash(hash);
        params.optional_int("rid", rid);

        self.client.get_json("sync/torrentPeers", Some(params)).await
    }
}
