use std::net::{Shutdown, TcpStream};

use anyhow::{Context, anyhow, bail};
use ledgerbench_protocol::codec::{read_message, write_message};
use ledgerbench_protocol::{ClientRequest, ClientResponse, MAX_BATCH_SIZE, Transfer, TransferResult};
use log::{debug, info, warn};

/// Blocking client for the accounting service.
///
/// One TCP connection, one request in flight at a time. The connection is
/// closed when the client is dropped, on every exit path.
#[derive(Debug)]
pub struct Client {
    stream: TcpStream,
    cluster_id: u128,
}

impl Client {
    /// Connect to the cluster, trying each address in order and keeping the
    /// first that both accepts the TCP connection and acknowledges the
    /// handshake. No retry: if every address fails, the error of the last
    /// attempt is returned.
    pub fn connect(
        cluster_id: u128,
        addresses: &[&str],
        concurrency_max: u32,
    ) -> anyhow::Result<Self> {
        if addresses.is_empty() {
            bail!("no cluster addresses given");
        }

        let mut last_err = None;
        for &addr in addresses {
            match Self::connect_one(cluster_id, addr, concurrency_max) {
                Ok(client) => {
                    info!("connected to cluster {cluster_id} at {addr}");
                    return Ok(client);
                }
                Err(err) => {
                    warn!("address {addr} unavailable: {err:#}");
                    last_err = Some(err);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| anyhow!("no cluster addresses given")))
    }

    fn connect_one(cluster_id: u128, addr: &str, concurrency_max: u32) -> anyhow::Result<Self> {
        let mut stream = TcpStream::connect(addr)
            .with_context(|| format!("failed to connect to accounting service at {addr}"))?;

        write_message(
            &mut stream,
            &ClientRequest::Hello {
                cluster_id,
                concurrency_max,
            },
        )
        .context("failed to send handshake")?;

        match read_message(&mut stream).context("failed to read handshake response")? {
            ClientResponse::HelloAck => Ok(Self { stream, cluster_id }),
            ClientResponse::Error(msg) => Err(anyhow!("service rejected handshake: {msg}")),
            other => Err(anyhow!("unexpected handshake response: {other:?}")),
        }
    }

    pub fn cluster_id(&self) -> u128 {
        self.cluster_id
    }

    /// Submit one batch and block until the service answers. The service
    /// returns one result entry per submitted transfer, accepted or not.
    pub fn create_transfers(&mut self, batch: &[Transfer]) -> anyhow::Result<Vec<TransferResult>> {
        if batch.len() > MAX_BATCH_SIZE {
            bail!(
                "batch of {} transfers exceeds the service limit of {MAX_BATCH_SIZE}",
                batch.len()
            );
        }

        debug!("submitting batch of {} transfers", batch.len());

        write_message(
            &mut self.stream,
            &ClientRequest::CreateTransfers(batch.to_vec()),
        )
        .context("failed to send transfer batch")?;

        match read_message(&mut self.stream).context("failed to read transfer results")? {
            ClientResponse::TransferResults(results) => Ok(results),
            ClientResponse::Error(msg) => Err(anyhow!("service error: {msg}")),
            other => Err(anyhow!("unexpected response to transfer batch: {other:?}")),
        }
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        // Best effort; the benchmark may be tearing down after a transport
        // error, in which case the socket is already gone.
        let _ = write_message(&mut self.stream, &ClientRequest::Close);
        let _ = self.stream.shutdown(Shutdown::Both);
        debug!("connection to cluster {} closed", self.cluster_id);
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
