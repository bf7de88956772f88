// src/services/tile_fetcher.rs
// TileFetcher is a service for pulling map tiles from the disk cache or over HTTP
// and handing the decoded images back to the frame loop.
// It gets its own thread to avoid blocking the main thread.

use nannou::image::{self, DynamicImage};
use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::models::TileId;
use crate::services::TileSource;

const HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// Cap on a fetched body; anything larger is not a map tile.
const MAX_TILE_BYTES: u64 = 4 * 1024 * 1024;

/// A tile image ready to be turned into a texture.
pub struct FetchedTile {
    pub id: TileId,
    pub image: DynamicImage,
}

pub struct TileFetcher {
    request_sender: Sender<TileId>,
    result_receiver: Receiver<FetchedTile>,
    in_flight: HashSet<TileId>,
    shutdown_requested: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl TileFetcher {
    pub fn new(source: TileSource, cache_dir: PathBuf) -> Self {
        fs::create_dir_all(&cache_dir).expect("Failed to create tile cache directory");

        let (request_sender, request_receiver) = channel();
        let (result_sender, result_receiver) = channel();
        let shutdown_requested = Arc::new(AtomicBool::new(false));

        let shutdown = shutdown_requested.clone();
        let thread_handle = thread::spawn(move || {
            Self::worker_thread_function(request_receiver, result_sender, source, cache_dir, shutdown);
        });

        Self {
            request_sender,
            result_receiver,
            in_flight: HashSet::new(),
            shutdown_requested,
            thread_handle: Some(thread_handle),
        }
    }

    /// Queue a tile for loading. A tile already handed to the worker is
    /// not queued again; one that failed stays marked so it is never
    /// re-requested during this run.
    pub fn request(&mut self, id: TileId) {
        if self.in_flight.contains(&id) {
            return;
        }
        if self.request_sender.send(id).is_ok() {
            self.in_flight.insert(id);
        }
    }

    /// Tiles the worker finished since the last poll.
    pub fn poll_ready(&mut self) -> Vec<FetchedTile> {
        let ready: Vec<FetchedTile> = self.result_receiver.try_iter().collect();
        for tile in &ready {
            self.in_flight.remove(&tile.id);
        }
        ready
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Stops the worker and waits for it to exit. Pending requests are
    /// abandoned. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            if handle.join().is_err() {
                eprintln!("Tile worker thread panicked during shutdown");
            }
        }
    }

    fn worker_thread_function(
        receiver: Receiver<TileId>,
        sender: Sender<FetchedTile>,
        source: TileSource,
        cache_dir: PathBuf,
        shutdown_requested: Arc<AtomicBool>,
    ) {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(HTTP_TIMEOUT)
            .timeout(HTTP_TIMEOUT)
            .user_agent(concat!("routevis/", env!("CARGO_PKG_VERSION")))
            .build();
        let mut rng = rand::thread_rng();

        loop {
            if shutdown_requested.load(Ordering::SeqCst) {
                break;
            }

            match receiver.recv_timeout(Duration::from_millis(50)) {
                Ok(id) => {
                    let cache_path = source.cache_path(&cache_dir, id);
                    let bytes = match fs::read(&cache_path) {
                        Ok(bytes) => bytes,
                        Err(_) => {
                            let url = source.url_for(id, &mut rng);
                            match fetch_tile_bytes(&agent, &url) {
                                Ok(bytes) => {
                                    store_in_cache(&cache_path, &bytes);
                                    bytes
                                }
                                Err(e) => {
                                    eprintln!(
                                        "Failed to fetch tile {}/{}/{}: {}",
                                        id.z, id.x, id.y, e
                                    );
                                    continue;
                                }
                            }
                        }
                    };

                    match image::load_from_memory(&bytes) {
                        Ok(img) => {
                            if sender.send(FetchedTile { id, image: img }).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            eprintln!("Failed to decode tile {}/{}/{}: {}", id.z, id.x, id.y, e)
                        }
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }
}

impl Drop for TileFetcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn fetch_tile_bytes(agent: &ureq::Agent, url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let response = agent.get(url).call()?;
    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_TILE_BYTES)
        .read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn store_in_cache(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Failed to create tile cache dir {}: {}", parent.display(), e);
            return;
        }
    }
    if let Err(e) = fs::write(path, bytes) {
        eprintln!("Failed to write tile cache file {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("routevis_{}_{}", name, std::process::id()))
    }

    fn source() -> TileSource {
        // Never contacted in these tests; every request hits the cache.
        TileSource::new("https://tiles.invalid/{z}/{x}/{y}.png", &[]).unwrap()
    }

    fn seed_cache(cache_dir: &Path, tile: TileId) {
        let path = source().cache_path(cache_dir, tile);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        DynamicImage::new_rgba8(8, 8).save(&path).unwrap();
    }

    fn wait_for_tiles(fetcher: &mut TileFetcher, count: usize) -> Vec<FetchedTile> {
        let mut got = Vec::new();
        for _ in 0..200 {
            got.extend(fetcher.poll_ready());
            if got.len() >= count {
                return got;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("worker delivered {} of {} tiles", got.len(), count);
    }

    #[test]
    fn test_serves_tiles_from_the_disk_cache() {
        let cache_dir = temp_dir("cache_hit");
        let tile = TileId::new(3, 4, 5);
        seed_cache(&cache_dir, tile);

        let mut fetcher = TileFetcher::new(source(), cache_dir.clone());
        fetcher.request(tile);

        let got = wait_for_tiles(&mut fetcher, 1);
        assert_eq!(got[0].id, tile);
        assert_eq!(got[0].image.to_rgba8().width(), 8);
        assert_eq!(fetcher.in_flight_count(), 0);

        fetcher.shutdown();
        fs::remove_dir_all(&cache_dir).ok();
    }

    #[test]
    fn test_duplicate_requests_are_queued_once() {
        let cache_dir = temp_dir("dedup");
        let tile = TileId::new(6, 1, 2);
        seed_cache(&cache_dir, tile);

        let mut fetcher = TileFetcher::new(source(), cache_dir.clone());
        fetcher.request(tile);
        fetcher.request(tile);
        assert_eq!(fetcher.in_flight_count(), 1);

        let got = wait_for_tiles(&mut fetcher, 1);
        assert_eq!(got.len(), 1);
        thread::sleep(Duration::from_millis(100));
        assert!(fetcher.poll_ready().is_empty());

        fetcher.shutdown();
        fs::remove_dir_all(&cache_dir).ok();
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let cache_dir = temp_dir("shutdown");
        let mut fetcher = TileFetcher::new(source(), cache_dir.clone());
        fetcher.shutdown();
        fetcher.shutdown();
        drop(fetcher);
        fs::remove_dir_all(&cache_dir).ok();
    }
}
