//! Upstream side of the pipeline for the CLI: feeds source paths to a mover.
//!
//! Paths come from the command line or from stdin, one per line. The work
//! sender is dropped when input ends, which lets the mover drain and exit.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::shutdown;

/// Submit every non-blank path. Returns how many were handed to the mover.
pub async fn feed_paths<I>(work: mpsc::Sender<String>, paths: I) -> usize
where
    I: IntoIterator<Item = String>,
{
    let mut sent = 0;
    for path in paths {
        if path.trim().is_empty() {
            continue;
        }
        if !submit(&work, path).await {
            break;
        }
        sent += 1;
    }
    sent
}

/// Submit one path per line of `reader` until EOF, interrupt, or the mover goes away.
pub async fn feed_lines<R>(work: mpsc::Sender<String>, reader: R) -> usize
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut sent = 0;
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let path = line.trim_end_matches('\r').to_string();
                if path.trim().is_empty() {
                    continue;
                }
                if !submit(&work, path).await {
                    break;
                }
                sent += 1;
            }
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "failed reading paths from input");
                break;
            }
        }
    }
    sent
}

/// Read paths from the process's stdin.
pub async fn feed_stdin(work: mpsc::Sender<String>) -> usize {
    feed_lines(work, BufReader::new(tokio::io::stdin())).await
}

async fn submit(work: &mpsc::Sender<String>, path: String) -> bool {
    if shutdown::is_requested() {
        debug!("shutdown requested; no further paths submitted");
        return false;
    }
    match work.send(path).await {
        Ok(()) => true,
        Err(e) => {
            debug!(path = %e.0, "mover stopped; path not submitted");
            false
        }
    }
}
