use tokio::io::BufReader;
use tokio::sync::mpsc;

use file_mover::producer::{feed_lines, feed_paths};

async fn collect(mut rx: mpsc::Receiver<String>) -> Vec<String> {
    let mut out = Vec::new();
    while let Some(p) = rx.recv().await {
        out.push(p);
    }
    out
}

#[tokio::test]
async fn lines_are_submitted_in_order_and_blanks_skipped() {
    let (tx, rx) = mpsc::channel(1);
    let input: &[u8] = b"/in/a.txt\r\n\n   \nb.txt\n/in/c d.txt";
    let reader = tokio::spawn(collect(rx));

    let sent = feed_lines(tx, BufReader::new(input)).await;
    let received = reader.await.unwrap();

    assert_eq!(sent, 3);
    assert_eq!(received, vec!["/in/a.txt", "b.txt", "/in/c d.txt"]);
}

#[tokio::test]
async fn paths_feed_closes_work_channel_at_end() {
    let (tx, rx) = mpsc::channel(1);
    let reader = tokio::spawn(collect(rx));

    let sent = feed_paths(tx, vec!["x".to_string(), String::new(), "y".to_string()]).await;

    // collect() only returns once every sender is gone.
    let received = reader.await.unwrap();
    assert_eq!(sent, 2);
    assert_eq!(received, vec!["x", "y"]);
}

#[tokio::test]
async fn feeding_stops_when_receiver_is_gone() {
    let (tx, rx) = mpsc::channel(1);
    drop(rx);
    let sent = feed_paths(tx, vec!["a".to_string(), "b".to_string()]).await;
    assert_eq!(sent, 0);
}
