use armada::{transport::tcp::TcpLink, LineTransport, LinkError, Message, SerialLink, WireTransport};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{sleep, Duration};

async fn connected_pair() -> anyhow::Result<(TcpLink, TcpLink)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (client, server) = tokio::join!(TcpStream::connect(addr), listener.accept());
    Ok((TcpLink::new(client?), TcpLink::new(server?.0)))
}

async fn next_line<W: LineTransport>(wire: &mut W) -> Option<String> {
    for _ in 0..200 {
        if let Some(line) = wire.poll_line() {
            return Some(line);
        }
        sleep(Duration::from_millis(5)).await;
    }
    None
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lines_cross_tcp_link() -> anyhow::Result<()> {
    let (a, b) = connected_pair().await?;
    let mut a = WireTransport::new(a);
    let mut b = WireTransport::new(b);

    a.send(&Message::Ready { token: 4242 });
    assert_eq!(next_line(&mut b).await.as_deref(), Some("READY 4242"));

    b.send(&Message::Attack { row: 3, col: 9 });
    a.send(&Message::Attack { row: 1, col: 1 });
    assert_eq!(next_line(&mut a).await.as_deref(), Some("A 3 9"));
    assert_eq!(next_line(&mut b).await.as_deref(), Some("A 1 1"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_closed_peer_is_detected() -> anyhow::Result<()> {
    let (a, b) = connected_pair().await?;
    let mut a = WireTransport::new(a);
    drop(b);

    assert_eq!(next_line(&mut a).await, None);
    assert!(a.link().is_closed());
    // Sending after close only logs.
    a.send(&Message::Ready { token: 1 });
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_backpressure_never_splits_lines() -> anyhow::Result<()> {
    let (a, b) = connected_pair().await?;
    let mut a = WireTransport::new(a);
    let mut b = WireTransport::new(b);

    // Nobody reads `b` until the socket pushes back.
    let mut accepted = 0usize;
    let mut refused = false;
    for _ in 0..2_000_000 {
        match a.link_mut().write_all(b"A 1 2\r\n") {
            Ok(()) => accepted += 1,
            Err(LinkError::Busy) => {
                refused = true;
                break;
            }
            Err(e) => panic!("unexpected link error: {}", e),
        }
    }
    if refused {
        assert!(a.link().backlog() > 0);
    }

    let mut received = 0usize;
    let mut quiet = 0;
    while received < accepted {
        let mut progressed = false;
        while let Some(line) = b.poll_line() {
            assert_eq!(line, "A 1 2");
            received += 1;
            progressed = true;
        }
        a.link_mut().flush()?;
        if progressed {
            quiet = 0;
        } else {
            quiet += 1;
            assert!(quiet < 2000, "stalled at {} of {} lines", received, accepted);
            sleep(Duration::from_millis(1)).await;
        }
    }
    assert_eq!(received, accepted);
    assert_eq!(a.link().backlog(), 0);
    Ok(())
}
