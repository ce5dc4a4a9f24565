use carbonwire::{Client, ClientError, ConnectTimeout, GraphiteClient, Metric};
use chrono::DateTime;
use std::io::Read;
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

#[test]
fn test_batch_reaches_tcp_server() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut received = String::new();
        stream.read_to_string(&mut received).unwrap();
        received
    });

    let ts = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let mut client = Client::new(address)
        .with_prefix("foo.bar")
        .with_timeout(ConnectTimeout::Bounded(Duration::from_secs(2)));
    client.connect().unwrap();
    client
        .send_all(&[Metric::at("baz", 42, ts), Metric::at("qux", 1.5, ts)])
        .unwrap();
    client.disconnect().unwrap();

    let received = server.join().unwrap();
    assert_eq!(
        received,
        "foo.bar.baz 42 1700000000\nfoo.bar.qux 1.5 1700000000\n"
    );
}

#[test]
fn test_connect_to_closed_port_fails() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();
    drop(listener);

    let mut client = Client::new(address.clone());
    match client.connect() {
        Err(ClientError::Dial { address: a, .. }) => assert_eq!(a, address),
        other => panic!("expected dial error, got {:?}", other),
    }
    assert!(!client.is_connected());
}
