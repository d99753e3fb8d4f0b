use std::{
    net::{TcpStream, ToSocketAddrs},
    thread,
    time::Duration,
};

use url::Url;

/// One connect attempt per resolved address. No retry.
pub(crate) fn frontend_reachable(url: &Url, timeout_ms: u64) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let port = url.port_or_known_default().unwrap_or(80);
    let timeout = Duration::from_millis(timeout_ms.max(50));

    let addrs = match (host, port).to_socket_addrs() {
        Ok(addrs) => addrs.collect::<Vec<_>>(),
        Err(_) => return false,
    };
    addrs
        .iter()
        .any(|address| TcpStream::connect_timeout(address, timeout).is_ok())
}

pub(crate) fn spawn_frontend_probe<F>(url: Url, timeout_ms: u64, log: F)
where
    F: Fn(&str) + Send + 'static,
{
    let spawn_result = thread::Builder::new()
        .name("frontend-probe".to_string())
        .spawn(move || {
            if frontend_reachable(&url, timeout_ms) {
                log(&format!("frontend reachable at {url}"));
            } else {
                log(&format!(
                    "frontend not reachable at {url}; the window will stay blank until a server listens there"
                ));
            }
        });
    if let Err(error) = spawn_result {
        eprintln!("failed to spawn frontend probe thread: {error}");
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use super::*;

    #[test]
    fn frontend_reachable_detects_listening_server() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
        let port = listener.local_addr().expect("read local addr").port();
        let url = Url::parse(&format!("http://127.0.0.1:{port}")).expect("parse url");

        assert!(frontend_reachable(&url, 500));
    }

    #[test]
    fn frontend_reachable_reports_closed_port() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
        let port = listener.local_addr().expect("read local addr").port();
        drop(listener);
        let url = Url::parse(&format!("http://127.0.0.1:{port}")).expect("parse url");

        assert!(!frontend_reachable(&url, 200));
    }

    #[test]
    fn frontend_reachable_rejects_url_without_host() {
        let url = Url::parse("data:text/plain,hello").expect("parse url");
        assert!(!frontend_reachable(&url, 200));
    }
}
