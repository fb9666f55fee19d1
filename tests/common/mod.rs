//! Shared utilities for integration testing.

use std::io::Write;
use std::net::SocketAddr;
use std::time::Duration;

use oui_registry::registry;
use oui_registry::{HttpServer, ServiceConfig, Shutdown};
use tempfile::NamedTempFile;

/// Registry fixture: three valid records, one with a non-hex prefix, and a
/// duplicate of the first prefix.
pub const SAMPLE_REGISTRY: &str = "\
AC-DE-48   (hex)\t\tPrivate
ACDE48     (base 16)\t\tPrivate

00-A0-C9   (hex)\t\tIntel Corporation
00A0C9     (base 16)\t\tIntel Corporation - HF1-06

GG-GG-GG   (hex)\t\tBogus Vendor
GGGGGG     (base 16)\t\tBogus Vendor

28-6F-B9   (hex)\t\tNokia Shanghai Bell Co. Ltd.
286FB9     (base 16)\t\tNokia Shanghai Bell Co. Ltd.

AC-DE-48   (hex)\t\tDuplicate Private
ACDE48     (base 16)\t\tDuplicate Private
";

/// Write the registry text to a temp file and start the service on `addr`.
///
/// Returns the shutdown coordinator and the fixture file guard; dropping the
/// guard deletes the file, so keep it alive for the duration of the test.
#[allow(dead_code)]
pub async fn start_service(
    addr: SocketAddr,
    registry_text: &str,
    mut config: ServiceConfig,
) -> (Shutdown, NamedTempFile) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(registry_text.as_bytes()).unwrap();

    config.listener.bind_address = addr.to_string();
    config.registry.source_path = file.path().display().to_string();

    let loaded = registry::load_from_file(file.path()).unwrap();
    let server = HttpServer::new(config, loaded);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the server a moment to start accepting
    tokio::time::sleep(Duration::from_millis(100)).await;

    (shutdown, file)
}
