use std::future::Future;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

/// How the fake endpoint answers every request.
#[derive(Debug, Clone, Copy)]
pub enum Responder {
    /// `200 OK` with the given body.
    Body(&'static [u8]),
    /// Waits before answering with the given body.
    Slow {
        delay: Duration,
        body: &'static [u8],
    },
    /// Declares `declared` bytes but sends only `sent` before closing.
    Truncated {
        declared: usize,
        sent: &'static [u8],
    },
}

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    hits: Arc<AtomicUsize>,
}

impl ServerHandle {
    /// Requests fully read by the server so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Acquire)
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight HTTP server for tests.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server(responder: Responder) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let hits = Arc::clone(&server_hits);
                    thread::spawn(move || handle_client(stream, responder, &hits));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
            hits,
        },
    ))
}

fn handle_client(mut stream: TcpStream, responder: Responder, hits: &AtomicUsize) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let mut buffer = [0u8; 1024];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    hits.fetch_add(1, Ordering::AcqRel);

    let (declared, body) = match responder {
        Responder::Body(body) => (body.len(), body),
        Responder::Slow { delay, body } => {
            thread::sleep(delay);
            (body.len(), body)
        }
        Responder::Truncated { declared, sent } => (declared, sent),
    };
    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        declared
    );
    if stream.write_all(head.as_bytes()).is_err() {
        return;
    }
    if stream.write_all(body).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// A loopback URL whose port was just released, so connects are refused.
///
/// # Errors
///
/// Returns an error if a scratch listener cannot be bound.
pub fn refused_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind scratch listener failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("scratch addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        match self.0.lock() {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
        }
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut bytes = self
            .0
            .lock()
            .map_err(|_poisoned| std::io::Error::other("log buffer poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Runs `future` on a current-thread runtime with `info` logs captured.
///
/// Every spawned task is polled on the calling thread, so the scoped
/// subscriber sees the fetch tasks' events as well as the driver's.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub fn run_with_captured_logs<F, T>(future: F) -> Result<(T, String), String>
where
    F: Future<Output = T>,
{
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;

    let output = tracing::subscriber::with_default(subscriber, || runtime.block_on(future));
    Ok((output, buffer.contents()))
}
