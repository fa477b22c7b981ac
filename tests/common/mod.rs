#![allow(dead_code)]

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Local stand-in for the fiction site.
///
/// - `/fiction/25225` redirects to `/fiction/25225/delve`, which lists two
///   readable chapters (one relative, one absolute link) and one row without
///   a link.
/// - `/fiction/777` redirects to a fiction whose second chapter page has no
///   content container.
/// - `/fiction/888` has no chapters and no redirect.
/// - `/fiction/999` answers only after one second.
/// - everything else is a 404.
pub struct FixtureServer {
    pub base_url: String,
    shutdown: mpsc::Sender<()>,
    handle: Option<thread::JoinHandle<()>>,
}

impl FixtureServer {
    pub fn start() -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start tiny_http server");
        let base_url = format!("http://{}", server.server_addr());
        let (shutdown, shutdown_rx) = mpsc::channel::<()>();

        let base = base_url.clone();
        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let (status, location, body) = route(&base, request.url());
                let mut response = tiny_http::Response::from_string(body)
                    .with_status_code(tiny_http::StatusCode(status));
                if let Some(location) = location {
                    let header =
                        tiny_http::Header::from_bytes(&b"Location"[..], location.as_bytes())
                            .expect("build location header");
                    response = response.with_header(header);
                }
                if status == 200 {
                    let header = tiny_http::Header::from_bytes(
                        &b"Content-Type"[..],
                        &b"text/html; charset=utf-8"[..],
                    )
                    .expect("build content-type header");
                    response = response.with_header(header);
                }

                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            shutdown,
            handle: Some(handle),
        }
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        let _ = self.shutdown.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn chapter_page(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
  <head><title>{title}</title></head>
  <body>
    <div class="chapter-inner chapter-content">
      <p>{body}</p>
      <p>Second <em>paragraph</em>.</p>
    </div>
    <div class="portlet">Comments</div>
  </body>
</html>
"#
    )
}

fn route(base: &str, url: &str) -> (u16, Option<String>, String) {
    let path = url.split('?').next().unwrap_or(url);

    match path {
        "/fiction/25225" => (301, Some(format!("{base}/fiction/25225/delve")), String::new()),
        "/fiction/25225/delve" => (
            200,
            None,
            format!(
                r#"<!doctype html>
<html>
  <body>
    <h1>Delve</h1>
    <table id="chapters">
      <tbody>
        <tr class="chapter-row">
          <td><a href="/fiction/25225/delve/chapter/1/001-woodland"> 001 - Woodland </a></td>
          <td><a href="/fiction/25225/delve/chapter/1/001-woodland">2 years ago</a></td>
        </tr>
        <tr class="chapter-row">
          <td><a>Unreleased</a></td>
        </tr>
        <tr class="chapter-row">
          <td><a href="{base}/fiction/25225/delve/chapter/2/002-ants">002: Ants?</a></td>
        </tr>
      </tbody>
    </table>
  </body>
</html>
"#
            ),
        ),
        "/fiction/25225/delve/chapter/1/001-woodland" => {
            (200, None, chapter_page("Woodland", "Rain fell on the woodland."))
        }
        "/fiction/25225/delve/chapter/2/002-ants" => {
            (200, None, chapter_page("Ants", "The ants marched on."))
        }
        "/fiction/777" => (301, Some("/fiction/777/broken".to_string()), String::new()),
        "/fiction/777/broken" => (
            200,
            None,
            r#"<html><body><table>
  <tr class="chapter-row"><td><a href="/fiction/777/broken/chapter/8/fine">Fine</a></td></tr>
  <tr class="chapter-row"><td><a href="/fiction/777/broken/chapter/9/empty">Empty</a></td></tr>
  <tr class="chapter-row"><td><a href="/fiction/777/broken/chapter/10/never">Never</a></td></tr>
</table></body></html>"#
                .to_string(),
        ),
        "/fiction/777/broken/chapter/8/fine" => (200, None, chapter_page("Fine", "All good.")),
        "/fiction/777/broken/chapter/9/empty" => (
            200,
            None,
            r#"<html><body><div class="chapter-inner">This chapter was removed.</div></body></html>"#
                .to_string(),
        ),
        "/fiction/777/broken/chapter/10/never" => {
            (200, None, chapter_page("Never", "Should not be fetched."))
        }
        "/fiction/888" => (
            200,
            None,
            "<html><body><p>No chapters yet.</p></body></html>".to_string(),
        ),
        "/fiction/999" => {
            thread::sleep(Duration::from_secs(1));
            (200, None, "<html><body>Too late.</body></html>".to_string())
        }
        _ => (404, None, "not found".to_string()),
    }
}
