//! Test fixtures: runs the real server binary on a fixed port.

use std::{
    net::TcpStream,
    path::PathBuf,
    process::{Child, Command, Stdio},
    thread,
    time::{Duration, Instant},
};

#[allow(dead_code)]
/// Which model artifact the server should see at startup
pub enum ModelFixture {
    /// A non-empty artifact file
    Present,
    /// A path that does not exist
    Missing,
    /// An artifact file with no content
    Empty,
}

/// Server process bound to `127.0.0.1:<port>`, killed on drop
pub struct TestServer {
    child: Child,
    port: u16,
    model_path: PathBuf,
}

impl TestServer {
    /// Start the server with a loadable model
    pub fn start(port: u16) -> Self {
        Self::start_with_model(port, ModelFixture::Present)
    }

    pub fn start_with_model(port: u16, model: ModelFixture) -> Self {
        let model_path = std::env::temp_dir().join(format!(
            "veda-test-model-{}-{}.pkl",
            port,
            uuid::Uuid::new_v4()
        ));
        match model {
            ModelFixture::Present => {
                std::fs::write(&model_path, b"\x80\x04test-model").expect("write model file")
            }
            ModelFixture::Empty => std::fs::write(&model_path, b"").expect("write model file"),
            ModelFixture::Missing => {}
        }

        let child = Command::new(env!("CARGO_BIN_EXE_veda-server"))
            .args(["--host", "127.0.0.1", "--port", &port.to_string()])
            .arg("--model-path")
            .arg(&model_path)
            .env("RUST_LOG", "warn")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to start server");

        let server = Self {
            child,
            port,
            model_path,
        };
        server.wait_until_ready();
        server
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    #[allow(dead_code)]
    pub fn sms_url(&self) -> String {
        format!("{}/sms", self.base_url())
    }

    fn wait_until_ready(&self) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            if TcpStream::connect(("127.0.0.1", self.port)).is_ok() {
                return;
            }
            thread::sleep(Duration::from_millis(50));
        }
        panic!("server on port {} did not become ready", self.port);
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        let _ = std::fs::remove_file(&self.model_path);
    }
}

#[allow(dead_code)]
/// Extract the text of every `<Message>` element in a TwiML document
pub fn twiml_messages(xml: &str) -> Vec<String> {
    xml.split("<Message>")
        .skip(1)
        .filter_map(|part| part.split_once("</Message>").map(|(text, _)| text.to_string()))
        .collect()
}
