mod commands;
mod console_delegate;
mod demo_camera;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use media_capture_core::{CaptureConfiguration, MediaApp, Ports};
use media_capture_fs::{DirectoryMediaLibrary, JsonFileStore, LocalFileSystem};

use commands::Command;
use console_delegate::ConsoleDelegate;
use demo_camera::DemoCamera;

fn app_dir() -> PathBuf {
    let dir = dirs_next::document_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("MediaCaptureKit");
    fs::create_dir_all(&dir).ok();
    dir
}

fn main() {
    env_logger::init();

    let root = app_dir();
    let config = CaptureConfiguration {
        media_directory: root.join("Media"),
        ..Default::default()
    };
    let local_fs = Arc::new(LocalFileSystem);
    let ports = Ports {
        camera: DemoCamera::new(std::env::temp_dir().join("media-capture-kit-cache")),
        store: Arc::new(JsonFileStore::new(root.join("storage.json"))),
        mover: local_fs.clone(),
        deleter: local_fs,
        library: Arc::new(DirectoryMediaLibrary::new(root.join("Library"))),
    };

    let app = match MediaApp::start(config, ports, Some(ConsoleDelegate::new())) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("failed to start: {}", e);
            std::process::exit(1);
        }
    };

    println!("{} captured items in {}", app.catalog().len(), root.display());
    println!("{}", commands::HELP);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("failed to read input: {}", e);
                break;
            }
        }
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                if let Err(e) = commands::run(&app, command) {
                    eprintln!("  {}", e);
                }
            }
            Err(e) => eprintln!("  {}", e),
        }
    }

    if app.session().mode().is_recording() {
        if let Err(e) = app.session().stop_recording() {
            log::error!("Failed to finish recording on exit: {}", e);
        }
    }
}
