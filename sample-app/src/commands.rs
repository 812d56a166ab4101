use media_capture_core::{AssetKind, AssetRecord, MediaApp, ViewMode};

use crate::demo_camera::DemoCamera;

pub type App = MediaApp<DemoCamera>;

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ToggleCamera,
    ToggleRecords,
    Photo,
    Record,
    Stop,
    Flip,
    List(Option<AssetKind>),
    Delete(usize),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or("empty command")?;
        let arg = words.next();

        let command = match verb {
            "camera" => Self::ToggleCamera,
            "records" => Self::ToggleRecords,
            "photo" => Self::Photo,
            "record" => Self::Record,
            "stop" => Self::Stop,
            "flip" => Self::Flip,
            "list" => Self::List(match arg {
                None => None,
                Some("photos") => Some(AssetKind::Photo),
                Some("videos") => Some(AssetKind::Video),
                Some(other) => return Err(format!("unknown filter '{}'", other)),
            }),
            "delete" => {
                let index = arg
                    .ok_or("usage: delete <number>")?
                    .parse::<usize>()
                    .map_err(|e| format!("bad number: {}", e))?;
                if index == 0 {
                    return Err("records are numbered from 1".into());
                }
                Self::Delete(index)
            }
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command '{}'", other)),
        };
        Ok(command)
    }
}

pub const HELP: &str = "\
commands:
  camera            show/hide the camera
  records           show/hide the catalog
  photo             take a photo
  record / stop     start/stop a video recording
  flip              switch front/back camera
  list [photos|videos]
  delete <n>        delete the n-th record shown by `list`
  quit";

pub fn run(app: &App, command: Command) -> Result<(), String> {
    match command {
        Command::ToggleCamera => {
            if app.session().mode().is_recording() {
                return Err("stop recording first".into());
            }
            let mut views = app.views().lock();
            if views.shows_capture() {
                app.session().close_camera().map_err(|e| e.to_string())?;
            } else {
                app.session().open_camera().map_err(|e| e.to_string())?;
            }
            views.toggle_capture();
        }
        Command::ToggleRecords => {
            if app.session().mode().is_recording() {
                return Err("stop recording first".into());
            }
            let mode = app.views().lock().toggle_catalog();
            app.session().close_camera().map_err(|e| e.to_string())?;
            if mode == ViewMode::Catalog {
                print_records(&app.catalog().records());
            }
        }
        Command::Photo => {
            require_capture_view(app)?;
            app.session().capture_photo().map_err(|e| e.to_string())?;
        }
        Command::Record => {
            require_capture_view(app)?;
            app.session().start_recording().map_err(|e| e.to_string())?;
        }
        Command::Stop => {
            if !app.session().mode().is_recording() {
                return Err("not recording (recordings end by themselves at the maximum duration)".into());
            }
            app.session().stop_recording().map_err(|e| e.to_string())?;
        }
        Command::Flip => {
            app.session().flip_facing().map_err(|e| e.to_string())?;
        }
        Command::List(kind) => {
            let records = match kind {
                Some(kind) => app.catalog().records_of_kind(kind),
                None => app.catalog().records(),
            };
            print_records(&records);
        }
        Command::Delete(index) => {
            let records = app.catalog().records();
            let record = records
                .get(index - 1)
                .ok_or_else(|| format!("no record #{}", index))?;
            app.catalog().remove(&record.uri).map_err(|e| e.to_string())?;
            println!("  deleted {}", record.uri);
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
    Ok(())
}

fn require_capture_view(app: &App) -> Result<(), String> {
    if app.views().lock().shows_capture() {
        Ok(())
    } else {
        Err("open the camera first (`camera`)".into())
    }
}

fn print_records(records: &[AssetRecord]) {
    if records.is_empty() {
        println!("  no media captured yet");
        return;
    }
    for (i, record) in records.iter().enumerate() {
        println!(
            "  {:>3}. {:<5} {}  {}",
            i + 1,
            format!("{:?}", record.kind).to_lowercase(),
            record.captured_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S"),
            record.uri
        );
    }
}
