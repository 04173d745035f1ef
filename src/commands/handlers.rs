use crate::commands::parser::Command;
use crate::domain::ResizeRequestConfig;
use crate::error::ResizerError;
use crate::ports::{Service, Storage};
use crate::service::ResizeService;

use log::info;
use std::fs::File;
use std::io::{self, Write};

pub const USAGE: &str = "\
usage: image-resizer <command>

commands:
  add <key> <file>                              store a file under <key>
  get <key>                                     write the object stored under <key> to stdout
  resize <width> <height> [--suffix <s>] <key>... print the resized storage keys
  help                                          show this message
";

// Handle a single command against the service and its store
pub fn handle_command<S: Storage>(
    service: &ResizeService<S>,
    command: Command,
    out: &mut dyn Write,
) -> Result<(), ResizerError> {
    match command {
        Command::Add { key, file } => handle_cmd_add(service.store(), &key, &file, out),
        Command::Get { key } => handle_cmd_get(service.store(), &key, out),
        Command::Resize {
            width,
            height,
            suffix,
            paths,
        } => handle_cmd_resize(service, width, height, &suffix, paths, out),
        Command::Help => {
            out.write_all(USAGE.as_bytes())?;
            Ok(())
        }
        Command::Unknown(cmd) => Err(ResizerError::Command(format!(
            "unrecognised command: {:?}",
            cmd
        ))),
    }
}

// Command handler for ADD
fn handle_cmd_add(
    store: &impl Storage,
    key: &str,
    file: &std::path::Path,
    out: &mut dyn Write,
) -> Result<(), ResizerError> {
    let mut source = File::open(file)?;
    store.add(key, Some(&mut source))?;
    info!("Added {} from {}", key, file.display());
    writeln!(out, "{}", key)?;
    Ok(())
}

// Command handler for GET
fn handle_cmd_get(store: &impl Storage, key: &str, out: &mut dyn Write) -> Result<(), ResizerError> {
    let mut object = store.get_by_storage_path(key)?;
    let copied = io::copy(&mut object, out)?;
    out.flush()?;
    info!("Read {} ({} bytes)", key, copied);
    Ok(())
}

// Command handler for RESIZE
fn handle_cmd_resize<S: Storage>(
    service: &ResizeService<S>,
    width: i32,
    height: i32,
    suffix: &str,
    paths: Vec<String>,
    out: &mut dyn Write,
) -> Result<(), ResizerError> {
    let response = service.resize(ResizeRequestConfig::new(width, height, suffix, paths))?;
    for path in &response.resized_images_storage_paths {
        writeln!(out, "{}", path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ResizeError, StorageError};
    use crate::storage::FsStore;
    use std::fs;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> ResizeService<FsStore> {
        ResizeService::new(FsStore::new(dir.path().join("store")).unwrap())
    }

    #[test]
    fn test_add_then_get() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let source = dir.path().join("input.jpg");
        fs::write(&source, b"jpeg bytes").unwrap();

        let mut out = Vec::<u8>::new();
        handle_command(
            &service,
            Command::Add {
                key: "photos/input.jpg".into(),
                file: source,
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(out, b"photos/input.jpg\n");

        let mut out = Vec::<u8>::new();
        handle_command(
            &service,
            Command::Get {
                key: "photos/input.jpg".into(),
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(out, b"jpeg bytes");
    }

    #[test]
    fn test_add_missing_input_file() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let err = handle_command(
            &service,
            Command::Add {
                key: "a.jpg".into(),
                file: dir.path().join("missing.jpg"),
            },
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ResizerError::IoError(_)));
    }

    #[test]
    fn test_get_missing_object() {
        let dir = TempDir::new().unwrap();
        let err = handle_command(
            &service(&dir),
            Command::Get {
                key: "missing.jpg".into(),
            },
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ResizerError::Storage(StorageError::ObjectNotFound(_))
        ));
    }

    #[test]
    fn test_resize_prints_destinations() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::<u8>::new();
        handle_command(
            &service(&dir),
            Command::Resize {
                width: 200,
                height: 300,
                suffix: String::new(),
                paths: vec!["a/b.jpg".into(), "c/d.jpg".into()],
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a/b--resized-200-300.jpg\nc/d--resized-200-300.jpg\n"
        );
    }

    #[test]
    fn test_resize_validation_error() {
        let dir = TempDir::new().unwrap();
        let err = handle_command(
            &service(&dir),
            Command::Resize {
                width: 0,
                height: 300,
                suffix: String::new(),
                paths: vec!["a/b.jpg".into()],
            },
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ResizerError::Resize(ResizeError::InvalidWidth(0))
        ));
    }

    #[test]
    fn test_help_and_unknown() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let mut out = Vec::<u8>::new();
        handle_command(&service, Command::Help, &mut out).unwrap();
        assert_eq!(out, USAGE.as_bytes());

        let err = handle_command(&service, Command::Unknown("nope".into()), &mut out).unwrap_err();
        assert!(matches!(err, ResizerError::Command(_)));
    }
}
