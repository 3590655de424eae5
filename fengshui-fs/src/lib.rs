//! Capability-based file access for snapshots, configuration and model
//! artefacts.
//!
//! Every helper resolves its path against an ambient [`fs_utf8::Dir`] so
//! callers only ever touch the file they name.
#![forbid(unsafe_code)]

use std::io::{self, Read};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Read a UTF-8 text file in full.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut contents = String::new();
    open(path)?.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Read a binary file in full.
pub fn read_bytes(path: &Utf8Path) -> io::Result<Vec<u8>> {
    let mut contents = Vec::new();
    open(path)?.read_to_end(&mut contents)?;
    Ok(contents)
}

/// Report whether `path` is a regular file.
///
/// A missing path is an [`io::ErrorKind::NotFound`] error; directories and
/// other non-files yield `Ok(false)`.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_and_name(path)?;
    dir.metadata(name.as_str()).map(|metadata| metadata.is_file())
}

/// Create or truncate `path`, creating missing parent directories first.
pub fn create_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} has no file name")))?;
    let parent = non_empty_parent(path);
    let (anchor, relative) = anchored(parent)?;
    if relative.as_str().is_empty() {
        return anchor.create(name);
    }
    anchor.create_dir_all(&relative)?;
    anchor.open_dir(&relative)?.create(name)
}

fn open(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

fn non_empty_parent(path: &Utf8Path) -> &Utf8Path {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    }
}

fn parent_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} has no file name")))?;
    let dir = fs_utf8::Dir::open_ambient_dir(non_empty_parent(path), ambient_authority())?;
    Ok((dir, name.to_owned()))
}

/// Split `dir` into an openable anchor (the filesystem root, a Windows
/// prefix, or the working directory) and the path below it.
fn anchored(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let mut anchor = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in dir.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => anchor.push(component),
            Utf8Component::CurDir => {}
            other => relative.push(other),
        }
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    let opened = fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?;
    Ok((opened, relative))
}
