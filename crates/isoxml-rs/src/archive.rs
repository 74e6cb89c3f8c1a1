// crates/isoxml-rs/src/archive.rs

//! ZIP package access for task data sets.
//!
//! A package holds `TASKDATA.XML` (the primary document), an optional
//! `LINKLIST.XML` and any number of auxiliary `.XML` and `.BIN` files, all
//! usually inside a `TASKDATA/` folder. Other members are not task data
//! and are left out.

use crate::document::AuxiliaryFile;
use crate::error::IsoxmlError;
use log::{debug, trace, warn};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{Cursor, Read, Write};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::{CompressionMethod, ZipArchive};

pub(crate) const MAIN_FILENAME: &str = "TASKDATA.XML";
pub(crate) const LINKLIST_FILENAME: &str = "LINKLIST.XML";

pub(crate) type PackageArchive<'a> = ZipArchive<Cursor<&'a [u8]>>;

/// Where the well-known members sit inside a package.
#[derive(Debug)]
pub(crate) struct PackageLayout {
    pub primary: usize,
    /// Folder prefix of the primary document, including the trailing `/`.
    pub root_folder: String,
    pub link_list: Option<usize>,
    pub auxiliary: Vec<usize>,
}

pub(crate) fn open(data: &[u8]) -> Result<PackageArchive<'_>, IsoxmlError> {
    Ok(ZipArchive::new(Cursor::new(data))?)
}

/// Classifies the archive members.
///
/// The first `TASKDATA.XML` and `LINKLIST.XML` win; later members with
/// those names, or with the name of an earlier auxiliary file, are skipped.
///
/// # Errors
/// `MissingPrimaryDocument` if no member is named `TASKDATA.XML`
/// (case-insensitive, in any folder).
pub(crate) fn locate_members(archive: &mut PackageArchive<'_>) -> Result<PackageLayout, IsoxmlError> {
    let mut primary = None;
    let mut link_list = None;
    let mut auxiliary = Vec::new();
    let mut names = BTreeSet::new();

    for index in 0..archive.len() {
        let file = archive.by_index(index)?;
        if file.is_dir() {
            continue;
        }
        let (folder, name) = split_path(file.name());
        trace!("Package member {}", file.name());

        if name.eq_ignore_ascii_case(MAIN_FILENAME) {
            if primary.is_none() {
                primary = Some((index, folder.to_string()));
            } else {
                warn!("Skipping second primary document {}", file.name());
            }
        } else if name.eq_ignore_ascii_case(LINKLIST_FILENAME) {
            if link_list.is_none() {
                link_list = Some(index);
            } else {
                warn!("Skipping second link list {}", file.name());
            }
        } else if !is_task_data_file(name) {
            debug!("Ignoring package member {}", file.name());
        } else if names.insert(name.to_string()) {
            auxiliary.push(index);
        } else {
            warn!("Skipping {}: an earlier member has the same name", file.name());
        }
    }

    let (primary, root_folder) = primary.ok_or(IsoxmlError::MissingPrimaryDocument)?;
    debug!(
        "Found {} in '{}' with {} auxiliary members",
        MAIN_FILENAME,
        root_folder,
        auxiliary.len()
    );
    Ok(PackageLayout {
        primary,
        root_folder,
        link_list,
        auxiliary,
    })
}

/// Splits a member path into its folder (with trailing `/`) and file name.
fn split_path(path: &str) -> (&str, &str) {
    match path.rfind(['/', '\\']) {
        Some(pos) => (&path[..=pos], &path[pos + 1..]),
        None => ("", path),
    }
}

/// Reads a member as UTF-8 text, dropping a leading byte order mark.
pub(crate) fn read_text(archive: &mut PackageArchive<'_>, index: usize) -> Result<String, IsoxmlError> {
    let mut file = archive.by_index(index)?;
    let mut text = String::with_capacity(file.size() as usize);
    file.read_to_string(&mut text)?;
    if let Some(stripped) = text.strip_prefix('\u{feff}') {
        text = stripped.to_string();
    }
    Ok(text)
}

/// Reads an auxiliary member. `.BIN` files are kept as bytes, `.XML`
/// files as text.
pub(crate) fn read_member(
    archive: &mut PackageArchive<'_>,
    index: usize,
) -> Result<(String, AuxiliaryFile), IsoxmlError> {
    let mut file = archive.by_index(index)?;
    let name = split_path(file.name()).1.to_string();

    let mut data = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut data)?;

    let content = if is_binary(&name) {
        AuxiliaryFile::Binary(data)
    } else {
        let text = String::from_utf8(data).map_err(|e| IsoxmlError::InvalidUtf8(e.utf8_error()))?;
        AuxiliaryFile::Text(text)
    };
    Ok((name, content))
}

fn has_extension(name: &str, extension: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(extension))
}

fn is_binary(name: &str) -> bool {
    has_extension(name, "bin")
}

fn is_task_data_file(name: &str) -> bool {
    has_extension(name, "xml") || is_binary(name)
}

fn is_reserved(name: &str) -> bool {
    name.eq_ignore_ascii_case(MAIN_FILENAME) || name.eq_ignore_ascii_case(LINKLIST_FILENAME)
}

/// Writes a package: the primary document, the link list if any, then the
/// auxiliary files, all below `root_folder`.
pub(crate) fn write_package(
    root_folder: &str,
    primary: &str,
    link_list: Option<&str>,
    files: &BTreeMap<String, AuxiliaryFile>,
) -> Result<Vec<u8>, IsoxmlError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(format!("{}{}", root_folder, MAIN_FILENAME), options)?;
    writer.write_all(primary.as_bytes())?;

    if let Some(link_list) = link_list {
        writer.start_file(format!("{}{}", root_folder, LINKLIST_FILENAME), options)?;
        writer.write_all(link_list.as_bytes())?;
    }

    for (name, file) in files {
        if is_reserved(name) {
            warn!("Not writing auxiliary file {}: the name is reserved", name);
            continue;
        }
        writer.start_file(format!("{}{}", root_folder, name), options)?;
        writer.write_all(file.as_bytes())?;
    }

    let cursor = writer.finish()?;
    debug!("Wrote package with {} auxiliary files", files.len());
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(members: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, data) in members {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("TASKDATA/TASKDATA.XML"), ("TASKDATA/", "TASKDATA.XML"));
        assert_eq!(split_path("a\\b.xml"), ("a\\", "b.xml"));
        assert_eq!(split_path("TASKDATA.XML"), ("", "TASKDATA.XML"));
    }

    #[test]
    fn test_locate_members() {
        let data = package(&[
            ("Export/GRD00001.BIN", &[1, 2, 3]),
            ("Export/taskdata.xml", b"<ISO11783_TaskData/>"),
            ("Export/LINKLIST.XML", b"<ISO11783LinkList/>"),
        ]);
        let mut archive = open(&data).unwrap();
        let layout = locate_members(&mut archive).unwrap();
        assert_eq!(layout.primary, 1);
        assert_eq!(layout.root_folder, "Export/");
        assert_eq!(layout.link_list, Some(2));
        assert_eq!(layout.auxiliary, vec![0]);

        let (name, file) = read_member(&mut archive, 0).unwrap();
        assert_eq!(name, "GRD00001.BIN");
        assert_eq!(file, AuxiliaryFile::Binary(vec![1, 2, 3]));
    }

    #[test]
    fn test_only_xml_and_bin_members_are_auxiliary() {
        let data = package(&[
            ("TASKDATA/TASKDATA.XML", b"<ISO11783_TaskData/>"),
            ("TASKDATA/photo.jpg", &[0xff, 0xd8, 0xff, 0xe0]),
            ("README.txt", b"exported by hand"),
            ("TASKDATA/TLG00001.xml", b"<TIM/>"),
            ("TASKDATA/NOEXTENSION", b"?"),
        ]);
        let mut archive = open(&data).unwrap();
        let layout = locate_members(&mut archive).unwrap();
        assert_eq!(layout.auxiliary, vec![3]);
    }

    #[test]
    fn test_duplicate_reserved_members_are_skipped() {
        let data = package(&[
            ("TASKDATA/TASKDATA.XML", b"<ISO11783_TaskData/>"),
            ("TASKDATA/LINKLIST.XML", b"<ISO11783LinkList/>"),
            ("BACKUP/TASKDATA.XML", b"<ISO11783_TaskData/>"),
            ("BACKUP/linklist.xml", b"<ISO11783LinkList/>"),
            ("TASKDATA/GRD00001.BIN", &[1]),
            ("BACKUP/GRD00001.BIN", &[2]),
        ]);
        let mut archive = open(&data).unwrap();
        let layout = locate_members(&mut archive).unwrap();
        assert_eq!(layout.primary, 0);
        assert_eq!(layout.root_folder, "TASKDATA/");
        assert_eq!(layout.link_list, Some(1));
        assert_eq!(layout.auxiliary, vec![4]);
    }

    #[test]
    fn test_write_package_skips_reserved_names() {
        let mut files = BTreeMap::new();
        files.insert("taskdata.xml".to_string(), AuxiliaryFile::Text("<X/>".to_string()));
        files.insert("TLG00001.BIN".to_string(), AuxiliaryFile::Binary(vec![1]));
        let data = write_package("TASKDATA/", "<ISO11783_TaskData/>", None, &files).unwrap();

        let archive = open(&data).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert_eq!(names, vec!["TASKDATA/TASKDATA.XML", "TASKDATA/TLG00001.BIN"]);
    }

    #[test]
    fn test_missing_primary_document() {
        let data = package(&[("TASKDATA/TLG00001.XML", b"<TIM/>")]);
        let mut archive = open(&data).unwrap();
        assert!(matches!(
            locate_members(&mut archive),
            Err(IsoxmlError::MissingPrimaryDocument)
        ));
    }

    #[test]
    fn test_read_text_strips_bom() {
        let data = package(&[("TASKDATA.XML", "\u{feff}<A/>".as_bytes())]);
        let mut archive = open(&data).unwrap();
        assert_eq!(read_text(&mut archive, 0).unwrap(), "<A/>");
    }

    #[test]
    fn test_write_package_layout() {
        let mut files = BTreeMap::new();
        files.insert("TLG00001.BIN".to_string(), AuxiliaryFile::Binary(vec![9; 16]));
        let data = write_package("TASKDATA/", "<ISO11783_TaskData/>", Some("<L/>"), &files).unwrap();

        let mut archive = open(&data).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert_eq!(
            names,
            vec!["TASKDATA/TASKDATA.XML", "TASKDATA/LINKLIST.XML", "TASKDATA/TLG00001.BIN"]
        );
        let layout = locate_members(&mut archive).unwrap();
        assert_eq!(read_text(&mut archive, layout.primary).unwrap(), "<ISO11783_TaskData/>");
    }
}
