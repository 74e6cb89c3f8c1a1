// crates/isoxml-rs/src/manager.rs

//! Entry points for reading and writing whole task data sets.

use crate::archive::{self, PackageArchive, PackageLayout};
use crate::codec;
use crate::document::Document;
use crate::error::IsoxmlError;
use crate::model::{EntityTag, ROOT_ELEMENT};
use crate::types::Value;
use crate::xml;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Settings applied to documents the manager creates and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManagerOptions {
    /// Folder that `serialize` writes package members to, stored with a
    /// trailing `/`. Parsing a package replaces it with the folder the
    /// package's `TASKDATA.XML` was found in.
    pub root_folder: String,
    /// Written as `ManagementSoftwareManufacturer` on new documents.
    pub fmis_title: String,
    pub fmis_uri: Option<String>,
    /// Written as `ManagementSoftwareVersion` on new documents.
    pub fmis_version: String,
    /// ISOXML major version of new documents.
    pub version: u8,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            root_folder: "TASKDATA/".to_string(),
            fmis_title: "FMIS".to_string(),
            fmis_uri: None,
            fmis_version: "1.0".to_string(),
            version: 4,
        }
    }
}

/// Kind of input handed to [`IsoxmlManager::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataKind {
    /// A bare `TASKDATA.XML` (or any single entity element).
    Xml,
    /// A ZIP package.
    Zip,
}

impl DataKind {
    /// Maps a MIME type to a data kind.
    ///
    /// # Errors
    /// `UnsupportedContainerKind` for anything but XML or ZIP.
    pub fn from_mime(mime: &str) -> Result<Self, IsoxmlError> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "text/xml" | "application/xml" => Ok(DataKind::Xml),
            "application/zip" | "application/x-zip-compressed" => Ok(DataKind::Zip),
            _ => Err(IsoxmlError::UnsupportedContainerKind { kind: mime.to_string() }),
        }
    }
}

/// Reads and writes ISOXML task data sets.
#[derive(Debug, Clone, Default)]
pub struct IsoxmlManager {
    options: ManagerOptions,
}

impl IsoxmlManager {
    pub fn new(options: ManagerOptions) -> Self {
        let mut manager = Self { options };
        manager.normalize();
        manager
    }

    pub fn options(&self) -> &ManagerOptions {
        &self.options
    }

    /// Applies `update` to the current options.
    pub fn update_options(&mut self, update: impl FnOnce(&mut ManagerOptions)) {
        update(&mut self.options);
        self.normalize();
    }

    fn normalize(&mut self) {
        self.options.root_folder = normalize_folder(&self.options.root_folder);
    }

    /// Creates a document with a fresh `ISO11783_TaskData` root describing
    /// this FMIS.
    pub fn create_document(&self) -> Result<Document, IsoxmlError> {
        let mut doc = Document::new();
        let version = self.options.version;
        let minor = if version == 4 { "3" } else { "0" };
        let root = doc.create_entity(
            EntityTag::TaskData,
            [
                ("VersionMajor", root_enum("VersionMajor", &version.to_string())),
                ("VersionMinor", root_enum("VersionMinor", minor)),
                ("ManagementSoftwareManufacturer", Value::from(self.options.fmis_title.as_str())),
                ("ManagementSoftwareVersion", Value::from(self.options.fmis_version.as_str())),
                ("DataTransferOrigin", root_enum("DataTransferOrigin", "1")),
            ],
        )?;
        doc.set_root(root)?;
        Ok(doc)
    }

    /// Parses a task data set.
    ///
    /// A package also sets the configured root folder to the one it was
    /// found in, so that saving writes it back to the same place.
    ///
    /// # Errors
    /// Container-level failures (`MissingPrimaryDocument`, broken ZIP or XML,
    /// a primary document without `ISO11783_TaskData` root) abort the parse.
    /// Problems inside entities are logged and skipped.
    pub fn parse(&mut self, data: &[u8], kind: DataKind) -> Result<Document, IsoxmlError> {
        match kind {
            DataKind::Xml => self.parse_str(core::str::from_utf8(data)?),
            DataKind::Zip => self.parse_zip(data),
        }
    }

    /// Parses XML text. The root element may be any known entity tag.
    pub fn parse_str(&self, text: &str) -> Result<Document, IsoxmlError> {
        let element = xml::parse_str(text)?;
        let mut doc = Document::new();
        codec::decode_root(&mut doc, &element)?;
        debug!("Parsed <{}> with {} references", element.name, doc.references().len());
        Ok(doc)
    }

    fn parse_zip(&mut self, data: &[u8]) -> Result<Document, IsoxmlError> {
        let mut archive = archive::open(data)?;
        let layout = archive::locate_members(&mut archive)?;

        // ZipArchive clones share the parsed central directory.
        let jobs: Vec<(usize, PackageArchive<'_>)> = layout
            .auxiliary
            .iter()
            .map(|&index| (index, archive.clone()))
            .collect();

        let (document, files) = rayon::join(
            || decode_primary(archive, &layout),
            || {
                jobs.into_par_iter()
                    .map(|(index, mut archive)| archive::read_member(&mut archive, index))
                    .collect::<Result<Vec<_>, IsoxmlError>>()
            },
        );

        let mut doc = document?;
        for (name, file) in files? {
            doc.add_file(name, file);
        }
        if self.options.root_folder != layout.root_folder {
            debug!("Root folder is now '{}'", layout.root_folder);
            self.options.root_folder = layout.root_folder;
        }
        debug!(
            "Parsed package with {} references and {} auxiliary files",
            doc.references().len(),
            doc.files().len()
        );
        Ok(doc)
    }

    /// Writes `doc` as a ZIP package below the configured root folder.
    ///
    /// Entities that need an identifier and have none are assigned one,
    /// which is why the document is borrowed mutably.
    ///
    /// # Errors
    /// `IncompleteDocument` if the document has no root, `MissingElement`
    /// if the root is not `ISO11783_TaskData`.
    pub fn serialize(&self, doc: &mut Document) -> Result<Vec<u8>, IsoxmlError> {
        let root = doc.root_entity().ok_or(IsoxmlError::IncompleteDocument)?;
        if root.tag() != EntityTag::TaskData {
            return Err(IsoxmlError::MissingElement { element: ROOT_ELEMENT });
        }
        let primary = self.serialize_xml(doc)?;
        let data = archive::write_package(
            &self.options.root_folder,
            &primary,
            doc.link_list(),
            doc.files(),
        )?;
        debug!("Serialized package of {} bytes", data.len());
        Ok(data)
    }

    /// Writes the primary document as XML text.
    pub fn serialize_xml(&self, doc: &mut Document) -> Result<String, IsoxmlError> {
        let root = doc.root().ok_or(IsoxmlError::IncompleteDocument)?;
        let element = codec::encode_entity(doc, root)?;
        xml::to_string(&element)
    }
}

pub(crate) fn normalize_folder(folder: &str) -> String {
    let trimmed = folder.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}/", trimmed)
    }
}

fn root_enum(attribute: &str, code: &str) -> Value {
    EntityTag::TaskData
        .descriptor()
        .attribute(attribute)
        .and_then(|a| a.enum_by_code(code))
        .map_or_else(|| Value::UnknownEnum(code.to_string()), Value::Enum)
}

fn decode_primary(mut archive: PackageArchive<'_>, layout: &PackageLayout) -> Result<Document, IsoxmlError> {
    let text = archive::read_text(&mut archive, layout.primary)?;
    let element = xml::parse_str(&text)?;
    if element.name != ROOT_ELEMENT {
        return Err(IsoxmlError::MissingElement { element: ROOT_ELEMENT });
    }

    let mut doc = Document::new();
    codec::decode_root(&mut doc, &element)?;

    if let Some(index) = layout.link_list {
        doc.set_link_list(Some(archive::read_text(&mut archive, index)?));
        debug!("Kept {} verbatim", archive::LINKLIST_FILENAME);
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ManagerOptions::default();
        assert_eq!(options.root_folder, "TASKDATA/");
        assert_eq!(options.version, 4);
    }

    #[test]
    fn test_options_from_partial_json() {
        let options: ManagerOptions =
            serde_json::from_str(r#"{ "fmisTitle": "FarmOS", "rootFolder": "EXPORT" }"#).unwrap();
        assert_eq!(options.fmis_title, "FarmOS");
        assert_eq!(options.fmis_version, "1.0");

        let manager = IsoxmlManager::new(options);
        assert_eq!(manager.options().root_folder, "EXPORT/");
    }

    #[test]
    fn test_update_options() {
        let mut manager = IsoxmlManager::default();
        manager.update_options(|o| {
            o.root_folder = "OUT".to_string();
            o.version = 3;
        });
        assert_eq!(manager.options().root_folder, "OUT/");
        assert_eq!(manager.options().fmis_title, "FMIS");
        assert_eq!(manager.options().version, 3);
    }

    #[test]
    fn test_data_kind_from_mime() {
        assert_eq!(DataKind::from_mime("text/xml").unwrap(), DataKind::Xml);
        assert_eq!(DataKind::from_mime("application/xml; charset=utf-8").unwrap(), DataKind::Xml);
        assert_eq!(DataKind::from_mime("application/zip").unwrap(), DataKind::Zip);
        assert!(matches!(
            DataKind::from_mime("application/json"),
            Err(IsoxmlError::UnsupportedContainerKind { .. })
        ));
    }

    #[test]
    fn test_create_document_root() {
        let manager = IsoxmlManager::new(ManagerOptions {
            fmis_title: "FarmOS".to_string(),
            fmis_version: "2.1".to_string(),
            ..Default::default()
        });
        let mut doc = manager.create_document().unwrap();
        let root = doc.root_entity().unwrap();
        assert_eq!(root.tag(), EntityTag::TaskData);
        assert_eq!(root.attribute("VersionMajor").and_then(Value::enum_name), Some("E2FDIS"));
        assert_eq!(root.attribute("VersionMinor").and_then(Value::enum_name), Some("Minor3"));
        assert_eq!(root.attribute("DataTransferOrigin").and_then(Value::enum_name), Some("FMIS"));

        let text = manager.serialize_xml(&mut doc).unwrap();
        assert!(text.contains(r#"ManagementSoftwareManufacturer="FarmOS""#));
        assert!(text.contains(r#"VersionMajor="4" VersionMinor="3""#));
    }

    #[test]
    fn test_serialize_without_root() {
        let manager = IsoxmlManager::default();
        let mut doc = Document::new();
        assert!(matches!(
            manager.serialize(&mut doc),
            Err(IsoxmlError::IncompleteDocument)
        ));
    }

    #[test]
    fn test_serialize_uses_configured_root_folder() {
        let mut manager = IsoxmlManager::default();
        let mut doc = manager.create_document().unwrap();
        manager.update_options(|o| o.root_folder = "EXPORT".to_string());

        let data = manager.serialize(&mut doc).unwrap();
        let archive = archive::open(&data).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert_eq!(names, vec!["EXPORT/TASKDATA.XML"]);

        // Parsing a package adopts the folder it was found in.
        let mut reader = IsoxmlManager::default();
        reader.parse(&data, DataKind::Zip).unwrap();
        assert_eq!(reader.options().root_folder, "EXPORT/");
    }

    #[test]
    fn test_serialize_requires_task_data_root() {
        let manager = IsoxmlManager::default();
        let mut doc = manager.parse_str(r#"<TSK A="TSK1" G="1"/>"#).unwrap();
        assert!(matches!(
            manager.serialize(&mut doc),
            Err(IsoxmlError::MissingElement { element: "ISO11783_TaskData" })
        ));
        // Plain XML output still accepts any root.
        assert!(manager.serialize_xml(&mut doc).unwrap().contains("<TSK"));
    }

    #[test]
    fn test_normalize_folder() {
        assert_eq!(normalize_folder("TASKDATA"), "TASKDATA/");
        assert_eq!(normalize_folder("TASKDATA/"), "TASKDATA/");
        assert_eq!(normalize_folder(""), "");
        assert_eq!(normalize_folder("/"), "");
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let mut manager = IsoxmlManager::default();
        assert!(matches!(
            manager.parse(&[0x3c, 0xff, 0xfe], DataKind::Xml),
            Err(IsoxmlError::InvalidUtf8(_))
        ));
    }
}
