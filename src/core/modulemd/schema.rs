//! core::modulemd::schema
//!
//! Typed model of a modulemd document.
//!
//! # Schema Design
//!
//! - Every field is optional. A missing key (or a key with no value) decodes
//!   to the field's zero value; unknown keys are ignored.
//! - Zero values are omitted on encode, so a default record never appears
//!   in the output, not even as an empty mapping.
//! - `xmd` is the single untyped extension point and holds raw YAML values.
//! - `profiles` and `profile` are two independent maps with the same shape.
//!   Both are carried verbatim and never reconciled.
//! - Maps are `BTreeMap` so encoded output has a stable key order.
//!
//! # Example
//!
//! ```
//! use modulemd::core::modulemd::schema::{ModuleMd, Profile};
//!
//! let mut doc = ModuleMd::new("nodejs", "18");
//! doc.data.summary = "Javascript runtime".to_string();
//! doc.data.profiles.insert(
//!     "default".to_string(),
//!     Profile {
//!         description: String::new(),
//!         rpms: vec!["nodejs".to_string(), "npm".to_string()],
//!     },
//! );
//!
//! assert_eq!(doc.data.nsvca(), "nodejs:18");
//! assert!(!doc.data.is_empty());
//! ```

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::serde_ext;

/// Document kind written by [`ModuleMd::new`].
pub const DOCUMENT_KIND: &str = "modulemd";

/// Document format version written by [`ModuleMd::new`].
pub const DOCUMENT_VERSION: i64 = 2;

/// A complete modulemd document: the envelope plus the module data block.
///
/// The envelope fields are not checked against [`DOCUMENT_KIND`] or
/// [`DOCUMENT_VERSION`]; whatever the input carries is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleMd {
    /// Document kind, normally `modulemd`
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub document: String,

    /// Version of the document format itself
    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub version: i64,

    /// The module data block
    #[serde(
        skip_serializing_if = "ModuleData::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub data: ModuleData,
}

impl ModuleMd {
    /// Create a document with the standard envelope and the given identity.
    pub fn new(name: impl Into<String>, stream: impl Into<String>) -> Self {
        Self {
            document: DOCUMENT_KIND.to_string(),
            version: DOCUMENT_VERSION,
            data: ModuleData {
                name: name.into(),
                stream: stream.into(),
                ..Default::default()
            },
        }
    }
}

/// The module data block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleData {
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub name: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub stream: String,

    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub version: i64,

    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub static_context: bool,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub context: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub arch: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub summary: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub description: String,

    #[serde(
        rename = "servicelevels",
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub service_levels: ServiceLevels,

    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub license: License,

    /// Extensible metadata, free-form
    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub xmd: BTreeMap<String, serde_yaml::Value>,

    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "serde_ext::seq_values"
    )]
    pub dependencies: Vec<Dependency>,

    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub references: References,

    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "serde_ext::map_values"
    )]
    pub profiles: BTreeMap<String, Profile>,

    /// Singular spelling of `profiles`, kept as a separate map
    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "serde_ext::map_values"
    )]
    pub profile: BTreeMap<String, Profile>,

    /// Packages forming the module's public API
    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub api: RpmList,

    /// Packages filtered out of the module
    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub filter: RpmList,

    #[serde(
        rename = "buildopts",
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub build_opts: BuildOpts,

    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub components: Components,

    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub artifacts: Artifacts,
}

impl ModuleData {
    /// True when every field holds its zero value.
    pub fn is_empty(&self) -> bool {
        serde_ext::is_default(self)
    }

    /// The `name:stream:version:context:arch` identifier.
    ///
    /// Components are emitted left to right and stop at the first one that
    /// is unset, so a document with only a name and stream yields
    /// `name:stream`.
    pub fn nsvca(&self) -> String {
        let version = if self.version == 0 {
            String::new()
        } else {
            self.version.to_string()
        };

        [
            self.name.as_str(),
            self.stream.as_str(),
            version.as_str(),
            self.context.as_str(),
            self.arch.as_str(),
        ]
        .iter()
        .take_while(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(":")
    }
}

/// Support tracks of the module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceLevels {
    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub rawhide: ServiceLevel,

    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub stable_api: ServiceLevel,

    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub bug_fixes: ServiceLevel,

    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub security_fixes: ServiceLevel,
}

/// A single support track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceLevel {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_ext::eol_marker"
    )]
    pub eol: Option<Eol>,
}

/// End-of-life marker.
///
/// Carries no data. Any value found under `eol` decodes to this marker and
/// the marker encodes as an empty mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Eol;

impl Serialize for Eol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_map(Some(0))?.end()
    }
}

/// License identifiers for the module itself and for its content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "serde_ext::seq_values"
    )]
    pub module: Vec<String>,

    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "serde_ext::seq_values"
    )]
    pub content: Vec<String>,
}

/// One dependency entry: module name to acceptable streams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dependency {
    #[serde(
        rename = "buildrequires",
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "serde_ext::map_seq_values"
    )]
    pub build_requires: BTreeMap<String, Vec<String>>,

    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "serde_ext::map_seq_values"
    )]
    pub requires: BTreeMap<String, Vec<String>>,
}

/// Upstream links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct References {
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub community: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub documentation: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub tracker: String,
}

/// An installation profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub description: String,

    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "serde_ext::seq_values"
    )]
    pub rpms: Vec<String>,
}

/// A bare list of package names, shared by `api` and `filter`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpmList {
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "serde_ext::seq_values"
    )]
    pub rpms: Vec<String>,
}

/// Build options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOpts {
    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub rpms: RpmBuildOpts,

    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "serde_ext::seq_values"
    )]
    pub arches: Vec<String>,
}

/// RPM-specific build options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpmBuildOpts {
    /// Raw macro definitions, one per line
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub macros: String,

    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "serde_ext::seq_values"
    )]
    pub whitelist: Vec<String>,
}

/// Components built into the module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "serde_ext::map_values"
    )]
    pub rpms: BTreeMap<String, RpmComponent>,

    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "serde_ext::map_values"
    )]
    pub modules: BTreeMap<String, ModuleComponent>,
}

/// An RPM component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpmComponent {
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub name: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub rationale: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub repository: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub cache: String,

    /// Git ref to build from
    #[serde(
        rename = "ref",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub git_ref: String,

    #[serde(
        rename = "buildonly",
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub build_only: bool,

    #[serde(
        rename = "buildroot",
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub build_root: bool,

    #[serde(
        rename = "srpm-buildroot",
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub srpm_build_root: bool,

    #[serde(
        rename = "buildorder",
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub build_order: i64,

    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "serde_ext::seq_values"
    )]
    pub arches: Vec<String>,

    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "serde_ext::seq_values"
    )]
    pub multilib: Vec<String>,
}

/// A module component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleComponent {
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub rationale: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub repository: String,

    #[serde(
        rename = "ref",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub git_ref: String,

    #[serde(
        rename = "buildorder",
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub build_order: i64,
}

/// Artifacts produced by a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artifacts {
    /// NEVRA strings of the produced packages
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "serde_ext::seq_values"
    )]
    pub rpms: Vec<String>,

    /// Grouping key, then package identifier, to the package record
    #[serde(
        rename = "rpm-map",
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "serde_ext::nested_map_values"
    )]
    pub rpm_map: BTreeMap<String, BTreeMap<String, RpmArtifact>>,
}

impl Artifacts {
    /// Number of entries across every `rpm-map` group.
    pub fn rpm_map_len(&self) -> usize {
        self.rpm_map.values().map(BTreeMap::len).sum()
    }
}

/// One entry of `artifacts.rpm-map`.
///
/// `version` is floating point on the wire. A version such as `1.2.3` is
/// not a number and fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpmArtifact {
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub name: String,

    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub epoch: i64,

    #[serde(
        skip_serializing_if = "serde_ext::is_default",
        deserialize_with = "serde_ext::or_default"
    )]
    pub version: f64,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub release: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub arch: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "serde_ext::or_default"
    )]
    pub nevra: String,
}
