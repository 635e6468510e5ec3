// Copyright 2019 Leonardo Schwarz <mail@leoschwarz.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Debug logging settings stored as an XML document.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::errors::{Error, Result};
use crate::reader::Reader;
use crate::tree::PropertyTree;

/// Settings of a debug logging facility.
///
/// The on disk representation is an XML document with a single `debug`
/// element holding the log file name, the verbosity level and one
/// `module` element per enabled module:
///
/// ```xml
/// <debug>
///   <filename>debug.log</filename>
///   <level>2</level>
///   <modules>
///     <module>Admin</module>
///   </modules>
/// </debug>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugSettings {
    /// Name of the log file.
    pub file: String,
    /// Debug verbosity level.
    pub level: i32,
    /// Modules where logging is enabled.
    pub modules: BTreeSet<String>,
}

impl DebugSettings {
    /// Build the property tree representation of these settings.
    pub fn to_property_tree(&self) -> PropertyTree {
        let mut tree = PropertyTree::new();
        tree.put("debug.filename", &self.file);
        tree.put("debug.level", self.level);
        for module in &self.modules {
            tree.add("debug.modules.module", module);
        }
        tree
    }

    /// Serialize the settings to an XML file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let xml = self.to_property_tree().to_xml_string()?;
        fs::write(path, xml)?;
        Ok(())
    }

    /// Load settings from the XML file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let xml = fs::read_to_string(path)?;
        DebugSettings::from_xml_str(&xml)
    }

    /// Load settings from an XML document string.
    ///
    /// The file name is required. A missing level defaults to zero and a
    /// missing module list yields an empty set.
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        let reader = Reader::from_str(xml, None)?;
        let file = reader
            .read::<Option<String>, _>("/debug/filename")?
            .ok_or_else(|| Error::MissingValue("debug.filename".to_string()))?;
        let level = reader.read::<Option<i32>, _>("/debug/level")?.unwrap_or(0);
        let modules = reader
            .read::<Vec<String>, _>("/debug/modules/module")?
            .into_iter()
            .collect();
        Ok(DebugSettings {
            file,
            level,
            modules,
        })
    }
}
