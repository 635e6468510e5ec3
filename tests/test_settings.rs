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

use std::path::PathBuf;
use std::{env, fs, process};

use xpath_eval::DebugSettings;

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("{}-{}", process::id(), name))
}

fn example() -> DebugSettings {
    DebugSettings {
        file: "debug.log".to_string(),
        level: 2,
        modules: ["Admin", "Finance", "HR"]
            .iter()
            .map(|m| m.to_string())
            .collect(),
    }
}

#[test]
fn test_settings_file_round_trip() {
    let path = temp_path("settings-roundtrip.xml");
    let settings = example();
    settings.save(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(written.contains("<filename>debug.log</filename>"));
    assert!(written.contains("<level>2</level>"));
    assert!(written.contains("<module>Finance</module>"));

    let restored = DebugSettings::load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(restored, settings);
}

#[test]
fn test_load_of_missing_file_is_an_error() {
    let path = temp_path("settings-missing.xml");
    assert!(DebugSettings::load(&path).is_err());
}
