use std::fmt;

use serde::{Deserialize, Serialize};

/// File formats the host can write the scene to before upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExportFormat {
    #[default]
    Obj,
    Fbx,
    Blend,
    Gltf,
}

impl ExportFormat {
    /// Extension of the written model file, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Obj => "obj",
            ExportFormat::Fbx => "fbx",
            ExportFormat::Blend => "blend",
            // binary glTF, single file
            ExportFormat::Gltf => "glb",
        }
    }

    /// Extension of the sibling material file, if the format writes one.
    pub fn material_extension(&self) -> Option<&'static str> {
        match self {
            ExportFormat::Obj => Some("mtl"),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Obj => "OBJ",
            ExportFormat::Fbx => "FBX",
            ExportFormat::Blend => "BLEND",
            ExportFormat::Gltf => "GLTF",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
