use serde::{Deserialize, Serialize};

use super::{first_missing_field, has};

/// A named set of five color tokens belonging to exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub id: i64,
    pub name: String,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub color4: String,
    pub color5: String,
    pub project_id: i64,
}

/// Validated payload for inserting a palette.
#[derive(Debug, Clone)]
pub struct NewPalette {
    pub name: String,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub color4: String,
    pub color5: String,
    pub project_id: i64,
}

/// Validated payload for replacing a palette's name and colors. Updates do
/// not re-parent a palette, so there is no `project_id` here.
#[derive(Debug, Clone)]
pub struct PaletteFields {
    pub name: String,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub color4: String,
    pub color5: String,
}

/// Raw palette payload as received over the wire. Every field is optional so
/// validation can name the first missing one instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct PaletteRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color1: Option<String>,
    #[serde(default)]
    pub color2: Option<String>,
    #[serde(default)]
    pub color3: Option<String>,
    #[serde(default)]
    pub color4: Option<String>,
    #[serde(default)]
    pub color5: Option<String>,
    #[serde(default)]
    pub project_id: Option<i64>,
}

impl PaletteRequest {
    // Fixed field order for validation; error messages cite the first miss.
    fn required(&self) -> [(&'static str, bool); 7] {
        [
            ("name", has(&self.name)),
            ("color1", has(&self.color1)),
            ("color2", has(&self.color2)),
            ("color3", has(&self.color3)),
            ("color4", has(&self.color4)),
            ("color5", has(&self.color5)),
            ("project_id", self.project_id.is_some()),
        ]
    }

    /// Validates all seven create fields, returning the insertable payload or
    /// the name of the first missing field.
    pub fn into_create(self) -> Result<NewPalette, &'static str> {
        if let Some(field) = first_missing_field(&self.required()) {
            return Err(field);
        }
        Ok(NewPalette {
            name: self.name.unwrap_or_default(),
            color1: self.color1.unwrap_or_default(),
            color2: self.color2.unwrap_or_default(),
            color3: self.color3.unwrap_or_default(),
            color4: self.color4.unwrap_or_default(),
            color5: self.color5.unwrap_or_default(),
            project_id: self.project_id.unwrap_or_default(),
        })
    }

    /// Validates the six update fields (`project_id` excluded), returning the
    /// replacement payload or the name of the first missing field.
    pub fn into_update(self) -> Result<PaletteFields, &'static str> {
        if let Some(field) = first_missing_field(&self.required()[..6]) {
            return Err(field);
        }
        Ok(PaletteFields {
            name: self.name.unwrap_or_default(),
            color1: self.color1.unwrap_or_default(),
            color2: self.color2.unwrap_or_default(),
            color3: self.color3.unwrap_or_default(),
            color4: self.color4.unwrap_or_default(),
            color5: self.color5.unwrap_or_default(),
        })
    }
}
