//! Page-level configuration.
//!
//! The host page may embed a JSON object in
//! `<script type="application/json" id="site-config">`; any field left out
//! falls back to the defaults below.

use crate::constants::*;
use crate::error::ConfigError;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub fill_rgb: [u8; 3],
    pub stroke_rgb: [u8; 3],
    pub stroke_alpha: f32,
    pub line_width: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            fill_rgb: PARTICLE_FILL_RGB,
            stroke_rgb: PARTICLE_STROKE_RGB,
            stroke_alpha: PARTICLE_STROKE_ALPHA,
            line_width: PARTICLE_LINE_WIDTH,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub canvas_id: String,
    pub sections: Vec<String>,
    pub default_section: String,
    pub particles: ParticleConfig,
    pub typewriter_char_ms: u64,
    pub contact_reset_ms: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            canvas_id: "particle-canvas".to_string(),
            sections: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
            default_section: DEFAULT_SECTION.to_string(),
            particles: ParticleConfig::default(),
            typewriter_char_ms: TYPEWRITER_CHAR_MS,
            contact_reset_ms: CONTACT_RESET_MS,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config blob.
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particles.count == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if self.sections.is_empty() {
            return Err(ConfigError::NoSections);
        }
        for (i, id) in self.sections.iter().enumerate() {
            if self.sections[..i].contains(id) {
                return Err(ConfigError::DuplicateSection(id.clone()));
            }
        }
        if !self.sections.contains(&self.default_section) {
            return Err(ConfigError::UnknownDefault(self.default_section.clone()));
        }
        Ok(())
    }
}
